use crate::commands::SubCommand;
use crate::config::Config;
use crate::core::context::CommandContext;
use crate::core::types::OutputFormat;
use crate::error::{ExplorerError, Result};
use async_trait::async_trait;
use colored::*;

pub struct ConfigCommand;

#[derive(Debug, Clone)]
pub struct ConfigArgs {
    /// Show configuration file path only
    pub path_only: bool,
}

impl ConfigCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfigCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for ConfigCommand {
    type Args = ConfigArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        let config_path = Config::config_path().ok_or_else(|| {
            ExplorerError::Configuration("Could not determine config directory".to_string())
        })?;

        if args.path_only {
            println!("{}", config_path.display());
            return Ok(());
        }

        let config = Config::load_from_path(&config_path);
        if ctx.output_format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            return Ok(());
        }

        if !config_path.exists() {
            println!(
                "No config file found at: {}",
                config_path.display().to_string().bright_cyan()
            );
            println!("Default configuration will be used.");
        } else {
            println!("Reading {}\n", config_path.display().to_string().bright_cyan());
        }
        println!("ADB_Path     {}", config.adb_path);
        println!("Show_Hidden  {}", config.show_hidden);
        println!("Effective adb  {}", ctx.adb_path.bright_green());
        Ok(())
    }
}
