use crate::cli::{Cli, Commands};
use crate::commands::{
    browse::{BrowseArgs, BrowseCommand},
    config::{ConfigArgs, ConfigCommand},
    cp::{CpArgs, CpCommand},
    ls::{LsArgs, LsCommand},
    mv::{MvArgs, MvCommand},
    pull::{PullArgs, PullCommand},
    push::{PushArgs, PushCommand},
    rename::{RenameArgs, RenameCommand},
    rm::{RmArgs, RmCommand},
    stat::{StatArgs, StatCommand},
    SubCommand,
};
use crate::config::Config;
use crate::core::context::{CommandContext, CommandContextBuilder};
use crate::core::types::DeviceId;
use crate::error::Result;
use log::debug;

/// Command runner that handles routing and execution
pub struct CommandRunner {
    config: Config,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Build the shared context from global options and the config file
    pub fn context(&self, cli: &Cli) -> CommandContext {
        let adb_path = self.config.resolve_adb_path(cli.adb.as_deref());
        debug!("Using adb at {}", adb_path);

        CommandContextBuilder::new()
            .device(cli.serial.as_deref().map(DeviceId::new))
            .adb_path(adb_path)
            .output_format(cli.output.into())
            .show_hidden(self.config.show_hidden)
            .quiet(cli.verbose.is_silent())
            .build()
    }

    /// Run a command based on CLI arguments
    pub async fn run(&self, cli: Cli) -> Result<()> {
        debug!("CommandRunner::run() called with command: {:?}", cli.command());
        let ctx = self.context(&cli);

        match cli.command() {
            Commands::Ls { path, all } => {
                LsCommand::new().run(&ctx, LsArgs { path, all }).await
            }
            Commands::Stat { path } => StatCommand::new().run(&ctx, StatArgs { path }).await,
            Commands::Push { src, dst } => {
                PushCommand::new().run(&ctx, PushArgs { src, dst }).await
            }
            Commands::Pull { src, dst } => {
                PullCommand::new().run(&ctx, PullArgs { src, dst }).await
            }
            Commands::Rm { path } => RmCommand::new().run(&ctx, RmArgs { path }).await,
            Commands::Mv { src, dst } => MvCommand::new().run(&ctx, MvArgs { src, dst }).await,
            Commands::Cp { src, dst } => CpCommand::new().run(&ctx, CpArgs { src, dst }).await,
            Commands::Rename { path, new_name } => {
                RenameCommand::new()
                    .run(&ctx, RenameArgs { path, new_name })
                    .await
            }
            Commands::Config { path } => {
                ConfigCommand::new()
                    .run(&ctx, ConfigArgs { path_only: path })
                    .await
            }
            Commands::Browse { path } => {
                BrowseCommand::new().run(&ctx, BrowseArgs { path }).await
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
