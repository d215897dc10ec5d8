use crate::adb::{AdbExecutor, AdbRunner};
use crate::commands::SubCommand;
use crate::core::context::CommandContext;
use crate::core::types::RemoteDir;
use crate::error::{ExplorerError, Result};
use crate::progress::ProgressFactory;
use async_trait::async_trait;
use log::*;
use std::path::PathBuf;

pub struct PushCommand;

#[derive(Debug, Clone)]
pub struct PushArgs {
    /// Local files or directories
    pub src: Vec<PathBuf>,
    /// Remote directory
    pub dst: String,
}

impl PushCommand {
    pub fn new() -> Self {
        Self
    }

    /// Push every source in order, stopping at the first failure.
    pub async fn execute<E: AdbExecutor>(
        &self,
        runner: &AdbRunner<E>,
        args: &PushArgs,
        progress: ProgressFactory,
    ) -> Result<RemoteDir> {
        let dst = RemoteDir::new(&args.dst);

        for src in &args.src {
            if !src.exists() {
                return Err(ExplorerError::NotFound(src.display().to_string()));
            }
            debug!("Pushing {} to {}", src.display(), dst);

            let spinner = progress.transfer(&format!("Pushing {}", src.display()));
            match runner.push(src, dst.as_str()).await {
                Ok(()) => spinner.finish(),
                Err(e) => {
                    spinner.abandon();
                    return Err(e);
                }
            }
        }
        Ok(dst)
    }
}

impl Default for PushCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for PushCommand {
    type Args = PushArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        let dst = self.execute(&ctx.adb(), &args, ctx.progress()).await?;
        ctx.formatter()
            .success(&format!("Pushed {} item(s) to {}", args.src.len(), dst))
    }
}
