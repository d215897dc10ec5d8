use crate::adb::{AdbExecutor, AdbRunner};
use crate::commands::SubCommand;
use crate::core::context::CommandContext;
use crate::error::Result;
use crate::library::remote_path;
use crate::progress::ProgressFactory;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct PullCommand;

#[derive(Debug, Clone)]
pub struct PullArgs {
    pub src: String,
    /// Defaults to the working directory
    pub dst: Option<PathBuf>,
}

impl PullCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute<E: AdbExecutor>(
        &self,
        runner: &AdbRunner<E>,
        args: &PullArgs,
        progress: ProgressFactory,
    ) -> Result<PathBuf> {
        let src = remote_path::normalize(args.src.trim());
        let dst = args.dst.clone().unwrap_or_else(|| PathBuf::from("."));

        let spinner = progress.transfer(&format!("Pulling {}", src));
        let result = runner.pull(&src, &dst).await;
        match &result {
            Ok(()) => spinner.finish(),
            Err(_) => spinner.abandon(),
        }
        result?;
        Ok(dst)
    }
}

impl Default for PullCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for PullCommand {
    type Args = PullArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        let dst = self.execute(&ctx.adb(), &args, ctx.progress()).await?;
        ctx.formatter()
            .success(&format!("Pulled {} to {}", args.src, dst.display()))
    }
}
