use crate::adb::{AdbExecutor, AdbRunner};
use crate::commands::SubCommand;
use crate::core::context::CommandContext;
use crate::error::Result;
use crate::library::remote_path;
use async_trait::async_trait;

pub struct CpCommand;

#[derive(Debug, Clone)]
pub struct CpArgs {
    pub src: String,
    pub dst: String,
}

impl CpCommand {
    pub fn new() -> Self {
        Self
    }

    /// Plain `cp`: directories are refused by the device.
    pub async fn execute<E: AdbExecutor>(
        &self,
        runner: &AdbRunner<E>,
        args: &CpArgs,
    ) -> Result<()> {
        let src = remote_path::normalize(args.src.trim());
        let dst = remote_path::normalize(args.dst.trim());
        runner.copy_path(&src, &dst).await
    }
}

impl Default for CpCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for CpCommand {
    type Args = CpArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        self.execute(&ctx.adb(), &args).await?;
        ctx.formatter()
            .success(&format!("Copied {} to {}", args.src, args.dst))
    }
}
