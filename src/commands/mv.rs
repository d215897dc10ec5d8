use crate::adb::{AdbExecutor, AdbRunner};
use crate::commands::SubCommand;
use crate::core::context::CommandContext;
use crate::error::Result;
use crate::library::remote_path;
use async_trait::async_trait;

pub struct MvCommand;

#[derive(Debug, Clone)]
pub struct MvArgs {
    pub src: String,
    pub dst: String,
}

impl MvCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute<E: AdbExecutor>(
        &self,
        runner: &AdbRunner<E>,
        args: &MvArgs,
    ) -> Result<()> {
        let src = remote_path::normalize(args.src.trim());
        let dst = remote_path::normalize(args.dst.trim());
        runner.move_path(&src, &dst).await
    }
}

impl Default for MvCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for MvCommand {
    type Args = MvArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        self.execute(&ctx.adb(), &args).await?;
        ctx.formatter()
            .success(&format!("Moved {} to {}", args.src, args.dst))
    }
}
