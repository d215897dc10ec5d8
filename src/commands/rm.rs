use crate::adb::{AdbExecutor, AdbRunner};
use crate::commands::SubCommand;
use crate::core::context::CommandContext;
use crate::error::{ExplorerError, Result};
use crate::library::remote_path;
use async_trait::async_trait;

pub struct RmCommand;

#[derive(Debug, Clone)]
pub struct RmArgs {
    pub path: String,
}

impl RmCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute<E: AdbExecutor>(
        &self,
        runner: &AdbRunner<E>,
        args: &RmArgs,
    ) -> Result<String> {
        let path = remote_path::normalize(args.path.trim());
        if path == "/" {
            return Err(ExplorerError::InvalidArgument(
                "Refusing to delete /".to_string(),
            ));
        }
        runner.remove(&path).await?;
        Ok(path)
    }
}

impl Default for RmCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for RmCommand {
    type Args = RmArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        let path = self.execute(&ctx.adb(), &args).await?;
        ctx.formatter().success(&format!("Deleted {}", path))
    }
}
