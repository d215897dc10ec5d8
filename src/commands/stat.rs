use crate::adb::{AdbExecutor, AdbRunner};
use crate::commands::SubCommand;
use crate::core::context::CommandContext;
use crate::error::Result;
use crate::library::remote_path;
use crate::output::PathReport;
use async_trait::async_trait;

pub struct StatCommand;

#[derive(Debug, Clone)]
pub struct StatArgs {
    pub path: String,
}

impl StatCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute<E: AdbExecutor>(
        &self,
        runner: &AdbRunner<E>,
        args: &StatArgs,
    ) -> Result<PathReport> {
        let path = remote_path::normalize(args.path.trim());
        let kind = runner.probe(&path).await?;
        Ok(PathReport::new(path, kind))
    }
}

impl Default for StatCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for StatCommand {
    type Args = StatArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        let report = self.execute(&ctx.adb(), &args).await?;
        ctx.formatter().report(&report)
    }
}
