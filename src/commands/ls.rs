use crate::adb::{AdbExecutor, AdbRunner};
use crate::browser::navigator;
use crate::commands::SubCommand;
use crate::core::context::CommandContext;
use crate::core::types::{EntryList, RemoteDir};
use crate::error::Result;
use async_trait::async_trait;

pub struct LsCommand;

#[derive(Debug, Clone)]
pub struct LsArgs {
    pub path: String,
    pub all: bool,
}

impl LsCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute<E: AdbExecutor>(
        &self,
        runner: &AdbRunner<E>,
        args: &LsArgs,
    ) -> Result<EntryList> {
        let dir = RemoteDir::new(&args.path);
        navigator::list_current(runner, &dir, args.all).await
    }
}

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for LsCommand {
    type Args = LsArgs;

    async fn run(&self, ctx: &CommandContext, mut args: Self::Args) -> Result<()> {
        args.all |= ctx.show_hidden;
        let entries = self.execute(&ctx.adb(), &args).await?;
        ctx.formatter().entries(&entries)
    }
}
