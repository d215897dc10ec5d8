use crate::adb::{AdbExecutor, AdbRunner};
use crate::browser::session::rename_entry;
use crate::commands::SubCommand;
use crate::core::context::CommandContext;
use crate::core::types::RemoteDir;
use crate::error::{ExplorerError, Result};
use crate::library::remote_path;
use async_trait::async_trait;

pub struct RenameCommand;

#[derive(Debug, Clone)]
pub struct RenameArgs {
    /// Path on the device
    pub path: String,
    /// New last component
    pub new_name: String,
}

impl RenameCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute<E: AdbExecutor>(
        &self,
        runner: &AdbRunner<E>,
        args: &RenameArgs,
    ) -> Result<String> {
        let path = remote_path::normalize(args.path.trim());
        let name = remote_path::file_name(&path)
            .ok_or_else(|| ExplorerError::InvalidArgument("Cannot rename /".to_string()))?;
        let dir = RemoteDir::new(&remote_path::parent(&path));

        rename_entry(runner, &dir, &name, &args.new_name).await
    }
}

impl Default for RenameCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for RenameCommand {
    type Args = RenameArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        let renamed = self.execute(&ctx.adb(), &args).await?;
        ctx.formatter()
            .success(&format!("Renamed {} to {}", args.path, renamed))
    }
}
