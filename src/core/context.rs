use crate::adb::{AdbProcess, AdbRunner};
use crate::core::types::{DeviceId, OutputFormat};
use crate::output::OutputFormatter;
use crate::progress::ProgressFactory;

/// Shared context for all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub device: Option<DeviceId>,
    pub adb_path: String,
    pub output_format: OutputFormat,
    pub show_hidden: bool,
    pub quiet: bool,
}

impl CommandContext {
    pub fn new() -> Self {
        Self {
            device: None,
            adb_path: "adb".to_string(),
            output_format: OutputFormat::Table,
            show_hidden: false,
            quiet: false,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Runner bound to the selected device, using the real adb binary
    pub fn adb(&self) -> AdbRunner<AdbProcess> {
        AdbRunner::new(AdbProcess::new(&self.adb_path), self.device.clone())
    }

    pub fn formatter(&self) -> OutputFormatter {
        OutputFormatter::new()
            .with_format(self.output_format)
            .with_quiet(self.quiet)
    }

    /// Spinners for transfers, off when quiet or printing JSON
    pub fn progress(&self) -> ProgressFactory {
        ProgressFactory::new(self.should_show_progress())
    }

    /// Check if progress/status messages should be shown
    /// Returns false if quiet mode is enabled or output format is JSON
    pub fn should_show_progress(&self) -> bool {
        !self.quiet && self.output_format != OutputFormat::Json
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating command contexts
pub struct CommandContextBuilder {
    ctx: CommandContext,
}

impl CommandContextBuilder {
    pub fn new() -> Self {
        Self {
            ctx: CommandContext::new(),
        }
    }

    pub fn device(mut self, device: Option<DeviceId>) -> Self {
        self.ctx.device = device;
        self
    }

    pub fn adb_path(mut self, path: impl Into<String>) -> Self {
        self.ctx.adb_path = path.into();
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.ctx.output_format = format;
        self
    }

    pub fn show_hidden(mut self, show_hidden: bool) -> Self {
        self.ctx.show_hidden = show_hidden;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.ctx.quiet = quiet;
        self
    }

    pub fn build(self) -> CommandContext {
        self.ctx
    }
}

impl Default for CommandContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
