use crate::core::types::{DirectoryEntry, OutputFormat};
use crate::error::Result;
use colored::*;
use colored_json::ToColoredJson;
use comfy_table::Table;
use serde::Serialize;

pub mod entry;

pub use entry::PathReport;

/// Unified output formatter for all commands
pub struct OutputFormatter {
    format: OutputFormat,
    color_enabled: bool,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Table,
            color_enabled: true,
            quiet: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render items in the configured format
    pub fn render<T: TableFormat + PlainFormat + Serialize>(&self, items: &[T]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.render_table(items)),
            OutputFormat::Json => self.render_json(&items),
            OutputFormat::Plain => Ok(self.render_plain(items)),
        }
    }

    /// Print a directory listing in the configured format
    pub fn entries(&self, entries: &[DirectoryEntry]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        let rendered = self.render(entries)?;
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
        Ok(())
    }

    pub fn report(&self, report: &PathReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        println!("{}", self.render(std::slice::from_ref(report))?);
        Ok(())
    }

    fn render_table<T: TableFormat>(&self, items: &[T]) -> String {
        let mut table = Table::new();
        table.set_header(T::headers());
        table.load_preset(comfy_table::presets::NOTHING);

        for item in items {
            table.add_row(item.row());
        }
        table.to_string()
    }

    fn render_json<T: Serialize + ?Sized>(&self, items: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(items)?;
        if self.color_enabled {
            Ok(json.to_colored_json_auto()?)
        } else {
            Ok(json)
        }
    }

    fn render_plain<T: PlainFormat>(&self, items: &[T]) -> String {
        items
            .iter()
            .map(|item| item.plain())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Print a message (respecting quiet mode)
    pub fn message(&self, msg: &str) -> Result<()> {
        if !self.quiet {
            println!("{}", msg);
        }
        Ok(())
    }

    /// Print an info message
    pub fn info(&self, msg: &str) -> Result<()> {
        if !self.quiet {
            if self.color_enabled {
                println!("{}", msg.bright_blue());
            } else {
                println!("INFO: {}", msg);
            }
        }
        Ok(())
    }

    /// Print a success message
    pub fn success(&self, msg: &str) -> Result<()> {
        if !self.quiet {
            if self.color_enabled {
                println!("{}", msg.bright_green());
            } else {
                println!("SUCCESS: {}", msg);
            }
        }
        Ok(())
    }

    /// Print a warning message
    pub fn warning(&self, msg: &str) -> Result<()> {
        if !self.quiet {
            if self.color_enabled {
                eprintln!("{}", msg.bright_yellow());
            } else {
                eprintln!("WARNING: {}", msg);
            }
        }
        Ok(())
    }

    /// Print an error message. Never silenced.
    pub fn error(&self, msg: &str) -> Result<()> {
        if self.color_enabled {
            eprintln!("{}", msg.bright_red());
        } else {
            eprintln!("ERROR: {}", msg);
        }
        Ok(())
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for types that can be formatted as a table
pub trait TableFormat {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// Trait for types that can be formatted as plain text
pub trait PlainFormat {
    fn plain(&self) -> String;
}
