use crate::core::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    Table,
    Json,
    Plain,
}

impl From<OutputType> for OutputFormat {
    fn from(output: OutputType) -> Self {
        match output {
            OutputType::Table => OutputFormat::Table,
            OutputType::Json => OutputFormat::Json,
            OutputType::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Browse and manage files on an Android device over adb",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Device serial, passed to adb as `-s`
    #[arg(long, short = 's', global = true)]
    pub serial: Option<String>,

    /// Path to the adb binary (overrides ADB_PATH and the config file)
    #[arg(long, global = true)]
    pub adb: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputType::Table)]
    pub output: OutputType,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List a directory on the device
    Ls {
        /// Directory to list
        #[arg(default_value = "/")]
        path: String,
        /// Include entries whose names start with a dot
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// Tell whether a path is a file, a directory, or absent
    Stat {
        path: String,
    },

    /// Upload local files or directories into a directory on the device
    Push {
        /// Local paths to upload
        #[arg(required = true)]
        src: Vec<PathBuf>,
        /// Remote directory
        dst: String,
    },

    /// Download a file or directory from the device
    Pull {
        /// Remote path
        src: String,
        /// Local destination (defaults to the current directory)
        dst: Option<PathBuf>,
    },

    /// Recursively delete a path on the device
    Rm {
        path: String,
    },

    /// Move a path on the device
    Mv {
        src: String,
        dst: String,
    },

    /// Copy a file on the device
    Cp {
        src: String,
        dst: String,
    },

    /// Rename a file or directory without overwriting
    Rename {
        path: String,
        new_name: String,
    },

    /// Display configuration
    Config {
        /// Print only the config file location
        #[arg(long)]
        path: bool,
    },

    /// Browse the device interactively
    Browse {
        /// Directory to start in
        path: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { path: None })
    }
}
