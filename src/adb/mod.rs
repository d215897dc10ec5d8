pub mod runner;
pub mod shell;

pub use runner::AdbRunner;
pub use shell::{AdbExecutor, AdbProcess, ShellOutput};
