pub mod classify;
pub mod clipboard;
pub mod launcher;
pub mod navigator;
pub mod scratch;
pub mod session;

pub use classify::{classify, parse_listing};
pub use clipboard::{ClipMode, Clipboard, ClipboardEntry};
pub use session::{Explorer, RefreshOutcome};
