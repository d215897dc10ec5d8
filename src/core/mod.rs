pub mod context;
pub mod types;

pub use context::{CommandContext, CommandContextBuilder};
pub use types::{
    DeviceId, DirectoryEntry, EntryKind, EntryList, Navigation, OutputFormat, PathKind, RemoteDir,
};
