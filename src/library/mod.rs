pub mod natsort;
pub mod quote;
pub mod remote_path;
