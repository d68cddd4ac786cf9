//! Command implementations

pub mod base;
pub mod clone;
pub mod init;
pub mod status;

pub use base::{Command, CommandContext};
pub use clone::CloneCommand;
pub use init::InitCommand;
pub use status::StatusCommand;
