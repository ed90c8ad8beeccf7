//! CLI command implementations

pub mod completions;
pub mod images;
pub mod init;
pub mod list;
pub mod remove;
pub mod report;
pub mod sensors;
pub mod status;
pub mod verse;
pub mod week;
