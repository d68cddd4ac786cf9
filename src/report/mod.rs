//! Per-repository outcome records and their sinks

pub mod result_file;
pub mod status;
pub mod table;

pub use result_file::ResultWriter;
pub use status::{RepoStatus, StatusRecorder};
pub use table::{print_status_table, render_status_table};
