//! Utility modules for common functionality

pub mod cancel;
pub mod csv;
pub mod filesystem;

// Re-export commonly used functions
pub use cancel::CancelFlag;
pub use csv::read_repository_urls;
pub use filesystem::{ensure_directory_exists, is_occupied, remove_path_if_exists};
