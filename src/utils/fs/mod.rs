//! File system utilities for reliable storage of the catalog and artifacts.
//!
//! The helpers here cover atomic writes, directory preparation, and
//! recursive discovery of template files in the mirror.

pub mod atomic;
pub mod dirs;
pub mod discovery;

pub use atomic::{atomic_write, safe_write};
pub use dirs::{ensure_dir, is_empty_dir};
pub use discovery::find_files_with_suffix;
