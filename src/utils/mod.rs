//! Cross-platform utilities shared by the command handlers.

pub mod fs;
pub mod platform;

pub use fs::{atomic_write, ensure_dir, find_files_with_suffix, safe_write};
pub use platform::{get_git_command, is_windows, resolve_path};
