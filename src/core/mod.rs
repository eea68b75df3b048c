//! Core types shared by every command handler.
//!
//! At the moment this is the error taxonomy and the user-facing error
//! context; see [`error`] for details.

pub mod error;

pub use error::{BuildError, ConfigError, ErrorContext, SyncError, user_friendly_error};
