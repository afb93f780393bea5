//! errors
//!
//! Registration-time errors.
//!
//! # Design
//!
//! A [`ConfigurationError`] means a command type was bound incorrectly. It
//! surfaces from binding construction, never mid-dispatch, so hosts catch
//! it during startup (or in tests) and the requester never sees it.

use thiserror::Error;

/// Errors from binding a command type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The clap command metadata carries no name.
    #[error("command type {type_name} has no command name")]
    MissingName {
        /// Rust type name of the offending command.
        type_name: &'static str,
    },

    /// The instance factory has neither a source-accepting nor a
    /// no-argument constructor.
    #[error("command type {type_name} has no usable constructor")]
    NoUsableConstructor {
        /// Rust type name of the offending command.
        type_name: &'static str,
    },
}
