// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for curlbox operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with curlbox Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during curlbox operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// No .curlbox-root found in the directory tree
    #[error("Could not find the root of the curlbox from {0:?}")]
    #[diagnostic(
        code(curlbox::root_not_found),
        help("Create a curlbox with 'curlbox create' or move the script inside one")
    )]
    RootNotFound(PathBuf),

    /// Invalid TOML in a variable file
    #[error("Invalid variable file: {path:?}")]
    #[diagnostic(
        code(curlbox::invalid_toml),
        help("Check TOML syntax; every value must be a string, number, or boolean")
    )]
    InvalidToml {
        path: PathBuf,
        #[source]
        error: toml::de::Error,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(curlbox::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(curlbox::io_error))]
    Io(#[from] std::io::Error),
}
