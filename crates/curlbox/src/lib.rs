// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! curlbox - Layered Script Environment Manager
//!
//! This crate provides the core library for resolving script environments
//! from layered, directory-based variable files (`vars.toml` and
//! `secrets.toml`).
//!
//! # Overview
//!
//! A curlbox is a directory tree of scripts rooted at a `.curlbox-root`
//! marker file. Before a script runs, variables are gathered from every
//! variable file between the script's directory and the curlbox root, with
//! values defined closer to the script overriding values defined further up
//! the tree.
//!
//! # Example
//!
//! ```toml
//! # vars.toml
//! [default]
//! api_url = "https://api.example.com"
//! timeout = 30
//!
//! [staging]
//! api_url = "https://staging.example.com"
//! ```
//!
//! Each top-level table is an environment block; resolution selects the
//! block named by the requested environment and falls back to `[default]`
//! when a file does not define it.

pub mod error;
pub mod locate;
pub mod resolve;
pub mod varfile;

pub use error::{Error, Result};
pub use locate::locate_root;
pub use resolve::{resolve_variables, ResolveOptions, ResolvedEnvironment};
pub use varfile::{Scalar, Selection, VarBlock, VarFile};

/// Well-known filename marking the root of a curlbox.
pub const ROOT_MARKER_FILENAME: &str = ".curlbox-root";

/// Well-known filename for shareable variables.
pub const VARS_FILENAME: &str = "vars.toml";

/// Well-known filename for secret variables.
pub const SECRETS_FILENAME: &str = "secrets.toml";

/// Environment block used when a file lacks the requested one.
pub const DEFAULT_ENV: &str = "default";
