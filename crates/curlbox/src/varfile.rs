// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! Variable file parsing and data types for vars.toml / secrets.toml files.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

#[cfg(test)]
#[path = "./varfile_test.rs"]
mod varfile_test;

use crate::DEFAULT_ENV;

/// A single variable value from a variable file.
///
/// Environment blocks hold flat key/value pairs; values may be strings,
/// numbers, or booleans but nothing structured. Any other shape in the
/// document fails parsing for the whole file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Render the value as it will appear in a script's environment.
    ///
    /// The conversion is locale-independent: integers carry no decimal
    /// point, floats use Rust's shortest-roundtrip form, and booleans render
    /// as `true`/`false`.
    pub fn render(&self) -> String {
        match self {
            Scalar::Boolean(value) => value.to_string(),
            Scalar::Integer(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::String(value) => value.clone(),
        }
    }
}

/// One environment block: a flat mapping of variable name to value, in file
/// declaration order.
pub type VarBlock = IndexMap<String, Scalar>;

/// Result of choosing an environment block from a single file.
///
/// Selection is decided independently per file; a [`Selection::Missing`]
/// file simply contributes no variables.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    /// The requested environment exists in this file.
    Named(&'a VarBlock),
    /// The requested environment is missing; the default block stands in.
    Fallback(&'a VarBlock),
    /// Neither the requested nor the default environment exists.
    Missing,
}

/// A parsed variable file: environment name -> (variable name -> value).
#[derive(Debug, Clone, Default)]
pub struct VarFile {
    /// Environment blocks in file declaration order.
    pub environments: IndexMap<String, VarBlock>,

    /// Path to the file this was loaded from.
    pub source_path: Option<PathBuf>,
}

impl VarFile {
    /// Load a variable file from disk.
    ///
    /// Parse failures are reported against `path` so the offending file can
    /// be named to the user.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let environments: IndexMap<String, VarBlock> =
            toml::from_str(&document).map_err(|e| crate::Error::InvalidToml {
                path: path.to_path_buf(),
                error: e,
            })?;

        Ok(Self {
            environments,
            source_path: Some(path.to_path_buf()),
        })
    }

    /// Choose the block for `env`, falling back to the default block.
    pub fn select(&self, env: &str) -> Selection<'_> {
        if let Some(block) = self.environments.get(env) {
            Selection::Named(block)
        } else if let Some(block) = self.environments.get(DEFAULT_ENV) {
            Selection::Fallback(block)
        } else {
            Selection::Missing
        }
    }
}
