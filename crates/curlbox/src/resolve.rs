// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! Variable resolution across a curlbox directory tree.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

#[cfg(test)]
#[path = "./resolve_test.rs"]
mod resolve_test;

use crate::locate::locate_root;
use crate::varfile::{Selection, VarFile};
use crate::{SECRETS_FILENAME, VARS_FILENAME};

/// Options controlling variable resolution.
///
/// Ambient process state is passed in explicitly (rather than read from the
/// environment here) so resolution stays testable without mutating real
/// process state.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Environment block to select from each file (from --env or ENV).
    pub env_name: String,

    /// The invoking process's PATH, passed through to the final mapping.
    /// When set it unconditionally replaces any configured PATH value.
    pub host_path: Option<String>,
}

/// Resolved environment produced from every variable file along the tree.
#[derive(Debug, Clone, Default)]
pub struct ResolvedEnvironment {
    /// Merged variables, in insertion order.
    pub vars: IndexMap<String, String>,

    /// Variable files processed, in processing order (root-most first).
    pub source_files: Vec<PathBuf>,

    /// Files where the requested environment was missing and the default
    /// block was used instead.
    pub fallbacks: Vec<PathBuf>,
}

impl ResolvedEnvironment {
    /// Create a new empty resolved environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any variables were resolved.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Number of resolved variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Number of files that were processed.
    pub fn source_count(&self) -> usize {
        self.source_files.len()
    }
}

/// Resolve the variables for a script in `start_dir`.
///
/// Variable files are discovered at every level from `start_dir` up to the
/// curlbox root and merged root-first, so a variable defined closer to the
/// script overrides the same variable defined further up the tree.
///
/// A file missing the requested environment falls back to its `default`
/// block, or contributes nothing when it has neither; both cases are
/// per-file and non-fatal. A file that fails to parse aborts the whole
/// resolution; no partial environment is ever returned.
pub fn resolve_variables<P: AsRef<Path>>(
    start_dir: P,
    options: &ResolveOptions,
) -> crate::Result<ResolvedEnvironment> {
    let chain = locate_root(start_dir)?;

    // Candidate files, most specific level first. Within a level the names
    // are taken in directory-listing order; after the reversal below that
    // puts secrets.toml after vars.toml at each level, so secret values
    // override shared ones on same-key collisions.
    let mut candidates = Vec::new();
    for dir in &chain {
        for name in [SECRETS_FILENAME, VARS_FILENAME] {
            let path = dir.join(name);
            if path.is_file() {
                candidates.push(path);
            }
        }
    }

    // Root-level files are processed first and script-level files last;
    // later files win on duplicate keys.
    candidates.reverse();

    let mut resolved = ResolvedEnvironment::new();

    for path in candidates {
        tracing::debug!(file = %path.display(), "Parsing variables");
        let file = VarFile::load(&path)?;
        resolved.source_files.push(path.clone());

        let block = match file.select(&options.env_name) {
            Selection::Named(block) => block,
            Selection::Fallback(block) => {
                tracing::warn!(
                    env = %options.env_name,
                    file = %path.display(),
                    "Environment not found, using 'default' instead"
                );
                resolved.fallbacks.push(path.clone());
                block
            }
            Selection::Missing => {
                tracing::debug!(
                    env = %options.env_name,
                    file = %path.display(),
                    "No matching environment block, file contributes nothing"
                );
                continue;
            }
        };

        for (key, value) in block {
            resolved.vars.insert(key.clone(), value.render());
        }
    }

    // The host PATH goes in last and replaces any configured value, so
    // scripts resolve executables on the same search path as the invoking
    // process.
    if let Some(host_path) = &options.host_path {
        resolved.vars.shift_remove("PATH");
        resolved
            .vars
            .insert("PATH".to_string(), host_path.clone());
    }

    Ok(resolved)
}
