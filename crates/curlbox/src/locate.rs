// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! Root location for curlbox directory trees.

use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./locate_test.rs"]
mod locate_test;

use crate::ROOT_MARKER_FILENAME;

/// Find the root of the curlbox containing `start_dir`.
///
/// Walks up the directory tree looking for the `.curlbox-root` marker file,
/// inspecting only the immediate contents of each directory. Returns every
/// directory visited, ordered from `start_dir` (most specific) to the
/// curlbox root (least specific) inclusive; this ordering is the precedence
/// backbone for variable resolution.
///
/// `start_dir` should be an absolute, resolved directory path that exists;
/// callers validate that before invoking. Fails with
/// [`crate::Error::RootNotFound`] when the walk runs out of ancestors
/// without finding the marker.
pub fn locate_root<P: AsRef<Path>>(start_dir: P) -> crate::Result<Vec<PathBuf>> {
    let start = start_dir.as_ref().to_path_buf();
    let mut chain = Vec::new();
    let mut current = start.clone();

    loop {
        chain.push(current.clone());

        // The search stops at the first marker found walking up, so an
        // inner curlbox fully shadows any outer one.
        if current.join(ROOT_MARKER_FILENAME).is_file() {
            tracing::debug!(root = %current.display(), "Found curlbox root");
            return Ok(chain);
        }

        if !current.pop() {
            return Err(crate::Error::RootNotFound(start));
        }
    }
}
