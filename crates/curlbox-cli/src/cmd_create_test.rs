// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_create_writes_marker_and_templates() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("mybox");

    let mut cmd = CmdCreate {
        path: target.clone(),
        bare: false,
    };
    let code = cmd.run().expect("Should create curlbox");

    assert_eq!(code, 0);
    assert!(target.join(curlbox::ROOT_MARKER_FILENAME).is_file());
    assert!(target.join(curlbox::VARS_FILENAME).is_file());

    let gitignore = std::fs::read_to_string(target.join(".gitignore")).unwrap();
    assert!(gitignore.contains(curlbox::SECRETS_FILENAME));

    // The starter template must itself be a valid variable file
    curlbox::VarFile::load(target.join(curlbox::VARS_FILENAME))
        .expect("Starter template should parse");
}

#[rstest]
fn test_create_bare_skips_template() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("mybox");

    let mut cmd = CmdCreate {
        path: target.clone(),
        bare: true,
    };
    cmd.run().expect("Should create curlbox");

    assert!(target.join(curlbox::ROOT_MARKER_FILENAME).is_file());
    assert!(!target.join(curlbox::VARS_FILENAME).exists());
}

#[rstest]
fn test_create_refuses_existing_directory() {
    let tmp = TempDir::new().unwrap();

    let mut cmd = CmdCreate {
        path: tmp.path().to_path_buf(),
        bare: false,
    };

    assert!(cmd.run().is_err());
}
