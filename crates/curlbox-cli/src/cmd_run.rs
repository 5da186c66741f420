// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `curlbox run` command.

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Run a script with its resolved environment
#[derive(Debug, Args)]
pub struct CmdRun {
    /// Path to the script to run
    script: PathBuf,

    /// Environment block to use
    #[clap(long, env = "ENV", default_value = curlbox::DEFAULT_ENV)]
    env: String,

    /// Show what would run without executing
    #[clap(long)]
    dry_run: bool,

    /// Arguments passed through to the script
    #[clap(last = true)]
    args: Vec<String>,
}

impl CmdRun {
    pub fn run(&mut self) -> Result<i32> {
        let script = self.validate_script_path()?;
        let script_dir = script
            .parent()
            .ok_or_else(|| miette::miette!("Script {:?} has no parent directory", script))?;

        let options = curlbox::ResolveOptions {
            env_name: self.env.clone(),
            host_path: Some(std::env::var("PATH").unwrap_or_default()),
        };
        let resolved = curlbox::resolve_variables(script_dir, &options)?;

        tracing::debug!(
            script = %script.display(),
            env = %self.env,
            args = ?self.args,
            variables = resolved.len(),
            "Running script"
        );

        if self.dry_run {
            println!("{}", "Would run:".bold());
            println!("  {} {}", script.display(), self.args.join(" "));
            println!();
            println!(
                "With {} variable(s) from {} file(s):",
                resolved.len(),
                resolved.source_count()
            );
            for (key, value) in &resolved.vars {
                println!("  {} = {}", key.cyan(), value.green());
            }
            return Ok(0);
        }

        let mut cmd = Command::new(&script);
        cmd.args(&self.args)
            // Run from the script's directory so scripts can chain relative siblings
            .current_dir(script_dir)
            .env_clear()
            .envs(&resolved.vars);

        run_script(&mut cmd, &script)
    }

    /// Ensure the script path exists and is a file, returning it absolute.
    fn validate_script_path(&self) -> Result<PathBuf> {
        if !self.script.exists() {
            return Err(miette::miette!("Script file not found: {:?}", self.script));
        }
        if self.script.is_dir() {
            return Err(miette::miette!(
                "Script path is a directory: {:?}",
                self.script
            ));
        }

        dunce::canonicalize(&self.script).map_err(|e| {
            miette::miette!("Failed to resolve script path {:?}: {}", self.script, e)
        })
    }
}

/// Launch the script, offering to make it executable when it isn't.
fn run_script(cmd: &mut Command, script: &Path) -> Result<i32> {
    loop {
        match cmd.status() {
            Ok(status) => return Ok(status.code().unwrap_or(1)),
            Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                if !confirm("Script is not executable, make executable and rerun? (y/N)")? {
                    return Ok(1);
                }
                make_executable(script)?;
            }
            Err(err) => return Err(miette::miette!("Error running script: {}", err)),
        }
    }
}

#[cfg(unix)]
fn make_executable(script: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(script, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| miette::miette!("Failed to change file mode: {}", e))
}

#[cfg(not(unix))]
fn make_executable(_script: &Path) -> Result<()> {
    Err(miette::miette!("Cannot change file mode on this platform"))
}

/// Prompt and read a y/N answer from stdin.
fn confirm(prompt: &str) -> Result<bool> {
    println!("{}", prompt);

    let mut response = String::new();
    std::io::stdin()
        .read_line(&mut response)
        .map_err(|e| miette::miette!("Failed to read response: {}", e))?;

    Ok(response.trim().eq_ignore_ascii_case("y"))
}
