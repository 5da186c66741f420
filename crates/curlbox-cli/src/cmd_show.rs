// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `curlbox show` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Display the resolved environment for a directory
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Start resolution from PATH
    #[clap(short = 'f', long, default_value = ".")]
    from: PathBuf,

    /// Environment block to use
    #[clap(long, env = "ENV", default_value = curlbox::DEFAULT_ENV)]
    env: String,

    /// Show discovered files
    #[clap(long)]
    files: bool,

    /// Show resolved variables
    #[clap(long)]
    vars: bool,

    /// Show all information
    #[clap(long)]
    all: bool,

    /// Output format: table, json
    #[clap(long, default_value = "table")]
    format: String,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let start = dunce::canonicalize(&self.from)
            .map_err(|e| miette::miette!("Failed to resolve {:?}: {}", self.from, e))?;

        let options = curlbox::ResolveOptions {
            env_name: self.env.clone(),
            host_path: Some(std::env::var("PATH").unwrap_or_default()),
        };
        let resolved = curlbox::resolve_variables(&start, &options)?;

        let show_files = self.files || self.all || (!self.files && !self.vars);
        let show_vars = self.vars || self.all || (!self.files && !self.vars);

        if self.format == "json" {
            self.show_json(&resolved);
            return Ok(0);
        }

        if show_files {
            self.show_files_table(&resolved);
        }
        if show_files && show_vars {
            println!();
        }
        if show_vars {
            self.show_vars_table(&resolved);
        }

        Ok(0)
    }

    fn show_files_table(&self, resolved: &curlbox::ResolvedEnvironment) {
        println!("{}", "Variable Files:".bold());
        println!();

        if resolved.source_files.is_empty() {
            println!("  {}", "(no files)".dimmed());
        }
        for (i, path) in resolved.source_files.iter().enumerate() {
            let fallback_marker = if resolved.fallbacks.contains(path) {
                " [default]"
            } else {
                ""
            };

            println!(
                "  {}. {}{}",
                i + 1,
                path.display().to_string().cyan(),
                fallback_marker.yellow()
            );
        }

        println!();
        println!("Total: {} file(s)", resolved.source_count());
    }

    fn show_vars_table(&self, resolved: &curlbox::ResolvedEnvironment) {
        println!("{}", format!("Resolved Variables ({}):", self.env).bold());
        println!();

        if resolved.is_empty() {
            println!("  {}", "(no variables)".dimmed());
        }
        for (key, value) in &resolved.vars {
            println!("  {} = {}", key.cyan(), value.green());
        }

        println!();
        println!("Total: {} variable(s)", resolved.len());
    }

    // Simple manual JSON output to avoid a serde_json dependency in the CLI
    fn show_json(&self, resolved: &curlbox::ResolvedEnvironment) {
        let files: Vec<String> = resolved
            .source_files
            .iter()
            .map(|p| format!("\"{}\"", p.display()))
            .collect();
        let vars: Vec<String> = resolved
            .vars
            .iter()
            .map(|(k, v)| format!("\"{}\": \"{}\"", k, v))
            .collect();

        println!("{{");
        println!("  \"environment\": \"{}\",", self.env);
        println!("  \"files\": [{}],", files.join(", "));
        println!("  \"variables\": {{{}}}", vars.join(", "));
        println!("}}");
    }
}
