// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `curlbox create` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

#[cfg(test)]
#[path = "./cmd_create_test.rs"]
mod cmd_create_test;

/// Create a new curlbox at the given path
#[derive(Debug, Args)]
pub struct CmdCreate {
    /// Directory to create
    path: PathBuf,

    /// Skip the starter vars.toml template
    #[clap(long)]
    bare: bool,
}

impl CmdCreate {
    pub fn run(&mut self) -> Result<i32> {
        if self.path.exists() {
            return Err(miette::miette!("{:?} already exists", self.path));
        }

        std::fs::create_dir_all(&self.path)
            .map_err(|e| miette::miette!("Failed to create {:?}: {}", self.path, e))?;

        // The marker file is empty; only its existence matters
        std::fs::write(self.path.join(curlbox::ROOT_MARKER_FILENAME), "")
            .map_err(|e| miette::miette!("Failed to write root marker: {}", e))?;

        // Secrets never belong in version control
        std::fs::write(self.path.join(".gitignore"), "secrets.toml\n")
            .map_err(|e| miette::miette!("Failed to write .gitignore: {}", e))?;

        if !self.bare {
            std::fs::write(
                self.path.join(curlbox::VARS_FILENAME),
                generate_starter_template(),
            )
            .map_err(|e| miette::miette!("Failed to write vars.toml: {}", e))?;
        }

        println!("Created curlbox at {}", self.path.display());
        println!();
        println!("Next steps:");
        println!("  1. Edit vars.toml to add your variables");
        println!("  2. Add scripts anywhere under {}", self.path.display());
        println!("  3. Run 'curlbox run path/to/script' to execute one");

        Ok(0)
    }
}

fn generate_starter_template() -> String {
    "# curlbox variable file\n\
     #\n\
     # Each top-level table is an environment block; scripts run with the\n\
     # block named by $ENV (or --env), falling back to [default].\n\
     # Values may be strings, numbers, or booleans.\n\
     \n\
     [default]\n\
     # api_url = \"https://api.example.com\"\n\
     # timeout = 30\n\
     \n\
     # [staging]\n\
     # api_url = \"https://staging.example.com\"\n"
        .to_string()
}
