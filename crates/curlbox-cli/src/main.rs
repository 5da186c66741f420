// Copyright (c) Contributors to the curlbox project.
// SPDX-License-Identifier: Apache-2.0

//! curlbox - Layered Script Environment Manager CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_create;
mod cmd_run;
mod cmd_show;

use cmd_create::CmdCreate;
use cmd_run::CmdRun;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "curlbox",
    about = "Layered Script Environment Manager",
    version,
    long_about = "Organize scripts into a directory tree and run them with environment \
                  variables layered from vars.toml and secrets.toml files"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new curlbox at the given path
    Create(CmdCreate),

    /// Run a script with its resolved environment
    Run(CmdRun),

    /// Display the resolved environment for a directory
    Show(CmdShow),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Create(mut cmd) => cmd.run(),
            Command::Run(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
