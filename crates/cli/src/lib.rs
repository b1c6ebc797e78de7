// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod report;

use clap::Parser;

pub use cli::Cli;
pub use report::{ProtocolInfo, Report};

/// Resolves the constants of the configured network and prints them as JSON.
///
/// Returns `false` when the deployment constant could not be resolved, in
/// which case the pipeline must not be started.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    let config = cli::get_config(&cli)?;

    let report = Report::resolve(&config.network.name);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(report.is_usable())
}
