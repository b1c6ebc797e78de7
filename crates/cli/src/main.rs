// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use indexer_network_constants::run;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            tracing::error!(
                "No registry contract for the configured network, refusing to continue"
            );
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!("Network constants error: {e}");
            ExitCode::from(1)
        }
    }
}
