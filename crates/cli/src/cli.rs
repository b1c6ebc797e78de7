// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use indexer_config::{Config, LogFormat};
use tracing::{
    level_filters::LevelFilter,
    subscriber::{set_global_default, SetGlobalDefaultError},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Parser)]
#[command(version, about = "Print the Radiant Capital V2 constants of a network")]
pub struct Cli {
    /// Path to the configuration file.
    /// Values missing from it can be set with `INDEXER_NETWORKS_*` variables.
    #[arg(long, value_name = "FILE", verbatim_doc_comment)]
    pub config: Option<PathBuf>,

    /// Network to resolve. Overrides `network.name` from the configuration.
    #[arg(long, value_name = "NAME")]
    pub network: Option<String>,

    /// Log output format: pretty, json, compact or full.
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

/// Sets up tracing, allows log level to be set from the environment variables
fn init_tracing(format: LogFormat) -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    // stdout carries the report
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => set_global_default(subscriber_builder.json().finish()),
        LogFormat::Full => set_global_default(subscriber_builder.finish()),
        LogFormat::Compact => set_global_default(subscriber_builder.compact().finish()),
        LogFormat::Pretty => {
            set_global_default(subscriber_builder.with_ansi(true).pretty().finish())
        }
    }
}

pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = Config::parse(cli.config.as_ref(), cli.network.as_deref()).map_err(|e| {
        // Logging is configured by the file that failed to load
        let _ = init_tracing(cli.log_format.unwrap_or_default());
        tracing::error!(
            "Invalid configuration file `{}`: {}, if a value is missing you can also use \
                --network or `INDEXER_NETWORKS_*` variables to fill the rest of the values",
            cli.config.clone().unwrap_or_default().display(),
            e
        );
        anyhow!(e)
    })?;

    init_tracing(cli.log_format.unwrap_or(config.log.format)).map_err(|e| {
        anyhow!(
            "Could not set up global default subscriber for logger, check \
            environmental variable `RUST_LOG`: {e}"
        )
    })?;

    Ok(config)
}
