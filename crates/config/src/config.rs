// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

use std::{env, fmt, path::PathBuf, str::FromStr};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use regex::Regex;
use serde::Deserialize;

const ENV_PREFIX: &str = "INDEXER_NETWORKS_";

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    pub network: NetworkConfig,
    pub log: LogConfig,
}

// Newtype wrapping Config to be able use serde_ignored with Figment
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ConfigWrapper(pub Config);

impl<'de> Deserialize<'de> for ConfigWrapper {
    fn deserialize<D>(deserializer: D) -> Result<ConfigWrapper, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let config: Config = serde_ignored::deserialize(deserializer, |path| {
            tracing::warn!("Ignoring unknown configuration field: {}", path);
        })?;

        Ok(ConfigWrapper(config))
    }
}

impl Config {
    /// Builds the configuration from the embedded defaults, the optional file
    /// at `filename`, `INDEXER_NETWORKS_*` environment variables and finally
    /// `network`, in increasing order of precedence.
    ///
    /// Nested keys are addressed with `__` in variable names, e.g.
    /// `INDEXER_NETWORKS_NETWORK__NAME=bsc`.
    pub fn parse(filename: Option<&PathBuf>, network: Option<&str>) -> Result<Self, String> {
        let config_defaults = include_str!("../default_values.toml");

        let mut figment_config = Figment::new().merge(Toml::string(config_defaults));

        if let Some(path) = filename {
            let mut config_content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config file: {e}"))?;
            config_content = Self::substitute_env_vars(config_content)?;
            figment_config = figment_config.merge(Toml::string(&config_content));
        }

        figment_config = figment_config.merge(Self::from_env_ignore_empty(ENV_PREFIX));

        if let Some(name) = network {
            figment_config = figment_config.merge(Serialized::default("network.name", name));
        }

        let config: ConfigWrapper = figment_config
            .extract()
            .map_err(|e| e.to_string())?;

        config.0.validate()?;
        Ok(config.0)
    }

    fn from_env_ignore_empty(prefix: &str) -> Env {
        let prefixed_env = Env::prefixed(prefix).split("__");
        let ignore_prefixed: Vec<_> = prefixed_env
            .iter()
            .filter_map(|(key, value)| {
                if value.is_empty() {
                    Some(key.into_string())
                } else {
                    None
                }
            })
            .collect();
        let ref_ignore = ignore_prefixed
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>();
        prefixed_env.ignore(&ref_ignore)
    }

    /// Replaces `${VAR}` references in non-comment lines with the value of
    /// the environment variable `VAR`.
    fn substitute_env_vars(content: String) -> Result<String, String> {
        let reg = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| e.to_string())?;
        let mut missing_vars = Vec::new();
        let mut result = String::new();

        for line in content.lines() {
            if !line.trim_start().starts_with('#') {
                let processed_line = reg.replace_all(line, |caps: &regex::Captures| {
                    let var_name = &caps[1];
                    match env::var(var_name) {
                        Ok(value) => value,
                        Err(_) => {
                            missing_vars.push(var_name.to_string());
                            format!("${{{var_name}}}")
                        }
                    }
                });
                result.push_str(&processed_line);
                result.push('\n');
            }
        }

        if !missing_vars.is_empty() {
            return Err(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            ));
        }

        Ok(result.trim_end().to_string())
    }

    // Unknown network names are accepted here: resolving them is what reports
    // the misconfiguration.
    fn validate(&self) -> Result<(), String> {
        if self.network.name.trim().is_empty() {
            return Err("network.name must not be empty".to_string());
        }

        if self.network.name.trim() != self.network.name {
            tracing::warn!(
                network = %self.network.name,
                "`network.name` has surrounding whitespace. \
                It will not match any supported network."
            );
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct NetworkConfig {
    /// Network identifier as reported by the indexing host, e.g. `arbitrum-one`.
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
    Full,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
            LogFormat::Full => "full",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            "full" => Ok(LogFormat::Full),
            _ => Err(format!(
                "Unknown log format `{s}`, expected one of: pretty, json, compact, full"
            )),
        }
    }
}
