// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use serde::{de::Error, Deserialize, Serialize};

use crate::{DeploymentConstant, NetworkError, RewardConfig};

/// Networks the protocol is indexed on.
///
/// The names match the identifiers graph-node hands to a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    ArbitrumOne,
    Bsc,
    Mainnet,
    Base,
}

impl Network {
    /// Every supported network, in the order identifiers are matched against.
    pub const ALL: [Network; 4] = [
        Network::ArbitrumOne,
        Network::Bsc,
        Network::Mainnet,
        Network::Base,
    ];

    /// Canonical network name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Network::ArbitrumOne => "arbitrum-one",
            Network::Bsc => "bsc",
            Network::Mainnet => "mainnet",
            Network::Base => "base",
        }
    }

    /// Looks up a network by name, ignoring ASCII case.
    ///
    /// The first entry of [`Network::ALL`] whose name matches wins.
    pub fn find(name: &str) -> Option<Network> {
        Self::ALL
            .into_iter()
            .find(|network| network.as_str().eq_ignore_ascii_case(name))
    }

    pub const fn reward_config(&self) -> RewardConfig {
        match self {
            Network::ArbitrumOne => RewardConfig::ARBITRUM_ONE,
            Network::Bsc => RewardConfig::BSC,
            Network::Mainnet => RewardConfig::MAINNET,
            Network::Base => RewardConfig::BASE,
        }
    }

    pub const fn deployment_constant(&self) -> DeploymentConstant {
        match self {
            Network::ArbitrumOne => DeploymentConstant::ARBITRUM_ONE,
            Network::Bsc => DeploymentConstant::BSC,
            Network::Mainnet => DeploymentConstant::MAINNET,
            Network::Base => DeploymentConstant::BASE,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find(s).ok_or_else(|| NetworkError::Unsupported(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse::<Network>().map_err(Error::custom)
    }
}
