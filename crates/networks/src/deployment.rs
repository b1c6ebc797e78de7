// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

use serde::{Serialize, Serializer};
use thegraph_core::alloy::primitives::{address, Address};

use crate::{Network, ZERO_ADDRESS};

/// Registry contract of a deployment and the network it is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DeploymentConstant {
    /// PoolAddressesProviderRegistry, the entry point for market discovery.
    pub registry_address: Address,
    #[serde(rename = "network_tag", serialize_with = "serialize_tag")]
    pub network: Option<Network>,
}

impl DeploymentConstant {
    pub const ARBITRUM_ONE: DeploymentConstant = DeploymentConstant {
        registry_address: address!("091d52cace1edc5527c99cdcfa6937c1635330e4"),
        network: Some(Network::ArbitrumOne),
    };

    pub const BSC: DeploymentConstant = DeploymentConstant {
        registry_address: address!("63764769da006395515c3f8aff9c91a809ef6607"),
        network: Some(Network::Bsc),
    };

    pub const MAINNET: DeploymentConstant = DeploymentConstant {
        registry_address: address!("70e507f1d20aec229f435cd1ecac6a7200119b9f"),
        network: Some(Network::Mainnet),
    };

    // Tagged as mainnet, not base. Entities already indexed on base carry this
    // tag, so it is kept as-is until those deployments are re-synced.
    pub const BASE: DeploymentConstant = DeploymentConstant {
        registry_address: address!("e7f252d19ab96254144fbb0d94ebc0ff7ea0c541"),
        network: Some(Network::Mainnet),
    };

    /// Returned when the network is not supported. Nothing can be discovered
    /// from it.
    pub const UNRESOLVED: DeploymentConstant = DeploymentConstant {
        registry_address: ZERO_ADDRESS,
        network: None,
    };

    /// Canonical network name, or an empty string when unresolved.
    pub fn network_tag(&self) -> &'static str {
        self.network.as_ref().map_or("", Network::as_str)
    }

    pub fn is_resolved(&self) -> bool {
        *self != Self::UNRESOLVED
    }
}

fn serialize_tag<S>(network: &Option<Network>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(network.as_ref().map_or("", Network::as_str))
}

/// Resolves the deployment constant for `network`, ignoring case.
///
/// An unsupported network leaves the pipeline without a registry to discover
/// markets from. This is reported as a critical error and
/// [`DeploymentConstant::UNRESOLVED`] is returned; callers are expected to
/// stop processing.
pub fn resolve_deployment_constant(network: &str) -> DeploymentConstant {
    match Network::find(network) {
        Some(known) => known.deployment_constant(),
        None => {
            tracing::error!(
                critical = true,
                network,
                "[resolve_deployment_constant] Unsupported network: {network}"
            );
            DeploymentConstant::UNRESOLVED
        }
    }
}
