// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

use indexer_networks::{
    protocol, resolve_deployment_constant, resolve_reward_config, DeploymentConstant,
    RewardConfig, RTOKEN_DECIMALS,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolInfo {
    pub name: &'static str,
    pub slug: &'static str,
}

/// Everything the pipeline needs to know about the network it indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub protocol: ProtocolInfo,
    /// Network identifier as it was requested, before matching.
    pub network: String,
    pub rtoken_decimals: u8,
    pub reward: RewardConfig,
    pub deployment: DeploymentConstant,
}

impl Report {
    pub fn resolve(network: &str) -> Self {
        Self {
            protocol: ProtocolInfo {
                name: protocol::NAME,
                slug: protocol::SLUG,
            },
            network: network.to_string(),
            rtoken_decimals: RTOKEN_DECIMALS,
            reward: resolve_reward_config(network),
            deployment: resolve_deployment_constant(network),
        }
    }

    /// Markets are discovered through the registry, without it nothing can be indexed.
    pub fn is_usable(&self) -> bool {
        self.deployment.is_resolved()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;
    use thegraph_core::alloy::primitives::{address, Address};

    use super::*;

    fn address_at(value: &Value, pointer: &str) -> Address {
        serde_json::from_value(value.pointer(pointer).unwrap().clone()).unwrap()
    }

    #[test]
    fn test_arbitrum_one_report() {
        let report = Report::resolve("Arbitrum-One");
        assert!(report.is_usable());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["protocol"]["name"], "Radiant Capital V2");
        assert_eq!(json["protocol"]["slug"], "radiant-capital-v2");
        assert_eq!(json["network"], "Arbitrum-One");
        assert_eq!(json["rtoken_decimals"], 8);
        assert_eq!(
            address_at(&json, "/reward/reward_token_address"),
            address!("3082cc23568ea640225c2467653db90e9250aaa0")
        );
        assert_eq!(
            address_at(&json, "/reward/reference_market_address"),
            address!("0df5dfd95966753f01cb80e76dc20ea958238c46")
        );
        assert_eq!(
            address_at(&json, "/deployment/registry_address"),
            address!("091d52cace1edc5527c99cdcfa6937c1635330e4")
        );
        assert_eq!(json["deployment"]["network_tag"], "arbitrum-one");
    }

    #[rstest]
    #[case("bsc", true)]
    #[case("mainnet", true)]
    #[case("base", true)]
    #[case("polygon", false)]
    #[case("", false)]
    fn test_usable(#[case] network: &str, #[case] usable: bool) {
        assert_eq!(Report::resolve(network).is_usable(), usable);
    }

    #[test]
    fn test_unsupported_network_report() {
        let report = Report::resolve("polygon");

        assert_eq!(report.reward, RewardConfig::UNCONFIGURED);
        assert_eq!(report.deployment, DeploymentConstant::UNRESOLVED);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["deployment"]["network_tag"], "");
        assert_eq!(
            address_at(&json, "/deployment/registry_address"),
            Address::ZERO
        );
    }
}
