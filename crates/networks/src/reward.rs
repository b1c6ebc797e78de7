// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use thegraph_core::alloy::primitives::{address, Address};

use crate::{Network, ZERO_ADDRESS};

/// Reward token of a network and the path used to price it.
///
/// The reward token is priced against `pricing_pool_other_token_address`
/// through `pricing_pool_address`, and that other token is in turn priced
/// through the protocol market at `reference_market_address`. Networks
/// without a pricing pool carry [`ZERO_ADDRESS`] in the three pricing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RewardConfig {
    pub reward_token_address: Address,
    pub pricing_pool_other_token_address: Address,
    pub pricing_pool_address: Address,
    pub reference_market_address: Address,
}

impl RewardConfig {
    pub const ARBITRUM_ONE: RewardConfig = RewardConfig {
        // RDNT
        reward_token_address: address!("3082cc23568ea640225c2467653db90e9250aaa0"),
        // WETH
        pricing_pool_other_token_address: address!("82af49447d8a07e3bd95bd0d56f35241523fbab1"),
        // RDNT/WETH pool
        pricing_pool_address: address!("a8ba5f3ccfb8d2b7f4225e371cde11871e088933"),
        // rWETH market
        reference_market_address: address!("0df5dfd95966753f01cb80e76dc20ea958238c46"),
    };

    pub const BSC: RewardConfig =
        RewardConfig::without_pool(address!("f7de7e8a6bd59ed41a4b5fe50278b3b7f31384df"));

    pub const MAINNET: RewardConfig =
        RewardConfig::without_pool(address!("137ddb47ee24eaa998a535ab00378d6bfa84f893"));

    pub const BASE: RewardConfig =
        RewardConfig::without_pool(address!("d722e55c1d9d9fa0021a5215cbb904b92b3dc5d4"));

    /// Returned for networks without a reward program.
    ///
    /// Note that its pricing fields are indistinguishable from those of a
    /// supported network that has no pricing pool. Use
    /// [`RewardConfig::is_unconfigured`] to tell the two apart.
    pub const UNCONFIGURED: RewardConfig = RewardConfig::without_pool(ZERO_ADDRESS);

    const fn without_pool(reward_token_address: Address) -> Self {
        Self {
            reward_token_address,
            pricing_pool_other_token_address: ZERO_ADDRESS,
            pricing_pool_address: ZERO_ADDRESS,
            reference_market_address: ZERO_ADDRESS,
        }
    }

    pub fn has_pricing_pool(&self) -> bool {
        self.pricing_pool_address != ZERO_ADDRESS
    }

    /// True when every field is the null-address sentinel.
    pub fn is_unconfigured(&self) -> bool {
        *self == Self::UNCONFIGURED
    }
}

/// Resolves the reward configuration for `network`, ignoring case.
///
/// Unsupported networks are not an error: a warning is logged and
/// [`RewardConfig::UNCONFIGURED`] is returned, so reward computations treat the
/// network as having no reward program.
pub fn resolve_reward_config(network: &str) -> RewardConfig {
    match Network::find(network) {
        Some(known) => known.reward_config(),
        None => {
            tracing::warn!(
                network,
                "[resolve_reward_config] Unsupported network `{network}`, \
                falling back to an empty reward configuration"
            );
            RewardConfig::UNCONFIGURED
        }
    }
}
