// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

//! Protocol-wide constants that do not vary per network.

use thegraph_core::alloy::primitives::Address;

pub const NAME: &str = "Radiant Capital V2";
pub const SLUG: &str = "radiant-capital-v2";

/// Number of decimals in which rToken oracle prices are returned.
pub const RTOKEN_DECIMALS: u8 = 8;

/// Null-address sentinel, meaning "not applicable" for an address field.
pub const ZERO_ADDRESS: Address = Address::ZERO;
