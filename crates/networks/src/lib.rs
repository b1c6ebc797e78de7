// Copyright 2023-, Edge & Node, GraphOps, and Semiotic Labs.
// SPDX-License-Identifier: Apache-2.0

//! Per-network constants for the Radiant Capital V2 indexing pipeline.
//!
//! The protocol is deployed with the same contracts on every supported
//! network; only a handful of addresses differ. This crate maps the network
//! name handed to the pipeline onto those addresses:
//!
//! - [`resolve_reward_config`] returns the reward token and its pricing path.
//! - [`resolve_deployment_constant`] returns the registry contract used to
//!   discover every market on the network.
//!
//! Neither resolver fails. An unknown network yields a sentinel bundle and a
//! diagnostic on the `tracing` facade.

mod deployment;
mod error;
mod network;
pub mod protocol;
mod reward;

pub use deployment::*;
pub use error::NetworkError;
pub use network::Network;
pub use protocol::{RTOKEN_DECIMALS, ZERO_ADDRESS};
pub use reward::*;
