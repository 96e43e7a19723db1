//! Consensus parameters, network upgrades and block subsidy rules for Shifocoin.
//!
//! The entry point is [`parameters::Params`], built once per
//! [`parameters::Network`] and then shared read-only by block validation and
//! block template construction.
// Standard lints
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![deny(clippy::await_holding_lock)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate serde;

pub mod amount;
pub mod block;
pub mod keys;
pub mod parameters;
pub mod sapling;
pub mod transparent;
pub mod work;
