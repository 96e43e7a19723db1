//! Consensus parameters for each Shifocoin network.
//!
//! This module contains the consensus parameters which are required for
//! verification: the network upgrade schedule, the halving schedule and
//! block subsidy, funding streams, lockbox disbursements, and proof of work
//! timing.
//!
//! Each [`Network`] has one [`Params`], built once at startup with
//! [`Params::new`]. Consensus parameters are then accessed with `Params`
//! methods that take a `block::Height`.

pub mod constants;
pub mod network;

mod builder;
mod config;
mod error;
mod network_upgrade;
mod params;
mod pow;
mod regtest;
mod subsidy;

#[cfg(test)]
mod tests;

pub use builder::ParamsBuilder;
pub use config::{
    ConfiguredActivationHeights, ConfiguredFundingStream, ConfiguredLockboxDisbursement,
    ConfiguredPow, RegtestConfig,
};
pub use error::{FundingStreamError, ParamsError};
pub use network::{InvalidNetworkError, Magic, Network};
pub use network_upgrade::{
    ActivationHeight, ConsensusBranchId, NetworkUpgrade, UpgradeEntry, UpgradeState,
    NETWORK_UPGRADES_IN_ORDER,
};
pub use params::Params;
pub use regtest::RegtestOverrides;
pub use subsidy::{
    funding_streams::{
        FsInfo, FundingStream, FundingStreamIndex, FundingStreamRecipient, FUNDING_STREAM_INFO,
    },
    lockbox::{LockboxDisbursementIndex, OnetimeLockboxDisbursement},
};
