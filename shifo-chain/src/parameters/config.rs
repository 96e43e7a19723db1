//! Configuration for Regtest and custom parameter sets.
//!
//! These types are deserialized from the node's config file, and applied with
//! [`RegtestOverrides::apply`](super::RegtestOverrides::apply) or
//! [`ParamsBuilder`](super::ParamsBuilder).

use crate::{
    amount::{Amount, NonNegative},
    block::Height,
    work::ExpandedDifficulty,
};

use super::{FundingStreamIndex, LockboxDisbursementIndex, NetworkUpgrade};

/// Configurable activation heights for Regtest and custom parameter sets.
///
/// Upgrades without a configured height keep their current activation height.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConfiguredActivationHeights {
    /// Activation height for `Overwinter` network upgrade.
    pub overwinter: Option<u32>,
    /// Activation height for `Sapling` network upgrade.
    pub sapling: Option<u32>,
    /// Activation height for `Blossom` network upgrade.
    pub blossom: Option<u32>,
    /// Activation height for `Heartwood` network upgrade.
    pub heartwood: Option<u32>,
    /// Activation height for `Canopy` network upgrade.
    pub canopy: Option<u32>,
    /// Activation height for `NU5` network upgrade.
    #[serde(rename = "NU5")]
    pub nu5: Option<u32>,
    /// Activation height for `NU6` network upgrade.
    #[serde(rename = "NU6")]
    pub nu6: Option<u32>,
    /// Activation height for `NU6.1` network upgrade.
    #[serde(rename = "NU6.1")]
    pub nu6_1: Option<u32>,
}

impl ConfiguredActivationHeights {
    /// Returns the configured upgrades and heights, in upgrade order.
    pub fn configured_upgrades(&self) -> Vec<(NetworkUpgrade, u32)> {
        use NetworkUpgrade::*;

        let Self {
            overwinter,
            sapling,
            blossom,
            heartwood,
            canopy,
            nu5,
            nu6,
            nu6_1,
        } = *self;

        [
            (Overwinter, overwinter),
            (Sapling, sapling),
            (Blossom, blossom),
            (Heartwood, heartwood),
            (Canopy, canopy),
            (Nu5, nu5),
            (Nu6, nu6),
            (Nu6_1, nu6_1),
        ]
        .into_iter()
        .filter_map(|(upgrade, height)| Some((upgrade, height?)))
        .collect()
    }
}

/// A configured funding stream.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfiguredFundingStream {
    /// The slot the stream is registered in.
    pub index: FundingStreamIndex,
    /// The first height of the stream.
    pub start_height: Height,
    /// The first height after the stream.
    pub end_height: Height,
    /// The recipient addresses, one per funding period.
    ///
    /// `"DEFERRED_POOL"` selects the lockbox. If there are no addresses,
    /// every funding period pays the lockbox.
    #[serde(default)]
    pub addresses: Option<Vec<String>>,
}

/// A configured one-time lockbox disbursement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfiguredLockboxDisbursement {
    /// The slot the disbursement is registered in.
    pub index: LockboxDisbursementIndex,
    /// The upgrade whose activation block pays the disbursement.
    pub upgrade: NetworkUpgrade,
    /// The disbursed amount, in zatoshis.
    pub amount: Amount<NonNegative>,
    /// The transparent P2SH address that receives the disbursement.
    pub address: String,
}

/// Configured proof of work parameters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfiguredPow {
    /// The largest difficulty decrease per block, as a percentage.
    pub max_adjust_down: i64,
    /// The largest difficulty increase per block, as a percentage.
    pub max_adjust_up: i64,
    /// The easiest difficulty target, as 64 hex digits.
    pub pow_limit: ExpandedDifficulty,
    /// Whether every block keeps the difficulty of the previous block.
    pub no_retargeting: bool,
}

/// Regtest consensus parameter overrides, from the `[regtest]` config section.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegtestConfig {
    /// Network upgrade activation heights.
    pub activation_heights: ConfiguredActivationHeights,
    /// Funding streams, replacing any stream in the same slot.
    pub funding_streams: Vec<ConfiguredFundingStream>,
    /// Lockbox disbursements, replacing any disbursement in the same slot.
    pub lockbox_disbursements: Vec<ConfiguredLockboxDisbursement>,
    /// Proof of work parameters.
    pub pow: Option<ConfiguredPow>,
}
