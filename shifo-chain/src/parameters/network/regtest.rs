//! Regtest consensus parameters.
//!
//! No upgrade activates and no funding stream is configured until the node
//! operator overrides them.

use crate::{
    block::Height,
    parameters::constants::{post_blossom_halving_interval, REGTEST_PRE_BLOSSOM_HALVING_INTERVAL},
};

use super::{NetworkDefaults, UpgradeDefaults};

pub(super) const DEFAULTS: NetworkDefaults = NetworkDefaults {
    upgrades: [
        UpgradeDefaults::always_active(170_002),
        UpgradeDefaults::disabled(170_002),
        UpgradeDefaults::disabled(170_003),
        UpgradeDefaults::disabled(170_006),
        UpgradeDefaults::disabled(170_008),
        UpgradeDefaults::disabled(170_010),
        UpgradeDefaults::disabled(170_012),
        UpgradeDefaults::disabled(170_050),
        UpgradeDefaults::disabled(170_110),
        UpgradeDefaults::disabled(170_130),
        UpgradeDefaults::disabled(0x7FFF_FFFF),
    ],
    subsidy_slow_start_interval: 0,
    pre_blossom_halving_interval: REGTEST_PRE_BLOSSOM_HALVING_INTERVAL,
    post_blossom_halving_interval: post_blossom_halving_interval(
        REGTEST_PRE_BLOSSOM_HALVING_INTERVAL,
    ),
    funding_streams: &[],
    lockbox_disbursements: &[],
    founders_reward_addresses: &["t2FwcEhFdNXuFMv1tcYwaBJtYVtMj8b1uTg"],
    pow_max_adjust_down: 0,
    pow_max_adjust_up: 0,
    pow_limit: "0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f",
    pow_allow_min_difficulty_blocks_after_height: Some(Height(0)),
    pow_no_retargeting: true,
    future_timestamp_soft_fork_height: Height(0),
    equihash_n: 48,
    equihash_k: 5,
};
