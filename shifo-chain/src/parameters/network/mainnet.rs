//! Mainnet consensus parameters.

use crate::{
    block::Height,
    parameters::{
        constants::{
            MAINNET_PRE_BLOSSOM_HALVING_INTERVAL, POST_BLOSSOM_HALVING_INTERVAL,
            SLOW_START_INTERVAL,
        },
        FundingStreamIndex::*,
        LockboxDisbursementIndex::*,
    },
};

use super::{
    DefaultRecipients, FundingStreamDefaults, LockboxDisbursementDefaults, NetworkDefaults,
    UpgradeDefaults,
};

const OVERWINTER_ACTIVATION_HEIGHT: Height = Height(347_500);
const SAPLING_ACTIVATION_HEIGHT: Height = Height(419_200);
const BLOSSOM_ACTIVATION_HEIGHT: Height = Height(653_600);
const HEARTWOOD_ACTIVATION_HEIGHT: Height = Height(903_000);
const CANOPY_ACTIVATION_HEIGHT: Height = Height(1_046_400);
const NU5_ACTIVATION_HEIGHT: Height = Height(1_687_104);
const NU6_ACTIVATION_HEIGHT: Height = Height(2_726_400);
const NU6_1_ACTIVATION_HEIGHT: Height = Height(3_146_400);

/// The end of the funding streams that start at NU6.1.
const POST_NU6_1_FUNDING_STREAM_END_HEIGHT: Height = Height(4_406_400);

/// The P2SH address that receives every mainnet funding stream and disbursement.
const FUNDING_STREAM_ADDRESS: &str = "t2UNzUUx8mWBCRYPRezvA363EYXyEpHokyi";

pub(super) const DEFAULTS: NetworkDefaults = NetworkDefaults {
    upgrades: [
        UpgradeDefaults::always_active(170_002),
        UpgradeDefaults::disabled(170_002),
        UpgradeDefaults::settled(
            170_005,
            OVERWINTER_ACTIVATION_HEIGHT,
            "0000000003761c0d0c3974b54bdb425613bbb1eaadd6e70b764de82f195ea243",
        ),
        UpgradeDefaults::settled(
            170_007,
            SAPLING_ACTIVATION_HEIGHT,
            "00000000025a57200d898ac7f21e26bf29028bbe96ec46e05b2c17cc9db9e4f3",
        ),
        UpgradeDefaults::settled(
            170_009,
            BLOSSOM_ACTIVATION_HEIGHT,
            "00000000020bebb33c1b34b67a982a328ab212a206dacbe561a7cc94aab3e9bb",
        ),
        UpgradeDefaults::settled(
            170_011,
            HEARTWOOD_ACTIVATION_HEIGHT,
            "0000000000aad1c8698964a93c35ecf8b4d05e848de9e2fe7606067139be5643",
        ),
        UpgradeDefaults::settled(
            170_013,
            CANOPY_ACTIVATION_HEIGHT,
            "00000000002038016f976744c369dce7419fca30e7171dfac703af5e5f7ad1d4",
        ),
        UpgradeDefaults::settled(
            170_100,
            NU5_ACTIVATION_HEIGHT,
            "0000000000d723156d9b65ffcf4984da7a19675ed7e2f06d9e5d5188af087bf8",
        ),
        UpgradeDefaults::scheduled(170_120, NU6_ACTIVATION_HEIGHT),
        UpgradeDefaults::scheduled(170_140, NU6_1_ACTIVATION_HEIGHT),
        UpgradeDefaults::disabled(0x7FFF_FFFF),
    ],
    subsidy_slow_start_interval: SLOW_START_INTERVAL,
    pre_blossom_halving_interval: MAINNET_PRE_BLOSSOM_HALVING_INTERVAL,
    post_blossom_halving_interval: POST_BLOSSOM_HALVING_INTERVAL,
    funding_streams: &[
        FundingStreamDefaults {
            index: Zip214Bp,
            start_height: CANOPY_ACTIVATION_HEIGHT,
            end_height: NU6_ACTIVATION_HEIGHT,
            recipients: DefaultRecipients::Repeated {
                address: FUNDING_STREAM_ADDRESS,
                count: 48,
            },
        },
        FundingStreamDefaults {
            index: Zip214Zf,
            start_height: CANOPY_ACTIVATION_HEIGHT,
            end_height: NU6_ACTIVATION_HEIGHT,
            recipients: DefaultRecipients::Repeated {
                address: FUNDING_STREAM_ADDRESS,
                count: 48,
            },
        },
        FundingStreamDefaults {
            index: FpfZcg,
            start_height: NU6_ACTIVATION_HEIGHT,
            end_height: NU6_1_ACTIVATION_HEIGHT,
            recipients: DefaultRecipients::Repeated {
                address: FUNDING_STREAM_ADDRESS,
                count: 12,
            },
        },
        FundingStreamDefaults {
            index: Deferred,
            start_height: NU6_ACTIVATION_HEIGHT,
            end_height: NU6_1_ACTIVATION_HEIGHT,
            recipients: DefaultRecipients::Lockbox,
        },
        FundingStreamDefaults {
            index: FpfZcgH3,
            start_height: NU6_1_ACTIVATION_HEIGHT,
            end_height: POST_NU6_1_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Repeated {
                address: FUNDING_STREAM_ADDRESS,
                count: 36,
            },
        },
        FundingStreamDefaults {
            index: CcfH3,
            start_height: NU6_1_ACTIVATION_HEIGHT,
            end_height: POST_NU6_1_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Lockbox,
        },
    ],
    lockbox_disbursements: &[
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk1, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk2, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk3, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk4, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk5, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk6, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk7, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk8, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk9, FUNDING_STREAM_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk10, FUNDING_STREAM_ADDRESS),
    ],
    founders_reward_addresses: &[FUNDING_STREAM_ADDRESS; 48],
    pow_max_adjust_down: 32,
    pow_max_adjust_up: 16,
    pow_limit: "0007ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    pow_allow_min_difficulty_blocks_after_height: None,
    pow_no_retargeting: false,
    future_timestamp_soft_fork_height: Height(0),
    equihash_n: 200,
    equihash_k: 9,
};
