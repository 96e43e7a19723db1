//! Definitions of protocol constants shared by every network.

use crate::{
    amount::{Amount, NonNegative, COIN},
    block::HeightDiff,
};

/// The largest block subsidy, before any halving or slow start adjustment.
///
/// Used as the input to the block subsidy calculation in [§7.8][7.8].
///
/// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
pub const MAX_BLOCK_SUBSIDY: Amount<NonNegative> = Amount::new(12 * COIN + COIN / 2);

/// The ratio of pre-Blossom to post-Blossom target block spacing.
///
/// Blossom divides the target spacing by this ratio, and also divides the
/// block subsidy, so the emission rate per unit of time is unchanged.
pub const BLOSSOM_POW_TARGET_SPACING_RATIO: i64 = 2;

/// The target block spacing before Blossom, in seconds.
pub const PRE_BLOSSOM_POW_TARGET_SPACING: i64 = 150;

/// The target block spacing after Blossom, in seconds.
pub const POST_BLOSSOM_POW_TARGET_SPACING: i64 =
    PRE_BLOSSOM_POW_TARGET_SPACING / BLOSSOM_POW_TARGET_SPACING_RATIO;

/// An initial period from Genesis where the block subsidy is gradually incremented,
/// on Mainnet and Testnet. [What is slow-start mining][slow-mining]
///
/// [slow-mining]: https://z.cash/support/faq/#what-is-slow-start-mining
pub const SLOW_START_INTERVAL: HeightDiff = 20_000;

/// The standard halving interval before Blossom, used by Testnet.
pub const PRE_BLOSSOM_HALVING_INTERVAL: HeightDiff = 840_000;

/// The halving interval after Blossom, on Mainnet and Testnet.
///
/// Mainnet only changes its pre-Blossom interval, so this is derived from
/// the standard pre-Blossom interval on both networks.
pub const POST_BLOSSOM_HALVING_INTERVAL: HeightDiff =
    post_blossom_halving_interval(PRE_BLOSSOM_HALVING_INTERVAL);

/// The mainnet halving interval before Blossom.
///
/// Sized for a maximum supply of 144 million coins.
pub const MAINNET_PRE_BLOSSOM_HALVING_INTERVAL: HeightDiff = 5_760_000;

/// The regtest halving interval before Blossom.
pub const REGTEST_PRE_BLOSSOM_HALVING_INTERVAL: HeightDiff = 144;

/// The number of funding periods in a post-Blossom halving interval.
pub const FUNDING_PERIODS_PER_HALVING: HeightDiff = 48;

/// The number of blocks in the averaging window used by difficulty adjustment.
pub const POW_AVERAGING_WINDOW: i64 = 17;

/// The number of target spacings without a block before a test network
/// allows a minimum difficulty block.
pub const MIN_DIFFICULTY_SPACING_MULTIPLIER: i64 = 6;

/// The recipient string that selects the lockbox in funding stream
/// configuration.
pub const DEFERRED_POOL_RECIPIENT: &str = "DEFERRED_POOL";

/// Returns the post-Blossom halving interval for a pre-Blossom interval.
pub const fn post_blossom_halving_interval(pre_blossom_halving_interval: HeightDiff) -> HeightDiff {
    pre_blossom_halving_interval * BLOSSOM_POW_TARGET_SPACING_RATIO
}

/// Returns the funding period length for a post-Blossom halving interval.
pub const fn funding_period_length(post_blossom_halving_interval: HeightDiff) -> HeightDiff {
    post_blossom_halving_interval / FUNDING_PERIODS_PER_HALVING
}

/// Magic numbers used to identify different Shifocoin networks.
pub mod magics {
    use crate::parameters::network::Magic;

    /// The production mainnet: `SHFO`.
    pub const MAINNET: Magic = Magic([0x53, 0x48, 0x46, 0x4f]);
    /// The testnet.
    pub const TESTNET: Magic = Magic([0xfa, 0x1a, 0xf9, 0xbf]);
    /// The regtest.
    pub const REGTEST: Magic = Magic([0xaa, 0xe8, 0x3f, 0x5f]);
}

/// The amount of each lockbox disbursement chunk paid when NU6.1 activates.
pub const NU6_1_LOCKBOX_DISBURSEMENT_CHUNK: Amount<NonNegative> = Amount::new_from_coins(7_875);
