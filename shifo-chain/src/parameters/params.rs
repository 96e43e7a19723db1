//! The consensus parameter set for one network.

use tracing::info;

use crate::{
    block::{Height, HeightDiff},
    keys::{AddressDecoder, PaymentAddress},
    transparent,
    work::ExpandedDifficulty,
};

use super::{
    FundingStream, FundingStreamIndex, LockboxDisbursementIndex, Network, NetworkUpgrade,
    OnetimeLockboxDisbursement, ParamsBuilder, ParamsError, UpgradeEntry,
};

/// The consensus parameters of a network.
///
/// Built once when the node starts, then shared read-only by block
/// validation and block template construction. Only Regtest parameters can
/// change after they are built, through [`Params::regtest_overrides`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Params {
    pub(super) network: Network,

    /// The upgrade schedule, indexed by [`NetworkUpgrade::index`].
    pub(super) upgrades: [UpgradeEntry; NetworkUpgrade::COUNT],

    /// The funding stream table, indexed by [`FundingStreamIndex::index`].
    pub(super) funding_streams: [Option<FundingStream>; FundingStreamIndex::COUNT],

    /// The lockbox disbursement table, indexed by [`LockboxDisbursementIndex::index`].
    pub(super) lockbox_disbursements:
        [Option<OnetimeLockboxDisbursement>; LockboxDisbursementIndex::COUNT],

    pub(super) subsidy_slow_start_interval: HeightDiff,
    pub(super) pre_blossom_halving_interval: HeightDiff,
    pub(super) post_blossom_halving_interval: HeightDiff,
    pub(super) funding_period_length: HeightDiff,

    pub(super) pre_blossom_pow_target_spacing: i64,
    pub(super) post_blossom_pow_target_spacing: i64,
    pub(super) pow_averaging_window: i64,
    pub(super) pow_max_adjust_down: i64,
    pub(super) pow_max_adjust_up: i64,
    pub(super) pow_limit: ExpandedDifficulty,
    pub(super) pow_allow_min_difficulty_blocks_after_height: Option<Height>,
    pub(super) pow_no_retargeting: bool,
    pub(super) equihash_n: u32,
    pub(super) equihash_k: u32,

    pub(super) future_timestamp_soft_fork_height: Height,

    /// Pre-Blossom founders' reward lock scripts, in payment order.
    pub(super) founders_reward_scripts: Vec<transparent::Script>,
}

impl Params {
    /// Returns the consensus parameters of `network`.
    ///
    /// # Panics
    ///
    /// If the hard-coded parameters of `network` are invalid.
    /// A node must not start with invalid consensus parameters.
    pub fn new(network: Network) -> Params {
        Params::try_new(network)
            .unwrap_or_else(|error| panic!("invalid {network} consensus parameters: {error}"))
    }

    /// Builds and validates the consensus parameters of `network`.
    pub fn try_new(network: Network) -> Result<Params, ParamsError> {
        ParamsBuilder::new(network).to_params()
    }

    /// The network these parameters are for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The length of the slow start ramp at the start of the chain.
    pub fn subsidy_slow_start_interval(&self) -> HeightDiff {
        self.subsidy_slow_start_interval
    }

    /// The number of blocks between halvings, before Blossom.
    pub fn pre_blossom_halving_interval(&self) -> HeightDiff {
        self.pre_blossom_halving_interval
    }

    /// The number of blocks between halvings, after Blossom.
    pub fn post_blossom_halving_interval(&self) -> HeightDiff {
        self.post_blossom_halving_interval
    }

    /// The number of blocks in each funding period.
    ///
    /// Funding stream recipients change once per funding period.
    pub fn funding_period_length(&self) -> HeightDiff {
        self.funding_period_length
    }

    /// The height where block timestamps stop being allowed to be far
    /// ahead of the median time past.
    pub fn future_timestamp_soft_fork_height(&self) -> Height {
        self.future_timestamp_soft_fork_height
    }

    /// Returns `true` if the future timestamp soft fork rules apply at `height`.
    pub fn future_timestamp_soft_fork_active(&self, height: Height) -> bool {
        height >= self.future_timestamp_soft_fork_height
    }

    /// Checks the founders' reward address count, and the total share of
    /// the funding streams.
    pub(super) fn validate(&self) -> Result<(), ParamsError> {
        let last_height = self.last_founders_reward_block_height(Height::MIN);
        let count = self.founders_reward_scripts.len();

        if HeightDiff::try_from(count).map_or(true, |count| count > last_height) {
            return Err(ParamsError::TooManyFoundersRewardAddresses { count, last_height });
        }

        self.check_funding_stream_shares()?;

        info!(
            network = %self.network,
            settled_height = ?self.height_of_latest_settled_upgrade(),
            "built consensus parameters",
        );

        Ok(())
    }
}

/// Decodes a founders' reward address into its lock script.
pub(super) fn founders_reward_script(
    decoder: &dyn AddressDecoder,
    address: &str,
) -> Result<transparent::Script, ParamsError> {
    match decoder.decode_payment_address(address) {
        Some(PaymentAddress::Transparent(transparent_address))
            if transparent_address.is_script_hash() =>
        {
            Ok(transparent_address.script())
        }
        Some(_) => Err(ParamsError::AddressParseFailure {
            address: address.to_string(),
            reason: "founders' reward addresses must be transparent P2SH addresses",
        }),
        None => Err(ParamsError::AddressParseFailure {
            address: address.to_string(),
            reason: "not a valid address on this network",
        }),
    }
}
