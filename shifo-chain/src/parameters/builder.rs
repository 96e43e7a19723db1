//! Builder for custom consensus parameter sets.

use crate::{
    block::{Height, HeightDiff, TryIntoHeight},
    keys::AddressDecoder,
    work::ExpandedDifficulty,
};

use super::{
    constants::{
        funding_period_length, post_blossom_halving_interval, POST_BLOSSOM_POW_TARGET_SPACING,
        POW_AVERAGING_WINDOW, PRE_BLOSSOM_POW_TARGET_SPACING,
    },
    params::founders_reward_script,
    ActivationHeight, ConfiguredActivationHeights, ConfiguredFundingStream,
    ConfiguredLockboxDisbursement, ConfiguredPow, Network, NetworkUpgrade, Params, ParamsError,
    UpgradeEntry,
};

/// Builder for [`Params`].
///
/// Starts from the hard-coded parameters of a network. Everything is
/// validated by [`ParamsBuilder::to_params`].
#[derive(Clone, Debug)]
pub struct ParamsBuilder {
    network: Network,
    upgrades: [UpgradeEntry; NetworkUpgrade::COUNT],
    subsidy_slow_start_interval: HeightDiff,
    pre_blossom_halving_interval: HeightDiff,
    post_blossom_halving_interval: HeightDiff,
    funding_streams: Vec<ConfiguredFundingStream>,
    lockbox_disbursements: Vec<ConfiguredLockboxDisbursement>,
    founders_reward_addresses: Vec<String>,
    pow_max_adjust_down: i64,
    pow_max_adjust_up: i64,
    pow_limit: ExpandedDifficulty,
    pow_allow_min_difficulty_blocks_after_height: Option<Height>,
    pow_no_retargeting: bool,
    future_timestamp_soft_fork_height: Height,
    equihash_n: u32,
    equihash_k: u32,
}

impl ParamsBuilder {
    /// Returns a builder with the hard-coded parameters of `network`.
    pub fn new(network: Network) -> Self {
        let defaults = network.defaults();

        let upgrades = defaults.upgrades.map(|upgrade| UpgradeEntry {
            protocol_version: upgrade.protocol_version,
            activation_height: upgrade.activation_height,
            activation_block_hash: upgrade
                .activation_block_hash
                .map(|hash| hash.parse().expect("hard-coded activation hash parses")),
        });

        let funding_streams = defaults
            .funding_streams
            .iter()
            .map(|stream| ConfiguredFundingStream {
                index: stream.index,
                start_height: stream.start_height,
                end_height: stream.end_height,
                addresses: stream.recipients.addresses(),
            })
            .collect();

        let lockbox_disbursements = defaults
            .lockbox_disbursements
            .iter()
            .map(|disbursement| ConfiguredLockboxDisbursement {
                index: disbursement.index,
                upgrade: disbursement.upgrade,
                amount: disbursement.amount,
                address: disbursement.address.to_string(),
            })
            .collect();

        Self {
            network,
            upgrades,
            subsidy_slow_start_interval: defaults.subsidy_slow_start_interval,
            pre_blossom_halving_interval: defaults.pre_blossom_halving_interval,
            post_blossom_halving_interval: defaults.post_blossom_halving_interval,
            funding_streams,
            lockbox_disbursements,
            founders_reward_addresses: defaults
                .founders_reward_addresses
                .iter()
                .map(ToString::to_string)
                .collect(),
            pow_max_adjust_down: defaults.pow_max_adjust_down,
            pow_max_adjust_up: defaults.pow_max_adjust_up,
            pow_limit: defaults
                .pow_limit
                .parse()
                .expect("hard-coded proof of work limit parses"),
            pow_allow_min_difficulty_blocks_after_height: defaults
                .pow_allow_min_difficulty_blocks_after_height,
            pow_no_retargeting: defaults.pow_no_retargeting,
            future_timestamp_soft_fork_height: defaults.future_timestamp_soft_fork_height,
            equihash_n: defaults.equihash_n,
            equihash_k: defaults.equihash_k,
        }
    }

    /// Sets the activation height of `upgrade`.
    ///
    /// The upgrade's activation block hash is forgotten, so the upgrade is
    /// no longer settled.
    pub fn with_activation_height(
        mut self,
        upgrade: NetworkUpgrade,
        activation_height: ActivationHeight,
    ) -> Self {
        let entry = &mut self.upgrades[upgrade.index()];
        entry.activation_height = activation_height;
        entry.activation_block_hash = None;

        self
    }

    /// Sets the configured activation heights, keeping the others.
    pub fn with_activation_heights(
        mut self,
        activation_heights: ConfiguredActivationHeights,
    ) -> Self {
        for (upgrade, height) in activation_heights.configured_upgrades() {
            self = self.with_activation_height(upgrade, ActivationHeight::Height(Height(height)));
        }

        self
    }

    /// Sets the slow start interval.
    pub fn with_slow_start_interval(mut self, subsidy_slow_start_interval: HeightDiff) -> Self {
        self.subsidy_slow_start_interval = subsidy_slow_start_interval;
        self
    }

    /// Sets the pre-Blossom halving interval, and derives the post-Blossom
    /// halving interval from it.
    ///
    /// Use [`Self::with_post_blossom_halving_interval`] afterwards to set a
    /// different post-Blossom interval.
    pub fn with_pre_blossom_halving_interval(
        mut self,
        pre_blossom_halving_interval: HeightDiff,
    ) -> Self {
        self.pre_blossom_halving_interval = pre_blossom_halving_interval;
        self.post_blossom_halving_interval =
            post_blossom_halving_interval(pre_blossom_halving_interval);
        self
    }

    /// Sets the post-Blossom halving interval.
    ///
    /// The funding period length is derived from it.
    pub fn with_post_blossom_halving_interval(
        mut self,
        post_blossom_halving_interval: HeightDiff,
    ) -> Self {
        self.post_blossom_halving_interval = post_blossom_halving_interval;
        self
    }

    /// Replaces all the funding streams.
    pub fn with_funding_streams(mut self, funding_streams: Vec<ConfiguredFundingStream>) -> Self {
        self.funding_streams = funding_streams;
        self
    }

    /// Replaces all the lockbox disbursements.
    pub fn with_lockbox_disbursements(
        mut self,
        lockbox_disbursements: Vec<ConfiguredLockboxDisbursement>,
    ) -> Self {
        self.lockbox_disbursements = lockbox_disbursements;
        self
    }

    /// Replaces the founders' reward addresses.
    pub fn with_founders_reward_addresses(mut self, addresses: Vec<String>) -> Self {
        self.founders_reward_addresses = addresses;
        self
    }

    /// Sets the proof of work parameters.
    pub fn with_pow(mut self, pow: ConfiguredPow) -> Self {
        self.pow_max_adjust_down = pow.max_adjust_down;
        self.pow_max_adjust_up = pow.max_adjust_up;
        self.pow_limit = pow.pow_limit;
        self.pow_no_retargeting = pow.no_retargeting;
        self
    }

    /// Sets the height after which minimum difficulty blocks are allowed.
    pub fn with_pow_allow_min_difficulty_blocks_after_height(
        mut self,
        height: Option<Height>,
    ) -> Self {
        self.pow_allow_min_difficulty_blocks_after_height = height;
        self
    }

    /// Sets the future timestamp soft fork height.
    pub fn with_future_timestamp_soft_fork_height(mut self, height: Height) -> Self {
        self.future_timestamp_soft_fork_height = height;
        self
    }

    /// Validates the parameters, decoding addresses with the network's [`KeyConstants`].
    ///
    /// [`KeyConstants`]: crate::keys::KeyConstants
    pub fn to_params(self) -> Result<Params, ParamsError> {
        let decoder = self.network.key_constants();
        self.to_params_with_decoder(decoder)
    }

    /// Validates the parameters, decoding addresses with `decoder`.
    pub fn to_params_with_decoder(
        self,
        decoder: &dyn AddressDecoder,
    ) -> Result<Params, ParamsError> {
        if self.subsidy_slow_start_interval < 0 {
            return Err(ParamsError::InvalidInterval {
                name: "slow start interval",
                value: self.subsidy_slow_start_interval,
            });
        }

        if self.pre_blossom_halving_interval <= 0 {
            return Err(ParamsError::InvalidInterval {
                name: "pre-Blossom halving interval",
                value: self.pre_blossom_halving_interval,
            });
        }

        if self.post_blossom_halving_interval <= 0 {
            return Err(ParamsError::InvalidInterval {
                name: "post-Blossom halving interval",
                value: self.post_blossom_halving_interval,
            });
        }

        let funding_period_length = funding_period_length(self.post_blossom_halving_interval);

        if funding_period_length <= 0 {
            return Err(ParamsError::InvalidInterval {
                name: "funding period length",
                value: funding_period_length,
            });
        }

        for entry in &self.upgrades {
            if let Some(height) = entry.activation_height.height() {
                height.0.try_into_height()?;
            }
        }

        let founders_reward_scripts = self
            .founders_reward_addresses
            .iter()
            .map(|address| founders_reward_script(decoder, address))
            .collect::<Result<_, _>>()?;

        let mut params = Params {
            network: self.network,
            upgrades: self.upgrades,
            funding_streams: Default::default(),
            lockbox_disbursements: Default::default(),
            subsidy_slow_start_interval: self.subsidy_slow_start_interval,
            pre_blossom_halving_interval: self.pre_blossom_halving_interval,
            post_blossom_halving_interval: self.post_blossom_halving_interval,
            funding_period_length,
            pre_blossom_pow_target_spacing: PRE_BLOSSOM_POW_TARGET_SPACING,
            post_blossom_pow_target_spacing: POST_BLOSSOM_POW_TARGET_SPACING,
            pow_averaging_window: POW_AVERAGING_WINDOW,
            pow_max_adjust_down: self.pow_max_adjust_down,
            pow_max_adjust_up: self.pow_max_adjust_up,
            pow_limit: self.pow_limit,
            pow_allow_min_difficulty_blocks_after_height: self
                .pow_allow_min_difficulty_blocks_after_height,
            pow_no_retargeting: self.pow_no_retargeting,
            equihash_n: self.equihash_n,
            equihash_k: self.equihash_k,
            future_timestamp_soft_fork_height: self.future_timestamp_soft_fork_height,
            founders_reward_scripts,
        };

        for stream in &self.funding_streams {
            match &stream.addresses {
                Some(addresses) => params.add_funding_stream(
                    decoder,
                    stream.index,
                    stream.start_height,
                    stream.end_height,
                    addresses,
                )?,
                None => params.add_lockbox_stream(
                    stream.index,
                    stream.start_height,
                    stream.end_height,
                )?,
            }
        }

        for disbursement in &self.lockbox_disbursements {
            params.add_lockbox_disbursement(
                decoder,
                disbursement.index,
                disbursement.upgrade,
                disbursement.amount,
                &disbursement.address,
            )?;
        }

        params.validate()?;

        Ok(params)
    }
}
