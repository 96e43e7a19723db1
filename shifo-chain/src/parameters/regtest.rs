//! Regtest-only changes to built consensus parameters.
//!
//! Regtest nodes can change upgrade heights, funding streams, lockbox
//! disbursements and proof of work parameters after the parameters are
//! built. These changes must happen before the node validates any blocks:
//! the exclusive borrow of [`RegtestOverrides`] enforces that.

use tracing::warn;

use crate::{
    block::TryIntoHeight,
    keys::AddressDecoder,
    work::ExpandedDifficulty,
};

use super::{
    ActivationHeight, ConfiguredPow, FundingStream, FundingStreamIndex, LockboxDisbursementIndex,
    Network, NetworkUpgrade, OnetimeLockboxDisbursement, Params, ParamsError, RegtestConfig,
};

/// Exclusive access to the mutable parts of Regtest [`Params`].
#[derive(Debug)]
pub struct RegtestOverrides<'a> {
    params: &'a mut Params,
}

impl Params {
    /// Returns the Regtest override interface, or `None` on any other network.
    pub fn regtest_overrides(&mut self) -> Option<RegtestOverrides<'_>> {
        if self.network == Network::Regtest {
            Some(RegtestOverrides { params: self })
        } else {
            None
        }
    }
}

impl RegtestOverrides<'_> {
    /// Returns the parameters being changed.
    pub fn params(&self) -> &Params {
        self.params
    }

    /// Changes the activation height of `upgrade`.
    ///
    /// Sprout is always active, so it can't be changed.
    pub fn update_network_upgrade(
        &mut self,
        upgrade: NetworkUpgrade,
        activation_height: ActivationHeight,
    ) -> Result<(), ParamsError> {
        if upgrade == NetworkUpgrade::BaseSprout {
            return Err(ParamsError::BaseSproutOverride);
        }

        if let Some(height) = activation_height.height() {
            height.0.try_into_height()?;
        }

        warn!(%upgrade, ?activation_height, "overriding regtest network upgrade activation");

        let entry = &mut self.params.upgrades[upgrade.index()];
        entry.activation_height = activation_height;
        entry.activation_block_hash = None;

        Ok(())
    }

    /// Replaces the funding stream in slot `index`.
    ///
    /// `stream` must have been validated against the current upgrade heights.
    pub fn update_funding_stream(
        &mut self,
        index: FundingStreamIndex,
        stream: Option<FundingStream>,
    ) {
        warn!(?index, removed = stream.is_none(), "overriding regtest funding stream");

        self.params.set_funding_stream(index, stream);
    }

    /// Replaces the lockbox disbursement in slot `index`.
    pub fn update_onetime_lockbox_disbursement(
        &mut self,
        index: LockboxDisbursementIndex,
        disbursement: Option<OnetimeLockboxDisbursement>,
    ) {
        warn!(
            ?index,
            removed = disbursement.is_none(),
            "overriding regtest lockbox disbursement"
        );

        self.params.set_lockbox_disbursement(index, disbursement);
    }

    /// Changes the proof of work parameters.
    pub fn update_pow(
        &mut self,
        max_adjust_down: i64,
        max_adjust_up: i64,
        pow_limit: ExpandedDifficulty,
        no_retargeting: bool,
    ) {
        warn!(
            max_adjust_down,
            max_adjust_up,
            %pow_limit,
            no_retargeting,
            "overriding regtest proof of work parameters"
        );

        self.params.pow_max_adjust_down = max_adjust_down;
        self.params.pow_max_adjust_up = max_adjust_up;
        self.params.pow_limit = pow_limit;
        self.params.pow_no_retargeting = no_retargeting;
    }

    /// Applies a Regtest configuration section.
    ///
    /// Activation heights are changed first, so funding streams and lockbox
    /// disbursements are validated against the new heights. Funding stream
    /// addresses can use the `DEFERRED_POOL` lockbox recipient.
    ///
    /// The configuration is applied to a copy of the parameters. If any part
    /// of it is invalid, the parameters are left unchanged.
    pub fn apply(
        &mut self,
        config: &RegtestConfig,
        decoder: &dyn AddressDecoder,
    ) -> Result<(), ParamsError> {
        let mut staged = self.params.clone();
        RegtestOverrides {
            params: &mut staged,
        }
        .apply_in_place(config, decoder)?;

        *self.params = staged;

        Ok(())
    }

    fn apply_in_place(
        &mut self,
        config: &RegtestConfig,
        decoder: &dyn AddressDecoder,
    ) -> Result<(), ParamsError> {
        for (upgrade, height) in config.activation_heights.configured_upgrades() {
            let height = height.try_into_height()?;
            self.update_network_upgrade(upgrade, ActivationHeight::Height(height))?;
        }

        for configured in &config.funding_streams {
            let stream = match &configured.addresses {
                Some(addresses) => FundingStream::parse(
                    self.params,
                    decoder,
                    configured.start_height,
                    configured.end_height,
                    addresses,
                    true,
                )?,
                None => FundingStream::lockbox(
                    self.params,
                    configured.start_height,
                    configured.end_height,
                )?,
            };

            self.update_funding_stream(configured.index, Some(stream));
        }

        for configured in &config.lockbox_disbursements {
            let disbursement = OnetimeLockboxDisbursement::parse(
                decoder,
                configured.upgrade,
                configured.amount,
                &configured.address,
            )?;

            self.update_onetime_lockbox_disbursement(configured.index, Some(disbursement));
        }

        if let Some(ConfiguredPow {
            max_adjust_down,
            max_adjust_up,
            pow_limit,
            no_retargeting,
        }) = config.pow
        {
            self.update_pow(max_adjust_down, max_adjust_up, pow_limit, no_retargeting);
        }

        self.params.check_funding_stream_shares()
    }
}
