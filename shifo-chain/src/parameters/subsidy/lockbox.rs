//! One-time disbursements from the lockbox.
//!
//! Funds that funding streams pay to the lockbox stay there until a network
//! upgrade disburses them. Each disbursement is paid once, in the block
//! where its upgrade activates.

use tracing::debug;

use crate::{
    amount::{Amount, NonNegative},
    block::Height,
    keys::{AddressDecoder, PaymentAddress},
    parameters::{
        NetworkUpgrade::{self, Nu6_1},
        Params, ParamsError,
    },
    transparent,
};

/// The lockbox disbursement slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
#[allow(missing_docs)]
pub enum LockboxDisbursementIndex {
    Nu6_1Chunk1,
    Nu6_1Chunk2,
    Nu6_1Chunk3,
    Nu6_1Chunk4,
    Nu6_1Chunk5,
    Nu6_1Chunk6,
    Nu6_1Chunk7,
    Nu6_1Chunk8,
    Nu6_1Chunk9,
    Nu6_1Chunk10,
}

use LockboxDisbursementIndex::*;

impl LockboxDisbursementIndex {
    /// The number of lockbox disbursement slots.
    pub const COUNT: usize = 10;

    /// Every slot, in payment order.
    pub const ALL: [LockboxDisbursementIndex; Self::COUNT] = [
        Nu6_1Chunk1,
        Nu6_1Chunk2,
        Nu6_1Chunk3,
        Nu6_1Chunk4,
        Nu6_1Chunk5,
        Nu6_1Chunk6,
        Nu6_1Chunk7,
        Nu6_1Chunk8,
        Nu6_1Chunk9,
        Nu6_1Chunk10,
    ];

    /// Returns this slot's position in the disbursement table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A payment from the lockbox to a P2SH address, in the activation block of `upgrade`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OnetimeLockboxDisbursement {
    upgrade: NetworkUpgrade,
    amount: Amount<NonNegative>,
    recipient: transparent::Script,
}

impl OnetimeLockboxDisbursement {
    /// The first upgrade that can disburse lockbox funds.
    pub const MIN_UPGRADE: NetworkUpgrade = Nu6_1;

    /// Decodes `address` and creates a disbursement.
    ///
    /// The upgrade must not be before [`Self::MIN_UPGRADE`], and the address
    /// must be a transparent P2SH address.
    pub fn parse(
        decoder: &dyn AddressDecoder,
        upgrade: NetworkUpgrade,
        amount: Amount<NonNegative>,
        address: &str,
    ) -> Result<Self, ParamsError> {
        if upgrade < Self::MIN_UPGRADE {
            return Err(ParamsError::UpgradeTooEarly { upgrade });
        }

        let recipient = match decoder.decode_payment_address(address) {
            Some(PaymentAddress::Transparent(transparent_address))
                if transparent_address.is_script_hash() =>
            {
                transparent_address.script()
            }
            Some(_) => {
                return Err(ParamsError::AddressParseFailure {
                    address: address.to_string(),
                    reason: "lockbox disbursements must pay a transparent P2SH address",
                })
            }
            None => {
                return Err(ParamsError::AddressParseFailure {
                    address: address.to_string(),
                    reason: "not a valid address on this network",
                })
            }
        };

        Ok(Self {
            upgrade,
            amount,
            recipient,
        })
    }

    /// The upgrade whose activation block pays this disbursement.
    pub fn upgrade(&self) -> NetworkUpgrade {
        self.upgrade
    }

    /// The disbursed amount.
    pub fn amount(&self) -> Amount<NonNegative> {
        self.amount
    }

    /// The lock script of the disbursement output.
    pub fn recipient(&self) -> &transparent::Script {
        &self.recipient
    }
}

/// Lockbox disbursement registry and queries.
impl Params {
    /// Returns the disbursement in slot `index`, if there is one.
    pub fn lockbox_disbursement(
        &self,
        index: LockboxDisbursementIndex,
    ) -> Option<&OnetimeLockboxDisbursement> {
        self.lockbox_disbursements[index.index()].as_ref()
    }

    /// Returns the disbursements the block at `height` must pay, in slot order.
    ///
    /// Disbursements are only paid in the activation block of their upgrade.
    pub fn lockbox_disbursements_for_height(
        &self,
        height: Height,
    ) -> Vec<&OnetimeLockboxDisbursement> {
        if !self.network_upgrade_active(height, OnetimeLockboxDisbursement::MIN_UPGRADE) {
            return Vec::new();
        }

        self.lockbox_disbursements
            .iter()
            .flatten()
            .filter(|disbursement| self.activation_height(disbursement.upgrade) == Some(height))
            .collect()
    }

    /// Registers the disbursement in slot `index`, decoding `address` with `decoder`.
    pub(crate) fn add_lockbox_disbursement(
        &mut self,
        decoder: &dyn AddressDecoder,
        index: LockboxDisbursementIndex,
        upgrade: NetworkUpgrade,
        amount: Amount<NonNegative>,
        address: &str,
    ) -> Result<(), ParamsError> {
        let disbursement = OnetimeLockboxDisbursement::parse(decoder, upgrade, amount, address)?;
        self.set_lockbox_disbursement(index, Some(disbursement));

        Ok(())
    }

    /// Replaces the disbursement in slot `index`.
    pub(crate) fn set_lockbox_disbursement(
        &mut self,
        index: LockboxDisbursementIndex,
        disbursement: Option<OnetimeLockboxDisbursement>,
    ) {
        if let Some(disbursement) = &disbursement {
            debug!(
                ?index,
                upgrade = %disbursement.upgrade(),
                amount = %disbursement.amount(),
                "registered lockbox disbursement",
            );
        }

        self.lockbox_disbursements[index.index()] = disbursement;
    }
}
