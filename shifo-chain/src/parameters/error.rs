//! Errors returned while building consensus parameters.

use thiserror::Error;

use crate::block::{Height, HeightDiff};

use super::NetworkUpgrade;

/// A funding stream violates a consensus policy rule.
///
/// Rules are checked in declaration order, and the first failure is returned.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FundingStreamError {
    /// Funding streams can only start once Canopy is active.
    #[error("funding stream starts before Canopy activation")]
    CanopyNotActive,

    /// The end height is before the start height.
    #[error("funding stream end height is before its start height")]
    IllegalRange,

    /// There are fewer recipients than funding periods in the stream's range.
    #[error("funding stream has fewer recipients than funding periods")]
    InsufficientRecipients,

    /// Lockbox recipients can only be used once NU6 is active.
    #[error("funding stream pays the lockbox before NU6 activation")]
    Nu6NotActive,
}

/// A consensus parameter set could not be built.
///
/// These errors are configuration defects: a node must not start with an
/// invalid parameter set.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum ParamsError {
    /// A funding stream failed validation.
    #[error("invalid funding stream: {0}")]
    FundingStream(#[from] FundingStreamError),

    /// A configured recipient address could not be used.
    #[error("invalid recipient address {address:?}: {reason}")]
    AddressParseFailure {
        /// The configured address string.
        address: String,
        /// Why the address was rejected.
        reason: &'static str,
    },

    /// A lockbox disbursement is tied to an upgrade before NU6.1.
    #[error("lockbox disbursements are not supported for {upgrade}, which is before NU6.1")]
    UpgradeTooEarly {
        /// The configured upgrade.
        upgrade: NetworkUpgrade,
    },

    /// The funding streams active at a height add up to more than the block subsidy.
    #[error("funding streams active at {height:?} exceed 100% of the block subsidy")]
    FundingStreamsExceedSubsidy {
        /// A height where the active streams exceed the subsidy.
        height: Height,
    },

    /// There are more founders' reward addresses than founders' reward blocks.
    #[error(
        "{count} founders' reward addresses, but the last founders' reward height is {last_height}"
    )]
    TooManyFoundersRewardAddresses {
        /// The number of configured addresses.
        count: usize,
        /// The last pre-Blossom founders' reward height.
        last_height: HeightDiff,
    },

    /// A halving or funding period interval is not positive.
    #[error("{name} must be positive, got {value}")]
    InvalidInterval {
        /// The name of the interval.
        name: &'static str,
        /// The configured value.
        value: HeightDiff,
    },

    /// Sprout activation can't be overridden.
    #[error("the BaseSprout activation height can't be changed")]
    BaseSproutOverride,

    /// A height string was not a valid block height.
    #[error("invalid block height: {0:?}")]
    InvalidHeight(String),

    /// A hash string was not 32 bytes of hex.
    #[error("invalid block hash: {0:?}")]
    InvalidHash(String),

    /// A proof-of-work limit was not a non-zero 256-bit hex value.
    #[error("invalid proof of work limit: {pow_limit:?}")]
    InvalidPowLimit {
        /// The configured limit.
        pow_limit: String,
    },
}
