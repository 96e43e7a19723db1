//! Static parameters for each Shifocoin network.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    amount::{Amount, NonNegative},
    block::{Height, HeightDiff},
    keys::KeyConstants,
};

use super::{
    constants::{magics, NU6_1_LOCKBOX_DISBURSEMENT_CHUNK},
    ActivationHeight, FundingStreamIndex, LockboxDisbursementIndex, NetworkUpgrade,
};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

mod mainnet;
mod regtest;
mod testnet;

/// An enum describing the possible network choices.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum Network {
    /// The production mainnet.
    #[default]
    Mainnet,

    /// The public test network.
    Testnet,

    /// A local test network, with upgrades and funding streams configured by the node operator.
    Regtest,
}

/// A magic number identifying the network.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Magic(pub [u8; 4]);

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Magic").field(&hex::encode(self.0)).finish()
    }
}

impl From<Network> for &'static str {
    fn from(network: Network) -> &'static str {
        match network {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Regtest => "Regtest",
        }
    }
}

impl From<&Network> for &'static str {
    fn from(network: &Network) -> &'static str {
        (*network).into()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}

impl Network {
    /// Returns an iterator over [`Network`] variants.
    pub fn iter() -> impl Iterator<Item = Self> {
        [Self::Mainnet, Self::Testnet, Self::Regtest].into_iter()
    }

    /// Get the default port associated to this network.
    pub fn default_port(&self) -> u16 {
        match self {
            Network::Mainnet => 9033,
            Network::Testnet => 18233,
            Network::Regtest => 18344,
        }
    }

    /// Returns the message start bytes for this network.
    pub fn magic(&self) -> Magic {
        match self {
            Network::Mainnet => magics::MAINNET,
            Network::Testnet => magics::TESTNET,
            Network::Regtest => magics::REGTEST,
        }
    }

    /// Returns the [BIP-44] coin type for this network.
    ///
    /// [BIP-44]: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
    pub fn bip44_coin_type(&self) -> u32 {
        match self {
            Network::Mainnet => 133,
            Network::Testnet | Network::Regtest => 1,
        }
    }

    /// Returns the ticker used for amounts on this network.
    pub fn currency_units(&self) -> &'static str {
        match self {
            Network::Mainnet => "SHFO",
            Network::Testnet => "TAZ",
            Network::Regtest => "REG",
        }
    }

    /// Returns the address encoding constants for this network.
    pub fn key_constants(&self) -> &'static KeyConstants {
        KeyConstants::for_network(*self)
    }

    /// Return the network identifier used in RPCs and data directory names.
    pub fn network_id(&self) -> &'static str {
        self.key_constants().network_id
    }

    /// Return the lowercase network name.
    pub fn lowercase_name(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }

    /// Returns `true` if this network is a testing network.
    pub fn is_a_test_network(&self) -> bool {
        *self != Network::Mainnet
    }

    /// Returns the hard-coded parameter defaults for this network.
    pub(crate) fn defaults(&self) -> &'static NetworkDefaults {
        match self {
            Network::Mainnet => &mainnet::DEFAULTS,
            Network::Testnet => &testnet::DEFAULTS,
            Network::Regtest => &regtest::DEFAULTS,
        }
    }
}

impl FromStr for Network {
    type Err = InvalidNetworkError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "main" | "mainnet" | "shifocoin" => Ok(Network::Mainnet),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(InvalidNetworkError(string.to_owned())),
        }
    }
}

/// An unknown network name.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("Invalid network: {0}")]
pub struct InvalidNetworkError(String);

/// The hard-coded parameters of a network, before validation.
#[derive(Clone, Debug)]
pub(crate) struct NetworkDefaults {
    pub upgrades: [UpgradeDefaults; NetworkUpgrade::COUNT],
    pub subsidy_slow_start_interval: HeightDiff,
    pub pre_blossom_halving_interval: HeightDiff,
    pub post_blossom_halving_interval: HeightDiff,
    pub funding_streams: &'static [FundingStreamDefaults],
    pub lockbox_disbursements: &'static [LockboxDisbursementDefaults],
    pub founders_reward_addresses: &'static [&'static str],
    pub pow_max_adjust_down: i64,
    pub pow_max_adjust_up: i64,
    pub pow_limit: &'static str,
    pub pow_allow_min_difficulty_blocks_after_height: Option<Height>,
    pub pow_no_retargeting: bool,
    pub future_timestamp_soft_fork_height: Height,
    pub equihash_n: u32,
    pub equihash_k: u32,
}

/// A hard-coded upgrade schedule entry.
#[derive(Copy, Clone, Debug)]
pub(crate) struct UpgradeDefaults {
    pub protocol_version: u32,
    pub activation_height: ActivationHeight,
    pub activation_block_hash: Option<&'static str>,
}

impl UpgradeDefaults {
    /// An upgrade that is active from Genesis.
    const fn always_active(protocol_version: u32) -> Self {
        Self {
            protocol_version,
            activation_height: ActivationHeight::AlwaysActive,
            activation_block_hash: None,
        }
    }

    /// An upgrade that never activates.
    const fn disabled(protocol_version: u32) -> Self {
        Self {
            protocol_version,
            activation_height: ActivationHeight::NoActivation,
            activation_block_hash: None,
        }
    }

    /// An upgrade that activates at `height`, with an unknown activation block.
    const fn scheduled(protocol_version: u32, height: Height) -> Self {
        Self {
            protocol_version,
            activation_height: ActivationHeight::Height(height),
            activation_block_hash: None,
        }
    }

    /// An upgrade that activated at `height`, in the block with `hash`.
    const fn settled(protocol_version: u32, height: Height, hash: &'static str) -> Self {
        Self {
            protocol_version,
            activation_height: ActivationHeight::Height(height),
            activation_block_hash: Some(hash),
        }
    }
}

/// A hard-coded funding stream.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FundingStreamDefaults {
    pub index: FundingStreamIndex,
    pub start_height: Height,
    pub end_height: Height,
    pub recipients: DefaultRecipients,
}

/// The recipients of a hard-coded funding stream.
#[derive(Copy, Clone, Debug)]
pub(crate) enum DefaultRecipients {
    /// The same address for `count` funding periods.
    Repeated { address: &'static str, count: usize },
    /// One address per funding period.
    Addresses(&'static [&'static str]),
    /// The lockbox, for every funding period.
    Lockbox,
}

impl DefaultRecipients {
    /// Returns the recipient address strings, or `None` for a lockbox stream.
    pub fn addresses(&self) -> Option<Vec<String>> {
        match self {
            DefaultRecipients::Repeated { address, count } => {
                Some(vec![address.to_string(); *count])
            }
            DefaultRecipients::Addresses(addresses) => {
                Some(addresses.iter().map(ToString::to_string).collect())
            }
            DefaultRecipients::Lockbox => None,
        }
    }
}

/// A hard-coded lockbox disbursement.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LockboxDisbursementDefaults {
    pub index: LockboxDisbursementIndex,
    pub upgrade: NetworkUpgrade,
    pub amount: Amount<NonNegative>,
    pub address: &'static str,
}

impl LockboxDisbursementDefaults {
    /// One of the equal chunks paid out of the lockbox when NU6.1 activates.
    const fn nu6_1_chunk(index: LockboxDisbursementIndex, address: &'static str) -> Self {
        Self {
            index,
            upgrade: NetworkUpgrade::Nu6_1,
            amount: NU6_1_LOCKBOX_DISBURSEMENT_CHUNK,
            address,
        }
    }
}
