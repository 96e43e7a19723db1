//! Network upgrade consensus parameters.

use std::fmt;

use hex::{FromHex, ToHex};

use crate::block::{self, Height};

use super::Params;

use NetworkUpgrade::*;

/// A Shifocoin network upgrade.
///
/// Network upgrades can change the network protocol or consensus rules in
/// incompatible ways. They are declared in the order they were introduced,
/// and that order is used to index the upgrade schedule.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub enum NetworkUpgrade {
    /// The original Sprout protocol, active from Genesis.
    BaseSprout,
    /// An upgrade that is never activated, used to test upgrade handling.
    TestDummy,
    /// The protocol after the Overwinter upgrade.
    Overwinter,
    /// The protocol after the Sapling upgrade.
    Sapling,
    /// The protocol after the Blossom upgrade.
    ///
    /// Blossom halves the target block spacing.
    Blossom,
    /// The protocol after the Heartwood upgrade.
    Heartwood,
    /// The protocol after the Canopy upgrade.
    ///
    /// Canopy starts the funding streams.
    Canopy,
    /// The protocol after the NU5 upgrade.
    #[serde(rename = "NU5")]
    Nu5,
    /// The protocol after the NU6 upgrade.
    ///
    /// NU6 allows funding streams to pay the lockbox.
    #[serde(rename = "NU6")]
    Nu6,
    /// The protocol after the NU6.1 upgrade.
    ///
    /// NU6.1 is the first upgrade that can disburse lockbox funds.
    #[serde(rename = "NU6.1")]
    Nu6_1,
    /// A placeholder for upgrades under development.
    ZFuture,
}

/// Every network upgrade, in activation order.
pub const NETWORK_UPGRADES_IN_ORDER: [NetworkUpgrade; NetworkUpgrade::COUNT] = [
    BaseSprout, TestDummy, Overwinter, Sapling, Blossom, Heartwood, Canopy, Nu5, Nu6, Nu6_1,
    ZFuture,
];

impl NetworkUpgrade {
    /// The number of network upgrades, and the size of the upgrade schedule.
    pub const COUNT: usize = 11;

    /// Returns this upgrade's position in the upgrade schedule.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the name used for this upgrade in logs and RPCs.
    pub fn name(&self) -> &'static str {
        match self {
            BaseSprout => "Sprout",
            TestDummy => "Test dummy",
            Overwinter => "Overwinter",
            Sapling => "Sapling",
            Blossom => "Blossom",
            Heartwood => "Heartwood",
            Canopy => "Canopy",
            Nu5 => "NU5",
            Nu6 => "NU6",
            Nu6_1 => "NU6.1",
            ZFuture => "ZFUTURE",
        }
    }

    /// Returns the consensus branch id for this network upgrade.
    ///
    /// Branch ids are the same on every network.
    pub fn branch_id(&self) -> ConsensusBranchId {
        ConsensusBranchId(match self {
            BaseSprout => 0,
            TestDummy => 0x7473_6554,
            Overwinter => 0x5ba8_1b19,
            Sapling => 0x76b8_09bb,
            Blossom => 0x2bb4_0e60,
            Heartwood => 0xf5b9_230b,
            Canopy => 0xe9ff_75a6,
            Nu5 => 0xc2d6_d0b4,
            Nu6 => 0xc8e7_1055,
            Nu6_1 => 0x4dec_4df0,
            ZFuture => 0xffff_ffff,
        })
    }

    /// Returns the network upgrade with `branch_id`, if there is one.
    pub fn from_branch_id(branch_id: u32) -> Option<NetworkUpgrade> {
        NETWORK_UPGRADES_IN_ORDER
            .into_iter()
            .find(|upgrade| upgrade.branch_id() == ConsensusBranchId(branch_id))
    }

    /// Returns this upgrade's activation height on `params`.
    ///
    /// See [`Params::activation_height`].
    pub fn activation_height(&self, params: &Params) -> Option<Height> {
        params.activation_height(*self)
    }

    /// Returns the upgrade rules that apply at `height` on `params`.
    ///
    /// See [`Params::current_epoch`].
    pub fn current(params: &Params, height: Height) -> NetworkUpgrade {
        params.current_epoch(height)
    }
}

impl fmt::Display for NetworkUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When a network upgrade activates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActivationHeight {
    /// Active from Genesis.
    AlwaysActive,
    /// Active from this height onwards.
    Height(Height),
    /// Never active.
    NoActivation,
}

impl ActivationHeight {
    /// Returns the first active height, or `None` if the upgrade never activates.
    pub fn height(&self) -> Option<Height> {
        match self {
            ActivationHeight::AlwaysActive => Some(Height::MIN),
            ActivationHeight::Height(height) => Some(*height),
            ActivationHeight::NoActivation => None,
        }
    }

    /// Returns `true` if an upgrade with this activation height is active at `height`.
    pub fn is_active_at(&self, height: Height) -> bool {
        self.height()
            .map_or(false, |activation_height| height >= activation_height)
    }
}

impl From<Option<Height>> for ActivationHeight {
    fn from(height: Option<Height>) -> Self {
        height.map_or(ActivationHeight::NoActivation, ActivationHeight::Height)
    }
}

/// The activation state of an upgrade at a particular height.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UpgradeState {
    /// The upgrade will never activate.
    Disabled,
    /// The upgrade will activate at a later height.
    Pending,
    /// The upgrade rules apply.
    Active,
}

/// An entry in a network's upgrade schedule.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct UpgradeEntry {
    /// The minimum peer protocol version for this upgrade.
    pub protocol_version: u32,
    /// When the upgrade activates.
    pub activation_height: ActivationHeight,
    /// The hash of the activation block, once the activation is part of the
    /// chain's history.
    pub activation_block_hash: Option<block::Hash>,
}

impl UpgradeEntry {
    /// Returns an entry for an upgrade without a known activation block.
    pub const fn new(protocol_version: u32, activation_height: ActivationHeight) -> Self {
        Self {
            protocol_version,
            activation_height,
            activation_block_hash: None,
        }
    }
}

/// The Consensus Branch Id, used to bind transactions and blocks to a
/// particular network upgrade.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ConsensusBranchId(u32);

impl ConsensusBranchId {
    /// Return the hash bytes in big-endian byte-order suitable for printing out byte by byte.
    ///
    /// Consensus branch IDs are displayed in big-endian byte-order,
    /// following the convention set by zcashd.
    fn bytes_in_display_order(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<ConsensusBranchId> for u32 {
    fn from(branch: ConsensusBranchId) -> u32 {
        branch.0
    }
}

impl ToHex for &ConsensusBranchId {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex_upper()
    }
}

impl ToHex for ConsensusBranchId {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex_upper()
    }
}

impl FromHex for ConsensusBranchId {
    type Error = <[u8; 4] as FromHex>::Error;

    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let branch = <[u8; 4]>::from_hex(hex)?;
        Ok(ConsensusBranchId(u32::from_be_bytes(branch)))
    }
}

impl fmt::Display for ConsensusBranchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode_hex::<String>())
    }
}

/// Upgrade schedule queries.
impl Params {
    /// Returns the schedule entry for `upgrade`.
    pub fn upgrade(&self, upgrade: NetworkUpgrade) -> &UpgradeEntry {
        &self.upgrades[upgrade.index()]
    }

    /// Returns the activation height of `upgrade`, or `None` if it never activates.
    ///
    /// Upgrades that are always active activate at Genesis.
    pub fn activation_height(&self, upgrade: NetworkUpgrade) -> Option<Height> {
        self.upgrade(upgrade).activation_height.height()
    }

    /// Returns `true` if the rules of `upgrade` apply at `height`.
    pub fn network_upgrade_active(&self, height: Height, upgrade: NetworkUpgrade) -> bool {
        self.upgrade(upgrade).activation_height.is_active_at(height)
    }

    /// Returns the activation state of `upgrade` at `height`.
    pub fn upgrade_state(&self, height: Height, upgrade: NetworkUpgrade) -> UpgradeState {
        match self.activation_height(upgrade) {
            None => UpgradeState::Disabled,
            Some(activation_height) if height >= activation_height => UpgradeState::Active,
            Some(_) => UpgradeState::Pending,
        }
    }

    /// Returns `true` if `height` is the first block with the rules of `upgrade`.
    ///
    /// Sprout has no activation block.
    pub fn is_activation_height(&self, height: Height, upgrade: NetworkUpgrade) -> bool {
        upgrade != BaseSprout && self.activation_height(upgrade) == Some(height)
    }

    /// Returns `true` if `height` is the activation height of any upgrade.
    pub fn is_activation_height_for_any_upgrade(&self, height: Height) -> bool {
        NETWORK_UPGRADES_IN_ORDER
            .into_iter()
            .any(|upgrade| self.is_activation_height(height, upgrade))
    }

    /// Returns the latest upgrade whose rules apply at `height`.
    pub fn current_epoch(&self, height: Height) -> NetworkUpgrade {
        NETWORK_UPGRADES_IN_ORDER
            .into_iter()
            .rev()
            .find(|upgrade| self.network_upgrade_active(height, *upgrade))
            .unwrap_or(BaseSprout)
    }

    /// Returns the consensus branch id of the rules that apply at `height`.
    pub fn current_epoch_branch_id(&self, height: Height) -> ConsensusBranchId {
        self.current_epoch(height).branch_id()
    }

    /// Returns the next upgrade that is scheduled to activate after `height`.
    pub fn next_epoch(&self, height: Height) -> Option<NetworkUpgrade> {
        NETWORK_UPGRADES_IN_ORDER
            .into_iter()
            .skip(1)
            .find(|upgrade| self.upgrade_state(height, *upgrade) == UpgradeState::Pending)
    }

    /// Returns the activation height of [`Params::next_epoch`].
    pub fn next_activation_height(&self, height: Height) -> Option<Height> {
        self.next_epoch(height)
            .and_then(|upgrade| self.activation_height(upgrade))
    }

    /// Returns the activation height of the latest upgrade with a known
    /// activation block hash, or Genesis if there is none.
    ///
    /// Activations before this height are settled in the chain's history,
    /// later ones can still be changed.
    pub fn height_of_latest_settled_upgrade(&self) -> Height {
        NETWORK_UPGRADES_IN_ORDER
            .into_iter()
            .skip(1)
            .rev()
            .map(|upgrade| self.upgrade(upgrade))
            .filter(|entry| entry.activation_block_hash.is_some())
            .find_map(|entry| entry.activation_height.height())
            .unwrap_or(Height::MIN)
    }
}
