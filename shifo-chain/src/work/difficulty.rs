//! Expanded difficulty targets.

use std::{fmt, str::FromStr};

use hex::FromHex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::parameters::ParamsError;

use super::U256;

/// A 256-bit unsigned "expanded difficulty" value.
///
/// Used as the `PoWLimit` of a network: the easiest target a block hash
/// may meet. Larger values are easier targets.
///
/// Parsed and displayed as 64 big-endian hex digits, like `zcashd`'s
/// `uint256S`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct ExpandedDifficulty(U256);

impl ExpandedDifficulty {
    /// Returns the target as big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut buf = [0; 32];
        self.0.to_big_endian(&mut buf);
        buf
    }
}

impl fmt::Debug for ExpandedDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ExpandedDifficulty")
            .field(&hex::encode(self.to_be_bytes()))
            .finish()
    }
}

impl fmt::Display for ExpandedDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

impl FromStr for ExpandedDifficulty {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = <[u8; 32]>::from_hex(s).map_err(|_| ParamsError::InvalidPowLimit {
            pow_limit: s.to_string(),
        })?;
        let limit = U256::from_big_endian(&bytes);

        if limit.is_zero() {
            return Err(ParamsError::InvalidPowLimit {
                pow_limit: s.to_string(),
            });
        }

        Ok(Self(limit))
    }
}

impl From<U256> for ExpandedDifficulty {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<ExpandedDifficulty> for U256 {
    fn from(value: ExpandedDifficulty) -> Self {
        value.0
    }
}

impl Serialize for ExpandedDifficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpandedDifficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;

        hex.parse().map_err(de::Error::custom)
    }
}
