//! Transparent address types.

use std::fmt;

use crate::transparent::Script;

/// Transparent Shifocoin addresses.
///
/// Two bytes are used for the Base58Check version prefix. The prefixes are
/// shared by every Shifocoin network, see [`KeyConstants`](crate::keys::KeyConstants).
///
/// <https://zips.z.cash/protocol/protocol.pdf#transparentaddrencoding>
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Address {
    /// P2SH (Pay to Script Hash) addresses
    PayToScriptHash {
        /// 20 bytes specifying a script hash.
        script_hash: [u8; 20],
    },

    /// P2PKH (Pay to Public Key Hash) addresses
    PayToPublicKeyHash {
        /// 20 bytes specifying a public key hash, which is a RIPEMD-160
        /// hash of a SHA-256 hash of a compressed ECDSA key encoding.
        pub_key_hash: [u8; 20],
    },
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug_struct = f.debug_struct("TransparentAddress");

        match self {
            Address::PayToScriptHash { script_hash } => debug_struct
                .field("script_hash", &hex::encode(script_hash))
                .finish(),
            Address::PayToPublicKeyHash { pub_key_hash } => debug_struct
                .field("pub_key_hash", &hex::encode(pub_key_hash))
                .finish(),
        }
    }
}

impl Address {
    /// Returns `true` if the address is `PayToScriptHash`, and `false` if it is `PayToPublicKeyHash`.
    pub fn is_script_hash(&self) -> bool {
        matches!(self, Address::PayToScriptHash { .. })
    }

    /// Returns the hash bytes for this address, regardless of the address type.
    pub fn hash_bytes(&self) -> [u8; 20] {
        match *self {
            Address::PayToScriptHash { script_hash } => script_hash,
            Address::PayToPublicKeyHash { pub_key_hash } => pub_key_hash,
        }
    }

    /// Turns the address into the `scriptPubKey` script that can be used in a coinbase output.
    pub fn script(&self) -> Script {
        match self {
            // https://developer.bitcoin.org/devguide/transactions.html#pay-to-script-hash-p2sh
            Address::PayToScriptHash { script_hash } => Script::pay_to_script_hash(script_hash),
            // https://developer.bitcoin.org/devguide/transactions.html#pay-to-public-key-hash-p2pkh
            Address::PayToPublicKeyHash { pub_key_hash } => {
                Script::pay_to_public_key_hash(pub_key_hash)
            }
        }
    }
}
