//! Payment address decoding for consensus configuration.
//!
//! Funding stream and disbursement recipients are configured as
//! human-readable address strings. They are decoded once, when the network
//! parameters are built, through an [`AddressDecoder`].

use std::fmt;

use bech32::{FromBase32, ToBase32, Variant};

use crate::{parameters::Network, sapling, transparent};


/// The length of a raw Sprout payment address: `a_pk || pk_enc`.
const SPROUT_PAYMENT_ADDRESS_LENGTH: usize = 64;

/// A Sprout shielded payment address.
///
/// Sprout addresses can be decoded, but they are never valid consensus
/// recipients.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SproutPaymentAddress {
    /// The paying key `a_pk`.
    pub paying_key: [u8; 32],
    /// The transmission key `pk_enc`.
    pub transmission_key: [u8; 32],
}

impl fmt::Debug for SproutPaymentAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SproutPaymentAddress")
            .field("paying_key", &hex::encode(self.paying_key))
            .field("transmission_key", &hex::encode(self.transmission_key))
            .finish()
    }
}

/// Any payment address the decoder understands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PaymentAddress {
    /// A transparent P2PKH or P2SH address.
    Transparent(transparent::Address),
    /// A Sapling shielded address.
    Sapling(sapling::PaymentAddress),
    /// A Sprout shielded address.
    Sprout(SproutPaymentAddress),
}

impl PaymentAddress {
    /// A short name for the address kind, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentAddress::Transparent(address) if address.is_script_hash() => "transparent P2SH",
            PaymentAddress::Transparent(_) => "transparent P2PKH",
            PaymentAddress::Sapling(_) => "Sapling",
            PaymentAddress::Sprout(_) => "Sprout",
        }
    }
}

/// Decodes address strings into [`PaymentAddress`]es.
///
/// Only used while building network parameters.
pub trait AddressDecoder {
    /// Returns the decoded address, or `None` if `encoded` is not a valid
    /// address for this decoder's network.
    fn decode_payment_address(&self, encoded: &str) -> Option<PaymentAddress>;
}

/// Address encoding constants for a network.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyConstants {
    /// The network identifier string.
    pub network_id: &'static str,
    /// The Base58Check version prefix for P2PKH addresses.
    pub b58_pubkey_address_prefix: [u8; 2],
    /// The Base58Check version prefix for P2SH addresses.
    pub b58_script_address_prefix: [u8; 2],
    /// The Base58Check version prefix for Sprout payment addresses.
    pub b58_sprout_address_prefix: [u8; 2],
    /// The Bech32 human-readable part for Sapling payment addresses.
    pub sapling_payment_address_hrp: &'static str,
}

/// Transparent address prefixes shared by every network.
const B58_PUBKEY_ADDRESS_PREFIX: [u8; 2] = [0x1d, 0x25];
const B58_SCRIPT_ADDRESS_PREFIX: [u8; 2] = [0x1c, 0xba];

/// Mainnet address encoding.
pub const MAINNET_KEY_CONSTANTS: KeyConstants = KeyConstants {
    network_id: "shifocoin",
    b58_pubkey_address_prefix: B58_PUBKEY_ADDRESS_PREFIX,
    b58_script_address_prefix: B58_SCRIPT_ADDRESS_PREFIX,
    b58_sprout_address_prefix: [0x16, 0x9a],
    sapling_payment_address_hrp: "zs",
};

/// Testnet address encoding.
pub const TESTNET_KEY_CONSTANTS: KeyConstants = KeyConstants {
    network_id: "test",
    b58_pubkey_address_prefix: B58_PUBKEY_ADDRESS_PREFIX,
    b58_script_address_prefix: B58_SCRIPT_ADDRESS_PREFIX,
    b58_sprout_address_prefix: [0x16, 0xb6],
    sapling_payment_address_hrp: "ztestsapling",
};

/// Regtest address encoding.
pub const REGTEST_KEY_CONSTANTS: KeyConstants = KeyConstants {
    network_id: "regtest",
    b58_pubkey_address_prefix: B58_PUBKEY_ADDRESS_PREFIX,
    b58_script_address_prefix: B58_SCRIPT_ADDRESS_PREFIX,
    b58_sprout_address_prefix: [0x16, 0xb6],
    sapling_payment_address_hrp: "zregtestsapling",
};

impl KeyConstants {
    /// Returns the address encoding for `network`.
    pub fn for_network(network: Network) -> &'static KeyConstants {
        match network {
            Network::Mainnet => &MAINNET_KEY_CONSTANTS,
            Network::Testnet => &TESTNET_KEY_CONSTANTS,
            Network::Regtest => &REGTEST_KEY_CONSTANTS,
        }
    }

    /// Encodes `address` in this network's string format.
    pub fn encode_payment_address(&self, address: &PaymentAddress) -> String {
        match address {
            PaymentAddress::Transparent(address) => {
                let prefix = if address.is_script_hash() {
                    self.b58_script_address_prefix
                } else {
                    self.b58_pubkey_address_prefix
                };

                let mut payload = prefix.to_vec();
                payload.extend_from_slice(&address.hash_bytes());

                bs58::encode(payload).with_check().into_string()
            }
            PaymentAddress::Sapling(address) => bech32::encode(
                self.sapling_payment_address_hrp,
                address.to_bytes().to_base32(),
                Variant::Bech32,
            )
            .expect("hrp is valid"),
            PaymentAddress::Sprout(address) => {
                let mut payload = self.b58_sprout_address_prefix.to_vec();
                payload.extend_from_slice(&address.paying_key);
                payload.extend_from_slice(&address.transmission_key);

                bs58::encode(payload).with_check().into_string()
            }
        }
    }

    fn decode_base58(&self, encoded: &str) -> Option<PaymentAddress> {
        let data = bs58::decode(encoded).with_check(None).into_vec().ok()?;

        if data.len() < 2 {
            return None;
        }
        let (prefix, payload) = data.split_at(2);

        if prefix == self.b58_pubkey_address_prefix {
            Some(PaymentAddress::Transparent(
                transparent::Address::PayToPublicKeyHash {
                    pub_key_hash: payload.try_into().ok()?,
                },
            ))
        } else if prefix == self.b58_script_address_prefix {
            Some(PaymentAddress::Transparent(
                transparent::Address::PayToScriptHash {
                    script_hash: payload.try_into().ok()?,
                },
            ))
        } else if prefix == self.b58_sprout_address_prefix
            && payload.len() == SPROUT_PAYMENT_ADDRESS_LENGTH
        {
            let (paying_key, transmission_key) = payload.split_at(32);

            Some(PaymentAddress::Sprout(SproutPaymentAddress {
                paying_key: paying_key.try_into().ok()?,
                transmission_key: transmission_key.try_into().ok()?,
            }))
        } else {
            None
        }
    }

    fn decode_bech32(&self, encoded: &str) -> Option<PaymentAddress> {
        match bech32::decode(encoded) {
            Ok((hrp, data, Variant::Bech32)) if hrp == self.sapling_payment_address_hrp => {
                let bytes = Vec::<u8>::from_base32(&data).ok()?;

                sapling::PaymentAddress::from_bytes(&bytes).map(PaymentAddress::Sapling)
            }
            _ => None,
        }
    }
}

impl AddressDecoder for KeyConstants {
    fn decode_payment_address(&self, encoded: &str) -> Option<PaymentAddress> {
        self.decode_base58(encoded)
            .or_else(|| self.decode_bech32(encoded))
    }
}
