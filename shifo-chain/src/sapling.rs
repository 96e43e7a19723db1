//! Sapling shielded payment addresses.

use std::fmt;

/// The length of a raw Sapling payment address.
pub const PAYMENT_ADDRESS_LENGTH: usize = 43;

/// A Sapling _shielded payment address_.
///
/// Also known as a _diversified payment address_ for Sapling, as
/// defined in [§4.2.2][4.2.2]. Funding stream recipients only need the raw
/// address bytes, so the transmission key is not checked to be a valid curve
/// point.
///
/// [4.2.2]: https://zips.z.cash/protocol/protocol.pdf#saplingkeycomponents
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PaymentAddress {
    diversifier: [u8; 11],
    transmission_key: [u8; 32],
}

impl PaymentAddress {
    /// Parses the raw `diversifier || pk_d` encoding.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != PAYMENT_ADDRESS_LENGTH {
            return None;
        }

        let (diversifier, transmission_key) = bytes.split_at(11);

        Some(Self {
            diversifier: diversifier.try_into().ok()?,
            transmission_key: transmission_key.try_into().ok()?,
        })
    }

    /// Returns the raw `diversifier || pk_d` encoding.
    pub fn to_bytes(&self) -> [u8; PAYMENT_ADDRESS_LENGTH] {
        let mut bytes = [0; PAYMENT_ADDRESS_LENGTH];

        bytes[..11].copy_from_slice(&self.diversifier);
        bytes[11..].copy_from_slice(&self.transmission_key);

        bytes
    }
}

impl fmt::Debug for PaymentAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SaplingAddress")
            .field("diversifier", &hex::encode(self.diversifier))
            .field("transmission_key", &hex::encode(self.transmission_key))
            .finish()
    }
}
