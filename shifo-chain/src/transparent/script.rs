//! Lock scripts for coinbase outputs.

use std::fmt;

use super::OpCode;

/// An encoding of a Bitcoin script.
///
/// Funding stream and disbursement recipients are compared by their lock
/// script, so two addresses that lock funds the same way are the same
/// recipient.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create a new Bitcoin script from its raw bytes.
    /// The raw bytes must not contain the length prefix.
    pub fn new(raw_bytes: &[u8]) -> Self {
        Script(raw_bytes.to_vec())
    }

    /// Returns the `OP_HASH160 <script_hash> OP_EQUAL` script.
    pub fn pay_to_script_hash(script_hash: &[u8; 20]) -> Self {
        let mut script_bytes = Vec::with_capacity(23);

        script_bytes.push(OpCode::Hash160 as u8);
        script_bytes.push(OpCode::Push20Bytes as u8);
        script_bytes.extend_from_slice(script_hash);
        script_bytes.push(OpCode::Equal as u8);

        Script(script_bytes)
    }

    /// Returns the `OP_DUP OP_HASH160 <pub_key_hash> OP_EQUALVERIFY OP_CHECKSIG` script.
    pub fn pay_to_public_key_hash(pub_key_hash: &[u8; 20]) -> Self {
        let mut script_bytes = Vec::with_capacity(25);

        script_bytes.push(OpCode::Dup as u8);
        script_bytes.push(OpCode::Hash160 as u8);
        script_bytes.push(OpCode::Push20Bytes as u8);
        script_bytes.extend_from_slice(pub_key_hash);
        script_bytes.push(OpCode::EqualVerify as u8);
        script_bytes.push(OpCode::CheckSig as u8);

        Script(script_bytes)
    }

    /// Return the raw bytes of the script without the length prefix.
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns `true` if this is a P2SH lock script.
    pub fn is_pay_to_script_hash(&self) -> bool {
        matches!(
            self.0.as_slice(),
            [hash160, push20, .., equal]
                if self.0.len() == 23
                    && *hash160 == OpCode::Hash160 as u8
                    && *push20 == OpCode::Push20Bytes as u8
                    && *equal == OpCode::Equal as u8
        )
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Script")
            .field(&hex::encode(&self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lock_scripts() {
        let _init_guard = shifo_test::init();

        let hash = [0x11; 20];

        let p2sh = Script::pay_to_script_hash(&hash);
        assert_eq!(
            hex::encode(p2sh.as_raw_bytes()),
            format!("a914{}87", hex::encode(hash))
        );
        assert!(p2sh.is_pay_to_script_hash());

        let p2pkh = Script::pay_to_public_key_hash(&hash);
        assert_eq!(
            hex::encode(p2pkh.as_raw_bytes()),
            format!("76a914{}88ac", hex::encode(hash))
        );
        assert!(!p2pkh.is_pay_to_script_hash());
    }
}
