//! Script opcodes.

/// Opcodes used in coinbase lock scripts.
///
/// <https://github.com/zcash/zcash/blob/8b16094f6672d8268ff25b2d7bddd6a6207873f7/src/script/script.h#L39>
#[allow(missing_docs)]
pub enum OpCode {
    // Opcodes used to generate P2SH scripts.
    Equal = 0x87,
    Hash160 = 0xa9,
    Push20Bytes = 0x14,
    // Additional opcodes used to generate P2PKH scripts.
    Dup = 0x76,
    EqualVerify = 0x88,
    CheckSig = 0xac,
}
