//! Tests for block heights and hashes.

use color_eyre::eyre::Result;
use proptest::prelude::*;

use super::*;

#[test]
fn height_arithmetic() {
    let _init_guard = shifo_test::init();

    assert_eq!(Height(10) - Height(3), 7);
    assert_eq!(Height(3) - Height(10), -7);
    assert_eq!(Height(3) + 7, Some(Height(10)));
    assert_eq!(Height(3) - 4, None);
    assert_eq!(Height::MAX + 1, None);
    assert_eq!(Height::MIN.previous(), None);
    assert_eq!(Height(5).next(), Some(Height(6)));
    assert!(Height::MIN.is_min());
}

#[test]
fn height_parsing() {
    let _init_guard = shifo_test::init();

    assert_eq!("653600".parse::<Height>().ok(), Some(Height(653_600)));
    assert!("500000000".parse::<Height>().is_err());
    assert!("-1".parse::<Height>().is_err());
}

#[test]
fn hash_uses_display_byte_order() -> Result<()> {
    let _init_guard = shifo_test::init();

    let display = "00000000025a57200d898ac7f21e26bf29028bbe96ec46e05b2c17cc9db9e4f3";
    let hash: Hash = display.parse()?;

    assert_eq!(hash.0[31], 0x00);
    assert_eq!(hash.0[0], 0xf3);
    assert_eq!(hash.to_string(), display);

    assert!("00".parse::<Hash>().is_err());

    Ok(())
}

proptest! {
    #[test]
    fn height_diff_round_trip(height in any::<Height>(), other in any::<Height>()) {
        let _init_guard = shifo_test::init();

        let diff = other - height;
        prop_assert_eq!(height + diff, Some(other));
        prop_assert_eq!(other - diff, Some(height));
    }
}
