//! Fixed test vectors for amounts.

use color_eyre::eyre::Result;

use super::*;

#[test]
fn add_and_sub_stay_in_range() -> Result<()> {
    let _init_guard = shifo_test::init();

    let one: Amount<NonNegative> = 1.try_into()?;
    let two: Amount<NonNegative> = 2.try_into()?;

    assert_eq!((one + one)?, two);
    assert_eq!((two - one)?, one);
    assert!((one - two).is_err());

    let max: Amount<NonNegative> = MAX_MONEY.try_into()?;
    assert!((max + one).is_err());

    Ok(())
}

#[test]
fn constraints() -> Result<()> {
    let _init_guard = shifo_test::init();

    assert!(Amount::<NonNegative>::try_from(-1i64).is_err());
    assert!(Amount::<NonNegative>::try_from(i128::from(MAX_MONEY) + 1).is_err());
    assert!(matches!(
        Amount::<NonNegative>::try_from(i128::MAX),
        Err(Error::Convert { .. })
    ));

    assert_eq!(
        Amount::<NonNegative>::try_from(MAX_MONEY)?,
        Amount::<NonNegative>::new(MAX_MONEY)
    );

    Ok(())
}

#[test]
fn sum_reports_overflow() -> Result<()> {
    let _init_guard = shifo_test::init();

    let max: Amount<NonNegative> = MAX_MONEY.try_into()?;
    let one: Amount<NonNegative> = 1.try_into()?;

    let total: super::Result<Amount<NonNegative>> = [one, one, one].iter().sum();
    assert_eq!(total?, 3);

    let overflow: super::Result<Amount<NonNegative>> = vec![max, one, one].into_iter().sum();
    assert_eq!(
        overflow,
        Err(Error::SumOverflow {
            partial_sum: MAX_MONEY + 1,
            remaining_items: 1,
        })
    );

    Ok(())
}

#[test]
fn coins() {
    let _init_guard = shifo_test::init();

    assert_eq!(Amount::<NonNegative>::new_from_coins(7875), 7875 * COIN);
    assert_eq!(Amount::<NonNegative>::zero(), 0);
}
