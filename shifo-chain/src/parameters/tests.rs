//! Consensus parameter tests.

#![allow(clippy::unwrap_in_result)]

mod prop;

use color_eyre::Report;

use crate::{
    amount::{self, Amount, NonNegative, COIN},
    block::Height,
    keys::{AddressDecoder, KeyConstants, PaymentAddress, SproutPaymentAddress},
    sapling, transparent,
    work::ExpandedDifficulty,
};

use super::*;

/// A P2SH address that is valid on every network.
const P2SH_ADDRESS: &str = "t2FwcEhFdNXuFMv1tcYwaBJtYVtMj8b1uTg";

/// A P2PKH address that is valid on every network.
const P2PKH_ADDRESS: &str = "tm9iNYCVAhLLa4rJtfqqHauR5xL1REdpiDs";

/// Returns a Regtest builder with Canopy active from height 1 and NU6 from `nu6`.
fn regtest_with_canopy(nu6: u32) -> ParamsBuilder {
    ParamsBuilder::new(Network::Regtest).with_activation_heights(ConfiguredActivationHeights {
        canopy: Some(1),
        nu6: Some(nu6),
        ..Default::default()
    })
}

#[test]
fn halving_test() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    for network in [Network::Mainnet, Network::Testnet] {
        halving_for_network(&Params::new(network))?;
    }

    Ok(())
}

fn halving_for_network(params: &Params) -> Result<(), Report> {
    let blossom_height = NetworkUpgrade::Blossom.activation_height(params).unwrap();
    let first_halving_height = Height(params.halving_height(blossom_height, 1).try_into()?);

    assert_eq!(params.halving(Height::MIN), 0);
    assert_eq!(params.halving(Height(10_000)), 0);
    assert_eq!(params.halving((blossom_height - 1).unwrap()), 0);
    assert_eq!(params.halving(blossom_height), 0);
    assert_eq!(params.halving((first_halving_height - 1).unwrap()), 0);
    assert_eq!(params.halving(first_halving_height), 1);

    let second_halving_height =
        (first_halving_height + params.post_blossom_halving_interval()).unwrap();
    assert_eq!(params.halving((second_halving_height - 1).unwrap()), 1);
    assert_eq!(params.halving(second_halving_height), 2);
    assert_eq!(
        params.halving_height(blossom_height, 2),
        i64::from(second_halving_height.0)
    );

    Ok(())
}

#[test]
fn block_subsidy_test() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    for network in [Network::Mainnet, Network::Testnet] {
        block_subsidy_for_network(&Params::new(network))?;
    }

    Ok(())
}

fn block_subsidy_for_network(params: &Params) -> Result<(), Report> {
    let blossom_height = NetworkUpgrade::Blossom.activation_height(params).unwrap();
    let first_halving_height = Height(params.halving_height(blossom_height, 1).try_into()?);

    // Slow start mining ramps up the subsidy, skipping the value at the shift
    assert_eq!(params.block_subsidy(Height::MIN), Amount::<NonNegative>::zero());
    assert_eq!(
        params.block_subsidy(Height(1)),
        Amount::<NonNegative>::try_from(62_500)?
    );
    assert_eq!(
        params.block_subsidy(Height(9_999)),
        Amount::<NonNegative>::try_from(624_937_500)?
    );
    assert_eq!(
        params.block_subsidy(Height(10_000)),
        Amount::<NonNegative>::try_from(625_062_500)?
    );

    // After slow start mining and before Blossom the block subsidy is 12.5 coins
    assert_eq!(
        params.block_subsidy(Height(19_999)),
        Amount::<NonNegative>::try_from(1_250_000_000)?
    );
    assert_eq!(
        params.block_subsidy((blossom_height - 1).unwrap()),
        Amount::<NonNegative>::try_from(1_250_000_000)?
    );

    // After Blossom the block subsidy is halved without a halving
    assert_eq!(
        params.block_subsidy(blossom_height),
        Amount::<NonNegative>::try_from(625_000_000)?
    );
    assert_eq!(
        params.block_subsidy((first_halving_height - 1).unwrap()),
        Amount::<NonNegative>::try_from(625_000_000)?
    );
    assert_eq!(
        params.block_subsidy(first_halving_height),
        Amount::<NonNegative>::try_from(312_500_000)?
    );

    assert_eq!(params.block_subsidy(Height::MAX), Amount::<NonNegative>::zero());

    Ok(())
}

/// The subsidy halves every halving interval without slow start or Blossom,
/// and reaches zero after 64 halvings.
#[test]
fn block_subsidy_without_slow_start_or_blossom() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    let params = ParamsBuilder::new(Network::Regtest)
        .with_slow_start_interval(0)
        .with_pre_blossom_halving_interval(150)
        .to_params()?;

    let base = constants::MAX_BLOCK_SUBSIDY;

    assert_eq!(params.block_subsidy(Height(0)), base);
    assert_eq!(params.block_subsidy(Height(149)), base);
    assert_eq!(
        params.block_subsidy(Height(150)),
        Amount::<NonNegative>::try_from(base.zatoshis() / 2)?
    );
    assert_eq!(params.halving(Height(150 * 64)), 64);
    assert_eq!(params.block_subsidy(Height(150 * 64)), Amount::<NonNegative>::zero());

    Ok(())
}

#[test]
fn invalid_intervals_are_rejected() {
    let _init_guard = shifo_test::init();

    assert_eq!(
        ParamsBuilder::new(Network::Regtest)
            .with_pre_blossom_halving_interval(0)
            .to_params(),
        Err(ParamsError::InvalidInterval {
            name: "pre-Blossom halving interval",
            value: 0,
        })
    );

    // 23 * 2 / 48 rounds down to zero
    assert_eq!(
        ParamsBuilder::new(Network::Regtest)
            .with_pre_blossom_halving_interval(23)
            .to_params(),
        Err(ParamsError::InvalidInterval {
            name: "funding period length",
            value: 0,
        })
    );

    assert_eq!(
        ParamsBuilder::new(Network::Regtest)
            .with_post_blossom_halving_interval(0)
            .to_params(),
        Err(ParamsError::InvalidInterval {
            name: "post-Blossom halving interval",
            value: 0,
        })
    );

    assert!(matches!(
        ParamsBuilder::new(Network::Regtest)
            .with_slow_start_interval(-2)
            .to_params(),
        Err(ParamsError::InvalidInterval { .. })
    ));
}

#[test]
fn funding_stream_range_and_recipient_count() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    let params = regtest_with_canopy(1_000).to_params()?;
    let script = FundingStreamRecipient::Script(transparent_script(P2SH_ADDRESS));

    // An empty range still needs a recipient
    assert_eq!(
        FundingStream::validate(&params, Height(100), Height(100), vec![]),
        Err(FundingStreamError::InsufficientRecipients)
    );
    let stream =
        FundingStream::validate(&params, Height(100), Height(100), vec![script.clone()])?;
    assert!(!stream.is_active_at(Height(100)));

    assert_eq!(
        FundingStream::validate(&params, Height(100), Height(50), vec![script.clone()]),
        Err(FundingStreamError::IllegalRange)
    );

    // Regtest funding periods are 6 blocks long, and aligned with the first
    // halving at 144, so 100..112 spans the periods starting at 96, 102, 108
    assert_eq!(params.funding_period_length(), 6);
    assert_eq!(
        FundingStream::validate(&params, Height(100), Height(112), vec![script.clone(); 2]),
        Err(FundingStreamError::InsufficientRecipients)
    );
    let stream = FundingStream::validate(&params, Height(100), Height(112), vec![script; 3])?;
    assert_eq!(params.funding_period_index(Height(100), Height(101)), 0);
    assert_eq!(params.funding_period_index(Height(100), Height(102)), 1);
    assert_eq!(params.funding_period_index(Height(100), Height(111)), 2);
    assert_eq!(stream.recipients().len(), 3);

    Ok(())
}

#[test]
fn funding_stream_upgrade_rules() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    let params = regtest_with_canopy(200).to_params()?;
    let script = FundingStreamRecipient::Script(transparent_script(P2SH_ADDRESS));

    // Canopy is checked before anything else
    assert_eq!(
        FundingStream::validate(&params, Height(0), Height(0), vec![]),
        Err(FundingStreamError::CanopyNotActive)
    );

    assert_eq!(
        FundingStream::validate(
            &params,
            Height(100),
            Height(101),
            vec![FundingStreamRecipient::Lockbox]
        ),
        Err(FundingStreamError::Nu6NotActive)
    );
    assert_eq!(
        FundingStream::lockbox(&params, Height(100), Height(130)),
        Err(FundingStreamError::Nu6NotActive)
    );

    // The recipient count is checked before the lockbox rule
    assert_eq!(
        FundingStream::validate(
            &params,
            Height(100),
            Height(130),
            vec![FundingStreamRecipient::Lockbox]
        ),
        Err(FundingStreamError::InsufficientRecipients)
    );

    let stream = FundingStream::lockbox(&params, Height(200), Height(230))?;
    assert!(stream.recipients().iter().all(FundingStreamRecipient::is_lockbox));
    assert_eq!(
        stream.recipients().len(),
        params.funding_period_index(Height(200), Height(229)) + 1
    );

    let stream = FundingStream::validate(
        &params,
        Height(200),
        Height(206),
        vec![script, FundingStreamRecipient::Lockbox],
    )?;
    assert_eq!(stream.start_height(), Height(200));

    Ok(())
}

/// Funding periods are aligned with the first halving, so a stream that
/// starts 3 blocks after a period boundary has a short first period.
#[test]
fn funding_period_index_for_misaligned_start() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    let params = ParamsBuilder::new(Network::Regtest)
        .with_slow_start_interval(0)
        .with_pre_blossom_halving_interval(24_000)
        .with_activation_heights(ConfiguredActivationHeights {
            canopy: Some(1),
            ..Default::default()
        })
        .to_params()?;

    assert_eq!(params.funding_period_length(), 1_000);

    let start = Height(1_003);
    let first_halving_height = params.halving_height(start, 1);
    assert_eq!(first_halving_height, 24_000);

    // A truncating remainder would give a negative offset here
    assert_eq!((i64::from(start.0) - first_halving_height) % 1_000, -997);

    assert_eq!(params.funding_period_index(start, start), 0);
    assert_eq!(params.funding_period_index(start, Height(1_999)), 0);
    assert_eq!(params.funding_period_index(start, Height(2_000)), 1);
    assert_eq!(params.funding_period_index(start, Height(2_999)), 1);
    assert_eq!(params.funding_period_index(start, Height(3_000)), 2);

    Ok(())
}

#[test]
fn funding_stream_address_parsing() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    let params = regtest_with_canopy(1).to_params()?;
    // Transparent prefixes are shared, and testnet Sapling addresses are shorter
    let decoder = KeyConstants::for_network(Network::Testnet);

    let sapling_address = sapling::PaymentAddress::from_bytes(&[7; 43]).unwrap();
    let sapling_encoding =
        decoder.encode_payment_address(&PaymentAddress::Sapling(sapling_address));

    let stream = FundingStream::parse(
        &params,
        decoder,
        Height(10),
        Height(12),
        &[P2SH_ADDRESS, P2PKH_ADDRESS, sapling_encoding.as_str()],
        false,
    )?;
    assert_eq!(
        stream.recipients(),
        [
            FundingStreamRecipient::Script(transparent_script(P2SH_ADDRESS)),
            FundingStreamRecipient::Script(transparent_script(P2PKH_ADDRESS)),
            FundingStreamRecipient::Sapling(sapling_address),
        ]
    );

    // The lockbox sentinel is only accepted when it is allowed
    let stream = FundingStream::parse(
        &params,
        decoder,
        Height(10),
        Height(11),
        &["DEFERRED_POOL"],
        true,
    )?;
    assert_eq!(stream.recipients(), [FundingStreamRecipient::Lockbox]);

    assert!(matches!(
        FundingStream::parse(
            &params,
            decoder,
            Height(10),
            Height(11),
            &["DEFERRED_POOL"],
            false
        ),
        Err(ParamsError::AddressParseFailure { .. })
    ));

    let sprout_encoding = decoder.encode_payment_address(&PaymentAddress::Sprout(
        SproutPaymentAddress {
            paying_key: [1; 32],
            transmission_key: [2; 32],
        },
    ));
    assert!(matches!(
        FundingStream::parse(
            &params,
            decoder,
            Height(10),
            Height(11),
            &[sprout_encoding],
            false
        ),
        Err(ParamsError::AddressParseFailure { .. })
    ));

    // Policy errors are reported after all the addresses are decoded
    let no_addresses: [&str; 0] = [];
    assert_eq!(
        FundingStream::parse(&params, decoder, Height(10), Height(11), &no_addresses, false),
        Err(ParamsError::FundingStream(
            FundingStreamError::InsufficientRecipients
        ))
    );

    Ok(())
}

#[test]
fn lockbox_disbursement_parsing() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    let decoder = KeyConstants::for_network(Network::Regtest);
    let amount = Amount::<NonNegative>::try_from(COIN)?;

    assert_eq!(
        OnetimeLockboxDisbursement::parse(decoder, NetworkUpgrade::Nu6, amount, P2SH_ADDRESS),
        Err(ParamsError::UpgradeTooEarly {
            upgrade: NetworkUpgrade::Nu6
        })
    );

    assert!(matches!(
        OnetimeLockboxDisbursement::parse(decoder, NetworkUpgrade::Nu6_1, amount, P2PKH_ADDRESS),
        Err(ParamsError::AddressParseFailure { .. })
    ));

    let disbursement =
        OnetimeLockboxDisbursement::parse(decoder, NetworkUpgrade::ZFuture, amount, P2SH_ADDRESS)?;
    assert_eq!(disbursement.upgrade(), NetworkUpgrade::ZFuture);
    assert_eq!(disbursement.amount(), amount);
    assert!(disbursement.recipient().is_pay_to_script_hash());

    Ok(())
}

/// A decoder that doesn't know any addresses.
struct NoAddresses;

impl AddressDecoder for NoAddresses {
    fn decode_payment_address(&self, _encoded: &str) -> Option<PaymentAddress> {
        None
    }
}

#[test]
fn custom_address_decoder() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    assert!(matches!(
        ParamsBuilder::new(Network::Mainnet).to_params_with_decoder(&NoAddresses),
        Err(ParamsError::AddressParseFailure { .. })
    ));

    // Lockbox streams are registered without decoding any addresses
    let params = regtest_with_canopy(1)
        .with_founders_reward_addresses(Vec::new())
        .with_funding_streams(vec![ConfiguredFundingStream {
            index: FundingStreamIndex::Deferred,
            start_height: Height(1),
            end_height: Height(25),
            addresses: None,
        }])
        .to_params_with_decoder(&NoAddresses)?;

    let stream = params
        .funding_stream(FundingStreamIndex::Deferred)
        .expect("lockbox stream is registered");
    assert!(!stream.recipients().is_empty());
    assert!(stream
        .recipients()
        .iter()
        .all(|recipient| *recipient == FundingStreamRecipient::Lockbox));
    assert_eq!(
        stream.recipient(&params, Height(24)),
        &FundingStreamRecipient::Lockbox
    );

    Ok(())
}

#[test]
fn too_many_founders_reward_addresses() {
    let _init_guard = shifo_test::init();

    // The last Regtest founders' reward height is 143
    let result = ParamsBuilder::new(Network::Regtest)
        .with_founders_reward_addresses(vec![P2SH_ADDRESS.to_string(); 144])
        .to_params();

    assert_eq!(
        result,
        Err(ParamsError::TooManyFoundersRewardAddresses {
            count: 144,
            last_height: 143,
        })
    );

    let result = ParamsBuilder::new(Network::Regtest)
        .with_founders_reward_addresses(vec![P2PKH_ADDRESS.to_string()])
        .to_params();
    assert!(matches!(result, Err(ParamsError::AddressParseFailure { .. })));
}

#[test]
fn every_funding_stream_at_once_is_within_the_subsidy() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    let streams = FundingStreamIndex::ALL
        .into_iter()
        .map(|index| ConfiguredFundingStream {
            index,
            start_height: Height(10),
            end_height: Height(20),
            addresses: None,
        })
        .collect();

    let params = regtest_with_canopy(1)
        .with_funding_streams(streams)
        .to_params()?;

    let height = Height(10);
    let block_subsidy = params.block_subsidy(height);
    let funding_streams: Amount<NonNegative> = params
        .active_funding_streams(height)
        .into_iter()
        .map(|(info, _stream)| info.value(block_subsidy))
        .sum::<Result<_, amount::Error>>()?;

    assert_eq!(
        params.active_funding_streams(height).len(),
        FundingStreamIndex::COUNT
    );
    assert!(funding_streams < block_subsidy);
    assert_eq!(
        params.miner_subsidy(height)?,
        (block_subsidy - funding_streams)?
    );

    // Identical lockbox elements are merged
    assert_eq!(
        params
            .active_funding_stream_elements(height, block_subsidy)
            .len(),
        4
    );

    Ok(())
}

#[test]
fn regtest_overrides_only_on_regtest() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    assert!(Params::new(Network::Mainnet).regtest_overrides().is_none());
    assert!(Params::new(Network::Testnet).regtest_overrides().is_none());

    let mut params = Params::new(Network::Regtest);
    let mut overrides = params.regtest_overrides().expect("regtest can be changed");

    assert_eq!(
        overrides
            .update_network_upgrade(NetworkUpgrade::BaseSprout, ActivationHeight::NoActivation),
        Err(ParamsError::BaseSproutOverride)
    );

    let height = ActivationHeight::Height(Height(5));
    overrides.update_network_upgrade(NetworkUpgrade::Canopy, height)?;
    overrides.update_network_upgrade(NetworkUpgrade::Nu6, height)?;

    let stream = FundingStream::lockbox(overrides.params(), Height(5), Height(10))?;
    overrides.update_funding_stream(FundingStreamIndex::Deferred, Some(stream));

    let pow_limit: ExpandedDifficulty =
        "0fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff".parse()?;
    overrides.update_pow(32, 16, pow_limit, false);

    assert_eq!(
        params.activation_height(NetworkUpgrade::Canopy),
        Some(Height(5))
    );
    assert!(params
        .funding_stream(FundingStreamIndex::Deferred)
        .is_some_and(|stream| stream.is_active_at(Height(9))));
    assert_eq!(params.pow_limit(), pow_limit);
    assert!(!params.pow_no_retargeting());

    let disbursement = OnetimeLockboxDisbursement::parse(
        KeyConstants::for_network(Network::Regtest),
        NetworkUpgrade::Nu6_1,
        Amount::<NonNegative>::try_from(COIN)?,
        P2SH_ADDRESS,
    )?;
    let mut overrides = params.regtest_overrides().expect("regtest can be changed");
    overrides.update_network_upgrade(NetworkUpgrade::Nu6_1, ActivationHeight::Height(Height(8)))?;
    overrides.update_onetime_lockbox_disbursement(
        LockboxDisbursementIndex::Nu6_1Chunk3,
        Some(disbursement.clone()),
    );

    assert_eq!(
        params.lockbox_disbursements_for_height(Height(8)),
        vec![&disbursement]
    );

    params
        .regtest_overrides()
        .expect("regtest can be changed")
        .update_onetime_lockbox_disbursement(LockboxDisbursementIndex::Nu6_1Chunk3, None);
    assert!(params.lockbox_disbursements_for_height(Height(8)).is_empty());

    Ok(())
}

#[test]
fn regtest_config_from_toml() -> Result<(), Report> {
    let _init_guard = shifo_test::init();

    let config: RegtestConfig = toml::from_str(&format!(
        r#"
        [activation_heights]
        Canopy = 1
        NU6 = 1
        "NU6.1" = 20

        [[funding_streams]]
        index = "FpfZcg"
        start_height = 1
        end_height = 20
        addresses = ["{P2SH_ADDRESS}", "DEFERRED_POOL", "{P2SH_ADDRESS}", "{P2SH_ADDRESS}"]

        [[funding_streams]]
        index = "Deferred"
        start_height = 1
        end_height = 20

        [[lockbox_disbursements]]
        index = "Nu6_1Chunk1"
        upgrade = "NU6.1"
        amount = 100000000
        address = "{P2SH_ADDRESS}"

        [pow]
        max_adjust_down = 32
        max_adjust_up = 16
        pow_limit = "0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f"
        no_retargeting = false
        "#
    ))?;

    let mut params = Params::new(Network::Regtest);
    params
        .regtest_overrides()
        .expect("regtest can be changed")
        .apply(&config, KeyConstants::for_network(Network::Regtest))?;

    assert_eq!(params.current_epoch(Height(1)), NetworkUpgrade::Nu6);
    assert_eq!(params.current_epoch(Height(20)), NetworkUpgrade::Nu6_1);
    assert_eq!(params.pow_max_adjust_down(), 32);

    let fpf = params
        .funding_stream(FundingStreamIndex::FpfZcg)
        .expect("stream is configured");
    assert_eq!(fpf.recipients()[1], FundingStreamRecipient::Lockbox);

    let disbursements = params.lockbox_disbursements_for_height(Height(20));
    assert_eq!(disbursements.len(), 1);
    assert_eq!(
        disbursements[0].amount(),
        Amount::<NonNegative>::try_from(COIN)?
    );
    assert!(params.lockbox_disbursements_for_height(Height(19)).is_empty());
    assert!(params.lockbox_disbursements_for_height(Height(21)).is_empty());

    // A configuration that fails part of the way through changes nothing
    let invalid_config: RegtestConfig = toml::from_str(&format!(
        r#"
        [activation_heights]
        Canopy = 10
        NU6 = 10

        [[funding_streams]]
        index = "Deferred"
        start_height = 10
        end_height = 20

        [[funding_streams]]
        index = "FpfZcgH3"
        start_height = 10
        end_height = 20
        addresses = ["{P2SH_ADDRESS}", "not an address"]
        "#
    ))?;

    let mut params = Params::new(Network::Regtest);
    let unchanged = params.clone();
    let result = params
        .regtest_overrides()
        .expect("regtest can be changed")
        .apply(&invalid_config, KeyConstants::for_network(Network::Regtest));

    assert!(matches!(result, Err(ParamsError::AddressParseFailure { .. })));
    assert_eq!(params, unchanged);
    assert_eq!(params.activation_height(NetworkUpgrade::Canopy), None);
    assert!(params.funding_stream(FundingStreamIndex::Deferred).is_none());

    // Unknown fields are configuration mistakes
    assert!(toml::from_str::<RegtestConfig>("[activation_heights]\nNU7 = 1").is_err());

    Ok(())
}

fn transparent_script(address: &str) -> transparent::Script {
    match KeyConstants::for_network(Network::Regtest).decode_payment_address(address) {
        Some(PaymentAddress::Transparent(address)) => address.script(),
        other => panic!("expected a transparent address, got {other:?}"),
    }
}
