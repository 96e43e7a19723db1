//! Randomised property tests for the subsidy and funding stream schedule.

use shifo_test::prelude::*;

use crate::{
    amount::{self, Amount, NonNegative},
    block::{Height, HeightDiff},
    parameters::{Network, Params},
};

/// The networks with hard-coded funding streams.
fn configured_network() -> impl Strategy<Value = Network> {
    prop_oneof![Just(Network::Mainnet), Just(Network::Testnet)]
}

proptest! {
    #![proptest_config(shifo_test::prelude::parameter_proptest_config())]

    /// The first height of each halving is where the halving index changes,
    /// in the halving regime of the height.
    #[test]
    fn halving_height_is_the_start_of_the_halving(
        network in configured_network(),
        height in any::<Height>(),
    ) {
        let _init_guard = shifo_test::init();

        let params = Params::new(network);
        let halving = params.halving(height);

        if halving > 0 {
            prop_assert!(params.halving_height(height, halving) <= HeightDiff::from(height.0));
        }
        prop_assert!(params.halving_height(height, halving + 1) > HeightDiff::from(height.0));
    }

    /// The subsidy ramps up during slow start, then never increases.
    #[test]
    fn block_subsidy_is_monotonic(
        network in configured_network(),
        height in any::<Height>(),
    ) {
        let _init_guard = shifo_test::init();

        let params = Params::new(network);
        let Some(next_height) = height.next() else {
            return Ok(());
        };

        let subsidy = params.block_subsidy(height);
        let next_subsidy = params.block_subsidy(next_height);

        if HeightDiff::from(height.0) < params.subsidy_slow_start_interval() {
            prop_assert!(subsidy <= next_subsidy);
        } else {
            prop_assert!(next_subsidy <= subsidy);
        }
    }

    /// Funding periods start at zero, and advance once per funding period length.
    #[test]
    fn funding_period_index_advances_per_period(
        network in configured_network(),
        start_height in 0..5_000_000_u32,
        offset in 0..5_000_000_u32,
    ) {
        let _init_guard = shifo_test::init();

        let params = Params::new(network);
        let period_length = params.funding_period_length();
        let start_height = Height(start_height);
        let height = Height(start_height.0 + offset);
        let next_period_height = (height + period_length).expect("heights are in range");

        prop_assert_eq!(params.funding_period_index(start_height, start_height), 0);

        let index = params.funding_period_index(start_height, height);
        prop_assert!(HeightDiff::try_from(index)? <= HeightDiff::from(offset) / period_length + 1);
        prop_assert_eq!(
            params.funding_period_index(start_height, next_period_height),
            index + 1
        );
    }

    /// The funding streams never pay more than the block subsidy, and every
    /// active stream has a recipient.
    #[test]
    fn funding_streams_are_within_the_subsidy(
        network in configured_network(),
        height in any::<Height>(),
    ) {
        let _init_guard = shifo_test::init();

        let params = Params::new(network);
        let block_subsidy = params.block_subsidy(height);

        let funding_streams: Amount<NonNegative> = params
            .active_funding_streams(height)
            .into_iter()
            .map(|(info, _stream)| info.value(block_subsidy))
            .sum::<Result<_, amount::Error>>()?;

        prop_assert!(funding_streams <= block_subsidy);
        prop_assert_eq!(params.miner_subsidy(height)?, (block_subsidy - funding_streams)?);

        let elements = params.active_funding_stream_elements(height, block_subsidy);
        prop_assert!(elements.len() <= params.active_funding_streams(height).len());
    }
}
