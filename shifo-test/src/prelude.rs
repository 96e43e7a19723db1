//! Common [`shifo_test`](crate) types, traits, and functions.

pub use color_eyre;
pub use color_eyre::eyre;
pub use eyre::Result;
pub use proptest::prelude::*;

/// The default number of proptest cases for consensus parameter tests.
///
/// Override with the `PROPTEST_CASES` env var.
pub const DEFAULT_PARAMETER_PROPTEST_CASES: u32 = 256;

/// Returns a proptest config using [`DEFAULT_PARAMETER_PROPTEST_CASES`],
/// unless `PROPTEST_CASES` is set.
pub fn parameter_proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|cases| cases.parse().ok())
        .unwrap_or(DEFAULT_PARAMETER_PROPTEST_CASES);

    ProptestConfig::with_cases(cases)
}
