//! Block identifiers used by the consensus parameters.

mod hash;
mod height;

#[cfg(test)]
mod tests;

pub use hash::Hash;
pub use height::{Height, HeightDiff, TryIntoHeight};
