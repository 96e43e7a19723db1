//! Proof-of-work limits.

mod difficulty;
mod u256;

pub use difficulty::ExpandedDifficulty;
pub use u256::U256;
