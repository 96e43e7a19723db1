//! Proof of work timing parameters.
//!
//! These are the inputs of the difficulty adjustment algorithm, which lives
//! with block validation. Timespans are in seconds.

use chrono::{DateTime, Duration, Utc};

use crate::{block::Height, work::ExpandedDifficulty};

use super::{constants::MIN_DIFFICULTY_SPACING_MULTIPLIER, NetworkUpgrade::Blossom, Params};

impl Params {
    /// The target block spacing at `height`, in seconds.
    ///
    /// `PoWTargetSpacing` in the Zcash specification: Blossom halves the spacing.
    pub fn pow_target_spacing(&self, height: Height) -> i64 {
        if self.network_upgrade_active(height, Blossom) {
            self.post_blossom_pow_target_spacing
        } else {
            self.pre_blossom_pow_target_spacing
        }
    }

    /// The target block spacing at `height`.
    pub fn target_spacing(&self, height: Height) -> Duration {
        Duration::seconds(self.pow_target_spacing(height))
    }

    /// `AveragingWindowTimespan` from the Zcash specification.
    pub fn averaging_window_timespan(&self, height: Height) -> i64 {
        self.pow_averaging_window * self.pow_target_spacing(height)
    }

    /// The shortest timespan the difficulty adjustment uses, after clamping.
    pub fn min_actual_timespan(&self, height: Height) -> i64 {
        self.averaging_window_timespan(height) * (100 - self.pow_max_adjust_up) / 100
    }

    /// The longest timespan the difficulty adjustment uses, after clamping.
    pub fn max_actual_timespan(&self, height: Height) -> i64 {
        self.averaging_window_timespan(height) * (100 + self.pow_max_adjust_down) / 100
    }

    /// The easiest difficulty target allowed on this network.
    pub fn pow_limit(&self) -> ExpandedDifficulty {
        self.pow_limit
    }

    /// `PoWAveragingWindow` in the Zcash specification.
    pub fn pow_averaging_window(&self) -> i64 {
        self.pow_averaging_window
    }

    /// The largest difficulty decrease per block, as a percentage.
    pub fn pow_max_adjust_down(&self) -> i64 {
        self.pow_max_adjust_down
    }

    /// The largest difficulty increase per block, as a percentage.
    pub fn pow_max_adjust_up(&self) -> i64 {
        self.pow_max_adjust_up
    }

    /// Returns `true` if every block has the difficulty of the previous block.
    pub fn pow_no_retargeting(&self) -> bool {
        self.pow_no_retargeting
    }

    /// Minimum difficulty blocks are allowed after this height, if any.
    pub fn pow_allow_min_difficulty_blocks_after_height(&self) -> Option<Height> {
        self.pow_allow_min_difficulty_blocks_after_height
    }

    /// The Equihash `n` parameter.
    pub fn equihash_n(&self) -> u32 {
        self.equihash_n
    }

    /// The Equihash `k` parameter.
    pub fn equihash_k(&self) -> u32 {
        self.equihash_k
    }

    /// Returns `true` if the block at `block_height` can use the minimum difficulty.
    ///
    /// On networks that allow them, a block can use the minimum difficulty
    /// if it is more than six target spacings after the previous block.
    pub fn is_min_difficulty_block(
        &self,
        block_height: Height,
        block_time: DateTime<Utc>,
        previous_block_time: DateTime<Utc>,
    ) -> bool {
        let Some(allowed_after_height) = self.pow_allow_min_difficulty_blocks_after_height else {
            return false;
        };

        if block_height <= allowed_after_height {
            return false;
        }

        let min_difficulty_gap = Duration::try_seconds(
            self.pow_target_spacing(block_height) * MIN_DIFFICULTY_SPACING_MULTIPLIER,
        );

        min_difficulty_gap
            .and_then(|gap| previous_block_time.checked_add_signed(gap))
            .map_or(false, |min_difficulty_time| block_time > min_difficulty_time)
    }
}
