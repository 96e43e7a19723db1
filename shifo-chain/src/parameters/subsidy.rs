//! Calculations for Block Subsidy and Funding Streams
//!
//! Some consensus parameters change based on network upgrades. The halving
//! schedule is the most important example: Blossom halves the target block
//! spacing, so heights after Blossom count halvings in twice as many blocks.
//!
//! Every calculation here is a method on [`Params`], keyed by block height.

use crate::{
    amount::{self, Amount, NonNegative},
    block::{Height, HeightDiff},
    transparent,
};

use super::{
    constants::{BLOSSOM_POW_TARGET_SPACING_RATIO, MAX_BLOCK_SUBSIDY},
    NetworkUpgrade::Blossom,
    Params,
};

pub mod funding_streams;
pub mod lockbox;

impl Params {
    /// The height where the slow start ramp has paid out half its full subsidy.
    ///
    /// Halvings are counted from this height.
    pub fn subsidy_slow_start_shift(&self) -> HeightDiff {
        self.subsidy_slow_start_interval / 2
    }

    /// The halving index for a block height.
    ///
    /// `Halving(height)`, as described in [protocol specification §7.8][7.8]
    ///
    /// Heights inside the slow start interval are in halving 0.
    ///
    /// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
    pub fn halving(&self, height: Height) -> u32 {
        let height = HeightDiff::from(height.0);
        let slow_start_shift = self.subsidy_slow_start_shift();

        let halving_index = match self.activation_height(Blossom) {
            Some(blossom_height) if height >= HeightDiff::from(blossom_height.0) => {
                let blossom_height = HeightDiff::from(blossom_height.0);
                let scaled_pre_blossom_height =
                    (blossom_height - slow_start_shift) * BLOSSOM_POW_TARGET_SPACING_RATIO;
                let post_blossom_height = height - blossom_height;

                (scaled_pre_blossom_height + post_blossom_height)
                    / self.post_blossom_halving_interval
            }
            // In Rust, integer division rounds towards zero, so heights
            // just before the slow start shift are also in halving 0.
            _ => (height - slow_start_shift) / self.pre_blossom_halving_interval,
        };

        halving_index
            .max(0)
            .try_into()
            .expect("halving index is non-negative and smaller than the input height")
    }

    /// The first height of `halving_index`, computed in the halving regime of `height`.
    ///
    /// If Blossom is active at `height`, this is the inverse of [`Params::halving`]
    /// for post-Blossom heights, otherwise it is the pre-Blossom inverse.
    /// The result can be negative when the regime doesn't match the halving.
    ///
    /// # Panics
    ///
    /// If `halving_index` is zero.
    pub fn halving_height(&self, height: Height, halving_index: u32) -> HeightDiff {
        assert!(halving_index > 0, "halving 0 starts at Genesis");

        let halving_index = HeightDiff::from(halving_index);
        let slow_start_shift = self.subsidy_slow_start_shift();

        match self.activation_height(Blossom) {
            Some(blossom_height) if height >= blossom_height => {
                let blossom_height = HeightDiff::from(blossom_height.0);

                self.post_blossom_halving_interval * halving_index
                    - BLOSSOM_POW_TARGET_SPACING_RATIO * (blossom_height - slow_start_shift)
                    + blossom_height
            }
            _ => self.pre_blossom_halving_interval * halving_index + slow_start_shift,
        }
    }

    /// `BlockSubsidy(height)` as described in [protocol specification §7.8][7.8]
    ///
    /// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
    pub fn block_subsidy(&self, height: Height) -> Amount<NonNegative> {
        let max_block_subsidy = MAX_BLOCK_SUBSIDY.zatoshis();
        let slow_start_shift = self.subsidy_slow_start_shift();
        let height_diff = HeightDiff::from(height.0);

        // Mining slow start. Both branches are unreachable when the interval is zero.
        let zatoshis = if height_diff < slow_start_shift {
            max_block_subsidy / self.subsidy_slow_start_interval * height_diff
        } else if height_diff < self.subsidy_slow_start_interval {
            max_block_subsidy / self.subsidy_slow_start_interval * (height_diff + 1)
        } else {
            let halvings = self.halving(height);

            // A shift of 64 or more bits would overflow, and the subsidy is zero by then.
            if halvings >= 64 {
                0
            } else if self.network_upgrade_active(height, Blossom) {
                (max_block_subsidy / BLOSSOM_POW_TARGET_SPACING_RATIO) >> halvings
            } else {
                max_block_subsidy >> halvings
            }
        };

        zatoshis
            .try_into()
            .expect("block subsidy is at most MAX_BLOCK_SUBSIDY")
    }

    /// `MinerSubsidy(height)` as described in [protocol specification §7.8][7.8]
    ///
    /// The block subsidy minus the funding stream amounts active at `height`.
    /// Lockbox disbursements are paid from the lockbox, not the block subsidy.
    ///
    /// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
    pub fn miner_subsidy(&self, height: Height) -> Result<Amount<NonNegative>, amount::Error> {
        let block_subsidy = self.block_subsidy(height);

        let total_funding_stream_amount: Result<Amount<NonNegative>, _> = self
            .active_funding_streams(height)
            .into_iter()
            .map(|(info, _stream)| info.value(block_subsidy))
            .sum();

        block_subsidy - total_funding_stream_amount?
    }

    /// The last height that pays the founders' reward, in the halving regime of `height`.
    pub fn last_founders_reward_block_height(&self, height: Height) -> HeightDiff {
        self.halving_height(height, 1) - 1
    }

    /// Returns the founders' reward lock scripts, in payment order.
    pub fn founders_reward_scripts(&self) -> &[transparent::Script] {
        &self.founders_reward_scripts
    }

    /// Returns the lock script that receives the founders' reward at `height`.
    ///
    /// The founders' reward period is split into equal address change
    /// intervals, one per address. After Blossom, heights are scaled back to
    /// pre-Blossom block counts, so each address is paid for the same time.
    ///
    /// Returns `None` at Genesis, after the first halving, or if there are no
    /// founders' reward addresses.
    pub fn founders_reward_script(&self, height: Height) -> Option<&transparent::Script> {
        let address_count = HeightDiff::try_from(self.founders_reward_scripts.len()).ok()?;
        if address_count == 0 {
            return None;
        }

        let mut adjusted_height = HeightDiff::from(height.0);
        if let Some(blossom_height) = self.activation_height(Blossom) {
            if height >= blossom_height {
                let blossom_height = HeightDiff::from(blossom_height.0);
                adjusted_height = blossom_height
                    + (adjusted_height - blossom_height) / BLOSSOM_POW_TARGET_SPACING_RATIO;
            }
        }

        if HeightDiff::from(height.0) > self.last_founders_reward_block_height(height) {
            return None;
        }

        let last_founders_reward_height = self.last_founders_reward_block_height(Height::MIN);
        if adjusted_height <= 0 || adjusted_height > last_founders_reward_height {
            return None;
        }

        let address_change_interval = (last_founders_reward_height + address_count) / address_count;
        let index = usize::try_from(adjusted_height / address_change_interval).ok()?;

        self.founders_reward_scripts.get(index)
    }
}
