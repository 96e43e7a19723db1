//! Funding streams: time-bounded shares of the block subsidy.
//!
//! Each [`FundingStreamIndex`] slot has a fixed share of the block subsidy in
//! [`FUNDING_STREAM_INFO`]. A network assigns each slot at most one
//! [`FundingStream`], which pays one recipient per funding period.
//!
//! <https://zips.z.cash/zip-0207>
//! <https://zips.z.cash/zip-0214>

use std::collections::BTreeSet;

use tracing::debug;

use crate::{
    amount::{Amount, NonNegative, MAX_MONEY},
    block::{Height, HeightDiff},
    keys::{AddressDecoder, PaymentAddress},
    parameters::{
        constants::DEFERRED_POOL_RECIPIENT,
        FundingStreamError,
        NetworkUpgrade::{Canopy, Nu6},
        Params, ParamsError,
    },
    sapling, transparent,
};

/// The funding stream slots, in the order they are paid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub enum FundingStreamIndex {
    /// The bootstrap project share, from Canopy.
    Zip214Bp,
    /// The mining pool share, from Canopy.
    Zip214Zf,
    /// The major grants share, from Canopy.
    Zip214Mg,
    /// Community grants, from NU6.
    FpfZcg,
    /// The lockbox, from NU6.
    Deferred,
    /// Community grants, from NU6.1 until the third halving.
    FpfZcgH3,
    /// The coinholder-controlled fund, held in the lockbox from NU6.1.
    CcfH3,
}

use FundingStreamIndex::*;

impl FundingStreamIndex {
    /// The number of funding stream slots.
    pub const COUNT: usize = 7;

    /// Every slot, in payment order.
    pub const ALL: [FundingStreamIndex; Self::COUNT] =
        [Zip214Bp, Zip214Zf, Zip214Mg, FpfZcg, Deferred, FpfZcgH3, CcfH3];

    /// Returns this slot's position in the funding stream table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the static metadata for this slot.
    pub fn info(self) -> &'static FsInfo {
        &FUNDING_STREAM_INFO[self.index()]
    }
}

/// Static metadata for a funding stream slot: who it pays, and what share
/// of the block subsidy it gets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FsInfo {
    recipient: &'static str,
    specification: &'static str,
    numerator: u64,
    denominator: u64,
}

impl FsInfo {
    /// Creates funding stream metadata.
    ///
    /// # Panics
    ///
    /// If the share is 100% or more, or if applying it to `MAX_MONEY` could overflow.
    const fn new(
        recipient: &'static str,
        specification: &'static str,
        numerator: u64,
        denominator: u64,
    ) -> Self {
        assert!(numerator < denominator, "funding stream share must be less than 1");
        assert!(
            (numerator as i128) * (MAX_MONEY as i128) <= i64::MAX as i128,
            "funding stream value must not overflow an i64"
        );

        Self {
            recipient,
            specification,
            numerator,
            denominator,
        }
    }

    /// A human-readable name for the recipient.
    pub fn recipient(&self) -> &'static str {
        self.recipient
    }

    /// A link to the specification of this funding stream.
    pub fn specification(&self) -> &'static str {
        self.specification
    }

    /// The numerator of this stream's share of the block subsidy.
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// The denominator of this stream's share of the block subsidy.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns `fs.Value(subsidy)`, this stream's share of `block_subsidy`.
    ///
    /// `floor(block_subsidy * numerator / denominator)`, as described in
    /// [protocol specification §7.8][7.8].
    ///
    /// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
    pub fn value(&self, block_subsidy: Amount<NonNegative>) -> Amount<NonNegative> {
        let value = i128::from(block_subsidy.zatoshis()) * i128::from(self.numerator)
            / i128::from(self.denominator);

        value
            .try_into()
            .expect("a share less than 1 is at most the block subsidy")
    }
}

const FUNDING_STREAM_SPECIFICATION: &str = "https://zips.z.cash/zip-0214";

/// The funding stream metadata, indexed by [`FundingStreamIndex`].
pub static FUNDING_STREAM_INFO: [FsInfo; FundingStreamIndex::COUNT] = [
    FsInfo::new("Founder", FUNDING_STREAM_SPECIFICATION, 1459, 10000),
    FsInfo::new("Mining Pool", FUNDING_STREAM_SPECIFICATION, 7, 100),
    FsInfo::new("Major Grants", FUNDING_STREAM_SPECIFICATION, 8, 100),
    FsInfo::new("Zcash Community Grants NU6", FUNDING_STREAM_SPECIFICATION, 8, 100),
    FsInfo::new("Lockbox NU6", FUNDING_STREAM_SPECIFICATION, 12, 100),
    FsInfo::new(
        "Zcash Community Grants to third halving",
        FUNDING_STREAM_SPECIFICATION,
        8,
        100,
    ),
    FsInfo::new("Coinholder-Controlled Fund", FUNDING_STREAM_SPECIFICATION, 12, 100),
];

/// The recipient of a funding stream in one funding period.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum FundingStreamRecipient {
    /// A transparent output with this lock script.
    Script(transparent::Script),
    /// A Sapling output to this address.
    Sapling(sapling::PaymentAddress),
    /// The lockbox: the value is held by the chain, not paid to an output.
    Lockbox,
}

impl FundingStreamRecipient {
    /// Returns `true` if this recipient is the lockbox.
    pub fn is_lockbox(&self) -> bool {
        matches!(self, FundingStreamRecipient::Lockbox)
    }
}

/// A validated funding stream: one recipient per funding period
/// in `[start_height, end_height)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingStream {
    start_height: Height,
    end_height: Height,
    recipients: Vec<FundingStreamRecipient>,
}

impl FundingStream {
    /// Checks a funding stream against the consensus policy rules of `params`.
    ///
    /// Rules are checked in this order, and the first failure is returned:
    /// - Canopy must be active at `start_height`,
    /// - `end_height` must not be before `start_height`,
    /// - there must be a recipient for every funding period in the range,
    /// - lockbox recipients need NU6 to be active at `start_height`.
    ///
    /// An empty range still needs one recipient.
    pub fn validate(
        params: &Params,
        start_height: Height,
        end_height: Height,
        recipients: Vec<FundingStreamRecipient>,
    ) -> Result<Self, FundingStreamError> {
        if !params.network_upgrade_active(start_height, Canopy) {
            return Err(FundingStreamError::CanopyNotActive);
        }

        if end_height < start_height {
            return Err(FundingStreamError::IllegalRange);
        }

        let last_height = end_height.previous().unwrap_or(start_height).max(start_height);
        let expected_recipients = params.funding_period_index(start_height, last_height) + 1;
        if expected_recipients > recipients.len() {
            return Err(FundingStreamError::InsufficientRecipients);
        }

        if recipients.iter().any(FundingStreamRecipient::is_lockbox)
            && !params.network_upgrade_active(start_height, Nu6)
        {
            return Err(FundingStreamError::Nu6NotActive);
        }

        Ok(Self {
            start_height,
            end_height,
            recipients,
        })
    }

    /// Returns a validated stream that pays the lockbox in every funding period.
    pub fn lockbox(
        params: &Params,
        start_height: Height,
        end_height: Height,
    ) -> Result<Self, FundingStreamError> {
        let period_count = if params.network_upgrade_active(start_height, Canopy) {
            let last_height = end_height.previous().unwrap_or(start_height).max(start_height);
            params.funding_period_index(start_height, last_height) + 1
        } else {
            // Validation rejects the stream before it counts recipients.
            1
        };

        let recipients = vec![FundingStreamRecipient::Lockbox; period_count];

        Self::validate(params, start_height, end_height, recipients)
    }

    /// Decodes `addresses` and validates the resulting funding stream.
    ///
    /// If `allow_deferred_pool` is true, the [`DEFERRED_POOL_RECIPIENT`]
    /// string selects the lockbox.
    pub fn parse<S: AsRef<str>>(
        params: &Params,
        decoder: &dyn AddressDecoder,
        start_height: Height,
        end_height: Height,
        addresses: &[S],
        allow_deferred_pool: bool,
    ) -> Result<Self, ParamsError> {
        let recipients = addresses
            .iter()
            .map(|address| parse_recipient(decoder, address.as_ref(), allow_deferred_pool))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::validate(params, start_height, end_height, recipients)?)
    }

    /// The first height of this stream.
    pub fn start_height(&self) -> Height {
        self.start_height
    }

    /// The first height after this stream.
    pub fn end_height(&self) -> Height {
        self.end_height
    }

    /// The recipients of this stream, one per funding period.
    pub fn recipients(&self) -> &[FundingStreamRecipient] {
        &self.recipients
    }

    /// Returns `true` if this stream pays a share of the block subsidy at `height`.
    pub fn is_active_at(&self, height: Height) -> bool {
        self.start_height <= height && height < self.end_height
    }

    /// Returns the recipient of this stream at `height`.
    ///
    /// # Panics
    ///
    /// If `height` is before the start of the stream, or its funding period
    /// has no recipient. Streams are validated when they are created, so
    /// this can only happen for heights after the stream ends.
    pub fn recipient(&self, params: &Params, height: Height) -> &FundingStreamRecipient {
        let index = params.funding_period_index(self.start_height, height);

        assert!(
            index < self.recipients.len(),
            "funding period {index} at {height:?} has no recipient",
        );

        &self.recipients[index]
    }
}

/// Decodes one funding stream recipient.
fn parse_recipient(
    decoder: &dyn AddressDecoder,
    address: &str,
    allow_deferred_pool: bool,
) -> Result<FundingStreamRecipient, ParamsError> {
    if allow_deferred_pool && address == DEFERRED_POOL_RECIPIENT {
        return Ok(FundingStreamRecipient::Lockbox);
    }

    match decoder.decode_payment_address(address) {
        Some(PaymentAddress::Transparent(transparent_address)) => {
            Ok(FundingStreamRecipient::Script(transparent_address.script()))
        }
        Some(PaymentAddress::Sapling(sapling_address)) => {
            Ok(FundingStreamRecipient::Sapling(sapling_address))
        }
        Some(PaymentAddress::Sprout(_)) => Err(ParamsError::AddressParseFailure {
            address: address.to_string(),
            reason: "Sprout addresses can't receive funding streams",
        }),
        None => Err(ParamsError::AddressParseFailure {
            address: address.to_string(),
            reason: "not a valid address on this network",
        }),
    }
}

/// Funding stream registry and queries.
impl Params {
    /// The funding period of `height`, in a stream starting at `start_height`.
    ///
    /// Funding periods are [`Params::funding_period_length`] blocks long, and
    /// aligned with the first halving. If `start_height` is not aligned, the
    /// first period of the stream is shorter.
    ///
    /// # Panics
    ///
    /// If `height` is before `start_height`.
    pub fn funding_period_index(&self, start_height: Height, height: Height) -> usize {
        assert!(
            start_height <= height,
            "funding period heights must not be before the stream start"
        );

        let first_halving_height = self.halving_height(start_height, 1);
        let start_period_offset = (HeightDiff::from(start_height.0) - first_halving_height)
            .rem_euclid(self.funding_period_length);

        let index = (height - start_height + start_period_offset) / self.funding_period_length;

        index
            .try_into()
            .expect("funding period index is non-negative and smaller than the input height")
    }

    /// Returns the stream in slot `index`, if there is one.
    pub fn funding_stream(&self, index: FundingStreamIndex) -> Option<&FundingStream> {
        self.funding_streams[index.index()].as_ref()
    }

    /// Returns the funding streams that pay a share of the block subsidy at `height`,
    /// in slot order.
    pub fn active_funding_streams(&self, height: Height) -> Vec<(&'static FsInfo, &FundingStream)> {
        if !self.network_upgrade_active(height, Canopy) {
            return Vec::new();
        }

        FundingStreamIndex::ALL
            .into_iter()
            .filter_map(|index| {
                self.funding_stream(index)
                    .filter(|stream| stream.is_active_at(height))
                    .map(|stream| (index.info(), stream))
            })
            .collect()
    }

    /// Returns the outputs the coinbase transaction at `height` must pay,
    /// as `(recipient, amount)` pairs, given the `block_subsidy`.
    ///
    /// Validation only checks that each pair is paid, so identical pairs from
    /// different streams are merged.
    pub fn active_funding_stream_elements(
        &self,
        height: Height,
        block_subsidy: Amount<NonNegative>,
    ) -> BTreeSet<(FundingStreamRecipient, Amount<NonNegative>)> {
        self.active_funding_streams(height)
            .into_iter()
            .map(|(info, stream)| {
                (
                    stream.recipient(self, height).clone(),
                    info.value(block_subsidy),
                )
            })
            .collect()
    }

    /// Returns [`Params::active_funding_stream_elements`] for the block subsidy at `height`.
    pub fn active_funding_stream_elements_at(
        &self,
        height: Height,
    ) -> BTreeSet<(FundingStreamRecipient, Amount<NonNegative>)> {
        self.active_funding_stream_elements(height, self.block_subsidy(height))
    }

    /// Registers the stream in slot `index`, decoding `addresses` with `decoder`.
    pub(crate) fn add_funding_stream<S: AsRef<str>>(
        &mut self,
        decoder: &dyn AddressDecoder,
        index: FundingStreamIndex,
        start_height: Height,
        end_height: Height,
        addresses: &[S],
    ) -> Result<(), ParamsError> {
        let stream =
            FundingStream::parse(self, decoder, start_height, end_height, addresses, false)?;
        self.set_funding_stream(index, Some(stream));

        Ok(())
    }

    /// Registers a stream in slot `index` that pays the lockbox in every funding period.
    pub(crate) fn add_lockbox_stream(
        &mut self,
        index: FundingStreamIndex,
        start_height: Height,
        end_height: Height,
    ) -> Result<(), ParamsError> {
        let stream = FundingStream::lockbox(self, start_height, end_height)?;
        self.set_funding_stream(index, Some(stream));

        Ok(())
    }

    /// Replaces the stream in slot `index`.
    pub(crate) fn set_funding_stream(
        &mut self,
        index: FundingStreamIndex,
        stream: Option<FundingStream>,
    ) {
        if let Some(stream) = &stream {
            debug!(
                ?index,
                recipient = index.info().recipient(),
                start_height = ?stream.start_height(),
                end_height = ?stream.end_height(),
                recipients = stream.recipients().len(),
                "registered funding stream",
            );
        }

        self.funding_streams[index.index()] = stream;
    }

    /// Checks that the funding streams active at each stream start height
    /// add up to at most the whole block subsidy.
    ///
    /// The set of active streams only changes at stream boundaries, and
    /// shares don't depend on the height, so checking each start is enough.
    pub(crate) fn check_funding_stream_shares(&self) -> Result<(), ParamsError> {
        let start_heights = self
            .funding_streams
            .iter()
            .flatten()
            .map(FundingStream::start_height);

        for height in start_heights {
            let (numerator, denominator) = self.active_funding_streams(height).into_iter().fold(
                (0_u128, 1_u128),
                |(numerator, denominator), (info, _stream)| {
                    let info_denominator = u128::from(info.denominator());

                    (
                        numerator * info_denominator + u128::from(info.numerator()) * denominator,
                        denominator * info_denominator,
                    )
                },
            );

            if numerator > denominator {
                return Err(ParamsError::FundingStreamsExceedSubsidy { height });
            }
        }

        Ok(())
    }
}
