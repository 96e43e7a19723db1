//! Testnet consensus parameters.

use crate::{
    block::Height,
    parameters::{
        constants::{
            POST_BLOSSOM_HALVING_INTERVAL, PRE_BLOSSOM_HALVING_INTERVAL, SLOW_START_INTERVAL,
        },
        FundingStreamIndex::*,
        LockboxDisbursementIndex::*,
    },
};

use super::{
    DefaultRecipients, FundingStreamDefaults, LockboxDisbursementDefaults, NetworkDefaults,
    UpgradeDefaults,
};

const OVERWINTER_ACTIVATION_HEIGHT: Height = Height(207_500);
const SAPLING_ACTIVATION_HEIGHT: Height = Height(280_000);
const BLOSSOM_ACTIVATION_HEIGHT: Height = Height(584_000);
const HEARTWOOD_ACTIVATION_HEIGHT: Height = Height(903_800);
const CANOPY_ACTIVATION_HEIGHT: Height = Height(1_028_500);
const NU5_ACTIVATION_HEIGHT: Height = Height(1_842_420);
const NU6_ACTIVATION_HEIGHT: Height = Height(2_976_000);
const NU6_1_ACTIVATION_HEIGHT: Height = Height(3_536_500);

/// The end of the funding streams that start at Canopy.
const CANOPY_FUNDING_STREAM_END_HEIGHT: Height = Height(2_796_000);

/// The end of the funding streams that start at NU6.
const NU6_FUNDING_STREAM_END_HEIGHT: Height = Height(3_396_000);

/// The end of the funding streams that start at NU6.1.
const POST_NU6_1_FUNDING_STREAM_END_HEIGHT: Height = Height(4_476_000);

/// Testnet timestamps are only checked against the median time past
/// once this many blocks after Blossom.
const FUTURE_TIMESTAMP_SOFT_FORK_HEIGHT: Height = Height(BLOSSOM_ACTIVATION_HEIGHT.0 + 6);

/// The funding stream recipients for the bootstrap project, one per funding period.
const BP_ADDRESSES: [&str; 51] = [
    "t26ovBdKAJLtrvBsE2QGF4nqBkEuptuPFZz",
    "t26ovBdKAJLtrvBsE2QGF4nqBkEuptuPFZz",
    "t26ovBdKAJLtrvBsE2QGF4nqBkEuptuPFZz",
    "t26ovBdKAJLtrvBsE2QGF4nqBkEuptuPFZz",
    "t2NNHrgPpE388atmWSF4DxAb3xAoW5Yp45M",
    "t2VMN28itPyMeMHBEd9Z1hm6YLkQcGA1Wwe",
    "t2CHa1TtdfUV8UYhNm7oxbzRyfr8616BYh2",
    "t2F77xtr28U96Z2bC53ZEdTnQSUAyDuoa67",
    "t2ARrzhbgcpoVBDPivUuj6PzXzDkTBPqfcT",
    "t278aQ8XbvFR15mecRguiJDQQVRNnkU8kJw",
    "t2Dp1BGnZsrTXZoEWLyjHmg3EPvmwBnPDGB",
    "t2KzeqXgf4ju33hiSqCuKDb8iHjPCjMq9iL",
    "t2Nyxqv1BiWY1eUSiuxVw36oveawYuo18tr",
    "t2DKFk5JRsVoiuinK8Ti6eM4Yp7v8BbfTyH",
    "t2CUaBca4k1x36SC4q8Nc8eBoqkMpF3CaLg",
    "t296SiKL7L5wvFmEdMxVLz1oYgd6fTfcbZj",
    "t29fBCFbhgsjL3XYEZ1yk1TUh7eTusB6dPg",
    "t2FGofLJXa419A76Gpf5ncxQB4gQXiQMXjK",
    "t2ExfrnRVnRiXDvxerQ8nZbcUQvNvAJA6Qu",
    "t28JUffLp47eKPRHKvwSPzX27i9ow8LSXHx",
    "t2JXWPtrtyL861rFWMZVtm3yfgxAf4H7uPA",
    "t2QdgbJoWfYHgyvEDEZBjHmgkr9yNJff3Hi",
    "t2QW43nkco8r32ZGRN6iw6eSzyDjkMwCV3n",
    "t2DgYDXMJTYLwNcxighQ9RCgPxMVATRcUdC",
    "t2Bop7dg33HGZx3wunnQzi2R2ntfpjuti3M",
    "t2HVeEwovcLq9RstAbYkqngXNEsCe2vjJh9",
    "t2HxbP5keQSx7p592zWQ5bJ5GrMmGDsV2Xa",
    "t2TJzUg2matao3mztBRJoWnJY6ekUau6tPD",
    "t29pMzxmo6wod25YhswcjKv3AFRNiBZHuhj",
    "t2QBQMRiJKYjshJpE6RhbF7GLo51yE6d4wZ",
    "t2F5RqnqguzZeiLtYHFx4yYfy6pDnut7tw5",
    "t2CHvyZANE7XCtg8AhZnrcHCC7Ys1jJhK13",
    "t2BRzpMdrGWZJ2upsaNQv6fSbkbTy7EitLo",
    "t2BFixHGQMAWDY67LyTN514xRAB94iEjXp3",
    "t2Uvz1iVPzBEWfQBH1p7NZJsFhD74tKaG8V",
    "t2CmFDj5q6rJSRZeHf1SdrowinyMNcj438n",
    "t2ErNvWEReTfPDBaNizjMPVssz66aVZh1hZ",
    "t2GeJQ8wBUiHKDVzVM5ZtKfY5reCg7CnASs",
    "t2L2eFtkKv1G6j55kLytKXTGuir4raAy3yr",
    "t2EK2b87dpPazb7VvmEGc8iR6SJ289RywGL",
    "t2DJ7RKeZJxdA4nZn8hRGXE8NUyTzjujph9",
    "t2K1pXo4eByuWpKLkssyMLe8QKUbxnfFC3H",
    "t2TB4mbSpuAcCWkH94Leb27FnRxo16AEHDg",
    "t2Phx4gVL4YRnNsH3jM1M7jE4Fo329E66Na",
    "t2VQZGmeNomN8c3USefeLL9nmU6M8x8CVzC",
    "t2RicCvTVTY5y9JkreSRv3Xs8q2K67YxHLi",
    "t2JrSLxTGc8wtPDe9hwbaeUjCrCfc4iZnDD",
    "t2Uh9Au1PDDSw117sAbGivKREkmMxVC5tZo",
    "t2FDwoJKLeEBMTy3oP7RLQ1Fihhvz49a3Bv",
    "t2FY18mrgtb7QLeHA8ShnxLXuW8cNQ2n1v8",
    "t2L15TkDYum7dnQRBqfvWdRe8Yw3jVy9z7g",
];

const ZF_ADDRESS: &str = "t27eWDgjFYJGVXmzrXeVjnb5J3uXDM9xH9v";
const MG_ADDRESS: &str = "t2Gvxv2uNM7hbbACjNox4H6DjByoKZ2Fa3P";
const FPF_ADDRESS: &str = "t2HifwjUj9uyxr9bknR8LFuQbc98c3vkXtu";
const LOCKBOX_DISBURSEMENT_ADDRESS: &str = "t2RnBRiqrN1nW4ecZs1Fj3WWjNdnSs4kiX8";

/// Pre-Blossom founders' reward addresses, in payment order.
const FOUNDERS_REWARD_ADDRESSES: [&str; 48] = [
    "t2UNzUUx8mWBCRYPRezvA363EYXyEpHokyi",
    "t2N9PH9Wk9xjqYg9iin1Ua3aekJqfAtE543",
    "t2NGQjYMQhFndDHguvUw4wZdNdsssA6K7x2",
    "t2ENg7hHVqqs9JwU5cgjvSbxnT2a9USNfhy",
    "t2BkYdVCHzvTJJUTx4yZB8qeegD8QsPx8bo",
    "t2J8q1xH1EuigJ52MfExyyjYtN3VgvshKDf",
    "t2Crq9mydTm37kZokC68HzT6yez3t2FBnFj",
    "t2EaMPUiQ1kthqcP5UEkF42CAFKJqXCkXC9",
    "t2F9dtQc63JDDyrhnfpzvVYTJcr57MkqA12",
    "t2LPirmnfYSZc481GgZBa6xUGcoovfytBnC",
    "t26xfxoSw2UV9Pe5o3C8V4YybQD4SESfxtp",
    "t2D3k4fNdErd66YxtvXEdft9xuLoKD7CcVo",
    "t2DWYBkxKNivdmsMiivNJzutaQGqmoRjRnL",
    "t2C3kFF9iQRxfc4B9zgbWo4dQLLqzqjpuGQ",
    "t2MnT5tzu9HSKcppRyUNwoTp8MUueuSGNaB",
    "t2AREsWdoW1F8EQYsScsjkgqobmgrkKeUkK",
    "t2Vf4wKcJ3ZFtLj4jezUUKkwYR92BLHn5UT",
    "t2K3fdViH6R5tRuXLphKyoYXyZhyWGghDNY",
    "t2VEn3KiKyHSGyzd3nDw6ESWtaCQHwuv9WC",
    "t2F8XouqdNMq6zzEvxQXHV1TjwZRHwRg8gC",
    "t2BS7Mrbaef3fA4xrmkvDisFVXVrRBnZ6Qj",
    "t2FuSwoLCdBVPwdZuYoHrEzxAb9qy4qjbnL",
    "t2SX3U8NtrT6gz5Db1AtQCSGjrpptr8JC6h",
    "t2V51gZNSoJ5kRL74bf9YTtbZuv8Fcqx2FH",
    "t2FyTsLjjdm4jeVwir4xzj7FAkUidbr1b4R",
    "t2EYbGLekmpqHyn8UBF6kqpahrYm7D6N1Le",
    "t2NQTrStZHtJECNFT3dUBLYA9AErxPCmkka",
    "t2GSWZZJzoesYxfPTWXkFn5UaxjiYxGBU2a",
    "t2RpffkzyLRevGM3w9aWdqMX6bd8uuAK3vn",
    "t2JzjoQqnuXtTGSN7k7yk5keURBGvYofh1d",
    "t2AEefc72ieTnsXKmgK2bZNckiwvZe3oPNL",
    "t2NNs3ZGZFsNj2wvmVd8BSwSfvETgiLrD8J",
    "t2ECCQPVcxUCSSQopdNquguEPE14HsVfcUn",
    "t2JabDUkG8TaqVKYfqDJ3rqkVdHKp6hwXvG",
    "t2FGzW5Zdc8Cy98ZKmRygsVGi6oKcmYir9n",
    "t2DUD8a21FtEFn42oVLp5NGbogY13uyjy9t",
    "t2UjVSd3zheHPgAkuX8WQW2CiC9xHQ8EvWp",
    "t2TBUAhELyHUn8i6SXYsXz5Lmy7kDzA1uT5",
    "t2Tz3uCyhP6eizUWDc3bGH7XUC9GQsEyQNc",
    "t2NysJSZtLwMLWEJ6MH3BsxRh6h27mNcsSy",
    "t2KXJVVyyrjVxxSeazbY9ksGyft4qsXUNm9",
    "t2J9YYtH31cveiLZzjaE4AcuwVho6qjTNzp",
    "t2QgvW4sP9zaGpPMH1GRzy7cpydmuRfB4AZ",
    "t2NDTJP9MosKpyFPHJmfjc5pGCvAU58XGa4",
    "t29pHDBWq7qN4EjwSEHg8wEqYe9pkmVrtRP",
    "t2Ez9KM8VJLuArcxuEkNRAkhNvidKkzXcjJ",
    "t2D5y7J5fpXajLbGrMBQkFg2mFN8fo3n8cX",
    "t2UV2wr1PTaUiybpkV3FdSdGxUJeZdZztyt",
];

pub(super) const DEFAULTS: NetworkDefaults = NetworkDefaults {
    upgrades: [
        UpgradeDefaults::always_active(170_002),
        UpgradeDefaults::disabled(170_002),
        UpgradeDefaults::settled(
            170_003,
            OVERWINTER_ACTIVATION_HEIGHT,
            "0000257c4331b098045023fcfbfa2474681f4564ab483f84e4e1ad078e4acf44",
        ),
        UpgradeDefaults::settled(
            170_007,
            SAPLING_ACTIVATION_HEIGHT,
            "000420e7fcc3a49d729479fb0b560dd7b8617b178a08e9e389620a9d1dd6361a",
        ),
        UpgradeDefaults::settled(
            170_008,
            BLOSSOM_ACTIVATION_HEIGHT,
            "00367515ef2e781b8c9358b443b6329572599edd02c59e8af67db9785122f298",
        ),
        UpgradeDefaults::settled(
            170_010,
            HEARTWOOD_ACTIVATION_HEIGHT,
            "05688d8a0e9ff7c04f6f05e6d695dc5ab43b9c4803342d77ae360b2b27d2468e",
        ),
        UpgradeDefaults::settled(
            170_012,
            CANOPY_ACTIVATION_HEIGHT,
            "01a4d7c6aada30c87762c1bf33fff5df7266b1fd7616bfdb5227fa59bd79e7a2",
        ),
        UpgradeDefaults::settled(
            170_050,
            NU5_ACTIVATION_HEIGHT,
            "0006d75c60b3093d1b671ff7da11c99ea535df9927c02e6ed9eb898605eb7381",
        ),
        UpgradeDefaults::scheduled(170_110, NU6_ACTIVATION_HEIGHT),
        UpgradeDefaults::scheduled(170_130, NU6_1_ACTIVATION_HEIGHT),
        UpgradeDefaults::disabled(0x7FFF_FFFF),
    ],
    subsidy_slow_start_interval: SLOW_START_INTERVAL,
    pre_blossom_halving_interval: PRE_BLOSSOM_HALVING_INTERVAL,
    post_blossom_halving_interval: POST_BLOSSOM_HALVING_INTERVAL,
    funding_streams: &[
        FundingStreamDefaults {
            index: Zip214Bp,
            start_height: CANOPY_ACTIVATION_HEIGHT,
            end_height: CANOPY_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Addresses(&BP_ADDRESSES),
        },
        FundingStreamDefaults {
            index: Zip214Zf,
            start_height: CANOPY_ACTIVATION_HEIGHT,
            end_height: CANOPY_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Repeated {
                address: ZF_ADDRESS,
                count: 51,
            },
        },
        FundingStreamDefaults {
            index: Zip214Mg,
            start_height: CANOPY_ACTIVATION_HEIGHT,
            end_height: CANOPY_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Repeated {
                address: MG_ADDRESS,
                count: 51,
            },
        },
        FundingStreamDefaults {
            index: FpfZcg,
            start_height: NU6_ACTIVATION_HEIGHT,
            end_height: NU6_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Repeated {
                address: FPF_ADDRESS,
                count: 13,
            },
        },
        FundingStreamDefaults {
            index: Deferred,
            start_height: NU6_ACTIVATION_HEIGHT,
            end_height: NU6_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Lockbox,
        },
        FundingStreamDefaults {
            index: FpfZcgH3,
            start_height: NU6_1_ACTIVATION_HEIGHT,
            end_height: POST_NU6_1_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Repeated {
                address: FPF_ADDRESS,
                count: 27,
            },
        },
        FundingStreamDefaults {
            index: CcfH3,
            start_height: NU6_1_ACTIVATION_HEIGHT,
            end_height: POST_NU6_1_FUNDING_STREAM_END_HEIGHT,
            recipients: DefaultRecipients::Lockbox,
        },
    ],
    lockbox_disbursements: &[
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk1, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk2, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk3, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk4, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk5, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk6, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk7, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk8, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk9, LOCKBOX_DISBURSEMENT_ADDRESS),
        LockboxDisbursementDefaults::nu6_1_chunk(Nu6_1Chunk10, LOCKBOX_DISBURSEMENT_ADDRESS),
    ],
    founders_reward_addresses: &FOUNDERS_REWARD_ADDRESSES,
    pow_max_adjust_down: 32,
    pow_max_adjust_up: 16,
    pow_limit: "07ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    pow_allow_min_difficulty_blocks_after_height: Some(Height(299_187)),
    pow_no_retargeting: false,
    future_timestamp_soft_fork_height: FUTURE_TIMESTAMP_SOFT_FORK_HEIGHT,
    equihash_n: 200,
    equihash_k: 9,
};
