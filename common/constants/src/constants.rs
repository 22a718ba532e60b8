#![no_std]

pub const SECONDS_PER_DAY: u64 = 86_400;

pub const SECONDS_PER_YEAR: u64 = 31_556_926;

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// 1.0 in the price feed's fixed-point representation (18 decimals).
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// 1.0 in the contribution-fraction representation (8 decimals).
pub const FRACTION_SCALE: u64 = 100_000_000;
pub const FRACTION_PRECISION: usize = 8;

/// Prices older than this are refused when valuing collateral.
pub const PRICE_MAX_AGE_SECONDS: u64 = 3_600;

pub const USD_TICKER: &[u8] = b"USD";
pub const EGLD_TICKER: &[u8] = b"EGLD";
