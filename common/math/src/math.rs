#![no_std]

use common_constants::{BPS, FRACTION_SCALE, SECONDS_PER_YEAR};

multiversx_sc::imports!();

/// Shared integer fixed-point helpers.
///
/// All amounts in the protocol are raw scaled integers; every operation here
/// stays in the integer domain and truncates toward zero, so no caller can
/// receive more than the exact arithmetic would grant.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / denominator`, truncated.
    fn mul_div_floor(
        &self,
        a: &BigUint,
        b: &BigUint,
        denominator: &BigUint,
    ) -> BigUint {
        &(a * b) / denominator
    }

    /// The 8-decimal contribution fraction of `part` relative to `total`.
    fn fraction_of_total(&self, part: &BigUint, total: &BigUint) -> BigUint {
        self.mul_div_floor(part, &BigUint::from(FRACTION_SCALE), total)
    }

    /// Applies an 8-decimal fraction to an amount, truncated.
    fn apply_fraction(&self, amount: &BigUint, fraction: &BigUint) -> BigUint {
        self.mul_div_floor(amount, fraction, &BigUint::from(FRACTION_SCALE))
    }

    /// Simple interest on `principal` at `apy_bps` over `seconds`, truncated.
    fn simple_interest(&self, principal: &BigUint, apy_bps: u64, seconds: u64) -> BigUint {
        let numerator = BigUint::from(apy_bps) * BigUint::from(seconds);
        let denominator = BigUint::from(BPS) * BigUint::from(SECONDS_PER_YEAR);
        self.mul_div_floor(principal, &numerator, &denominator)
    }

    /// `10^decimals` as a `BigUint`.
    fn pow10(&self, decimals: usize) -> BigUint {
        BigUint::from(10u32).pow(decimals as u32)
    }

    fn biguint_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
