multiversx_sc::imports!();

use common_constants::SECONDS_PER_DAY;
use common_errors::{
    ERROR_INVALID_AMOUNT, ERROR_INVALID_ASSET, ERROR_INVALID_MATURITY, ERROR_MATURITY_IN_PAST,
};
use common_structs::MarketConfig;

/// Caller-input checks shared by the mutating endpoints. Every check runs
/// before any state write.
#[multiversx_sc::module]
pub trait ValidationModule {
    fn require_amount_positive(&self, amount: &BigUint) {
        require!(*amount > BigUint::zero(), ERROR_INVALID_AMOUNT);
    }

    /// Maturities are normalized to 00:00 UTC day boundaries.
    fn require_day_boundary(&self, maturity: u64) {
        require!(maturity % SECONDS_PER_DAY == 0, ERROR_INVALID_MATURITY);
    }

    fn require_future_maturity(&self, maturity: u64, timestamp: u64) {
        require!(maturity > timestamp, ERROR_MATURITY_IN_PAST);
    }

    fn require_loan_asset(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        config: &MarketConfig<Self::Api>,
    ) {
        require!(token == &config.loan_asset, ERROR_INVALID_ASSET);
    }

    fn require_collateral_asset(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        config: &MarketConfig<Self::Api>,
    ) {
        require!(token == &config.collateral_asset, ERROR_INVALID_ASSET);
    }
}
