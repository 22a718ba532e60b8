multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_TIMESTAMP, ERROR_LOAN_NOT_FOUND};
use common_structs::{Loan, PoolState};

use crate::cache::Cache;

/// The accounting aggregator: consistent read views over the pool registry
/// and the loan ledger. Nothing here mutates state.
#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::Storage
    + crate::oracle::OracleModule
    + crate::allocator::AllocatorModule
    + common_events::EventsModule
    + common_rates::RatePolicyModule
    + common_math::SharedMathModule
{
    /// The pool at `maturity`, zero-valued when none exists. Callers probe
    /// existence by checking for zero totals rather than catching errors.
    #[view(getPool)]
    fn get_pool(&self, maturity: u64) -> PoolState<Self::Api> {
        let mapper = self.pool(maturity);
        if mapper.is_empty() {
            PoolState::new(maturity)
        } else {
            mapper.get()
        }
    }

    #[view(getPools)]
    fn get_pools(&self) -> MultiValueEncoded<PoolState<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for maturity in self.pool_maturities().iter() {
            result.push(self.pool(maturity).get());
        }
        result
    }

    /// Total deposited liquidity across pools maturing at or after the given
    /// timestamp. Global treasury accounting: finalized pools count, and
    /// outstanding loans are not deducted.
    #[view(getTotalLiquidity)]
    fn get_total_liquidity(&self, at_or_after: u64) -> BigUint {
        let mut total = BigUint::zero();
        for maturity in self.pool_maturities().iter() {
            if maturity >= at_or_after {
                total += self.pool(maturity).get().total_liquidity;
            }
        }
        total
    }

    /// The amount a loan requested at `maturity` could source right now:
    /// the allocator's forward sweep, simulated without mutation.
    ///
    /// Fails for timestamps before the earliest or after the latest pool.
    #[view(getAvailableForPeriod)]
    fn get_available_for_period(&self, maturity: u64) -> BigUint {
        let maturities = self.pool_maturities();
        let len = maturities.len();
        require!(len > 0, ERROR_INVALID_TIMESTAMP);
        require!(
            maturity >= maturities.get(1) && maturity <= maturities.get(len),
            ERROR_INVALID_TIMESTAMP
        );

        self.available_from(maturity)
    }

    #[view(getLoan)]
    fn get_loan(&self, borrower: ManagedAddress, maturity: u64) -> Loan<Self::Api> {
        let mapper = self.loan(&borrower, maturity);
        require!(!mapper.is_empty(), ERROR_LOAN_NOT_FOUND);
        mapper.get()
    }

    /// Principal plus interest accrued up to the current block time.
    #[view(getAmountOwed)]
    fn get_amount_owed(&self, borrower: ManagedAddress, maturity: u64) -> BigUint {
        let loan = self.get_loan(borrower, maturity);
        let timestamp = self.blockchain().get_block_timestamp();
        let pending = if timestamp > loan.last_accrual {
            self.simple_interest(&loan.principal, loan.apy_bps, timestamp - loan.last_accrual)
        } else {
            BigUint::zero()
        };
        &loan.principal + &loan.accrued_interest + pending
    }

    /// Maximum loan the given collateral supports at `ltv`, priced at the
    /// current oracle quote.
    #[view(getMaxLoan)]
    fn get_max_loan(&self, ltv: u64, collateral_amount: BigUint) -> BigUint {
        let mut cache = Cache::new(self);
        let price = cache.collateral_price();
        self.max_loan_amount(&collateral_amount, ltv, &price, &cache.config)
    }

    /// Collateral required to support `amount` at `ltv`, priced at the
    /// current oracle quote.
    #[view(getRequiredCollateral)]
    fn get_required_collateral(&self, amount: BigUint, ltv: u64) -> BigUint {
        let mut cache = Cache::new(self);
        let price = cache.collateral_price();
        self.required_collateral_amount(&amount, ltv, &price, &cache.config)
    }
}
