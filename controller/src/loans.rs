multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_COLLATERAL, ERROR_INSUFFICIENT_REPAYMENT, ERROR_INVALID_ASSET,
    ERROR_LOAN_ALREADY_EXISTS, ERROR_LOAN_NOT_FOUND, ERROR_REPAY_EXCEEDS_PRINCIPAL,
    ERROR_WRONG_COLLATERAL_AMOUNT,
};
use common_structs::{Loan, LoanStatus, MarketConfig};

use crate::cache::Cache;

/// The loan ledger: one live position per (borrower, maturity) slot,
/// carrying the allocation manifest it was funded with.
#[multiversx_sc::module]
pub trait LoanLedgerModule:
    crate::storage::Storage
    + crate::oracle::OracleModule
    + crate::allocator::AllocatorModule
    + crate::validation::ValidationModule
    + common_rates::RatePolicyModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Opens a loan at `maturity` against the transferred collateral.
    ///
    /// The declared collateral amount must match the payment exactly; the
    /// slot must be empty; the collateral must satisfy the tier's
    /// requirement at the current oracle price. Allocation failure aborts
    /// the call before any loan record or transfer exists.
    #[payable("*")]
    #[endpoint(takeLoan)]
    fn take_loan(&self, amount: BigUint, collateral_amount: BigUint, ltv: u64, maturity: u64) {
        let mut cache = Cache::new(self);
        let payment = self.call_value().egld_or_single_esdt();
        self.require_collateral_asset(&payment.token_identifier, &cache.config);
        require!(
            payment.amount == collateral_amount,
            ERROR_WRONG_COLLATERAL_AMOUNT
        );

        let caller = self.blockchain().get_caller();
        require!(
            self.loan(&caller, maturity).is_empty(),
            ERROR_LOAN_ALREADY_EXISTS
        );
        self.require_amount_positive(&amount);

        let apy_bps = self.apy_for_ltv(ltv);
        let price = cache.collateral_price();
        let required = self.required_collateral_amount(&amount, ltv, &price, &cache.config);
        require!(collateral_amount >= required, ERROR_INSUFFICIENT_COLLATERAL);

        let contributing_pools = self.allocate(&amount, maturity);

        let loan = Loan {
            borrower: caller.clone(),
            maturity,
            principal: amount.clone(),
            collateral: collateral_amount.clone(),
            ltv,
            apy_bps,
            accrued_interest: BigUint::zero(),
            last_accrual: cache.timestamp,
            status: LoanStatus::Active,
            contributing_pools,
        };
        self.loan(&caller, maturity).set(&loan);
        self.borrower_maturities(&caller).insert(maturity);

        self.send()
            .direct(&caller, &cache.config.loan_asset, 0, &amount);

        self.create_loan_event(
            &caller,
            maturity,
            &amount,
            &collateral_amount,
            ltv,
            apy_bps,
            &loan.contributing_pools,
        );
    }

    /// Pays down principal. Collateral and pool draws stay untouched; the
    /// payment may not exceed the outstanding principal.
    #[payable("*")]
    #[endpoint(partialRepay)]
    fn partial_repay(&self, maturity: u64) {
        let cache = Cache::new(self);
        let payment = self.call_value().egld_or_single_esdt();
        self.require_loan_asset(&payment.token_identifier, &cache.config);
        self.require_amount_positive(&payment.amount);

        let caller = self.blockchain().get_caller();
        let mapper = self.loan(&caller, maturity);
        require!(!mapper.is_empty(), ERROR_LOAN_NOT_FOUND);

        let mut loan = mapper.get();
        // Interest earned on the old principal is snapshotted before the
        // principal shrinks.
        self.accrue_interest(&mut loan, cache.timestamp);
        require!(
            payment.amount <= loan.principal,
            ERROR_REPAY_EXCEEDS_PRINCIPAL
        );

        loan.principal -= &payment.amount;
        loan.status = LoanStatus::PartiallyRepaid;
        mapper.set(&loan);

        self.partial_repay_event(&caller, maturity, &payment.amount, &loan.principal);
    }

    /// Settles the full amount owed (principal plus accrued interest),
    /// releases every pool draw, routes the interest to the contributing
    /// pools and returns the collateral. Overpayment is refunded.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, maturity: u64) {
        let cache = Cache::new(self);
        let payment = self.call_value().egld_or_single_esdt();
        self.require_loan_asset(&payment.token_identifier, &cache.config);

        let caller = self.blockchain().get_caller();
        let mapper = self.loan(&caller, maturity);
        require!(!mapper.is_empty(), ERROR_LOAN_NOT_FOUND);

        let mut loan = mapper.get();
        self.accrue_interest(&mut loan, cache.timestamp);

        let owed = &loan.principal + &loan.accrued_interest;
        require!(payment.amount >= owed, ERROR_INSUFFICIENT_REPAYMENT);

        let overpayment = &payment.amount - &owed;
        if overpayment > BigUint::zero() {
            self.send()
                .direct(&caller, &cache.config.loan_asset, 0, &overpayment);
        }

        self.release_allocation(&loan.contributing_pools);
        self.route_interest(&loan.contributing_pools, &loan.accrued_interest);

        self.send()
            .direct(&caller, &cache.config.collateral_asset, 0, &loan.collateral);

        mapper.clear();
        self.borrower_maturities(&caller).swap_remove(&maturity);

        self.repay_loan_event(&caller, maturity, &loan.principal, &loan.accrued_interest);
    }

    /// Rolls a loan to a new maturity, optionally repaying principal and
    /// topping up collateral in the same call.
    ///
    /// The re-allocation at the new maturity runs before the old draws are
    /// released, so an extension cannot be funded by the liquidity it is
    /// itself about to free. Any failure leaves the original loan intact.
    #[payable("*")]
    #[endpoint(extend)]
    fn extend(&self, current_maturity: u64, new_maturity: u64, new_ltv: u64) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();

        let mapper = self.loan(&caller, current_maturity);
        require!(!mapper.is_empty(), ERROR_LOAN_NOT_FOUND);
        require!(new_maturity != current_maturity, ERROR_LOAN_ALREADY_EXISTS);
        require!(
            self.loan(&caller, new_maturity).is_empty(),
            ERROR_LOAN_ALREADY_EXISTS
        );

        let (additional_repayment, additional_collateral) =
            self.split_extend_payments(&cache.config);

        let mut loan = mapper.get();
        self.accrue_interest(&mut loan, cache.timestamp);

        require!(
            additional_repayment <= loan.principal,
            ERROR_REPAY_EXCEEDS_PRINCIPAL
        );
        loan.principal -= &additional_repayment;
        loan.collateral += &additional_collateral;
        self.require_amount_positive(&loan.principal);

        let apy_bps = self.apy_for_ltv(new_ltv);
        let price = cache.collateral_price();
        let required =
            self.required_collateral_amount(&loan.principal, new_ltv, &price, &cache.config);
        require!(loan.collateral >= required, ERROR_INSUFFICIENT_COLLATERAL);

        let contributing_pools = self.allocate(&loan.principal, new_maturity);
        self.release_allocation(&loan.contributing_pools);

        mapper.clear();
        self.borrower_maturities(&caller).swap_remove(&current_maturity);

        let successor = Loan {
            borrower: caller.clone(),
            maturity: new_maturity,
            principal: loan.principal.clone(),
            collateral: loan.collateral.clone(),
            ltv: new_ltv,
            apy_bps,
            accrued_interest: loan.accrued_interest.clone(),
            last_accrual: cache.timestamp,
            status: LoanStatus::Active,
            contributing_pools,
        };
        self.loan(&caller, new_maturity).set(&successor);
        self.borrower_maturities(&caller).insert(new_maturity);

        self.extend_loan_event(
            &caller,
            current_maturity,
            new_maturity,
            &successor.principal,
            &successor.collateral,
            apy_bps,
        );
    }

    /// Splits the optional extend payments into (repayment, collateral
    /// top-up); any other token aborts.
    fn split_extend_payments(&self, config: &MarketConfig<Self::Api>) -> (BigUint, BigUint) {
        let mut repayment = BigUint::zero();
        let mut collateral = BigUint::zero();

        let payments = self.call_value().all_esdt_transfers().clone_value();
        for payment in payments.iter() {
            let token = EgldOrEsdtTokenIdentifier::esdt(payment.token_identifier.clone());
            if token == config.loan_asset {
                repayment += &payment.amount;
            } else if token == config.collateral_asset {
                collateral += &payment.amount;
            } else {
                sc_panic!(ERROR_INVALID_ASSET);
            }
        }

        (repayment, collateral)
    }

    /// Snapshots interest earned since the last accrual point.
    fn accrue_interest(&self, loan: &mut Loan<Self::Api>, timestamp: u64) {
        if timestamp > loan.last_accrual {
            let elapsed = timestamp - loan.last_accrual;
            loan.accrued_interest += self.simple_interest(&loan.principal, loan.apy_bps, elapsed);
            loan.last_accrual = timestamp;
        }
    }
}
