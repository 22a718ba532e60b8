#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_pool")]
    fn create_pool_event(
        &self,
        #[indexed] maturity: u64,
        #[indexed] share_token: &TokenIdentifier,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] maturity: u64,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] share_nonce: u64,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] maturity: u64,
        #[indexed] lender: &ManagedAddress,
        #[indexed] shares: &BigUint,
        #[indexed] payout: &BigUint,
    );

    #[event("finalize_pool")]
    fn finalize_pool_event(&self, #[indexed] maturity: u64, #[indexed] timestamp: u64);

    // Emitted after every mutation of a pool's running totals, whatever the
    // operation that caused it. The indexer rebuilds pool read-models from
    // this stream alone.
    #[event("update_pool_state")]
    fn update_pool_state_event(
        &self,
        #[indexed] maturity: u64,
        #[indexed] total_liquidity: &BigUint,
        #[indexed] total_loans: &BigUint,
    );

    #[event("create_loan")]
    fn create_loan_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] maturity: u64,
        #[indexed] principal: &BigUint,
        #[indexed] collateral: &BigUint,
        #[indexed] ltv: u64,
        #[indexed] apy_bps: u64,
        contributing_pools: &ManagedVec<PoolContribution<Self::Api>>,
    );

    #[event("partial_repay")]
    fn partial_repay_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] maturity: u64,
        #[indexed] amount: &BigUint,
        #[indexed] remaining_principal: &BigUint,
    );

    #[event("repay_loan")]
    fn repay_loan_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] maturity: u64,
        #[indexed] principal: &BigUint,
        #[indexed] interest: &BigUint,
    );

    #[event("extend_loan")]
    fn extend_loan_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] old_maturity: u64,
        #[indexed] new_maturity: u64,
        #[indexed] principal: &BigUint,
        #[indexed] collateral: &BigUint,
        #[indexed] apy_bps: u64,
    );
}
