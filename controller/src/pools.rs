multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_ASSET, ERROR_POOL_ALREADY_EXISTS,
    ERROR_POOL_FINALIZED, ERROR_POOL_NOT_FINALIZED, ERROR_POOL_NOT_FOUND, ERROR_POOL_NOT_MATURED,
};
use common_structs::PoolState;

use crate::cache::Cache;

/// The time-bucketed pool registry: one pool per maturity, addressed through
/// the sorted maturity index.
#[multiversx_sc::module]
pub trait PoolRegistryModule:
    crate::storage::Storage
    + crate::oracle::OracleModule
    + crate::shares::ShareTokenModule
    + crate::validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Creates the pool for a maturity, exactly once.
    ///
    /// The maturity must sit on a day boundary and lie in the future;
    /// creating an existing maturity fails and leaves all state untouched.
    #[only_owner]
    #[endpoint(createPool)]
    fn create_pool(&self, maturity: u64) {
        let cache = Cache::new(self);
        self.require_share_token_issued();
        self.require_day_boundary(maturity);
        self.require_future_maturity(maturity, cache.timestamp);
        require!(self.pool(maturity).is_empty(), ERROR_POOL_ALREADY_EXISTS);

        self.insert_maturity_sorted(maturity);
        self.pool(maturity).set(&PoolState::new(maturity));

        self.create_pool_event(maturity, &self.share_token().get_token_id());
    }

    /// Deposits loan currency into a pool, minting share units 1:1 to the
    /// depositor. Rejected once the maturity has passed or the pool is
    /// finalized.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self, maturity: u64) {
        let cache = Cache::new(self);
        let payment = self.call_value().egld_or_single_esdt();
        self.require_loan_asset(&payment.token_identifier, &cache.config);
        self.require_amount_positive(&payment.amount);

        let mapper = self.pool(maturity);
        require!(!mapper.is_empty(), ERROR_POOL_NOT_FOUND);

        let mut pool = mapper.get();
        require!(!pool.finalized, ERROR_POOL_FINALIZED);
        self.require_future_maturity(pool.maturity, cache.timestamp);

        pool.total_liquidity += &payment.amount;
        pool.total_shares += &payment.amount;
        let share_nonce = self.mint_shares(&mut pool, &payment.amount);
        mapper.set(&pool);

        let caller = self.blockchain().get_caller();
        self.send_shares(&caller, share_nonce, &payment.amount);

        self.deposit_event(maturity, &caller, &payment.amount, share_nonce);
        self.update_pool_state_event(maturity, &pool.total_liquidity, &pool.total_loans);
    }

    /// Burns share units of a finalized pool and pays out the principal 1:1
    /// plus the pro-rata slice of the pool's earned interest.
    #[payable("*")]
    #[endpoint(withdraw)]
    fn withdraw(&self, maturity: u64) {
        let cache = Cache::new(self);
        let (token, nonce, shares) = self.call_value().egld_or_single_esdt().into_tuple();

        let mapper = self.pool(maturity);
        require!(!mapper.is_empty(), ERROR_POOL_NOT_FOUND);

        let mut pool = mapper.get();
        require!(pool.finalized, ERROR_POOL_NOT_FINALIZED);

        let share_token = EgldOrEsdtTokenIdentifier::esdt(self.share_token().get_token_id());
        require!(
            token == share_token && nonce == pool.share_nonce,
            ERROR_INVALID_ASSET
        );
        self.require_amount_positive(&shares);

        let yield_amount = self.mul_div_floor(&pool.earned_interest, &shares, &pool.total_shares);

        // Principal still lent out cannot be withdrawn.
        require!(
            shares <= pool.available_liquidity(),
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        pool.total_liquidity -= &shares;
        pool.earned_interest -= &yield_amount;
        pool.total_shares -= &shares;
        mapper.set(&pool);

        self.burn_shares(nonce, &shares);

        let payout = &shares + &yield_amount;
        let caller = self.blockchain().get_caller();
        self.send()
            .direct(&caller, &cache.config.loan_asset, 0, &payout);

        self.withdraw_event(maturity, &caller, &shares, &payout);
        self.update_pool_state_event(maturity, &pool.total_liquidity, &pool.total_loans);
    }

    /// Permissionless finalization crank: once the maturity has passed the
    /// pool stops lending and its depositors may withdraw.
    #[endpoint(finalizePool)]
    fn finalize_pool(&self, maturity: u64) {
        let timestamp = self.blockchain().get_block_timestamp();

        let mapper = self.pool(maturity);
        require!(!mapper.is_empty(), ERROR_POOL_NOT_FOUND);

        let mut pool = mapper.get();
        require!(!pool.finalized, ERROR_POOL_FINALIZED);
        require!(timestamp >= pool.maturity, ERROR_POOL_NOT_MATURED);

        pool.finalized = true;
        mapper.set(&pool);

        self.finalize_pool_event(maturity, timestamp);
    }

    /// Inserts a maturity into the ascending index, shifting the tail.
    fn insert_maturity_sorted(&self, maturity: u64) {
        let mut mapper = self.pool_maturities();
        let len = mapper.len();
        let mut pos = len + 1;
        for i in 1..=len {
            if mapper.get(i) > maturity {
                pos = i;
                break;
            }
        }
        if pos == len + 1 {
            mapper.push(&maturity);
            return;
        }

        let last = mapper.get(len);
        mapper.push(&last);
        let mut i = len;
        while i > pos {
            let prev = mapper.get(i - 1);
            mapper.set(i, &prev);
            i -= 1;
        }
        mapper.set(pos, &maturity);
    }
}
