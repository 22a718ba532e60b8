multiversx_sc::imports!();

use common_errors::{ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_AMOUNT, ERROR_NOT_A_VALID_POOL};
use common_structs::PoolContribution;

/// The liquidity allocator: sources a principal from the target pool first,
/// then sweeps forward through later maturities in ascending order.
#[multiversx_sc::module]
pub trait AllocatorModule:
    crate::storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Greedy forward sweep from `target_maturity`.
    ///
    /// Draws `min(remaining, available)` from each non-finalized pool in
    /// ascending maturity order, incrementing the pool's `total_loans` as it
    /// goes. If the sweep exhausts all eligible pools with an amount still
    /// outstanding, the call fails and the enclosing transaction reverts
    /// every draw recorded so far, so no partial allocation ever survives.
    ///
    /// Returns the manifest in sweep order; fractions are the 8-decimal
    /// truncated share of each draw in the requested amount.
    fn allocate(
        &self,
        requested: &BigUint,
        target_maturity: u64,
    ) -> ManagedVec<PoolContribution<Self::Api>> {
        require!(*requested > BigUint::zero(), ERROR_INVALID_AMOUNT);
        require!(
            !self.pool(target_maturity).is_empty(),
            ERROR_NOT_A_VALID_POOL
        );

        let mut remaining = requested.clone();
        let mut manifest = ManagedVec::new();

        for maturity in self.pool_maturities().iter() {
            if maturity < target_maturity {
                continue;
            }

            let mapper = self.pool(maturity);
            let mut pool = mapper.get();
            if pool.finalized {
                continue;
            }

            let available = pool.available_liquidity();
            if available == BigUint::zero() {
                continue;
            }

            let draw = self.biguint_min(remaining.clone(), available);
            pool.total_loans += &draw;
            mapper.set(&pool);
            self.update_pool_state_event(maturity, &pool.total_liquidity, &pool.total_loans);

            remaining -= &draw;
            manifest.push(PoolContribution {
                maturity,
                fraction: self.fraction_of_total(&draw, requested),
                amount: draw,
            });

            if remaining == BigUint::zero() {
                break;
            }
        }

        require!(remaining == BigUint::zero(), ERROR_INSUFFICIENT_LIQUIDITY);

        manifest
    }

    /// Returns every manifest draw to its pool.
    fn release_allocation(&self, manifest: &ManagedVec<PoolContribution<Self::Api>>) {
        for entry in manifest.iter() {
            let mapper = self.pool(entry.maturity);
            let mut pool = mapper.get();
            pool.total_loans -= &entry.amount;
            mapper.set(&pool);
            self.update_pool_state_event(entry.maturity, &pool.total_liquidity, &pool.total_loans);
        }
    }

    /// Credits repaid interest to the contributing pools, pro rata by
    /// contribution fraction. Truncation dust stays with the protocol.
    fn route_interest(&self, manifest: &ManagedVec<PoolContribution<Self::Api>>, interest: &BigUint) {
        if *interest == BigUint::zero() {
            return;
        }
        for entry in manifest.iter() {
            let share = self.apply_fraction(interest, &entry.fraction);
            if share == BigUint::zero() {
                continue;
            }
            let mapper = self.pool(entry.maturity);
            let mut pool = mapper.get();
            pool.earned_interest += &share;
            mapper.set(&pool);
        }
    }

    /// Read-only counterpart of the sweep: the maximum amount a request at
    /// `maturity` could source right now.
    fn available_from(&self, maturity: u64) -> BigUint {
        let mut total = BigUint::zero();
        for m in self.pool_maturities().iter() {
            if m < maturity {
                continue;
            }
            let pool = self.pool(m).get();
            if pool.finalized {
                continue;
            }
            total += pool.available_liquidity();
        }
        total
    }
}
