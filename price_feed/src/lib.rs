#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod storage;
pub mod structs;

use errors::*;
use structs::TimestampedPrice;

/// A minimal pausable price feed.
///
/// Registered oracles push the latest quote per ticker pair; consumers are
/// expected to enforce their own staleness policy on the stored timestamp.
#[multiversx_sc::contract]
pub trait PriceFeed:
    storage::StorageModule + events::EventsModule + multiversx_sc_modules::pause::PauseModule
{
    #[init]
    fn init(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        self.add_oracles(oracles);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addOracles)]
    fn add_oracles(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.oracles();
        for oracle in oracles {
            mapper.insert(oracle);
        }
    }

    #[only_owner]
    #[endpoint(removeOracles)]
    fn remove_oracles(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.oracles();
        for oracle in oracles {
            mapper.swap_remove(&oracle);
        }
    }

    /// Records the latest price for a pair, stamped with the block time.
    #[endpoint(submit)]
    fn submit(&self, from: ManagedBuffer, to: ManagedBuffer, price: BigUint, decimals: u8) {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        require!(self.oracles().contains(&caller), ERROR_NOT_AN_ORACLE);
        require!(price > BigUint::zero(), ERROR_INVALID_PRICE);

        let timestamp = self.blockchain().get_block_timestamp();
        self.latest_price(&from, &to).set(&TimestampedPrice {
            price: price.clone(),
            timestamp,
            decimals,
        });

        self.submit_price_event(&from, &to, &price, timestamp);
    }

    #[view(latestPriceFeed)]
    fn latest_price_feed(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> TimestampedPrice<Self::Api> {
        let mapper = self.latest_price(&from, &to);
        require!(!mapper.is_empty(), ERROR_NO_LAST_PRICE);
        mapper.get()
    }
}
