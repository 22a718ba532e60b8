multiversx_sc::imports!();

use common_constants::{PRICE_MAX_AGE_SECONDS, WAD_PRECISION};
use common_errors::{ERROR_NO_LAST_PRICE_FOUND, ERROR_PRICE_FEED_PAUSED, ERROR_PRICE_STALE};
use common_structs::MarketConfig;

#[multiversx_sc::module]
pub trait OracleModule: crate::storage::Storage + common_math::SharedMathModule {
    /// Reads the collateral price for the configured ticker pair straight
    /// out of the feed contract's storage and normalizes it to WAD.
    ///
    /// A paused feed, a pair with no submission, or a price older than the
    /// staleness window each abort the enclosing operation.
    fn read_collateral_price(
        &self,
        price_feed: &ManagedAddress,
        config: &MarketConfig<Self::Api>,
        timestamp: u64,
    ) -> BigUint {
        require!(
            !self.price_feed_paused(price_feed.clone()).get(),
            ERROR_PRICE_FEED_PAUSED
        );

        let mapper = self.latest_price_at(
            price_feed.clone(),
            config.price_base_ticker.clone(),
            config.price_quote_ticker.clone(),
        );
        require!(!mapper.is_empty(), ERROR_NO_LAST_PRICE_FOUND);

        let feed = mapper.get();
        require!(
            timestamp <= feed.timestamp + PRICE_MAX_AGE_SECONDS,
            ERROR_PRICE_STALE
        );

        self.price_to_wad(feed.price, feed.decimals as usize)
    }

    fn price_to_wad(&self, price: BigUint, decimals: usize) -> BigUint {
        if decimals == WAD_PRECISION {
            price
        } else if decimals < WAD_PRECISION {
            price * self.pow10(WAD_PRECISION - decimals)
        } else {
            price / self.pow10(decimals - WAD_PRECISION)
        }
    }
}
