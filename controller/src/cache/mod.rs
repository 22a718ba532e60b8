use common_structs::MarketConfig;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-call read snapshot of the market configuration and block context.
///
/// The oracle price is fetched lazily and memoised so an operation pays for
/// at most one feed read, and operations that never price collateral
/// (deposits, repayments) carry no oracle dependency at all.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage + crate::oracle::OracleModule,
{
    sc_ref: &'a C,
    pub config: MarketConfig<C::Api>,
    pub price_feed: ManagedAddress<C::Api>,
    pub timestamp: u64,
    collateral_price: Option<BigUint<C::Api>>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + crate::oracle::OracleModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            config: sc_ref.market_config().get(),
            price_feed: sc_ref.price_feed_address().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            collateral_price: None,
            sc_ref,
        }
    }

    /// Latest collateral price in WAD. Aborts the whole call when the feed
    /// is paused, empty, or stale.
    pub fn collateral_price(&mut self) -> BigUint<C::Api> {
        if let Some(price) = &self.collateral_price {
            return price.clone();
        }

        let price =
            self.sc_ref
                .read_collateral_price(&self.price_feed, &self.config, self.timestamp);
        self.collateral_price = Some(price.clone());
        price
    }
}
