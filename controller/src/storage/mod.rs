use common_structs::{Loan, MarketConfig, PoolState};
use price_feed::structs::TimestampedPrice;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Static market configuration: asset identifiers, decimal scales and
    /// the ticker pair the price feed quotes.
    #[view(getMarketConfig)]
    #[storage_mapper("market_config")]
    fn market_config(&self) -> SingleValueMapper<MarketConfig<Self::Api>>;

    /// Address of the price feed contract whose storage is read directly.
    #[view(getPriceFeedAddress)]
    #[storage_mapper("price_feed_address")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// One pool per maturity. Empty mapper means the pool does not exist.
    #[storage_mapper("pools")]
    fn pool(&self, maturity: u64) -> SingleValueMapper<PoolState<Self::Api>>;

    /// Every created pool maturity, kept sorted ascending. The allocator's
    /// forward sweep and the period views iterate this index, never the
    /// insertion order.
    #[view(getPoolMaturities)]
    #[storage_mapper("pool_maturities")]
    fn pool_maturities(&self) -> VecMapper<u64>;

    /// One live loan per (borrower, maturity) slot. Settled and extended
    /// loans are cleared, so an occupied slot is always an open position.
    #[storage_mapper("loans")]
    fn loan(
        &self,
        borrower: &ManagedAddress,
        maturity: u64,
    ) -> SingleValueMapper<Loan<Self::Api>>;

    /// Maturities at which a borrower currently holds a loan.
    #[view(getBorrowerMaturities)]
    #[storage_mapper("borrower_maturities")]
    fn borrower_maturities(&self, borrower: &ManagedAddress) -> UnorderedSetMapper<u64>;

    /// PROXY STORAGE ///
    ///
    /// Last price the feed stored for a ticker pair, read in place from the
    /// feed contract's storage.
    #[storage_mapper_from_address("latest_price")]
    fn latest_price_at(
        &self,
        price_feed_address: ManagedAddress,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>, ManagedAddress>;

    /// The feed's pause flag, from `multiversx_sc_modules::pause`.
    #[storage_mapper_from_address("pause_module:paused")]
    fn price_feed_paused(
        &self,
        price_feed_address: ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;
}
