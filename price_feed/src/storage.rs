multiversx_sc::imports!();

use crate::structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait StorageModule {
    /// Last submitted price for a pair, keyed by ticker pair.
    ///
    /// The lending controller reads this mapper directly by address, so the
    /// key layout ("latest_price" + from + to) is part of the contract's
    /// public surface.
    #[storage_mapper("latest_price")]
    fn latest_price(
        &self,
        from: &ManagedBuffer,
        to: &ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;

    #[view(getOracles)]
    #[storage_mapper("oracles")]
    fn oracles(&self) -> UnorderedSetMapper<ManagedAddress>;
}
