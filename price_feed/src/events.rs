multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("submit_price")]
    fn submit_price_event(
        &self,
        #[indexed] from: &ManagedBuffer,
        #[indexed] to: &ManagedBuffer,
        #[indexed] price: &BigUint,
        #[indexed] timestamp: u64,
    );
}
