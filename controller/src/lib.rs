#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod allocator;
pub mod cache;
pub mod loans;
pub mod oracle;
pub mod pools;
pub mod shares;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

/// The fixed-term lending controller.
///
/// A single accounting service owning the pool registry (maturity -> pool)
/// and the loan ledger ((borrower, maturity) -> loan). Every mutating
/// endpoint runs to completion or reverts in full; the event stream is the
/// integration surface for the off-chain indexer.
#[multiversx_sc::contract]
pub trait Controller:
    storage::Storage
    + pools::PoolRegistryModule
    + allocator::AllocatorModule
    + loans::LoanLedgerModule
    + shares::ShareTokenModule
    + oracle::OracleModule
    + validation::ValidationModule
    + views::ViewsModule
    + common_rates::RatePolicyModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::default_issue_callbacks::DefaultIssueCallbacksModule
{
    /// Initializes the market.
    ///
    /// # Arguments
    /// - `price_feed_address`: Address of the price feed contract.
    /// - `loan_asset` / `loan_asset_decimals`: The lending currency.
    /// - `collateral_asset` / `collateral_asset_decimals`: The collateral.
    /// - `price_base_ticker` / `price_quote_ticker`: Pair under which the
    ///   feed quotes the collateral in loan currency.
    /// - `ltv_tiers`: Recognized (LTV percent, APY bps) pairs.
    #[init]
    fn init(
        &self,
        price_feed_address: &ManagedAddress,
        loan_asset: EgldOrEsdtTokenIdentifier,
        loan_asset_decimals: usize,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        collateral_asset_decimals: usize,
        price_base_ticker: ManagedBuffer,
        price_quote_ticker: ManagedBuffer,
        ltv_tiers: MultiValueEncoded<MultiValue2<u64, u64>>,
    ) {
        self.price_feed_address().set(price_feed_address);
        self.market_config().set(&MarketConfig {
            loan_asset,
            loan_asset_decimals,
            collateral_asset,
            collateral_asset_decimals,
            price_base_ticker,
            price_quote_ticker,
        });
        self.set_ltv_tiers(ltv_tiers);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
