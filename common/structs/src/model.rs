#![no_std]

use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

/// Static market configuration, set once at init.
///
/// All amounts in the system are raw integer units; the decimal scale of
/// each asset lives here so the math stays in the integer domain.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct MarketConfig<M: ManagedTypeApi> {
    pub loan_asset: EgldOrEsdtTokenIdentifier<M>,
    pub loan_asset_decimals: usize,
    pub collateral_asset: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_asset_decimals: usize,
    /// Ticker pair under which the price feed quotes the collateral asset
    /// in loan currency, e.g. ("EGLD", "USD").
    pub price_base_ticker: ManagedBuffer<M>,
    pub price_quote_ticker: ManagedBuffer<M>,
}

/// A fixed-maturity bucket of pooled lending liquidity.
///
/// Amounts are raw loan-currency units. `total_loans <= total_liquidity`
/// holds at all times; the difference is the pool's available liquidity.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct PoolState<M: ManagedTypeApi> {
    pub maturity: u64,
    pub total_liquidity: BigUint<M>,
    pub total_loans: BigUint<M>,
    /// Interest routed to this pool by repaid loans, claimable by lenders
    /// after finalization.
    pub earned_interest: BigUint<M>,
    /// Share-token units minted against this pool (1:1 with deposits).
    pub total_shares: BigUint<M>,
    /// Meta-ESDT nonce of this pool's share token; 0 until the first mint.
    pub share_nonce: u64,
    pub finalized: bool,
}

impl<M: ManagedTypeApi> PoolState<M> {
    pub fn new(maturity: u64) -> Self {
        PoolState {
            maturity,
            total_liquidity: BigUint::zero(),
            total_loans: BigUint::zero(),
            earned_interest: BigUint::zero(),
            total_shares: BigUint::zero(),
            share_nonce: 0,
            finalized: false,
        }
    }

    pub fn available_liquidity(&self) -> BigUint<M> {
        &self.total_liquidity - &self.total_loans
    }
}

/// One pool's share of a loan's principal.
///
/// `fraction` is `amount / loan principal` at 8-decimal fixed point,
/// truncated; the manifest entries of a loan need not sum to exactly 1.0.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct PoolContribution<M: ManagedTypeApi> {
    pub maturity: u64,
    pub amount: BigUint<M>,
    pub fraction: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub enum LoanStatus {
    Active,
    PartiallyRepaid,
}

/// A borrower's position at a single maturity.
///
/// Keyed by `(borrower, maturity)`; settled or extended loans are removed
/// from storage, so every stored record is a live position.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct Loan<M: ManagedTypeApi> {
    pub borrower: ManagedAddress<M>,
    pub maturity: u64,
    /// Outstanding principal, raw loan-currency units.
    pub principal: BigUint<M>,
    /// Escrowed collateral, raw collateral-asset units.
    pub collateral: BigUint<M>,
    /// Loan-to-value tier, integer percent.
    pub ltv: u64,
    /// Interest rate assigned at creation from the LTV tier, basis points.
    pub apy_bps: u64,
    /// Interest accrued up to `last_accrual`, raw loan-currency units.
    pub accrued_interest: BigUint<M>,
    pub last_accrual: u64,
    pub status: LoanStatus,
    /// Source pools in ascending maturity order, starting at the loan's own.
    pub contributing_pools: ManagedVec<M, PoolContribution<M>>,
}
