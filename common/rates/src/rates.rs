#![no_std]

use common_constants::WAD_PRECISION;
use common_errors::ERROR_INVALID_LTV;
use common_structs::MarketConfig;

multiversx_sc::imports!();

/// The rate and collateral policy.
///
/// Loans are priced by a small enumerated table of LTV tiers, each tier
/// carrying a fixed APY. The table is configuration set at init, not
/// business logic; any LTV outside it is rejected. Collateral valuation is
/// pure integer math over the oracle-supplied WAD price, always truncating.
#[multiversx_sc::module]
pub trait RatePolicyModule: common_math::SharedMathModule {
    /// Recognized LTV tiers: integer percent -> APY in basis points.
    #[view(getLtvTiers)]
    #[storage_mapper("ltv_tiers")]
    fn ltv_tiers(&self) -> MapMapper<u64, u64>;

    fn set_ltv_tiers(&self, tiers: MultiValueEncoded<MultiValue2<u64, u64>>) {
        let mut mapper = self.ltv_tiers();
        for tier in tiers {
            let (ltv, apy_bps) = tier.into_tuple();
            mapper.insert(ltv, apy_bps);
        }
    }

    fn require_valid_ltv(&self, ltv: u64) {
        require!(self.ltv_tiers().contains_key(&ltv), ERROR_INVALID_LTV);
    }

    /// The APY assigned to a recognized LTV tier.
    ///
    /// Higher tiers carry higher rates; riskier loans cost more.
    #[view(getApyForLtv)]
    fn apy_for_ltv(&self, ltv: u64) -> u64 {
        match self.ltv_tiers().get(&ltv) {
            Some(apy_bps) => apy_bps,
            None => sc_panic!(ERROR_INVALID_LTV),
        }
    }

    /// Maximum loan-currency amount a collateral amount supports at `ltv`:
    /// `collateral * price * ltv / 100`, truncated to loan-currency units.
    fn max_loan_amount(
        &self,
        collateral: &BigUint,
        ltv: u64,
        price_wad: &BigUint,
        config: &MarketConfig<Self::Api>,
    ) -> BigUint {
        self.require_valid_ltv(ltv);

        let scale = self.value_scale(config);
        let numerator = collateral * price_wad * BigUint::from(ltv);
        numerator / (scale * BigUint::from(100u64))
    }

    /// Inverse of `max_loan_amount`: the collateral required to support
    /// `amount` at `ltv`, truncated to collateral-asset units.
    fn required_collateral_amount(
        &self,
        amount: &BigUint,
        ltv: u64,
        price_wad: &BigUint,
        config: &MarketConfig<Self::Api>,
    ) -> BigUint {
        self.require_valid_ltv(ltv);

        let scale = self.value_scale(config);
        let numerator = amount * &scale * BigUint::from(100u64);
        numerator / (BigUint::from(ltv) * price_wad)
    }

    /// `10^(collateral decimals + price decimals - loan decimals)`, the
    /// factor between a raw collateral*price product and raw loan units.
    fn value_scale(&self, config: &MarketConfig<Self::Api>) -> BigUint {
        self.pow10(config.collateral_asset_decimals + WAD_PRECISION - config.loan_asset_decimals)
    }
}
