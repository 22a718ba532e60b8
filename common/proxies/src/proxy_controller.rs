#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use common_structs::{Loan, MarketConfig, PoolState};

pub struct ControllerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ControllerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ControllerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ControllerProxyMethods { wrapped_tx: tx }
    }
}

pub struct ControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> ControllerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<usize>,
        Arg3: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg4: ProxyArg<usize>,
        Arg5: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg6: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg7: ProxyArg<MultiValueEncoded<Env::Api, MultiValue2<u64, u64>>>,
    >(
        self,
        price_feed_address: Arg0,
        loan_asset: Arg1,
        loan_asset_decimals: Arg2,
        collateral_asset: Arg3,
        collateral_asset_decimals: Arg4,
        price_base_ticker: Arg5,
        price_quote_ticker: Arg6,
        ltv_tiers: Arg7,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&price_feed_address)
            .argument(&loan_asset)
            .argument(&loan_asset_decimals)
            .argument(&collateral_asset)
            .argument(&collateral_asset_decimals)
            .argument(&price_base_ticker)
            .argument(&price_quote_ticker)
            .argument(&ltv_tiers)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> ControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> ControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn register_share_token<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<usize>,
    >(
        self,
        token_display_name: Arg0,
        token_ticker: Arg1,
        num_decimals: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("registerShareToken")
            .argument(&token_display_name)
            .argument(&token_ticker)
            .argument(&num_decimals)
            .original_result()
    }

    pub fn create_pool<
        Arg0: ProxyArg<u64>,
    >(
        self,
        maturity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createPool")
            .argument(&maturity)
            .original_result()
    }

    pub fn deposit<
        Arg0: ProxyArg<u64>,
    >(
        self,
        maturity: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("deposit")
            .argument(&maturity)
            .original_result()
    }

    pub fn withdraw<
        Arg0: ProxyArg<u64>,
    >(
        self,
        maturity: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("withdraw")
            .argument(&maturity)
            .original_result()
    }

    pub fn finalize_pool<
        Arg0: ProxyArg<u64>,
    >(
        self,
        maturity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("finalizePool")
            .argument(&maturity)
            .original_result()
    }

    pub fn take_loan<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        amount: Arg0,
        collateral_amount: Arg1,
        ltv: Arg2,
        maturity: Arg3,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("takeLoan")
            .argument(&amount)
            .argument(&collateral_amount)
            .argument(&ltv)
            .argument(&maturity)
            .original_result()
    }

    pub fn partial_repay<
        Arg0: ProxyArg<u64>,
    >(
        self,
        maturity: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("partialRepay")
            .argument(&maturity)
            .original_result()
    }

    pub fn repay<
        Arg0: ProxyArg<u64>,
    >(
        self,
        maturity: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("repay")
            .argument(&maturity)
            .original_result()
    }

    pub fn extend<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        current_maturity: Arg0,
        new_maturity: Arg1,
        new_ltv: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("extend")
            .argument(&current_maturity)
            .argument(&new_maturity)
            .argument(&new_ltv)
            .original_result()
    }

    pub fn get_market_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MarketConfig<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMarketConfig")
            .original_result()
    }

    pub fn get_price_feed_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPriceFeedAddress")
            .original_result()
    }

    pub fn get_pool_maturities(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolMaturities")
            .original_result()
    }

    pub fn get_borrower_maturities<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        borrower: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBorrowerMaturities")
            .argument(&borrower)
            .original_result()
    }

    pub fn get_share_token(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getShareToken")
            .original_result()
    }

    pub fn get_ltv_tiers(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, MultiValue2<u64, u64>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLtvTiers")
            .original_result()
    }

    pub fn get_apy_for_ltv<
        Arg0: ProxyArg<u64>,
    >(
        self,
        ltv: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getApyForLtv")
            .argument(&ltv)
            .original_result()
    }

    pub fn get_pool<
        Arg0: ProxyArg<u64>,
    >(
        self,
        maturity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, PoolState<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPool")
            .argument(&maturity)
            .original_result()
    }

    pub fn get_pools(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, PoolState<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPools")
            .original_result()
    }

    pub fn get_total_liquidity<
        Arg0: ProxyArg<u64>,
    >(
        self,
        at_or_after: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalLiquidity")
            .argument(&at_or_after)
            .original_result()
    }

    pub fn get_available_for_period<
        Arg0: ProxyArg<u64>,
    >(
        self,
        maturity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAvailableForPeriod")
            .argument(&maturity)
            .original_result()
    }

    pub fn get_loan<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        borrower: Arg0,
        maturity: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Loan<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLoan")
            .argument(&borrower)
            .argument(&maturity)
            .original_result()
    }

    pub fn get_amount_owed<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        borrower: Arg0,
        maturity: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmountOwed")
            .argument(&borrower)
            .argument(&maturity)
            .original_result()
    }

    pub fn get_max_loan<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        ltv: Arg0,
        collateral_amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMaxLoan")
            .argument(&ltv)
            .argument(&collateral_amount)
            .original_result()
    }

    pub fn get_required_collateral<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        amount: Arg0,
        ltv: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRequiredCollateral")
            .argument(&amount)
            .argument(&ltv)
            .original_result()
    }
}
