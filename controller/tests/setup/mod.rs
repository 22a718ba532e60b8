use crate::constants::*;

use common_proxies::{proxy_controller, proxy_price_feed};
use common_structs::{Loan, PoolState};
use controller::shares::ShareTokenModule;
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EsdtLocalRole, EsdtTokenPayment, ManagedBuffer,
    ManagedVec, MultiValueEncoded, TestAddress,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsResult},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};

pub static SHARE_TOKEN_ROLES: &[EsdtLocalRole] = &[
    EsdtLocalRole::NftCreate,
    EsdtLocalRole::NftAddQuantity,
    EsdtLocalRole::NftBurn,
];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CONTROLLER_PATH, controller::ContractBuilder);
    blockchain.register_contract(PRICE_FEED_PATH, price_feed::ContractBuilder);

    blockchain
}

pub struct TermLendingTestState {
    pub world: ScenarioWorld,
}

impl TermLendingTestState {
    /// Deploys the price feed and the controller, registers the share
    /// token, funds the test accounts and submits an initial EGLD price.
    pub fn new() -> Self {
        let mut state = Self::new_without_price();
        state.submit_price(EGLD_PRICE_WAD);
        state
    }

    /// Same setup, but no price has ever been submitted to the feed.
    pub fn new_without_price() -> Self {
        let mut world = world();

        world.account(OWNER_ADDRESS).nonce(1);
        world.account(ORACLE_ADDRESS).nonce(1);
        world
            .account(LENDER_ADDRESS)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::from(100_000 * USDC_UNIT));
        world
            .account(SECOND_LENDER_ADDRESS)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::from(100_000 * USDC_UNIT));
        world
            .account(BORROWER_ADDRESS)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::from(100_000 * USDC_UNIT))
            .esdt_balance(WEGLD_TOKEN, BigUint::from(1_000u128 * WEGLD_UNIT));
        world
            .account(SECOND_BORROWER_ADDRESS)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::from(100_000 * USDC_UNIT))
            .esdt_balance(WEGLD_TOKEN, BigUint::from(1_000u128 * WEGLD_UNIT));

        world.current_block().block_timestamp(DEC01_25);

        let mut oracles = MultiValueEncoded::new();
        oracles.push(ORACLE_ADDRESS.to_managed_address());
        world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_price_feed::PriceFeedProxy)
            .init(oracles)
            .code(PRICE_FEED_PATH)
            .new_address(PRICE_FEED_ADDRESS)
            .run();

        let mut tiers = MultiValueEncoded::new();
        for (ltv, apy_bps) in LTV_TIERS {
            tiers.push((*ltv, *apy_bps).into());
        }
        world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .init(
                PRICE_FEED_ADDRESS.to_managed_address(),
                EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier()),
                USDC_DECIMALS,
                EgldOrEsdtTokenIdentifier::esdt(WEGLD_TOKEN.to_token_identifier()),
                WEGLD_DECIMALS,
                ManagedBuffer::from(&b"EGLD"[..]),
                ManagedBuffer::from(&b"USD"[..]),
                tiers,
            )
            .code(CONTROLLER_PATH)
            .new_address(CONTROLLER_ADDRESS)
            .run();

        // Token issuance is asynchronous on-chain; tests shortcut it by
        // setting the token id and roles directly.
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(CONTROLLER_ADDRESS)
            .whitebox(controller::contract_obj, |sc| {
                sc.share_token()
                    .set_token_id(SHARE_TOKEN.to_token_identifier());
            });
        world.set_esdt_local_roles(CONTROLLER_ADDRESS, SHARE_TOKEN.as_bytes(), SHARE_TOKEN_ROLES);

        Self { world }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn submit_price(&mut self, price_wad: u128) {
        self.world
            .tx()
            .from(ORACLE_ADDRESS)
            .to(PRICE_FEED_ADDRESS)
            .typed(proxy_price_feed::PriceFeedProxy)
            .submit(
                ManagedBuffer::from(&b"EGLD"[..]),
                ManagedBuffer::from(&b"USD"[..]),
                BigUint::from(price_wad),
                PRICE_DECIMALS,
            )
            .run();
    }

    pub fn pause_feed(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(PRICE_FEED_ADDRESS)
            .typed(proxy_price_feed::PriceFeedProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause_feed(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(PRICE_FEED_ADDRESS)
            .typed(proxy_price_feed::PriceFeedProxy)
            .unpause_endpoint()
            .run();
    }

    pub fn create_pool(&mut self, maturity: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .create_pool(maturity)
            .run();
    }

    pub fn create_pool_error(&mut self, maturity: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .create_pool(maturity)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn deposit(&mut self, from: &TestAddress, maturity: u64, amount: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .deposit(maturity)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .run();
    }

    pub fn deposit_error(
        &mut self,
        from: &TestAddress,
        maturity: u64,
        amount: u64,
        token: multiversx_sc::types::TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .deposit(maturity)
            .single_esdt(&token.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn take_loan(
        &mut self,
        from: &TestAddress,
        amount: u64,
        collateral: u128,
        ltv: u64,
        maturity: u64,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .take_loan(
                BigUint::from(amount),
                BigUint::from(collateral),
                ltv,
                maturity,
            )
            .single_esdt(
                &WEGLD_TOKEN.to_token_identifier(),
                0,
                &BigUint::from(collateral),
            )
            .run();
    }

    /// Same as `take_loan` but the declared collateral argument and the
    /// transferred amount are controlled independently.
    pub fn take_loan_mismatched_error(
        &mut self,
        from: &TestAddress,
        amount: u64,
        declared_collateral: u128,
        sent_collateral: u128,
        ltv: u64,
        maturity: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .take_loan(
                BigUint::from(amount),
                BigUint::from(declared_collateral),
                ltv,
                maturity,
            )
            .single_esdt(
                &WEGLD_TOKEN.to_token_identifier(),
                0,
                &BigUint::from(sent_collateral),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn take_loan_error(
        &mut self,
        from: &TestAddress,
        amount: u64,
        collateral: u128,
        ltv: u64,
        maturity: u64,
        error_message: &[u8],
    ) {
        self.take_loan_mismatched_error(
            from,
            amount,
            collateral,
            collateral,
            ltv,
            maturity,
            error_message,
        );
    }

    pub fn partial_repay(&mut self, from: &TestAddress, maturity: u64, amount: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .partial_repay(maturity)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .run();
    }

    pub fn partial_repay_error(
        &mut self,
        from: &TestAddress,
        maturity: u64,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .partial_repay(maturity)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(&mut self, from: &TestAddress, maturity: u64, amount: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .repay(maturity)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, amount)
            .run();
    }

    pub fn repay_error(
        &mut self,
        from: &TestAddress,
        maturity: u64,
        amount: &BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .repay(maturity)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn extend(
        &mut self,
        from: &TestAddress,
        current_maturity: u64,
        new_maturity: u64,
        new_ltv: u64,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .extend(current_maturity, new_maturity, new_ltv)
            .run();
    }

    pub fn extend_with_payments(
        &mut self,
        from: &TestAddress,
        current_maturity: u64,
        new_maturity: u64,
        new_ltv: u64,
        additional_repayment: u64,
        additional_collateral: u128,
    ) {
        let mut payments: ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> = ManagedVec::new();
        if additional_repayment > 0 {
            payments.push(EsdtTokenPayment::new(
                USDC_TOKEN.to_token_identifier(),
                0,
                BigUint::from(additional_repayment),
            ));
        }
        if additional_collateral > 0 {
            payments.push(EsdtTokenPayment::new(
                WEGLD_TOKEN.to_token_identifier(),
                0,
                BigUint::from(additional_collateral),
            ));
        }
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .extend(current_maturity, new_maturity, new_ltv)
            .payment(payments)
            .run();
    }

    pub fn extend_with_payments_error(
        &mut self,
        from: &TestAddress,
        current_maturity: u64,
        new_maturity: u64,
        new_ltv: u64,
        additional_repayment: u64,
        additional_collateral: u128,
        error_message: &[u8],
    ) {
        let mut payments: ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> = ManagedVec::new();
        if additional_repayment > 0 {
            payments.push(EsdtTokenPayment::new(
                USDC_TOKEN.to_token_identifier(),
                0,
                BigUint::from(additional_repayment),
            ));
        }
        if additional_collateral > 0 {
            payments.push(EsdtTokenPayment::new(
                WEGLD_TOKEN.to_token_identifier(),
                0,
                BigUint::from(additional_collateral),
            ));
        }
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .extend(current_maturity, new_maturity, new_ltv)
            .payment(payments)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn extend_error(
        &mut self,
        from: &TestAddress,
        current_maturity: u64,
        new_maturity: u64,
        new_ltv: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .extend(current_maturity, new_maturity, new_ltv)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn finalize_pool(&mut self, maturity: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .finalize_pool(maturity)
            .run();
    }

    pub fn finalize_pool_error(&mut self, maturity: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .finalize_pool(maturity)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(&mut self, from: &TestAddress, maturity: u64, share_nonce: u64, amount: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .withdraw(maturity)
            .single_esdt(
                &SHARE_TOKEN.to_token_identifier(),
                share_nonce,
                &BigUint::from(amount),
            )
            .run();
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        maturity: u64,
        share_nonce: u64,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .withdraw(maturity)
            .single_esdt(
                &SHARE_TOKEN.to_token_identifier(),
                share_nonce,
                &BigUint::from(amount),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn get_pool(&mut self, maturity: u64) -> PoolState<StaticApi> {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_pool(maturity)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_total_liquidity(&mut self, at_or_after: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_total_liquidity(at_or_after)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_available_for_period(&mut self, maturity: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_available_for_period(maturity)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_available_for_period_error(&mut self, maturity: u64, error_message: &[u8]) {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_available_for_period(maturity)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn get_loan(&mut self, borrower: &TestAddress, maturity: u64) -> Loan<StaticApi> {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_loan(borrower.to_managed_address(), maturity)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_loan_error(&mut self, borrower: &TestAddress, maturity: u64, error_message: &[u8]) {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_loan(borrower.to_managed_address(), maturity)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn get_amount_owed(&mut self, borrower: &TestAddress, maturity: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_amount_owed(borrower.to_managed_address(), maturity)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_apy_for_ltv(&mut self, ltv: u64) -> u64 {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_apy_for_ltv(ltv)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_apy_for_ltv_error(&mut self, ltv: u64, error_message: &[u8]) {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_apy_for_ltv(ltv)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn get_max_loan(&mut self, ltv: u64, collateral: u128) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_max_loan(ltv, BigUint::from(collateral))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_max_loan_error(&mut self, ltv: u64, collateral: u128, error_message: &[u8]) {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_max_loan(ltv, BigUint::from(collateral))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn get_required_collateral(&mut self, amount: u64, ltv: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .get_required_collateral(BigUint::from(amount), ltv)
            .returns(ReturnsResult)
            .run()
    }

    /// Creates the three standard pools and funds them with
    /// 1000/1500/4000 USDC from the lender.
    pub fn setup_three_pools(&mut self) {
        self.create_pool(JAN01_26);
        self.create_pool(FEB01_26);
        self.create_pool(MAR01_26);
        self.deposit(&LENDER_ADDRESS, JAN01_26, 1_000 * USDC_UNIT);
        self.deposit(&LENDER_ADDRESS, FEB01_26, 1_500 * USDC_UNIT);
        self.deposit(&LENDER_ADDRESS, MAR01_26, 4_000 * USDC_UNIT);
    }
}
