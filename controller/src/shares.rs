multiversx_sc::imports!();

use common_errors::ERROR_SHARE_TOKEN_NOT_ISSUED;
use common_structs::PoolState;

/// Lender claims are a single Meta-ESDT; each pool's shares live under their
/// own nonce, created at the pool's first deposit with the maturity as
/// attributes. Units are minted 1:1 with deposited loan currency.
#[multiversx_sc::module]
pub trait ShareTokenModule {
    #[view(getShareToken)]
    #[storage_mapper("share_token")]
    fn share_token(&self) -> NonFungibleTokenMapper<Self::Api>;

    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(registerShareToken)]
    fn register_share_token(
        &self,
        token_display_name: ManagedBuffer,
        token_ticker: ManagedBuffer,
        num_decimals: usize,
    ) {
        let issue_cost = self.call_value().egld_value().clone_value();
        self.share_token().issue_and_set_all_roles(
            EsdtTokenType::MetaFungible,
            issue_cost,
            token_display_name,
            token_ticker,
            num_decimals,
            None,
        );
    }

    fn require_share_token_issued(&self) {
        require!(!self.share_token().is_empty(), ERROR_SHARE_TOKEN_NOT_ISSUED);
    }

    /// Mints share units for the pool, creating its nonce on first use.
    fn mint_shares(&self, pool: &mut PoolState<Self::Api>, amount: &BigUint) -> u64 {
        let token_id = self.share_token().get_token_id();
        if pool.share_nonce == 0 {
            pool.share_nonce =
                self.send()
                    .esdt_nft_create_compact(&token_id, amount, &pool.maturity);
        } else {
            self.send()
                .esdt_local_mint(&token_id, pool.share_nonce, amount);
        }
        pool.share_nonce
    }

    fn burn_shares(&self, nonce: u64, amount: &BigUint) {
        let token_id = self.share_token().get_token_id();
        self.send().esdt_local_burn(&token_id, nonce, amount);
    }

    fn send_shares(&self, to: &ManagedAddress, nonce: u64, amount: &BigUint) {
        let token_id = self.share_token().get_token_id();
        self.send().direct_esdt(to, &token_id, nonce, amount);
    }
}
