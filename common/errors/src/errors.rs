#![no_std]

pub static ERROR_INVALID_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_INVALID_LTV: &[u8] = b"Loan to value tier not recognized.";

pub static ERROR_INVALID_TIMESTAMP: &[u8] = b"Timestamp outside the active pool range.";

pub static ERROR_INVALID_MATURITY: &[u8] = b"Maturity must fall on a day boundary.";

pub static ERROR_MATURITY_IN_PAST: &[u8] = b"Maturity must be in the future.";

pub static ERROR_POOL_ALREADY_EXISTS: &[u8] = b"Pool already exists for this maturity.";

pub static ERROR_POOL_NOT_FOUND: &[u8] = b"No pool found for this maturity.";

pub static ERROR_NOT_A_VALID_POOL: &[u8] = b"Not a valid pool for allocation.";

pub static ERROR_POOL_FINALIZED: &[u8] = b"Pool is already finalized.";

pub static ERROR_POOL_NOT_MATURED: &[u8] = b"Pool has not reached maturity.";

pub static ERROR_POOL_NOT_FINALIZED: &[u8] = b"Pool is not finalized.";

pub static ERROR_LOAN_ALREADY_EXISTS: &[u8] = b"Loan already exists for this borrower and maturity.";

pub static ERROR_LOAN_NOT_FOUND: &[u8] = b"No active loan for this borrower and maturity.";

pub static ERROR_WRONG_COLLATERAL_AMOUNT: &[u8] =
    b"Collateral sent does not match the declared amount.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral available for this loan.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_REPAY_EXCEEDS_PRINCIPAL: &[u8] = b"Repayment exceeds outstanding principal.";

pub static ERROR_INSUFFICIENT_REPAYMENT: &[u8] = b"Repayment does not cover the amount owed.";

pub static ERROR_SHARE_TOKEN_NOT_ISSUED: &[u8] = b"Share token not issued.";

pub static ERROR_NO_LAST_PRICE_FOUND: &[u8] = b"No last price found.";

pub static ERROR_PRICE_STALE: &[u8] = b"Price feed is stale.";

pub static ERROR_PRICE_FEED_PAUSED: &[u8] = b"Price feed is paused.";
