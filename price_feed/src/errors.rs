pub static ERROR_NOT_AN_ORACLE: &[u8] = b"Caller is not a registered oracle.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Price must be greater than zero.";

pub static ERROR_NO_LAST_PRICE: &[u8] = b"No last price found.";
