use crate::primitives::{Amount, FeeRate};

/// Display name fixed at creation.
pub const TOKEN_NAME: &str = "Favecoin";

/// Display symbol fixed at creation.
pub const TOKEN_SYMBOL: &str = "FAVE";

/// Default display decimals.
pub const DEFAULT_DECIMALS: u8 = 7;

/// Default fee rate: 10 000 ppm = 1%.
pub const DEFAULT_FEE_PPM: FeeRate = 10_000;

/// Denominator for parts-per-million fee rates.
pub const PPM_DENOMINATOR: Amount = 1_000_000;

/// Default fixed supply: 1 000 000 000 display tokens at 7 decimals.
pub const DEFAULT_FIXED_SUPPLY: Amount = 10_000_000_000_000_000;
