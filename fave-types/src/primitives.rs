use crate::error::LedgerError;

/// 20-byte account address.
pub type Address = [u8; 20];

/// Token amount in the smallest indivisible unit.
pub type Amount = u128;

/// Fee rate expressed in parts-per-million.
pub type FeeRate = u64;

/// The null account identifier.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Render an address as a `0x`-prefixed lowercase hex string.
pub fn addr_to_hex(addr: &Address) -> String {
    format!("0x{}", hex::encode(addr))
}

/// Parse a hex string (with or without `0x` prefix) into an address.
pub fn hex_to_addr(s: &str) -> Result<Address, LedgerError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|e| LedgerError::MalformedAddress {
        reason: e.to_string(),
    })?;
    bytes
        .try_into()
        .map_err(|v: Vec<u8>| LedgerError::MalformedAddress {
            reason: format!("expected 20 bytes, got {}", v.len()),
        })
}
