//! Parts-per-million fee computation shared by transfers and burns.

use borsh::{BorshDeserialize, BorshSerialize};
use fave_types::constants::PPM_DENOMINATOR;
use fave_types::{Amount, FeeRate, LedgerError};

/// Result of splitting an amount into its fee and the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: Amount,
    pub net: Amount,
}

/// `floor(amount * rate_ppm / 1_000_000)`, computed without a u128
/// intermediate product so every amount is representable.
pub fn compute_fee(amount: Amount, rate_ppm: FeeRate) -> Result<Amount, LedgerError> {
    let rate = Amount::from(rate_ppm);
    let whole = (amount / PPM_DENOMINATOR)
        .checked_mul(rate)
        .ok_or(LedgerError::Overflow)?;
    // remainder < 10^6 and rate < 2^64, so this product fits.
    let part = (amount % PPM_DENOMINATOR)
        .checked_mul(rate)
        .ok_or(LedgerError::Overflow)?
        / PPM_DENOMINATOR;
    whole.checked_add(part).ok_or(LedgerError::Overflow)
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct FeePolicy {
    rate_ppm: FeeRate,
}

impl FeePolicy {
    pub fn new(rate_ppm: FeeRate) -> Self {
        FeePolicy { rate_ppm }
    }

    pub fn rate_ppm(&self) -> FeeRate {
        self.rate_ppm
    }

    pub fn fee(&self, amount: Amount) -> Result<Amount, LedgerError> {
        compute_fee(amount, self.rate_ppm)
    }

    /// Split `amount` into fee and net. Fails with `Overflow` when the rate
    /// exceeds one million ppm far enough that the fee outgrows the amount.
    pub fn split(&self, amount: Amount) -> Result<FeeSplit, LedgerError> {
        let fee = self.fee(amount)?;
        let net = amount.checked_sub(fee).ok_or(LedgerError::Overflow)?;
        Ok(FeeSplit { fee, net })
    }

    /// Replace the rate, returning the previous one.
    pub(crate) fn set_rate(&mut self, rate_ppm: FeeRate) -> FeeRate {
        std::mem::replace(&mut self.rate_ppm, rate_ppm)
    }
}
