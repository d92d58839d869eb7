use std::path::Path;

use fave_types::constants::{DEFAULT_DECIMALS, DEFAULT_FEE_PPM, DEFAULT_FIXED_SUPPLY};
use fave_types::{addr_to_hex, hex_to_addr, Address, FeeRate, InitMsg, LedgerError, ZERO_ADDRESS};
use serde::{Deserialize, Serialize};

use crate::error::RuntimeError;

/// File name written by [`TokenConfig::init`].
pub const CONFIG_FILE: &str = "fave.toml";

/// Deployment parameters for a Favecoin ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Total supply in base units. Bounded by the TOML integer range.
    #[serde(default = "default_fixed_supply")]
    pub fixed_supply: u64,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    #[serde(default = "default_fee_ppm")]
    pub fee_ppm: FeeRate,
    /// Fee-beneficiary account as `0x`-prefixed hex.
    pub project: String,
}

fn default_fixed_supply() -> u64 {
    DEFAULT_FIXED_SUPPLY as u64
}

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

fn default_fee_ppm() -> FeeRate {
    DEFAULT_FEE_PPM
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            fixed_supply: default_fixed_supply(),
            decimals: default_decimals(),
            fee_ppm: default_fee_ppm(),
            project: addr_to_hex(&ZERO_ADDRESS),
        }
    }
}

impl TokenConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuntimeError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RuntimeError::Config {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents).map_err(|e| RuntimeError::Config {
            reason: format!("failed to parse config file '{}': {}", path.display(), e),
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, RuntimeError> {
        toml::from_str(contents).map_err(|e| RuntimeError::Config {
            reason: e.to_string(),
        })
    }

    pub fn to_toml_string(&self) -> Result<String, RuntimeError> {
        toml::to_string_pretty(self).map_err(|e| RuntimeError::Config {
            reason: format!("failed to serialize config: {}", e),
        })
    }

    /// Write a default `fave.toml` into `dir`, creating it if needed.
    /// The project address must be filled in before deploying.
    pub fn init(dir: impl AsRef<Path>) -> Result<(), RuntimeError> {
        let dir = dir.as_ref();
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
        let toml_str = TokenConfig::default().to_toml_string()?;
        std::fs::write(dir.join(CONFIG_FILE), toml_str)?;
        Ok(())
    }

    pub fn project_address(&self) -> Result<Address, RuntimeError> {
        Ok(hex_to_addr(&self.project)?)
    }

    pub fn validate(&self) -> Result<(), RuntimeError> {
        if self.project_address()? == ZERO_ADDRESS {
            return Err(LedgerError::InvalidAddress.into());
        }
        if self.fixed_supply == 0 {
            return Err(RuntimeError::Config {
                reason: "fixed_supply must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Validate and build the constructor message.
    pub fn to_init_msg(&self) -> Result<InitMsg, RuntimeError> {
        self.validate()?;
        Ok(InitMsg {
            fixed_supply: u128::from(self.fixed_supply),
            project: self.project_address()?,
            decimals: self.decimals,
            fee_ppm: self.fee_ppm,
        })
    }
}
