//! Key Layout Configuration
//!
//! Where the ledger keeps its singleton metadata and under which prefix it
//! composes allowance keys. The defaults are the layout every existing
//! deployment uses; override them only for a fresh ledger.
//!
//! ```toml
//! allowance_prefix = "allowance"
//!
//! [metadata_keys]
//! token_name = "ERC20_token_name"
//! token_symbol = "ERC20_token_symbol"
//! creator_name = "Token_creator_name"
//! total_supply = "Total_supply"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOKEN_NAME_KEY: &str = "ERC20_token_name";
pub const DEFAULT_TOKEN_SYMBOL_KEY: &str = "ERC20_token_symbol";
pub const DEFAULT_CREATOR_NAME_KEY: &str = "Token_creator_name";
pub const DEFAULT_TOTAL_SUPPLY_KEY: &str = "Total_supply";
pub const DEFAULT_ALLOWANCE_PREFIX: &str = "allowance";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse ledger config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Key layout of one ledger instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub metadata_keys: MetadataKeys,
    pub allowance_prefix: String,
}

/// Fixed keys of the four metadata fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataKeys {
    pub token_name: String,
    pub token_symbol: String,
    pub creator_name: String,
    pub total_supply: String,
}

impl Default for MetadataKeys {
    fn default() -> Self {
        Self {
            token_name: DEFAULT_TOKEN_NAME_KEY.to_string(),
            token_symbol: DEFAULT_TOKEN_SYMBOL_KEY.to_string(),
            creator_name: DEFAULT_CREATOR_NAME_KEY.to_string(),
            total_supply: DEFAULT_TOTAL_SUPPLY_KEY.to_string(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            metadata_keys: MetadataKeys::default(),
            allowance_prefix: DEFAULT_ALLOWANCE_PREFIX.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Parse a TOML document; absent fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(LedgerConfig::from_toml_str("").unwrap(), LedgerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = LedgerConfig::from_toml_str(
            r#"
            allowance_prefix = "approval"

            [metadata_keys]
            total_supply = "supply"
            "#,
        )
        .unwrap();
        assert_eq!(config.allowance_prefix, "approval");
        assert_eq!(config.metadata_keys.total_supply, "supply");
        assert_eq!(config.metadata_keys.token_name, DEFAULT_TOKEN_NAME_KEY);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(LedgerConfig::from_toml_str("allowance_prefix = 7").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LedgerConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(LedgerConfig::from_toml_str(&text).unwrap(), config);
    }
}
