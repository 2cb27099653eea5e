//! Ledger Metadata
//!
//! Token name, symbol, creator display name and total supply. Written once
//! by `Initialize`, each field under its own fixed key as raw text, and never
//! updated afterwards.

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::utils::parse_arg;

/// Genesis description of the token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerMetadata {
    pub token_name: String,
    pub token_symbol: String,
    pub creator_name: String,
    /// `None` until the ledger has been initialized.
    pub total_supply: Option<u64>,
}

impl LedgerMetadata {
    /// Read all four fields. Absent fields come back empty.
    pub fn load(ctx: &LedgerContext<'_>) -> Result<Self, LedgerError> {
        let keys = &ctx.config().metadata_keys;
        let total_supply = match read_text(ctx, &keys.total_supply)? {
            Some(text) => Some(
                parse_arg::<u64>("total_supply", &text)
                    .map_err(|_| LedgerError::decode(keys.total_supply.as_str(), "not a supply"))?,
            ),
            None => None,
        };
        Ok(Self {
            token_name: read_text(ctx, &keys.token_name)?.unwrap_or_default(),
            token_symbol: read_text(ctx, &keys.token_symbol)?.unwrap_or_default(),
            creator_name: read_text(ctx, &keys.creator_name)?.unwrap_or_default(),
            total_supply,
        })
    }

    /// Write the four fields. `total_supply_text` is stored verbatim.
    pub(crate) fn store(
        ctx: &mut LedgerContext<'_>,
        token_name: &str,
        token_symbol: &str,
        creator_name: &str,
        total_supply_text: &str,
    ) -> Result<(), LedgerError> {
        let keys = ctx.config().metadata_keys.clone();
        ctx.put_state(&keys.token_name, token_name.as_bytes().to_vec())?;
        ctx.put_state(&keys.token_symbol, token_symbol.as_bytes().to_vec())?;
        ctx.put_state(&keys.creator_name, creator_name.as_bytes().to_vec())?;
        ctx.put_state(&keys.total_supply, total_supply_text.as_bytes().to_vec())
    }
}

/// Read a raw text value; `None` when absent.
pub(crate) fn read_text(ctx: &LedgerContext<'_>, key: &str) -> Result<Option<String>, LedgerError> {
    match ctx.get_state(key)? {
        Some(bytes) => String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| LedgerError::decode(key, e)),
        None => Ok(None),
    }
}

/// Read a raw text value, replacing invalid UTF-8 with U+FFFD; empty when
/// absent. Only store failures are errors.
pub(crate) fn read_text_lossy(ctx: &LedgerContext<'_>, key: &str) -> Result<String, LedgerError> {
    Ok(ctx
        .get_state(key)?
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default())
}
