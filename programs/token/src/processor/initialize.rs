//! Initialize Processor
//!
//! Genesis: records the token metadata and gives the entire supply to the
//! caller.

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::state::{AccountRecord, LedgerMetadata, Record};
use crate::utils::*;

/// Process Initialize
///
/// Writes:
/// 0. The four metadata keys (supply as the given text)
/// 1. The creator's `AccountRecord`, keyed by the caller's identity
///
/// The creator record is keyed by identity, not by `creator_name`, unlike
/// every other account.
pub fn process(
    ctx: &mut LedgerContext<'_>,
    token_name: &str,
    token_symbol: &str,
    creator_name: &str,
    total_supply_text: &str,
) -> Result<(), LedgerError> {
    let creator_id = ctx.caller_id();

    // Validate supply before writing anything
    let total_supply: u64 = parse_arg("total_supply", total_supply_text)?;

    LedgerMetadata::store(ctx, token_name, token_symbol, creator_name, total_supply_text)?;

    let creator = AccountRecord::minter(
        token_name,
        token_symbol,
        creator_name,
        &creator_id,
        total_supply,
    );
    creator.save(ctx, &creator_id)?;

    tracing::info!(
        token = token_name,
        symbol = token_symbol,
        creator = creator_name,
        total_supply,
        "ledger initialized"
    );
    Ok(())
}
