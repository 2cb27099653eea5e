//! CreateAccount Processor
//!
//! Opens a client account with zero balance.

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::state::metadata::read_text_lossy;
use crate::state::{AccountRecord, Record};

/// Process CreateAccount
///
/// Returns the caller's identity. The record itself is keyed by
/// `display_name`; an existing record under that name is replaced, balance
/// and all.
///
/// If the ledger was never initialized the record gets empty token name and
/// symbol rather than an error. Name or symbol bytes that are not UTF-8 are
/// copied lossily.
pub fn process(ctx: &mut LedgerContext<'_>, display_name: &str) -> Result<String, LedgerError> {
    let keys = ctx.config().metadata_keys.clone();
    let token_name = read_text_lossy(ctx, &keys.token_name)?;
    let token_symbol = read_text_lossy(ctx, &keys.token_symbol)?;

    let client_id = ctx.caller_id();

    let client = AccountRecord::client(&token_name, &token_symbol, display_name, &client_id);
    client.save(ctx, display_name)?;

    tracing::debug!(holder = display_name, "client account created");
    Ok(client_id)
}
