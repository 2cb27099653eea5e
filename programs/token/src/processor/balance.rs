//! Balance Processor

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::state::{AccountRecord, Record};

/// Process Balance
///
/// An account that was never created reads as 0, not as an error.
pub fn process(ctx: &LedgerContext<'_>, display_name: &str) -> Result<u64, LedgerError> {
    Ok(AccountRecord::load(ctx, display_name)?
        .map(|record| record.balance)
        .unwrap_or(0))
}
