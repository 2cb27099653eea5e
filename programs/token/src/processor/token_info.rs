//! TokenInfo Processor

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::state::LedgerMetadata;

/// Process TokenInfo
pub fn process(ctx: &LedgerContext<'_>) -> Result<LedgerMetadata, LedgerError> {
    LedgerMetadata::load(ctx)
}
