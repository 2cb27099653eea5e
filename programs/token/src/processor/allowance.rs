//! Allowance Processor
//!
//! Read-only lookup of an approval.

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::state::allowance;

/// Process Allowance
///
/// # Errors
///
/// * `NoAllowance` - `owner_id` never approved `spender`
/// * `Decode` - the stored value is not decimal text
pub fn process(ctx: &LedgerContext<'_>, owner_id: &str, spender: &str) -> Result<i64, LedgerError> {
    allowance::load(ctx, owner_id, spender)?.ok_or_else(|| LedgerError::NoAllowance {
        owner: owner_id.to_string(),
        spender: spender.to_string(),
    })
}
