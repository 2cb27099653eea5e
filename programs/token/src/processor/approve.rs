//! Approve Processor
//!
//! Sets how much a spender may move on the caller's behalf.

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::state::allowance;

/// Process Approve
///
/// The caller is the owner. The new amount replaces any earlier approval;
/// approvals never add up. No sign check: a negative amount is stored as-is
/// and simply never satisfies the transfer gate.
pub fn process(ctx: &mut LedgerContext<'_>, spender: &str, amount: i64) -> Result<(), LedgerError> {
    let owner_id = ctx.caller_id();

    allowance::store(ctx, &owner_id, spender, amount)?;

    tracing::debug!(owner = %owner_id, spender, amount, "allowance set");
    Ok(())
}
