//! Transfer Processor
//!
//! Moves tokens between two accounts named by display name.
//!
//! # Gating
//!
//! The transfer is permitted by the allowance keyed by the CALLER and the
//! RECIPIENT, not the sender. Only the sign of that allowance matters: the
//! amount is never compared with it, and a successful transfer leaves it
//! untouched, so one approval covers any number of transfers.

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::state::{allowance, AccountRecord, Record};
use crate::utils::*;
use std::fmt;

// =============================================================================
// TRANSFER OUTCOME
// =============================================================================

/// Result of a transfer that did not fail.
///
/// Only `Completed` changes balances. The other variants are ordinary
/// answers, not errors: nothing was written and the host should not roll
/// back or retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Balances were moved.
    Completed,

    /// The caller has never approved the recipient.
    ApprovalRequired,

    /// The caller's approval for the recipient is zero or negative.
    ApprovedAmountZero,

    /// The sender holds less than the amount.
    InsufficientBalance,
}

impl TransferOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            TransferOutcome::Completed => "transfer successful",
            TransferOutcome::ApprovalRequired => "approval required",
            TransferOutcome::ApprovedAmountZero => "approved amount is zero",
            TransferOutcome::InsufficientBalance => "insufficient balance",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == TransferOutcome::Completed
    }
}

impl fmt::Display for TransferOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// PROCESSOR
// =============================================================================

/// Process Transfer
///
/// Steps, each short-circuiting:
/// 1. Look up allowance (caller, `to`); absent -> `ApprovalRequired`
/// 2. Allowance <= 0 -> `ApprovedAmountZero`
/// 3. Load both records; absent -> `AccountNotFound`
/// 4. Balance < amount -> `InsufficientBalance`
/// 5. Reject `from == to` with `SelfTransfer`
/// 6. Debit, credit, write both records back under the keys they came from
pub fn process(
    ctx: &mut LedgerContext<'_>,
    from: &str,
    to: &str,
    amount: u64,
) -> Result<TransferOutcome, LedgerError> {
    let caller_id = ctx.caller_id();

    let approved = match allowance::load(ctx, &caller_id, to)? {
        Some(approved) => approved,
        None => return Ok(declined(TransferOutcome::ApprovalRequired, &caller_id, to)),
    };
    if approved <= 0 {
        return Ok(declined(TransferOutcome::ApprovedAmountZero, &caller_id, to));
    }

    let mut source = load_account(ctx, from)?;
    let mut dest = load_account(ctx, to)?;

    if source.balance < amount {
        return Ok(declined(TransferOutcome::InsufficientBalance, &caller_id, to));
    }

    // Both records were read before either write, so a credit to the same
    // key would overwrite the debit
    assert_distinct_accounts(from, to)?;

    source.balance = checked_sub(source.balance, amount)?;
    dest.balance = checked_add(dest.balance, amount)?;

    // Both writes land in the same host transaction
    source.save(ctx, from)?;
    dest.save(ctx, to)?;

    tracing::info!(from, to, amount, "transfer completed");
    Ok(TransferOutcome::Completed)
}

fn load_account(ctx: &LedgerContext<'_>, key: &str) -> Result<AccountRecord, LedgerError> {
    AccountRecord::load(ctx, key)?.ok_or_else(|| LedgerError::AccountNotFound {
        key: key.to_string(),
    })
}

fn declined(outcome: TransferOutcome, caller_id: &str, to: &str) -> TransferOutcome {
    tracing::info!(caller = caller_id, to, reason = outcome.message(), "transfer declined");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(TransferOutcome::Completed.to_string(), "transfer successful");
        assert_eq!(TransferOutcome::ApprovalRequired.message(), "approval required");
        assert_eq!(
            TransferOutcome::ApprovedAmountZero.message(),
            "approved amount is zero"
        );
        assert_eq!(
            TransferOutcome::InsufficientBalance.message(),
            "insufficient balance"
        );
    }

    #[test]
    fn test_only_completed_is_completed() {
        assert!(TransferOutcome::Completed.is_completed());
        assert!(!TransferOutcome::ApprovalRequired.is_completed());
        assert!(!TransferOutcome::ApprovedAmountZero.is_completed());
        assert!(!TransferOutcome::InsufficientBalance.is_completed());
    }
}
