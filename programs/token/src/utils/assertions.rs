//! Assertion Helper Functions
//!
//! Validation checks and checked arithmetic used by the processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(ctx: &mut LedgerContext<'_>, ...) -> Result<TransferOutcome, LedgerError> {
//!     // Policy checks first, then the write-side guard
//!     assert_distinct_accounts(from, to)?;
//!
//!     source.balance = checked_sub(source.balance, amount)?;
//!     ...
//! }
//! ```

use crate::error::LedgerError;
use num_traits::{CheckedAdd, CheckedSub};

// =============================================================================
// ACCOUNT CHECKS
// =============================================================================

/// Assert that a transfer names two different accounts.
///
/// # Errors
///
/// Returns `SelfTransfer` if `from == to`.
pub fn assert_distinct_accounts(from: &str, to: &str) -> Result<(), LedgerError> {
    if from == to {
        Err(LedgerError::SelfTransfer)
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition that returns a clear error on overflow.
///
/// # Example
///
/// ```ignore
/// dest.balance = checked_add(dest.balance, amount)?;
/// ```
pub fn checked_add<T: CheckedAdd>(a: T, b: T) -> Result<T, LedgerError> {
    a.checked_add(&b).ok_or(LedgerError::Overflow)
}

/// Checked subtraction that returns a clear error on underflow.
pub fn checked_sub<T: CheckedSub>(a: T, b: T) -> Result<T, LedgerError> {
    a.checked_sub(&b).ok_or(LedgerError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_success() {
        assert_eq!(checked_add(100u64, 50).unwrap(), 150);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(checked_add(u64::MAX, 1), Err(LedgerError::Overflow));
    }

    #[test]
    fn test_checked_sub_success() {
        assert_eq!(checked_sub(100u64, 30).unwrap(), 70);
    }

    #[test]
    fn test_checked_sub_underflow() {
        assert_eq!(checked_sub(10u64, 11), Err(LedgerError::Overflow));
    }

    #[test]
    fn test_distinct_accounts() {
        assert!(assert_distinct_accounts("Alice", "Bob").is_ok());
        assert_eq!(
            assert_distinct_accounts("Bob", "Bob"),
            Err(LedgerError::SelfTransfer)
        );
    }
}
