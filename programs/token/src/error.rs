//! Custom Error Types
//!
//! This module defines all errors that the ledger can return.
//! Each error has a unique numeric code that hosts can match against.
//!
//! # Errors vs. Outcomes
//!
//! A transfer that is declined for a business reason (no approval, zero
//! approval, insufficient balance) is NOT an error. Those come back as
//! `Ok(TransferOutcome::..)`. Everything in this module is a real failure:
//! bad input, a broken store, or bytes that do not decode.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-1 | Input errors |
//! | 2-3 | Storage and decoding errors |
//! | 4-5 | Missing state |
//! | 6-7 | Transfer errors |
//! | 8 | Dispatch errors |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::LedgerError;
//!
//! fn some_check(from: &str, to: &str) -> Result<(), LedgerError> {
//!     if from == to {
//!         return Err(LedgerError::SelfTransfer);
//!     }
//!     Ok(())
//! }
//! ```

use crate::host::StoreError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by any ledger operation.
///
/// # Important
///
/// Codes returned by [`LedgerError::code`] are part of the host contract.
/// Never renumber an existing variant; always add new errors at the end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // =========================================================================
    // INPUT ERRORS (0-1)
    // =========================================================================

    /// Error 0: A numeric argument could not be parsed.
    ///
    /// E.g. `Initialize(.., "ten")` or a negative transfer amount.
    #[error("invalid argument `{name}`: {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    /// Error 1: An instruction was invoked with the wrong number of arguments.
    #[error("{instruction} expects {expected} arguments, got {actual}")]
    WrongArgumentCount {
        instruction: &'static str,
        expected: usize,
        actual: usize,
    },

    // =========================================================================
    // STORAGE AND DECODING ERRORS (2-3)
    // =========================================================================

    /// Error 2: The host store failed a read, a write, or key composition.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Error 3: Stored bytes do not match the expected record shape.
    #[error("could not decode value at key {key:?}: {reason}")]
    Decode { key: String, reason: String },

    // =========================================================================
    // MISSING STATE (4-5)
    // =========================================================================

    /// Error 4: No allowance entry exists for the owner/spender pair.
    ///
    /// Distinct from an explicit approval of 0, which reads back as `Ok(0)`.
    #[error("no allowance from {owner:?} to {spender:?}")]
    NoAllowance { owner: String, spender: String },

    /// Error 5: A transfer named an account that has no record.
    #[error("no account record at key {key:?}")]
    AccountNotFound { key: String },

    // =========================================================================
    // TRANSFER ERRORS (6-7)
    // =========================================================================

    /// Error 6: Source and destination are the same account.
    ///
    /// Raised only once the transfer has passed the approval and balance
    /// checks. Both records would be read before either is written, so the credit
    /// would overwrite the debit and mint `amount` new tokens.
    #[error("self transfer not allowed")]
    SelfTransfer,

    /// Error 7: A balance update would overflow.
    #[error("arithmetic overflow")]
    Overflow,

    // =========================================================================
    // DISPATCH ERRORS (8)
    // =========================================================================

    /// Error 8: The host asked for an operation the ledger does not expose.
    #[error("unknown instruction {0:?}")]
    UnknownInstruction(String),
}

impl LedgerError {
    /// Stable numeric code for this error.
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::InvalidArgument { .. } => 0,
            LedgerError::WrongArgumentCount { .. } => 1,
            LedgerError::Storage(_) => 2,
            LedgerError::Decode { .. } => 3,
            LedgerError::NoAllowance { .. } => 4,
            LedgerError::AccountNotFound { .. } => 5,
            LedgerError::SelfTransfer => 6,
            LedgerError::Overflow => 7,
            LedgerError::UnknownInstruction(_) => 8,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, value: impl Into<String>) -> Self {
        LedgerError::InvalidArgument {
            name,
            value: value.into(),
        }
    }

    pub(crate) fn decode(key: impl Into<String>, reason: impl ToString) -> Self {
        LedgerError::Decode {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY CODES AND NOT JUST MESSAGES?
================================

Hosts often surface failures across a process or language boundary where
only an integer survives cleanly. `code()` gives each variant a fixed
number so a client can do:

    match code {
        4 => show("nothing approved yet"),
        6 => show("pick a different recipient"),
        _ => show("ledger failure"),
    }

Since variants carry data we cannot use `e as u32`; the match in `code()`
is the single place the numbering lives.

THE #[from] ATTRIBUTE
=====================

    Storage(#[from] StoreError)

generates `impl From<StoreError> for LedgerError`, so every store call
inside an operation can just use `?`:

    let bytes = ctx.store.get(&key)?;   // StoreError -> LedgerError::Storage

DECLINED TRANSFERS ARE NOT HERE
===============================

"approval required", "approved amount is zero" and "insufficient balance"
are normal answers to a transfer request. Modelling them as errors would
make hosts roll back, retry or alert on ordinary user behaviour. They
live in `processor::transfer::TransferOutcome` instead.
*/
