//! Ledger State Structures
//!
//! This module defines the values the ledger keeps in the host store.
//!
//! # Key Layout
//!
//! | Key | Value | Written by |
//! |-----|-------|------------|
//! | metadata keys (4 fixed keys) | raw UTF-8 text | `Initialize` |
//! | creator identity | `AccountRecord` JSON | `Initialize` |
//! | holder display name | `AccountRecord` JSON | `CreateAccount`, `Transfer` |
//! | `composite(prefix, owner, spender)` | decimal text | `Approve` |
//!
//! Note the creator record sits under an identity string while every other
//! account sits under a display name. Lookups by display name will not find
//! the creator unless the two happen to be equal.
//!
//! # The Record Trait
//!
//! Structured values implement [`Record`] for serialization:
//!
//! ```ignore
//! let bob = AccountRecord::load(ctx, "Bob")?;   // Read (None if absent)
//! bob.save(ctx, "Bob")?;                         // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod allowance;
pub mod metadata;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::{AccountRecord, Designation};
pub use metadata::LedgerMetadata;

use crate::error::LedgerError;
use crate::host::LedgerContext;

// =============================================================================
// RECORD TRAIT
// =============================================================================

/// A value stored as one document under one key.
pub trait Record: Sized {
    /// Serialize for storage at `key`.
    fn encode(&self, key: &str) -> Result<Vec<u8>, LedgerError>;

    /// Deserialize bytes read from `key`.
    ///
    /// `key` is only used to make errors point at the offending entry.
    fn decode(key: &str, bytes: &[u8]) -> Result<Self, LedgerError>;

    /// Read and decode `key`, or `None` if nothing was ever stored there.
    fn load(ctx: &LedgerContext<'_>, key: &str) -> Result<Option<Self>, LedgerError> {
        match ctx.get_state(key)? {
            Some(bytes) => Self::decode(key, &bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Encode and write under `key`.
    fn save(&self, ctx: &mut LedgerContext<'_>, key: &str) -> Result<(), LedgerError> {
        let bytes = self.encode(key)?;
        ctx.put_state(key, bytes)
    }
}
