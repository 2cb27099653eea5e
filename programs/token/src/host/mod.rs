//! Host Interfaces
//!
//! The ledger owns no storage and no notion of "who is calling". Both come
//! from the host execution environment through two narrow traits:
//!
//! | Trait | Provides |
//! |-------|----------|
//! | [`StateStore`] | `get`, `put`, `composite_key` over string keys |
//! | [`IdentityProvider`] | the caller's identity for the current call |
//!
//! Every operation receives a [`LedgerContext`] bundling one of each plus
//! the key layout. Nothing survives between calls: the store is the only
//! source of truth.
//!
//! # Atomicity
//!
//! An operation may issue several `put`s. Hosts must make all writes of one
//! call visible together or not at all (see [`memory::MemoryStore::execute`]
//! for the reference behaviour).

#[cfg(feature = "memory-store")]
pub mod memory;

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use thiserror::Error;

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Failures reported by a [`StateStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Reading a key failed.
    #[error("read of {key:?} failed: {reason}")]
    Read { key: String, reason: String },

    /// Writing a key failed.
    #[error("write of {key:?} failed: {reason}")]
    Write { key: String, reason: String },

    /// A composite key component contains a reserved character.
    #[error("invalid composite key component {component:?}")]
    InvalidKeyComponent { component: String },
}

// =============================================================================
// STATE STORE
// =============================================================================

/// Delimiter placed around every composite key component.
pub const COMPOSITE_KEY_DELIMITER: char = '\u{0}';

/// Largest code point, reserved by composite-key range scans.
pub const MAX_UNICODE_RUNE: char = '\u{10FFFF}';

/// Transactional key-value store supplied by the host.
pub trait StateStore {
    /// Read the value at `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` at `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Build a key from a prefix and ordered parts.
    ///
    /// Distinct `(prefix, parts)` tuples must map to distinct keys. The
    /// default layout is `\0prefix\0part1\0part2\0`.
    fn composite_key(&self, prefix: &str, parts: &[&str]) -> Result<String, StoreError> {
        let mut key = String::with_capacity(
            2 + prefix.len() + parts.iter().map(|p| p.len() + 1).sum::<usize>(),
        );
        key.push(COMPOSITE_KEY_DELIMITER);
        for component in std::iter::once(&prefix).chain(parts.iter()) {
            validate_key_component(component)?;
            key.push_str(component);
            key.push(COMPOSITE_KEY_DELIMITER);
        }
        Ok(key)
    }
}

fn validate_key_component(component: &str) -> Result<(), StoreError> {
    if component.contains(COMPOSITE_KEY_DELIMITER) || component.contains(MAX_UNICODE_RUNE) {
        return Err(StoreError::InvalidKeyComponent {
            component: component.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// IDENTITY PROVIDER
// =============================================================================

/// Source of the caller's identity for the operation being executed.
///
/// The ledger trusts the returned value unconditionally; verifying it is
/// the host's job.
pub trait IdentityProvider {
    fn current_caller_id(&self) -> String;
}

/// Identity provider that always reports the same caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedIdentity(String);

impl FixedIdentity {
    pub fn new(caller_id: impl Into<String>) -> Self {
        Self(caller_id.into())
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_caller_id(&self) -> String {
        self.0.clone()
    }
}

// =============================================================================
// LEDGER CONTEXT
// =============================================================================

/// Everything one ledger operation may touch.
pub struct LedgerContext<'a> {
    store: &'a mut dyn StateStore,
    identity: &'a dyn IdentityProvider,
    config: &'a LedgerConfig,
}

impl<'a> LedgerContext<'a> {
    pub fn new(
        store: &'a mut dyn StateStore,
        identity: &'a dyn IdentityProvider,
        config: &'a LedgerConfig,
    ) -> Self {
        Self {
            store,
            identity,
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        self.config
    }

    pub fn caller_id(&self) -> String {
        self.identity.current_caller_id()
    }

    pub fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.store.get(key)?)
    }

    pub fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        tracing::debug!(key, len = value.len(), "put state");
        Ok(self.store.put(key, value)?)
    }

    /// Key of the allowance `owner` granted to `spender`.
    pub fn allowance_key(&self, owner: &str, spender: &str) -> Result<String, LedgerError> {
        Ok(self
            .store
            .composite_key(&self.config.allowance_prefix, &[owner, spender])?)
    }
}
