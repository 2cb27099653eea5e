//! # Token Ledger
//!
//! The business logic of a fungible token ledger: account balances,
//! spending approvals ("allowances") and balance-conserving transfers.
//!
//! ## Overview
//!
//! The ledger is pure logic. It runs inside a host that supplies:
//! - a transactional key-value store ([`host::StateStore`])
//! - the identity of the current caller ([`host::IdentityProvider`])
//!
//! Each operation reads from the store, computes, writes back and returns.
//! No state is held between calls.
//!
//! ## Operations
//!
//! | Operation | Writes | Returns |
//! |-----------|--------|---------|
//! | Initialize | metadata, creator record | nothing |
//! | CreateAccount | client record | caller id |
//! | Approve | allowance | nothing |
//! | Allowance | - | approved amount |
//! | Transfer | both records | [`TransferOutcome`] |
//! | Balance | - | balance (0 if absent) |
//! | TokenInfo | - | [`LedgerMetadata`] |
//!
//! ## Example
//!
//! ```
//! use token_ledger::host::{memory::MemoryStore, FixedIdentity, LedgerContext};
//! use token_ledger::{LedgerConfig, LedgerInstruction, LedgerResponse, Processor};
//!
//! let mut store = MemoryStore::new();
//! let alice = FixedIdentity::new("Alice");
//! let config = LedgerConfig::default();
//!
//! let response = store
//!     .execute(|tx| {
//!         let mut ctx = LedgerContext::new(tx, &alice, &config);
//!         Processor::invoke(&mut ctx, "Initialize", &["Coin", "COI", "Alice", "1000"])?;
//!         Processor::process(
//!             &mut ctx,
//!             LedgerInstruction::Balance { display_name: "Alice".into() },
//!         )
//!     })
//!     .unwrap();
//!
//! assert_eq!(response, LedgerResponse::Balance(1000));
//! ```

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Key layout configuration
pub mod config;

/// Custom error types with unique codes
pub mod error;

/// Interfaces consumed from the host, and the per-call context
pub mod host;

/// Instruction definitions and parsing
pub mod instruction;

/// Instruction processors (business logic)
pub mod processor;

/// Persisted state (account records, metadata, allowances)
pub mod state;

/// Utility functions for validation, math and parsing
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use config::LedgerConfig;
pub use error::LedgerError;
pub use instruction::LedgerInstruction;
pub use processor::{LedgerResponse, Processor, TransferOutcome};
pub use state::{AccountRecord, Designation, LedgerMetadata, Record};

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

CRATE STRUCTURE
===============

src/
├── lib.rs           <- You are here
├── config.rs        <- key layout (TOML)
├── error.rs         <- LedgerError + stable codes
├── instruction.rs   <- LedgerInstruction, text argument parsing
├── host/            <- StateStore, IdentityProvider, LedgerContext
│   └── memory.rs    <- in-memory store with call-scoped transactions
├── processor/       <- one file per operation + the dispatcher
├── state/           <- AccountRecord, LedgerMetadata, allowance codec
└── utils/           <- checked arithmetic, argument parsing

ONE CALL, START TO FINISH
=========================

Host request ("Transfer", ["Alice", "Bob", "30"])
     │
     ▼
┌──────────────────────────────┐
│ host opens a store txn       │
│ builds LedgerContext         │
└──────────────┬───────────────┘
               │
               ▼
┌──────────────────────────────┐
│ Processor::invoke()          │
│   - LedgerInstruction::unpack│
│   - routes to transfer.rs    │
└──────────────┬───────────────┘
               │
               ▼
┌──────────────────────────────┐
│ transfer::process()          │
│   - read allowance + records │
│   - compute new balances     │
│   - put both records         │
└──────────────┬───────────────┘
               │ Ok  -> host commits
               │ Err -> host discards
               ▼
        TransferOutcome / LedgerError

WHY NO STRUCT HOLDING THE STORE?
================================

Operations are free functions over a borrowed LedgerContext. Nothing can
be cached between calls because there is nowhere to put it, which keeps
the store the only source of truth and makes two hosts running the same
call on the same snapshot compute the same result.
*/
