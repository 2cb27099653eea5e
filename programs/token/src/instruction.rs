//! Instruction Types
//!
//! This module defines all operations the ledger exposes to its host.
//! Hosts invoke the ledger with an operation name and a list of text
//! arguments; [`LedgerInstruction::unpack`] turns that into a typed value.
//!
//! # Operations
//!
//! | Name | Arguments | Response |
//! |------|-----------|----------|
//! | `Initialize` | tokenName, tokenSymbol, creatorName, totalSupply | none |
//! | `CreateAccount` | displayName | caller id |
//! | `Approve` | spenderName, amount | none |
//! | `Allowance` | ownerId, spenderName | amount |
//! | `Transfer` | fromName, toName, amount | outcome |
//! | `Balance` | displayName | balance |
//! | `TokenInfo` | (none) | metadata |

use crate::error::LedgerError;
use crate::utils::parse_arg;

// =============================================================================
// LEDGER INSTRUCTION ENUM
// =============================================================================

/// All operations supported by the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerInstruction {
    // =========================================================================
    // GENESIS AND ACCOUNTS
    // =========================================================================

    /// Write the token metadata and give the whole supply to the caller.
    ///
    /// `total_supply` stays text: it is validated by the processor and then
    /// stored exactly as given.
    ///
    /// Not idempotent. A second call rewrites metadata and resets the
    /// creator's record.
    Initialize {
        token_name: String,
        token_symbol: String,
        creator_name: String,
        total_supply: String,
    },

    /// Open a client account with zero balance under `display_name`.
    ///
    /// Overwrites any existing record with that name, balance included.
    CreateAccount { display_name: String },

    // =========================================================================
    // ALLOWANCES
    // =========================================================================

    /// Set the caller's allowance for `spender` to `amount`.
    ///
    /// Negative amounts are stored as given.
    Approve { spender: String, amount: i64 },

    /// Read the allowance `owner_id` granted to `spender`.
    Allowance { owner_id: String, spender: String },

    // =========================================================================
    // TOKEN OPERATIONS
    // =========================================================================

    /// Move `amount` from `from` to `to`, gated on the caller's allowance
    /// for `to`.
    Transfer { from: String, to: String, amount: u64 },

    /// Balance of `display_name`; 0 if no record exists.
    Balance { display_name: String },

    /// The four metadata fields.
    TokenInfo,
}

impl LedgerInstruction {
    /// Parse an invocation.
    ///
    /// # Errors
    ///
    /// * `UnknownInstruction` - `function` is not an operation name
    /// * `WrongArgumentCount` - too many or too few arguments
    /// * `InvalidArgument` - a numeric argument does not parse
    pub fn unpack<S: AsRef<str>>(function: &str, args: &[S]) -> Result<Self, LedgerError> {
        let arg = |i: usize| args[i].as_ref().to_string();

        let instruction = match function {
            "Initialize" => {
                expect_args("Initialize", args, 4)?;
                LedgerInstruction::Initialize {
                    token_name: arg(0),
                    token_symbol: arg(1),
                    creator_name: arg(2),
                    total_supply: arg(3),
                }
            }
            "CreateAccount" => {
                expect_args("CreateAccount", args, 1)?;
                LedgerInstruction::CreateAccount {
                    display_name: arg(0),
                }
            }
            "Approve" => {
                expect_args("Approve", args, 2)?;
                LedgerInstruction::Approve {
                    spender: arg(0),
                    amount: parse_arg("amount", args[1].as_ref())?,
                }
            }
            "Allowance" => {
                expect_args("Allowance", args, 2)?;
                LedgerInstruction::Allowance {
                    owner_id: arg(0),
                    spender: arg(1),
                }
            }
            "Transfer" => {
                expect_args("Transfer", args, 3)?;
                LedgerInstruction::Transfer {
                    from: arg(0),
                    to: arg(1),
                    amount: parse_arg("amount", args[2].as_ref())?,
                }
            }
            "Balance" => {
                expect_args("Balance", args, 1)?;
                LedgerInstruction::Balance {
                    display_name: arg(0),
                }
            }
            "TokenInfo" => {
                expect_args("TokenInfo", args, 0)?;
                LedgerInstruction::TokenInfo
            }
            other => return Err(LedgerError::UnknownInstruction(other.to_string())),
        };

        Ok(instruction)
    }

    /// Operation name, as accepted by [`unpack`](Self::unpack).
    pub fn name(&self) -> &'static str {
        match self {
            LedgerInstruction::Initialize { .. } => "Initialize",
            LedgerInstruction::CreateAccount { .. } => "CreateAccount",
            LedgerInstruction::Approve { .. } => "Approve",
            LedgerInstruction::Allowance { .. } => "Allowance",
            LedgerInstruction::Transfer { .. } => "Transfer",
            LedgerInstruction::Balance { .. } => "Balance",
            LedgerInstruction::TokenInfo => "TokenInfo",
        }
    }

    /// Whether the operation writes state.
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            LedgerInstruction::Allowance { .. }
                | LedgerInstruction::Balance { .. }
                | LedgerInstruction::TokenInfo
        )
    }
}

fn expect_args<S>(instruction: &'static str, args: &[S], expected: usize) -> Result<(), LedgerError> {
    if args.len() != expected {
        return Err(LedgerError::WrongArgumentCount {
            instruction,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
