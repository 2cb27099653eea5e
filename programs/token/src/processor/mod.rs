//! Instruction Processors
//!
//! This module contains the business logic for each operation.
//! Each operation has its own file for clarity and maintainability.
//!
//! Every processor follows the same cycle: read what it needs from the
//! store, validate and compute in memory, write the results back, and
//! return. Nothing is cached between calls.

pub mod allowance;
pub mod approve;
pub mod balance;
pub mod create_account;
pub mod initialize;
pub mod token_info;
pub mod transfer;

pub use transfer::TransferOutcome;

use crate::error::LedgerError;
use crate::host::LedgerContext;
use crate::instruction::LedgerInstruction;
use crate::state::LedgerMetadata;

/// Value returned to the host for a successful operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerResponse {
    /// `Initialize`, `Approve`
    Empty,
    /// `CreateAccount`
    CallerId(String),
    /// `Allowance`
    Allowance(i64),
    /// `Transfer`
    Transfer(TransferOutcome),
    /// `Balance`
    Balance(u64),
    /// `TokenInfo`
    Metadata(LedgerMetadata),
}

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Parse a text invocation and process it.
    pub fn invoke<S: AsRef<str>>(
        ctx: &mut LedgerContext<'_>,
        function: &str,
        args: &[S],
    ) -> Result<LedgerResponse, LedgerError> {
        let instruction = LedgerInstruction::unpack(function, args)?;
        Self::process(ctx, instruction)
    }

    /// Process a ledger instruction
    pub fn process(
        ctx: &mut LedgerContext<'_>,
        instruction: LedgerInstruction,
    ) -> Result<LedgerResponse, LedgerError> {
        tracing::info!(
            mutating = instruction.is_mutating(),
            "Instruction: {}",
            instruction.name()
        );

        // Route to appropriate handler
        match instruction {
            LedgerInstruction::Initialize {
                token_name,
                token_symbol,
                creator_name,
                total_supply,
            } => {
                initialize::process(ctx, &token_name, &token_symbol, &creator_name, &total_supply)?;
                Ok(LedgerResponse::Empty)
            }

            LedgerInstruction::CreateAccount { display_name } => {
                create_account::process(ctx, &display_name).map(LedgerResponse::CallerId)
            }

            LedgerInstruction::Approve { spender, amount } => {
                approve::process(ctx, &spender, amount)?;
                Ok(LedgerResponse::Empty)
            }

            LedgerInstruction::Allowance { owner_id, spender } => {
                allowance::process(ctx, &owner_id, &spender).map(LedgerResponse::Allowance)
            }

            LedgerInstruction::Transfer { from, to, amount } => {
                transfer::process(ctx, &from, &to, amount).map(LedgerResponse::Transfer)
            }

            LedgerInstruction::Balance { display_name } => {
                balance::process(ctx, &display_name).map(LedgerResponse::Balance)
            }

            LedgerInstruction::TokenInfo => token_info::process(ctx).map(LedgerResponse::Metadata),
        }
    }
}
