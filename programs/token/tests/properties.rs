//! Property tests for the ledger invariants: conservation of supply,
//! non-negative balances, and allowances that survive any number of
//! transfers.

use proptest::prelude::*;
use token_ledger::host::memory::MemoryStore;
use token_ledger::host::{FixedIdentity, LedgerContext};
use token_ledger::{
    LedgerConfig, LedgerError, LedgerInstruction, LedgerResponse, Processor, TransferOutcome,
};

/// Every holder's identity equals its display name, so the creator's
/// identity-keyed record is also reachable by name.
const HOLDERS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

#[derive(Clone, Debug)]
enum Op {
    Approve { caller: usize, spender: usize, amount: i64 },
    Transfer { caller: usize, from: usize, to: usize, amount: u64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..4usize, 0..4usize, -5i64..200).prop_map(|(caller, spender, amount)| Op::Approve {
            caller,
            spender,
            amount
        }),
        (0..4usize, 0..4usize, 0..4usize, 0u64..600).prop_map(|(caller, from, to, amount)| {
            Op::Transfer {
                caller,
                from,
                to,
                amount,
            }
        }),
    ]
}

fn call(
    store: &mut MemoryStore,
    caller: &str,
    instruction: LedgerInstruction,
) -> Result<LedgerResponse, LedgerError> {
    let identity = FixedIdentity::new(caller);
    let config = LedgerConfig::default();
    store.execute(|tx| {
        let mut ctx = LedgerContext::new(tx, &identity, &config);
        Processor::process(&mut ctx, instruction)
    })
}

fn balance(store: &mut MemoryStore, name: &str) -> u64 {
    match call(
        store,
        name,
        LedgerInstruction::Balance {
            display_name: name.to_string(),
        },
    ) {
        Ok(LedgerResponse::Balance(balance)) => balance,
        other => panic!("unexpected balance response {:?}", other),
    }
}

fn genesis(supply: u64) -> MemoryStore {
    let mut store = MemoryStore::new();
    call(
        &mut store,
        "Alice",
        LedgerInstruction::Initialize {
            token_name: "Coin".into(),
            token_symbol: "COI".into(),
            creator_name: "Alice".into(),
            total_supply: supply.to_string(),
        },
    )
    .unwrap();
    for name in &HOLDERS[1..] {
        call(
            &mut store,
            name,
            LedgerInstruction::CreateAccount {
                display_name: name.to_string(),
            },
        )
        .unwrap();
    }
    store
}

proptest! {
    #[test]
    fn test_supply_is_conserved(
        supply in 0u64..5_000,
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut store = genesis(supply);

        for op in ops {
            match op {
                Op::Approve { caller, spender, amount } => {
                    call(&mut store, HOLDERS[caller], LedgerInstruction::Approve {
                        spender: HOLDERS[spender].to_string(),
                        amount,
                    }).unwrap();
                }
                Op::Transfer { caller, from, to, amount } => {
                    let result = call(&mut store, HOLDERS[caller], LedgerInstruction::Transfer {
                        from: HOLDERS[from].to_string(),
                        to: HOLDERS[to].to_string(),
                        amount,
                    });
                    match result {
                        Ok(LedgerResponse::Transfer(_)) => {}
                        Err(LedgerError::SelfTransfer) => {
                            prop_assert_eq!(from, to);
                        }
                        other => {
                            prop_assert!(false, "unexpected transfer result {:?}", other);
                        }
                    }
                }
            }

            // Balances are u64, so reading them back also proves none went negative
            let total: u64 = HOLDERS.iter().map(|name| balance(&mut store, name)).sum();
            prop_assert_eq!(total, supply);
        }
    }

    #[test]
    fn test_allowance_is_never_consumed(
        supply in 1u64..2_000,
        approved in 1i64..50,
        amount in 1u64..300,
        repeats in 1usize..15,
    ) {
        let mut store = genesis(supply);
        call(&mut store, "Alice", LedgerInstruction::Approve {
            spender: "Bob".into(),
            amount: approved,
        }).unwrap();

        let mut expected_alice = supply;
        for _ in 0..repeats {
            let response = call(&mut store, "Alice", LedgerInstruction::Transfer {
                from: "Alice".into(),
                to: "Bob".into(),
                amount,
            }).unwrap();

            let expected = if expected_alice >= amount {
                expected_alice -= amount;
                TransferOutcome::Completed
            } else {
                TransferOutcome::InsufficientBalance
            };
            prop_assert_eq!(response, LedgerResponse::Transfer(expected));

            let allowance = call(&mut store, "x", LedgerInstruction::Allowance {
                owner_id: "Alice".into(),
                spender: "Bob".into(),
            }).unwrap();
            prop_assert_eq!(allowance, LedgerResponse::Allowance(approved));
        }

        prop_assert_eq!(balance(&mut store, "Alice"), expected_alice);
        prop_assert_eq!(balance(&mut store, "Bob"), supply - expected_alice);
    }
}
