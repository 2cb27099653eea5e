//! Account Record
//!
//! One record per token holder. It carries a copy of the token's name and
//! symbol, the holder's display name and identity, the balance, and whether
//! the holder is the minter or an ordinary client.
//!
//! # Lifecycle
//!
//! - Created by `Initialize` (the minter, holding the whole supply) or by
//!   `CreateAccount` (a client, balance 0).
//! - Balance adjusted by `Transfer`.
//! - Never deleted.
//!
//! # Wire Format
//!
//! JSON with these field names:
//!
//! ```text
//! {"token_name":"Coin","token_symbol":"COI","client_name":"Bob",
//!  "holder_id":"x509::bob","holder_balance":30,"holder_designation":"Client"}
//! ```

use crate::error::LedgerError;
use crate::state::Record;
use serde::{Deserialize, Serialize};

// =============================================================================
// DESIGNATION
// =============================================================================

/// Role of a token holder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Designation {
    /// Created the token and received the initial supply.
    Minter,

    /// Any account opened through `CreateAccount`.
    Client,
}

// =============================================================================
// ACCOUNT RECORD
// =============================================================================

/// Persisted state of one token holder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub token_name: String,
    pub token_symbol: String,

    /// Display name; also the storage key for client accounts.
    #[serde(rename = "client_name")]
    pub holder_name: String,

    /// Caller identity that created the record.
    pub holder_id: String,

    /// Token balance. Unsigned, so a stored negative balance fails to decode.
    #[serde(rename = "holder_balance")]
    pub balance: u64,

    #[serde(rename = "holder_designation")]
    pub designation: Designation,
}

impl AccountRecord {
    /// The creator's record at genesis: the whole supply, as minter.
    pub fn minter(
        token_name: &str,
        token_symbol: &str,
        holder_name: &str,
        holder_id: &str,
        total_supply: u64,
    ) -> Self {
        Self {
            token_name: token_name.to_string(),
            token_symbol: token_symbol.to_string(),
            holder_name: holder_name.to_string(),
            holder_id: holder_id.to_string(),
            balance: total_supply,
            designation: Designation::Minter,
        }
    }

    /// A freshly opened client account with zero balance.
    pub fn client(token_name: &str, token_symbol: &str, holder_name: &str, holder_id: &str) -> Self {
        Self {
            token_name: token_name.to_string(),
            token_symbol: token_symbol.to_string(),
            holder_name: holder_name.to_string(),
            holder_id: holder_id.to_string(),
            balance: 0,
            designation: Designation::Client,
        }
    }
}

impl Record for AccountRecord {
    fn encode(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        serde_json::to_vec(self).map_err(|e| LedgerError::decode(key, e))
    }

    fn decode(key: &str, bytes: &[u8]) -> Result<Self, LedgerError> {
        serde_json::from_slice(bytes).map_err(|e| LedgerError::decode(key, e))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Field names must match what existing ledgers already hold.
    #[test]
    fn test_wire_field_names() {
        let record = AccountRecord::client("Coin", "COI", "Bob", "x509::bob");
        let json: serde_json::Value =
            serde_json::from_slice(&record.encode("Bob").unwrap()).unwrap();

        assert_eq!(json["token_name"], "Coin");
        assert_eq!(json["token_symbol"], "COI");
        assert_eq!(json["client_name"], "Bob");
        assert_eq!(json["holder_id"], "x509::bob");
        assert_eq!(json["holder_balance"], 0);
        assert_eq!(json["holder_designation"], "Client");
    }

    #[test]
    fn test_decode_existing_document() {
        let bytes = br#"{"token_name":"Coin","token_symbol":"COI","client_name":"Alice",
            "holder_id":"alice","holder_balance":1000,"holder_designation":"Minter"}"#;
        let record = AccountRecord::decode("alice", bytes).unwrap();

        assert_eq!(record.balance, 1000);
        assert_eq!(record.designation, Designation::Minter);
        assert_eq!(record.holder_name, "Alice");
    }

    #[test]
    fn test_decode_negative_balance_fails() {
        let bytes = br#"{"token_name":"","token_symbol":"","client_name":"Eve",
            "holder_id":"eve","holder_balance":-5,"holder_designation":"Client"}"#;
        let err = AccountRecord::decode("Eve", bytes).unwrap_err();
        assert_eq!(err.code(), 3);
    }

    #[test]
    fn test_decode_unknown_designation_fails() {
        let bytes = br#"{"token_name":"","token_symbol":"","client_name":"Eve",
            "holder_id":"eve","holder_balance":5,"holder_designation":"Admin"}"#;
        assert!(matches!(
            AccountRecord::decode("Eve", bytes),
            Err(LedgerError::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_garbage_names_key() {
        match AccountRecord::decode("Bob", b"not json") {
            Err(LedgerError::Decode { key, .. }) => assert_eq!(key, "Bob"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
