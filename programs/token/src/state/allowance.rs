//! Allowance Values
//!
//! An allowance is the amount a spender (named by display name) may move on
//! an owner's (named by identity) behalf. It is stored as decimal text under
//! `composite(prefix, owner, spender)`.
//!
//! Approvals overwrite, they never accumulate, and transfers never consume
//! them: the stored value is a standing ceiling whose sign alone gates a
//! transfer.

use crate::error::LedgerError;
use crate::host::LedgerContext;

/// Encode an approved amount as decimal text.
pub fn encode(amount: i64) -> Vec<u8> {
    amount.to_string().into_bytes()
}

/// Decode decimal text read from `key`.
pub fn decode(key: &str, bytes: &[u8]) -> Result<i64, LedgerError> {
    let text = std::str::from_utf8(bytes).map_err(|e| LedgerError::decode(key, e))?;
    text.parse::<i64>().map_err(|e| LedgerError::decode(key, e))
}

/// Stored allowance from `owner` to `spender`, or `None` if never approved.
pub fn load(ctx: &LedgerContext<'_>, owner: &str, spender: &str) -> Result<Option<i64>, LedgerError> {
    let key = ctx.allowance_key(owner, spender)?;
    match ctx.get_state(&key)? {
        Some(bytes) => decode(&key, &bytes).map(Some),
        None => Ok(None),
    }
}

/// Overwrite the allowance from `owner` to `spender`.
pub fn store(
    ctx: &mut LedgerContext<'_>,
    owner: &str,
    spender: &str,
    amount: i64,
) -> Result<(), LedgerError> {
    let key = ctx.allowance_key(owner, spender)?;
    ctx.put_state(&key, encode(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_decimal_text() {
        assert_eq!(encode(50), b"50".to_vec());
        assert_eq!(encode(-7), b"-7".to_vec());
    }

    #[test]
    fn test_decode_rejects_non_numbers() {
        assert!(matches!(decode("k", b"fifty"), Err(LedgerError::Decode { .. })));
        assert!(matches!(decode("k", b""), Err(LedgerError::Decode { .. })));
        assert!(matches!(decode("k", &[0xff, 0xfe]), Err(LedgerError::Decode { .. })));
    }

    #[test]
    fn test_decode_accepts_signed_values() {
        assert_eq!(decode("k", b"0").unwrap(), 0);
        assert_eq!(decode("k", b"-3").unwrap(), -3);
    }
}
