//! Text Argument Parsing
//!
//! Hosts hand the ledger text. Numbers are parsed here so every operation
//! reports a malformed argument the same way.

use crate::error::LedgerError;
use std::str::FromStr;

/// Parse `value` as a `T`, reporting failures against the argument `name`.
///
/// Leading `+` is accepted; surrounding whitespace is not.
pub fn parse_arg<T: FromStr>(name: &'static str, value: &str) -> Result<T, LedgerError> {
    value
        .parse::<T>()
        .map_err(|_| LedgerError::invalid_argument(name, value))
}
