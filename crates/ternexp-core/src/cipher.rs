//! Per-character encoding and brute-force decoding.

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::pow::custom_pow;
use crate::table::{lookup_char, CharEntry, CHAR_TABLE};
use crate::trace::{LogSink, TraceSink};

/// The two-integer output of encoding one character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TernaryPair(pub BigUint, pub BigUint);

impl fmt::Display for TernaryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Encodes one character under `pub_key`, tracing to [`LogSink`].
///
/// Returns `None` for characters outside the table; that is the only
/// failure mode.
pub fn encrypt_char(symbol: char, pub_key: u64) -> Option<TernaryPair> {
    encrypt_char_with(symbol, pub_key, &mut LogSink)
}

/// Encodes one character under `pub_key`, tracing to the given sink.
pub fn encrypt_char_with(
    symbol: char,
    pub_key: u64,
    sink: &mut dyn TraceSink,
) -> Option<TernaryPair> {
    let entry = lookup_char(symbol)?;
    let value = encode_entry(entry, pub_key);
    sink.encrypting(entry, pub_key, &value);
    Some(value)
}

/// Recovers the character behind `pair`, tracing to [`LogSink`].
///
/// Scans the table in order, replays the encoding for each entry with the
/// caller's `pub_key`, and returns the first symbol whose pair matches
/// exactly, or `None` once the table is exhausted. `priv_key` appears in
/// the trace but never influences the match; the reference scheme leaves
/// the inverse exponentiation unimplemented and this gap is preserved
/// rather than silently repaired.
pub fn decrypt_ternary(pair: &TernaryPair, priv_key: u64, pub_key: u64) -> Option<char> {
    decrypt_ternary_with(pair, priv_key, pub_key, &mut LogSink)
}

/// Recovers the character behind `pair`, tracing to the given sink.
pub fn decrypt_ternary_with(
    pair: &TernaryPair,
    priv_key: u64,
    pub_key: u64,
    sink: &mut dyn TraceSink,
) -> Option<char> {
    for entry in &CHAR_TABLE {
        let candidate = encode_entry(entry, pub_key);
        sink.decrypting(entry, priv_key, pub_key, &candidate);
        if candidate == *pair {
            return Some(entry.symbol);
        }
    }
    None
}

fn encode_entry(entry: &CharEntry, pub_key: u64) -> TernaryPair {
    TernaryPair(
        custom_pow(entry.base, entry.exp1),
        custom_pow(entry.base, entry.exp2 + pub_key),
    )
}
