//! Injectable sinks for the diagnostic trace both operations emit.
//!
//! Encoding emits one `ENCRYPTING` record; decoding emits one `DECRYPTING`
//! record per candidate entry it examines. The records are observability
//! only and carry no semantic weight, but consumers may depend on the text
//! format, so the line renderers below keep the reference field order.

use crate::cipher::TernaryPair;
use crate::table::CharEntry;

/// Receiver for the diagnostic trace.
pub trait TraceSink {
    /// Called once per successful encoding.
    fn encrypting(&mut self, entry: &CharEntry, pub_key: u64, value: &TernaryPair);

    /// Called once per candidate entry the decoder examines.
    fn decrypting(
        &mut self,
        entry: &CharEntry,
        priv_key: u64,
        pub_key: u64,
        value: &TernaryPair,
    );
}

/// Forwards trace lines to [`tracing`] at DEBUG level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn encrypting(&mut self, entry: &CharEntry, pub_key: u64, value: &TernaryPair) {
        tracing::debug!(target: "ternexp", "{}", encrypting_line(entry, pub_key, value));
    }

    fn decrypting(
        &mut self,
        entry: &CharEntry,
        priv_key: u64,
        pub_key: u64,
        value: &TernaryPair,
    ) {
        tracing::debug!(
            target: "ternexp",
            "{}",
            decrypting_line(entry, priv_key, pub_key, value)
        );
    }
}

/// Discards the trace entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn encrypting(&mut self, _entry: &CharEntry, _pub_key: u64, _value: &TernaryPair) {}

    fn decrypting(
        &mut self,
        _entry: &CharEntry,
        _priv_key: u64,
        _pub_key: u64,
        _value: &TernaryPair,
    ) {
    }
}

/// Collects rendered trace lines, mainly for tests.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    /// Rendered lines in emission order.
    pub lines: Vec<String>,
}

impl TraceSink for CaptureSink {
    fn encrypting(&mut self, entry: &CharEntry, pub_key: u64, value: &TernaryPair) {
        self.lines.push(encrypting_line(entry, pub_key, value));
    }

    fn decrypting(
        &mut self,
        entry: &CharEntry,
        priv_key: u64,
        pub_key: u64,
        value: &TernaryPair,
    ) {
        self.lines
            .push(decrypting_line(entry, priv_key, pub_key, value));
    }
}

fn encrypting_line(entry: &CharEntry, pub_key: u64, value: &TernaryPair) -> String {
    format!(
        "ENCRYPTING: char={}, base={}, exp1={}, exp2={}, pub_key={}, encrypted_value={}",
        entry.symbol, entry.base, entry.exp1, entry.exp2, pub_key, value
    )
}

fn decrypting_line(
    entry: &CharEntry,
    priv_key: u64,
    pub_key: u64,
    value: &TernaryPair,
) -> String {
    format!(
        "DECRYPTING: Trying to decrypt with char={}, base={}, exp1={}, exp2={}, \
         priv_key={}, pub_key={}, decrypted_value={}",
        entry.symbol, entry.base, entry.exp1, entry.exp2, priv_key, pub_key, value
    )
}
