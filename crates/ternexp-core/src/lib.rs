//! Toy ternary-exponentiation character cipher.
//!
//! This crate reproduces a short pedagogical substitution scheme: a fixed
//! three-character table maps each symbol to a `(base, exp1, exp2)` triple,
//! encoding raises the base to two exponents (the second perturbed by a
//! public key), and decoding brute-forces the same table until the pair
//! matches. It provides:
//! - Key generation from bounded random draws.
//! - Per-character encoding and brute-force decoding.
//! - An injectable trace sink for the diagnostic output both operations emit.
//!
//! The scheme is a demonstration snippet, not an engineered cipher: the
//! private key never participates in decoding, the alphabet is three symbols,
//! and there is no hardness assumption anywhere. Do not use it to protect
//! anything.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod keys;
mod pow;
mod table;
mod trace;

pub use crate::cipher::{
    decrypt_ternary, decrypt_ternary_with, encrypt_char, encrypt_char_with, TernaryPair,
};
pub use crate::keys::{generate_keys, generate_keys_with, KeyPair};
pub use crate::pow::custom_pow;
pub use crate::table::{lookup_char, CharEntry, CHAR_TABLE};
pub use crate::trace::{CaptureSink, LogSink, NullSink, TraceSink};
