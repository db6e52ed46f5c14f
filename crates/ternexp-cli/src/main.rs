//! Command-line interface for the toy ternary-exponentiation cipher.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use ternexp_core::{decrypt_ternary, encrypt_char, generate_keys_with, TernaryPair, CHAR_TABLE};
use tracing_subscriber::EnvFilter;

/// Ternary-exponentiation cipher CLI (pedagogical, insecure by construction).
#[derive(Parser)]
#[command(
    name = "ternexp",
    version,
    about = "Toy ternary-exponentiation cipher CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a key pair.
    Keygen {
        /// Optional RNG seed for reproducible generation.
        #[arg(long)]
        seed: Option<u64>,
        /// Optional output path for the serialized key pair.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Encode each character of a string under a public key.
    Enc {
        /// Text to encode; every character must be in the table (A, B, C).
        #[arg(long)]
        text: String,
        /// Public key.
        #[arg(long)]
        pub_key: u64,
    },
    /// Decode one encoded pair.
    Dec {
        /// Encoded pair as two decimal integers, e.g. `9,19683`.
        #[arg(long, value_name = "V1,V2")]
        pair: String,
        /// Private key (accepted for signature compatibility; unused).
        #[arg(long)]
        priv_key: u64,
        /// Public key used during encoding.
        #[arg(long)]
        pub_key: u64,
    },
    /// Generate keys, encode every table symbol, and decode each back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { seed, out } => cmd_keygen(seed, out),
        Commands::Enc { text, pub_key } => cmd_enc(&text, pub_key),
        Commands::Dec {
            pair,
            priv_key,
            pub_key,
        } => cmd_dec(&pair, priv_key, pub_key),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_keygen(seed: Option<u64>, out: Option<PathBuf>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let keys = generate_keys_with(&mut rng);
    println!("public: {}", keys.public);
    println!("private: {}", keys.private);
    if let Some(path) = out {
        let bytes = keys.to_bytes().context("serialize key pair")?;
        fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

fn cmd_enc(text: &str, pub_key: u64) -> Result<()> {
    for symbol in text.chars() {
        match encrypt_char(symbol, pub_key) {
            Some(pair) => println!("{symbol}: {pair}"),
            None => bail!("character {symbol:?} is not in the table"),
        }
    }
    Ok(())
}

fn cmd_dec(pair: &str, priv_key: u64, pub_key: u64) -> Result<()> {
    let pair = parse_pair(pair)?;
    match decrypt_ternary(&pair, priv_key, pub_key) {
        Some(symbol) => {
            println!("{pair}: {symbol}");
            Ok(())
        }
        None => bail!("no table entry matches {pair} under pub_key={pub_key}"),
    }
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let keys = generate_keys_with(&mut rng);
    println!("demo keys: public={}, private={}", keys.public, keys.private);

    for entry in &CHAR_TABLE {
        let pair = encrypt_char(entry.symbol, keys.public)
            .context("table symbol must encode")?;
        println!("{} -> {}", entry.symbol, pair);
        let decoded = decrypt_ternary(&pair, keys.private, keys.public);
        println!("{} -> {:?}", pair, decoded);
        if decoded != Some(entry.symbol) {
            bail!("demo roundtrip failed for {}", entry.symbol);
        }
    }
    Ok(())
}

fn parse_pair(input: &str) -> Result<TernaryPair> {
    let (v1, v2) = input
        .split_once(',')
        .context("pair must be two comma-separated integers")?;
    let v1: BigUint = v1.trim().parse().context("parse first pair component")?;
    let v2: BigUint = v2.trim().parse().context("parse second pair component")?;
    Ok(TernaryPair(v1, v2))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_accepts_decimal_components() {
        let pair = parse_pair("9, 19683").expect("valid pair");
        assert_eq!(pair, TernaryPair(BigUint::from(9u32), BigUint::from(19683u32)));
    }

    #[test]
    fn parse_pair_rejects_malformed_input() {
        assert!(parse_pair("9").is_err());
        assert!(parse_pair("9,abc").is_err());
    }
}
