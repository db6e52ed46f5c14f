//! Key generation from bounded random draws.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A generated key pair.
///
/// `private` is always strictly greater than `public`. Note that the
/// reference scheme never consults the private key while decoding; it is
/// carried through the API for signature compatibility only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    /// Public key, drawn uniformly from `[2, 10]`.
    pub public: u64,
    /// Private key, `public` plus a uniform offset from `[1, 10]`.
    pub private: u64,
}

impl KeyPair {
    /// Serializes the key pair with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a key pair with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Generates a key pair from the thread-local random source.
pub fn generate_keys() -> KeyPair {
    generate_keys_with(&mut rand::thread_rng())
}

/// Generates a key pair from the provided RNG, for reproducible runs.
pub fn generate_keys_with<R: Rng>(rng: &mut R) -> KeyPair {
    let public = rng.gen_range(2..=10);
    let private = public + rng.gen_range(1..=10);
    KeyPair { public, private }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn generated_keys_stay_in_bounds() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..1000 {
            let keys = generate_keys_with(&mut rng);
            assert!((2..=10).contains(&keys.public));
            assert!(keys.private > keys.public);
            assert!((1..=10).contains(&(keys.private - keys.public)));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = generate_keys_with(&mut ChaCha20Rng::from_seed([3u8; 32]));
        let b = generate_keys_with(&mut ChaCha20Rng::from_seed([3u8; 32]));
        assert_eq!(a, b);
    }

    #[test]
    fn serialize_roundtrip() {
        let keys = KeyPair {
            public: 4,
            private: 9,
        };
        let bytes = keys.to_bytes().expect("serialize");
        let decoded = KeyPair::from_bytes(&bytes).expect("deserialize");
        assert_eq!(decoded, keys);
    }
}
