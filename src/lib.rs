//! NTRU-style lattice public-key encryption
//!
//! This crate implements key generation, encryption and decryption over the
//! truncated polynomial ring Z[X]/(X^N - 1) with a small modulus p and a
//! large modulus q.
//!
//! Key components:
//! - Ring arithmetic, centering and a real polynomial inverse (extended
//!   Euclid over GF(P) with Newton lifting to prime powers)
//! - Ternary sampling from a ChaCha20 CSPRNG
//! - Lossless balanced-ternary encoding of arbitrary bytes
//!
//! # Example
//!
//! ```
//! use ntru_lattice::{decrypt, encrypt, generate_keys, NtruParams};
//!
//! let params = NtruParams::toy();
//! let keys = generate_keys(&params).unwrap();
//!
//! let ciphertext = encrypt(b"HOLA", &keys.public, &params).unwrap();
//! let plaintext = decrypt(&ciphertext, &keys.private, &params).unwrap();
//! assert_eq!(plaintext, b"HOLA");
//! ```

pub mod encoding;
pub mod error;
pub mod math;
pub mod ntru;
pub mod params;

use tracing::trace;

use crate::error::invalid_params;

pub use error::{NtruError, Result};
pub use math::{Poly, TernarySampler};
pub use ntru::{Ciphertext, KeyPair, PrivateKey, PublicKey};
pub use params::NtruParams;

fn check_key_params(key_params: &NtruParams, params: &NtruParams) -> Result<()> {
    if key_params != params {
        return Err(invalid_params!(
            "key was generated for {:?}, not {:?}",
            key_params,
            params
        ));
    }
    Ok(())
}

/// Generate a key pair using a fresh OS-seeded sampler
pub fn generate_keys(params: &NtruParams) -> Result<KeyPair> {
    let mut sampler = TernarySampler::new(params.n);
    generate_keys_with_sampler(params, &mut sampler)
}

/// Generate a key pair drawing all randomness from `sampler`
pub fn generate_keys_with_sampler(
    params: &NtruParams,
    sampler: &mut TernarySampler,
) -> Result<KeyPair> {
    KeyPair::generate(params, sampler)
}

/// Encrypt a byte message using a fresh OS-seeded sampler
pub fn encrypt(message: &[u8], public_key: &PublicKey, params: &NtruParams) -> Result<Ciphertext> {
    let mut sampler = TernarySampler::new(params.n);
    encrypt_with_sampler(message, public_key, params, &mut sampler)
}

/// Encrypt a byte message, one fresh r per block drawn from `sampler`
pub fn encrypt_with_sampler(
    message: &[u8],
    public_key: &PublicKey,
    params: &NtruParams,
    sampler: &mut TernarySampler,
) -> Result<Ciphertext> {
    params.validate()?;
    check_key_params(public_key.params(), params)?;

    let blocks = encoding::encode(message, params.n)
        .iter()
        .map(|m| public_key.encrypt_block(m, sampler))
        .collect::<Result<Vec<_>>>()?;

    trace!(bytes = message.len(), blocks = blocks.len(), "encrypted message");
    Ok(Ciphertext::from_blocks(blocks))
}

/// Decrypt a ciphertext back into the original bytes
///
/// Either the whole message is returned or an error; no partial plaintext.
pub fn decrypt(
    ciphertext: &Ciphertext,
    private_key: &PrivateKey,
    params: &NtruParams,
) -> Result<Vec<u8>> {
    params.validate()?;
    check_key_params(private_key.params(), params)?;
    ciphertext.validate(params)?;

    let blocks = ciphertext
        .blocks()
        .iter()
        .map(|e| private_key.decrypt_block(e))
        .collect::<Result<Vec<_>>>()?;

    let message = encoding::decode(&blocks)?;
    trace!(bytes = message.len(), blocks = blocks.len(), "decrypted message");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_params_mismatch() {
        let params = NtruParams::toy();
        let keys = generate_keys(&params).unwrap();
        let other = NtruParams::moderate();

        assert!(matches!(
            encrypt(b"x", &keys.public, &other),
            Err(NtruError::InvalidParameters(_))
        ));

        let ciphertext = encrypt(b"x", &keys.public, &params).unwrap();
        assert!(matches!(
            decrypt(&ciphertext, &keys.private, &other),
            Err(NtruError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_params() {
        let params = NtruParams {
            n: 12,
            ..NtruParams::toy()
        };
        assert!(generate_keys(&params).is_err());
    }

    #[test]
    fn test_seeded_roundtrip() {
        let params = NtruParams::toy();
        let mut sampler = TernarySampler::with_seed(params.n, 2024);
        let keys = generate_keys_with_sampler(&params, &mut sampler).unwrap();

        let ct = encrypt_with_sampler(b"seeded", &keys.public, &params, &mut sampler).unwrap();
        assert_eq!(decrypt(&ct, &keys.private, &params).unwrap(), b"seeded");
    }
}
