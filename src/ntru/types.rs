//! NTRU key and ciphertext types.
//!
//! All of them are immutable once built: fields are private and the only
//! constructors are key generation, encryption, and `from_bytes`, which
//! re-checks the same invariants.

use std::fmt;

use crate::error::{NtruError, Result};
use crate::math::Poly;
use crate::params::NtruParams;
use serde::{Deserialize, Serialize};

/// NTRU public key h = p·f_q·g (mod q).
///
/// Freely shareable. Carries the parameter set it was generated under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    params: NtruParams,
    h: Poly,
}

/// NTRU private key: f = 1 + p·F and f_p = f^(-1) mod p.
///
/// `Debug` output never includes key material.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    params: NtruParams,
    f: Poly,
    fp: Poly,
}

/// A matching public/private key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

/// Ciphertext: one polynomial with coefficients in [0, q) per message block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    blocks: Vec<Poly>,
}

pub(crate) fn check_residues(poly: &Poly, n: usize, modulus: u64, what: &str) -> Result<()> {
    if poly.dimension() != n {
        return Err(NtruError::InvalidCiphertext(format!(
            "{} has dimension {}, expected {}",
            what,
            poly.dimension(),
            n
        )));
    }
    if poly
        .coeffs()
        .iter()
        .any(|&c| c < 0 || c as u64 >= modulus)
    {
        return Err(NtruError::InvalidCiphertext(format!(
            "{} has coefficients outside [0, {})",
            what, modulus
        )));
    }
    Ok(())
}

impl PublicKey {
    pub(crate) fn new(params: NtruParams, h: Poly) -> Self {
        Self { params, h }
    }

    /// Parameter set of this key
    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    /// The public polynomial h, coefficients in [0, q)
    pub fn h(&self) -> &Poly {
        &self.h
    }

    /// Serialize with bincode
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize with bincode and re-validate
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key: Self = bincode::deserialize(bytes)?;
        key.params.validate()?;
        check_residues(&key.h, key.params.n, key.params.q, "public key")
            .map_err(|e| NtruError::Serialization(e.to_string()))?;
        Ok(key)
    }
}

impl PrivateKey {
    pub(crate) fn new(params: NtruParams, f: Poly, fp: Poly) -> Self {
        Self { params, f, fp }
    }

    /// Parameter set of this key
    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    /// The private polynomial f = 1 + p·F (integer coefficients)
    pub fn f(&self) -> &Poly {
        &self.f
    }

    /// f^(-1) mod p, coefficients in [0, p)
    pub fn fp(&self) -> &Poly {
        &self.fp
    }

    /// Check that f·f_p ≡ 1 (mod p)
    pub fn verify(&self) -> bool {
        let n = self.params.n;
        self.f.dimension() == n
            && self.fp.dimension() == n
            && self.f.mul_mod(&self.fp, self.params.p) == Poly::one(n)
    }

    /// Serialize with bincode
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize with bincode and re-validate
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key: Self = bincode::deserialize(bytes)?;
        key.params.validate()?;
        if !key.verify() {
            return Err(NtruError::Serialization(
                "private key f_p is not the inverse of f mod p".into(),
            ));
        }
        Ok(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl KeyPair {
    /// Check that the private half is internally consistent
    pub fn verify(&self) -> bool {
        self.public.params == self.private.params && self.private.verify()
    }
}

impl Ciphertext {
    pub(crate) fn from_blocks(blocks: Vec<Poly>) -> Self {
        Self { blocks }
    }

    /// Ciphertext blocks in message order
    pub fn blocks(&self) -> &[Poly] {
        &self.blocks
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if there are no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check every block against a parameter set
    pub fn validate(&self, params: &NtruParams) -> Result<()> {
        if self.blocks.is_empty() {
            return Err(NtruError::InvalidCiphertext("no blocks".into()));
        }
        for (i, block) in self.blocks.iter().enumerate() {
            check_residues(block, params.n, params.q, &format!("block {}", i))?;
        }
        Ok(())
    }

    /// Serialize with bincode
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize with bincode
    ///
    /// Block shapes are checked against the key's parameters at decryption.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
