//! Ternary sampling for keys and ephemeral randomness

use super::poly::Poly;
use crate::error::{invalid_params, Result};
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Sampler for ternary polynomials with fixed numbers of +1 and -1 coefficients.
///
/// Backed by ChaCha20 seeded from operating-system entropy. Every key
/// polynomial and every per-block r is drawn from here, and each call
/// advances the stream, so no two samples share randomness.
pub struct TernarySampler {
    n: usize,
    rng: ChaCha20Rng,
}

impl TernarySampler {
    /// Create a sampler for ring degree `n`, seeded from OS entropy
    pub fn new(n: usize) -> Self {
        Self {
            n,
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create a seeded sampler for reproducibility
    ///
    /// Only for tests and known-answer vectors: a fixed seed makes every
    /// "ephemeral" r predictable.
    pub fn with_seed(n: usize, seed: u64) -> Self {
        Self {
            n,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Ring degree of the polynomials this sampler produces
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Sample a polynomial with exactly `d_plus` coefficients equal to +1 and
    /// `d_minus` equal to -1 at uniformly random, distinct positions.
    ///
    /// Returns `InvalidParameters` when `d_plus + d_minus > n`.
    pub fn sample_ternary(&mut self, d_plus: usize, d_minus: usize) -> Result<Poly> {
        let weight = d_plus
            .checked_add(d_minus)
            .filter(|&w| w <= self.n)
            .ok_or_else(|| {
                invalid_params!(
                    "cannot place {} + {} nonzero coefficients in degree {}",
                    d_plus,
                    d_minus,
                    self.n
                )
            })?;

        let mut coeffs = vec![0i64; self.n];
        let positions = index::sample(&mut self.rng, self.n, weight);
        for (k, pos) in positions.into_iter().enumerate() {
            coeffs[pos] = if k < d_plus { 1 } else { -1 };
        }
        Ok(Poly::from_coeffs(coeffs))
    }
}
