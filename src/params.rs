//! Parameter sets for NTRU
//!
//! A parameter set fixes the ring Z[X]/(X^N - 1), the two coefficient moduli
//! and the weights of the ternary polynomials F, g and r. Every set is
//! checked so that decryption can never fail on honestly generated data:
//! the worst-case size of `p·r·g + f·m` must stay below q/2.

use crate::error::{invalid_params, Result};
use crate::math::modular::{gcd, is_prime, prime_power};
use serde::{Deserialize, Serialize};

/// Largest supported modulus; ring products are accumulated in u128.
pub const MAX_MODULUS: u64 = 1 << 32;

/// Core cryptographic parameters for NTRU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NtruParams {
    /// Ring degree N (prime)
    pub n: usize,

    /// Small modulus p (prime, typically 3)
    pub p: u64,

    /// Large modulus q (prime power, typically a power of two)
    pub q: u64,

    /// Number of +1 and of -1 coefficients in F, where f = 1 + p·F
    pub df: usize,

    /// Number of +1 and of -1 coefficients in g
    pub dg: usize,

    /// Number of +1 and of -1 coefficients in the ephemeral r
    pub dr: usize,
}

impl NtruParams {
    /// Build and validate a parameter set
    pub fn new(n: usize, p: u64, q: u64, df: usize, dg: usize, dr: usize) -> Result<Self> {
        let params = Self {
            n,
            p,
            q,
            df,
            dg,
            dr,
        };
        params.validate()?;
        Ok(params)
    }

    /// The classroom ring N = 11, p = 3, q = 32.
    ///
    /// Offers no security; useful for tests and worked examples. With
    /// df = 1 there are only 110 choices of F, so two independently
    /// generated toy keys share the same f about 1% of the time and then
    /// decrypt each other's ciphertexts. Use `moderate()` or larger when a
    /// wrong key must fail.
    pub fn toy() -> Self {
        Self {
            n: 11,
            p: 3,
            q: 32,
            df: 1,
            dg: 1,
            dr: 1,
        }
    }

    /// Mid-size ring N = 251, q = 1024
    pub fn moderate() -> Self {
        Self {
            n: 251,
            p: 3,
            q: 1024,
            df: 40,
            dg: 40,
            dr: 40,
        }
    }

    /// Ring N = 509, q = 2048 with weights chosen for a deterministic
    /// decryption guarantee
    pub fn n509() -> Self {
        Self {
            n: 509,
            p: 3,
            q: 2048,
            df: 80,
            dg: 80,
            dr: 80,
        }
    }

    /// Worst-case L-infinity norm of `p·r·g + f·m` before reduction mod q.
    ///
    /// |(r·g)_i| is at most min(wt(r), wt(g)); with f = 1 + p·F and ternary m,
    /// |(f·m)_i| is at most 1 + p·wt(F).
    pub fn noise_bound(&self) -> u64 {
        let wt = |d: usize| (d as u64).saturating_mul(2);
        let rg = wt(self.dr).min(wt(self.dg));
        self.p
            .saturating_mul(rg)
            .saturating_add(1)
            .saturating_add(self.p.saturating_mul(wt(self.df)))
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<()> {
        if !is_prime(self.n as u64) {
            return Err(invalid_params!("ring degree n = {} must be prime", self.n));
        }
        if !is_prime(self.p) {
            return Err(invalid_params!("small modulus p = {} must be prime", self.p));
        }
        if self.q <= self.p {
            return Err(invalid_params!("q = {} must be greater than p = {}", self.q, self.p));
        }
        if self.q > MAX_MODULUS {
            return Err(invalid_params!("q = {} exceeds 2^32", self.q));
        }
        if prime_power(self.q).is_none() {
            return Err(invalid_params!("large modulus q = {} must be a prime power", self.q));
        }
        if gcd(self.p, self.q) != 1 {
            return Err(invalid_params!("p = {} and q = {} must be coprime", self.p, self.q));
        }

        for (name, d) in [("df", self.df), ("dg", self.dg), ("dr", self.dr)] {
            if d.saturating_mul(2) > self.n {
                return Err(invalid_params!(
                    "{} = {} places more than n = {} nonzero coefficients",
                    name,
                    d,
                    self.n
                ));
            }
        }

        // Strict: a centered residue of exactly q/2 is ambiguous in sign
        let bound = self.noise_bound();
        if bound.saturating_mul(2) >= self.q {
            return Err(invalid_params!(
                "worst-case noise {} does not fit below q/2 = {}",
                bound,
                self.q / 2
            ));
        }

        Ok(())
    }
}

impl Default for NtruParams {
    fn default() -> Self {
        Self::n509()
    }
}
