//! NTRU key generation

use tracing::debug;

use crate::error::{invalid_params, NtruError, Result};
use crate::math::{Poly, TernarySampler};
use crate::params::NtruParams;

use super::types::{KeyPair, PrivateKey, PublicKey};

/// Number of f candidates tried before giving up.
pub const MAX_KEYGEN_ATTEMPTS: usize = 64;

/// f = 1 + p·F together with f^(-1) mod p and f^(-1) mod q.
struct InvertibleF {
    f: Poly,
    fp: Poly,
    fq: Poly,
}

/// Sample F until f = 1 + p·F is invertible modulo both p and q.
fn sample_invertible_f(
    params: &NtruParams,
    sampler: &mut TernarySampler,
    max_attempts: usize,
) -> Result<InvertibleF> {
    let n = params.n;
    for attempt in 1..=max_attempts {
        let big_f = sampler.sample_ternary(params.df, params.df)?;
        let f = &Poly::one(n) + &big_f.scalar_mul(params.p as i64);

        let inverses = f
            .inverse(n, params.p)
            .and_then(|fp| f.inverse(n, params.q).map(|fq| (fp, fq)));
        match inverses {
            Ok((fp, fq)) => {
                debug!(attempt, "found invertible f");
                return Ok(InvertibleF { f, fp, fq });
            }
            Err(NtruError::NotInvertible) => {
                debug!(attempt, "sampled f is not invertible, resampling");
            }
            Err(e) => return Err(e),
        }
    }
    Err(NtruError::KeyGenerationExhausted {
        attempts: max_attempts,
    })
}

impl KeyPair {
    /// Generate a key pair.
    ///
    /// 1. sample F and set f = 1 + p·F until f is invertible mod p and mod q
    /// 2. sample g
    /// 3. h = p·(f_q·g) mod q
    ///
    /// The returned pair always satisfies f·f_p ≡ 1 (mod p).
    pub fn generate(params: &NtruParams, sampler: &mut TernarySampler) -> Result<Self> {
        params.validate()?;
        if sampler.dimension() != params.n {
            return Err(invalid_params!(
                "sampler degree {} does not match n = {}",
                sampler.dimension(),
                params.n
            ));
        }

        let InvertibleF { f, fp, fq } =
            sample_invertible_f(params, sampler, MAX_KEYGEN_ATTEMPTS)?;
        let g = sampler.sample_ternary(params.dg, params.dg)?;

        let h = fq
            .mul_mod(&g, params.q)
            .scalar_mul(params.p as i64)
            .reduce(params.q);

        debug!(n = params.n, q = params.q, "generated key pair");
        Ok(Self {
            public: PublicKey::new(*params, h),
            private: PrivateKey::new(*params, f, fp),
        })
    }
}
