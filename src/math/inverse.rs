//! Polynomial inversion in Z_m[X]/(X^N - 1).
//!
//! For a prime-power modulus m = P^k the inverse is computed in two stages:
//!
//! 1. extended Euclidean algorithm over GF(P)[X] against X^N - 1, which either
//!    yields f^(-1) mod P or proves that gcd(f, X^N - 1) is nontrivial;
//! 2. Newton (Hensel) lifting, g <- g·(2 - f·g), each step doubling the
//!    power of P the inverse is correct modulo, until it reaches P^k.
//!
//! A non-invertible input is reported as [`NtruError::NotInvertible`]; there
//! is no fallback value.

use super::modular::{prime_power, ModQ};
use super::poly::Poly;
use crate::error::{invalid_params, NtruError, Result};

/// Dense polynomial over GF(P), coefficients low to high, no trailing zeros.
type Dense = Vec<u64>;

fn trim(mut a: Dense) -> Dense {
    while a.last() == Some(&0) {
        a.pop();
    }
    a
}

fn mul_dense(a: &[u64], b: &[u64], p: u64) -> Dense {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] = ModQ::add(out[i + j], ModQ::mul(ai, bj, p), p);
        }
    }
    trim(out)
}

fn sub_dense(a: &[u64], b: &[u64], p: u64) -> Dense {
    let n = a.len().max(b.len());
    let out = (0..n)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            ModQ::sub(x, y, p)
        })
        .collect();
    trim(out)
}

/// Long division a = quo·b + rem over GF(P). `b` must be nonzero.
fn divmod(a: &[u64], b: &[u64], p: u64) -> Result<(Dense, Dense)> {
    let lead = *b.last().ok_or(NtruError::NotInvertible)?;
    let lead_inv = ModQ::inverse(lead, p)
        .ok_or_else(|| invalid_params!("{} is not prime", p))?;

    let mut rem = trim(a.to_vec());
    if rem.len() < b.len() {
        return Ok((Vec::new(), rem));
    }

    let mut quo = vec![0u64; rem.len() - b.len() + 1];
    while rem.len() >= b.len() {
        let shift = rem.len() - b.len();
        let c = ModQ::mul(*rem.last().unwrap_or(&0), lead_inv, p);
        quo[shift] = c;
        for (j, &bj) in b.iter().enumerate() {
            let t = ModQ::mul(c, bj, p);
            rem[shift + j] = ModQ::sub(rem[shift + j], t, p);
        }
        rem = trim(rem);
    }
    Ok((trim(quo), rem))
}

/// f^(-1) in GF(P)[X]/(X^n - 1) by the extended Euclidean algorithm.
///
/// Maintains t_i·f ≡ r_i (mod X^n - 1) starting from r_0 = X^n - 1,
/// r_1 = f; when the remainder sequence reaches a constant gcd c, t·c^(-1)
/// is the inverse.
fn invert_mod_prime(f: &Poly, n: usize, p: u64) -> Result<Dense> {
    let mut r0: Dense = vec![0; n + 1];
    r0[0] = p - 1;
    r0[n] = 1;
    let mut r1 = trim(f.reduce(p).coeffs().iter().map(|&c| c as u64).collect());

    let mut t0: Dense = Vec::new();
    let mut t1: Dense = vec![1];

    while !r1.is_empty() {
        let (quo, rem) = divmod(&r0, &r1, p)?;
        r0 = std::mem::replace(&mut r1, rem);
        let t2 = sub_dense(&t0, &mul_dense(&quo, &t1, p), p);
        t0 = std::mem::replace(&mut t1, t2);
    }

    // gcd(f, X^n - 1) must be a nonzero constant
    if r0.len() != 1 {
        return Err(NtruError::NotInvertible);
    }
    let c_inv = ModQ::inverse(r0[0], p).ok_or(NtruError::NotInvertible)?;
    Ok(t0.iter().map(|&t| ModQ::mul(t, c_inv, p)).collect())
}

impl Poly {
    /// Inverse of `self` in Z_modulus[X]/(X^n - 1).
    ///
    /// `modulus` must be a prime power P^k. The returned polynomial has n
    /// coefficients in [0, modulus) and satisfies
    /// `self.mul_mod(&inv, modulus) == Poly::one(n)`.
    ///
    /// # Errors
    ///
    /// - [`NtruError::NotInvertible`] if `self` shares a factor with X^n - 1
    ///   modulo P (this includes the zero polynomial).
    /// - [`NtruError::InvalidParameters`] if `n == 0` or `modulus` is not a
    ///   prime power.
    ///
    /// # Example
    ///
    /// ```
    /// use ntru_lattice::math::Poly;
    ///
    /// let n = 11;
    /// let f = Poly::from_coeffs(vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// let f_inv = f.inverse(n, 9).unwrap();
    /// assert_eq!(f.mul_mod(&f_inv, 9), Poly::one(n));
    /// ```
    pub fn inverse(&self, n: usize, modulus: u64) -> Result<Poly> {
        if n == 0 {
            return Err(invalid_params!("ring degree must be positive"));
        }
        let (prime, k) = prime_power(modulus)
            .ok_or_else(|| invalid_params!("modulus {} is not a prime power", modulus))?;

        let f = self.fold_cyclic(n);
        let base = invert_mod_prime(&f, n, prime)?;
        let mut g = Poly::from_coeffs(base.into_iter().map(|c| c as i64).collect()).fold_cyclic(n);

        let two = Poly::one(n).scalar_mul(2);
        let mut precision = 1u32;
        while precision < k {
            let fg = f.mul_mod(&g, modulus);
            g = g.mul_mod(&(&two - &fg), modulus);
            precision = precision.saturating_mul(2);
        }
        let g = g.reduce(modulus);

        if f.mul_mod(&g, modulus) != Poly::one(n) {
            return Err(NtruError::NotInvertible);
        }
        Ok(g)
    }
}
