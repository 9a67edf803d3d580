//! Polynomial arithmetic over R_m = Z_m[X]/(X^N - 1).
//!
//! A [`Poly`] stores plain integer coefficients. The modulus is not part of
//! the value: the same polynomial (for instance the private key f) is used
//! under both the small modulus p and the large modulus q, so every ring
//! operation takes the modulus it reduces by.
//!
//! # Representatives
//!
//! - [`Poly::mul_mod`], [`Poly::add_mod`] and [`Poly::reduce`] return
//!   canonical residues in `[0, m)`, using Euclidean remainder so negative
//!   inputs never leak negative residues.
//! - [`Poly::center`] returns residues in `(-m/2, m/2]`, the form needed to
//!   read small noise terms back after modular reduction.
//!
//! # Example
//!
//! ```
//! use ntru_lattice::math::Poly;
//!
//! // x * x^(n-1) = x^n = 1 in Z[X]/(X^n - 1)
//! let n = 11;
//! let x = Poly::monomial(1, n);
//! let x_last = Poly::monomial(n - 1, n);
//! assert_eq!(x.mul_mod(&x_last, 32), Poly::one(n));
//! ```

use super::modular::ModQ;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Polynomial with integer coefficients, index i holding the coefficient of X^i.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Poly {
    coeffs: Vec<i64>,
}

impl Poly {
    /// Create zero polynomial with given dimension
    pub fn zero(dim: usize) -> Self {
        Self {
            coeffs: vec![0; dim],
        }
    }

    /// Ring identity (1, 0, ..., 0)
    pub fn one(dim: usize) -> Self {
        Self::monomial(0, dim)
    }

    /// X^k reduced into a polynomial of the given dimension
    pub fn monomial(k: usize, dim: usize) -> Self {
        let mut coeffs = vec![0; dim];
        if dim > 0 {
            coeffs[k % dim] = 1;
        }
        Self { coeffs }
    }

    /// Create polynomial from coefficient vector (no reduction)
    pub fn from_coeffs(coeffs: Vec<i64>) -> Self {
        Self { coeffs }
    }

    /// Get polynomial dimension
    pub fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Get polynomial length (alias for dimension)
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Check if polynomial has zero length
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get coefficient at index
    pub fn coeff(&self, i: usize) -> i64 {
        self.coeffs[i]
    }

    /// Get reference to coefficient vector
    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Consume the polynomial, returning its coefficients
    pub fn into_coeffs(self) -> Vec<i64> {
        self.coeffs
    }

    /// Check if polynomial is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Check that every coefficient lies in {-1, 0, 1}
    pub fn is_ternary(&self) -> bool {
        self.coeffs.iter().all(|&c| (-1..=1).contains(&c))
    }

    /// L-infinity norm of the integer coefficients
    pub fn linf_norm(&self) -> u64 {
        self.coeffs
            .iter()
            .map(|&c| c.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Reduce modulo (X^n - 1): the coefficient at i + n is added into i,
    /// repeatedly, until at most n coefficients remain. Shorter inputs are
    /// zero-padded to n.
    pub fn fold_cyclic(&self, n: usize) -> Self {
        if n == 0 {
            return Self::zero(0);
        }
        let mut coeffs = vec![0i64; n];
        for (i, &c) in self.coeffs.iter().enumerate() {
            coeffs[i % n] += c;
        }
        Self { coeffs }
    }

    /// Map every coefficient into [0, modulus)
    pub fn reduce(&self, modulus: u64) -> Self {
        assert!(modulus > 0, "Modulus must be nonzero");
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| ModQ::from_signed(c, modulus) as i64)
            .collect();
        Self { coeffs }
    }

    /// Map every coefficient into the centered range (-modulus/2, modulus/2]
    pub fn center(&self, modulus: u64) -> Self {
        assert!(modulus > 0, "Modulus must be nonzero");
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| ModQ::center(ModQ::from_signed(c, modulus), modulus))
            .collect();
        Self { coeffs }
    }

    /// Integer scalar multiplication (no reduction)
    pub fn scalar_mul(&self, scalar: i64) -> Self {
        let coeffs = self.coeffs.iter().map(|&c| c * scalar).collect();
        Self { coeffs }
    }

    /// Ring multiplication in Z_modulus[X]/(X^n - 1).
    ///
    /// Computes the cyclic convolution of the two operands, folding exponents
    /// >= n back via X^n = 1, with n the larger of the two dimensions (the
    /// shorter operand is treated as zero-padded). Every output coefficient
    /// lies in [0, modulus).
    pub fn mul_mod(&self, other: &Self, modulus: u64) -> Self {
        let n = self.dimension().max(other.dimension());
        if n == 0 {
            return Self::zero(0);
        }

        let a = self.reduce(modulus);
        let b = other.reduce(modulus);
        let m = modulus as u128;
        // Products of residues below 2^32 can be summed n times without
        // overflowing u128; wider moduli reduce after every step.
        let wide = modulus > (1u64 << 32);

        let mut acc = vec![0u128; n];
        for (i, &ai) in a.coeffs.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.coeffs.iter().enumerate() {
                if bj == 0 {
                    continue;
                }
                let k = (i + j) % n;
                acc[k] += ai as u128 * bj as u128;
                if wide {
                    acc[k] %= m;
                }
            }
        }

        let coeffs = acc.into_iter().map(|c| (c % m) as i64).collect();
        Self { coeffs }
    }

    /// Coefficient-wise addition followed by reduction into [0, modulus)
    pub fn add_mod(&self, other: &Self, modulus: u64) -> Self {
        (self + other).reduce(modulus)
    }
}

/// Coefficient-wise combination, zero-padding the shorter operand.
fn zip_with(a: &Poly, b: &Poly, op: impl Fn(i64, i64) -> i64) -> Poly {
    let n = a.dimension().max(b.dimension());
    let coeffs = (0..n)
        .map(|i| {
            let x = a.coeffs.get(i).copied().unwrap_or(0);
            let y = b.coeffs.get(i).copied().unwrap_or(0);
            op(x, y)
        })
        .collect();
    Poly { coeffs }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Self::Output {
        zip_with(self, rhs, |a, b| a + b)
    }
}

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Self::Output {
        zip_with(self, rhs, |a, b| a - b)
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        self.scalar_mul(-1)
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}
