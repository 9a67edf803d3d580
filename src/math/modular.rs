//! Scalar arithmetic over Z_m

/// Modular arithmetic operations over Z_m
pub struct ModQ;

impl ModQ {
    /// Add two values modulo m
    #[inline]
    pub fn add(a: u64, b: u64, m: u64) -> u64 {
        let sum = (a as u128) + (b as u128);
        (sum % (m as u128)) as u64
    }

    /// Subtract two values modulo m (inputs in [0, m))
    #[inline]
    pub fn sub(a: u64, b: u64, m: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            m - (b - a)
        }
    }

    /// Multiply two values modulo m
    #[inline]
    pub fn mul(a: u64, b: u64, m: u64) -> u64 {
        let prod = (a as u128) * (b as u128);
        (prod % (m as u128)) as u64
    }

    /// Convert a signed integer to its canonical representative in [0, m).
    ///
    /// Uses Euclidean remainder, so negative inputs never produce negative
    /// residues.
    #[inline]
    pub fn from_signed(val: i64, m: u64) -> u64 {
        (val as i128).rem_euclid(m as i128) as u64
    }

    /// Map a residue in [0, m) to its centered representative in (-m/2, m/2]
    #[inline]
    pub fn center(val: u64, m: u64) -> i64 {
        let val = val % m;
        if val <= m / 2 {
            val as i64
        } else {
            -((m - val) as i64)
        }
    }

    /// Multiplicative inverse of `a` modulo `m` via the extended Euclidean
    /// algorithm, or `None` when gcd(a, m) != 1.
    pub fn inverse(a: u64, m: u64) -> Option<u64> {
        if m == 0 {
            return None;
        }
        let mut t: i128 = 0;
        let mut new_t: i128 = 1;
        let mut r: i128 = m as i128;
        let mut new_r: i128 = (a % m) as i128;

        while new_r != 0 {
            let quotient = r / new_r;
            let tmp_t = t - quotient * new_t;
            t = new_t;
            new_t = tmp_t;

            let tmp_r = r - quotient * new_r;
            r = new_r;
            new_r = tmp_r;
        }

        if r != 1 {
            return None;
        }
        Some(t.rem_euclid(m as i128) as u64)
    }
}

/// Greatest common divisor
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Deterministic primality test by trial division
///
/// Ring degrees and moduli are small, so trial division is sufficient.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Decompose `m` as P^k with P prime, or `None` if `m` is not a prime power
pub fn prime_power(m: u64) -> Option<(u64, u32)> {
    if m < 2 {
        return None;
    }
    let mut base = m;
    let mut d = 2u64;
    while d.saturating_mul(d) <= m {
        if m % d == 0 {
            base = d;
            break;
        }
        d += 1;
    }

    let mut rest = m;
    let mut k = 0u32;
    while rest % base == 0 {
        rest /= base;
        k += 1;
    }
    if rest == 1 {
        Some((base, k))
    } else {
        None
    }
}
