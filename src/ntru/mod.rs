//! NTRU public-key encryption over R = Z[X]/(X^N - 1)
//!
//! # Overview
//!
//! - Private key: f = 1 + p·F with F ternary, and f_p = f^(-1) mod p
//! - Public key: h = p·f_q·g (mod q), where f_q = f^(-1) mod q and g is ternary
//! - Ciphertext block: e = r·h + m (mod q) for a fresh ternary r
//!
//! # Example
//!
//! ```
//! use ntru_lattice::math::{Poly, TernarySampler};
//! use ntru_lattice::ntru::KeyPair;
//! use ntru_lattice::params::NtruParams;
//!
//! let params = NtruParams::toy();
//! let mut sampler = TernarySampler::new(params.n);
//! let keys = KeyPair::generate(&params, &mut sampler).unwrap();
//!
//! let m = Poly::from_coeffs(vec![1, 0, -1, 1, 0, 0, 0, 1, -1, 0, 0]);
//! let e = keys.public.encrypt_block(&m, &mut sampler).unwrap();
//! assert_eq!(keys.private.decrypt_block(&e).unwrap(), m);
//! ```

mod enc;
mod keygen;
mod types;

pub use keygen::MAX_KEYGEN_ATTEMPTS;
pub use types::{Ciphertext, KeyPair, PrivateKey, PublicKey};
