//! Mathematical primitives for NTRU.
//!
//! - **Modular arithmetic** over Z_m, including centering and scalar inverses
//! - **Polynomial operations** over R_m = Z_m[X]/(X^N - 1)
//! - **Polynomial inversion** by extended Euclid and Newton lifting
//! - **Ternary sampling** from a ChaCha20 CSPRNG
//!
//! # Example
//!
//! ```
//! use ntru_lattice::math::{Poly, TernarySampler};
//!
//! let mut sampler = TernarySampler::new(11);
//! let r = sampler.sample_ternary(2, 2).unwrap();
//! let product = r.mul_mod(&Poly::one(11), 32);
//! assert_eq!(product, r.reduce(32));
//! ```

pub mod inverse;
pub mod modular;
pub mod poly;
pub mod sampler;

pub use modular::ModQ;
pub use poly::Poly;
pub use sampler::TernarySampler;
