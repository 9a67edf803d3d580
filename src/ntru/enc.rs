//! NTRU block encryption and decryption
//!
//! Encryption: e = r·h + m (mod q), with a fresh ternary r per block.
//! Decryption: a = center(f·e mod q), m = center(f_p·a mod p).
//!
//! Since f·h ≡ p·g (mod q), a is the reduction of the integer polynomial
//! p·r·g + f·m. [`NtruParams::validate`](crate::params::NtruParams::validate)
//! guarantees that polynomial never reaches q/2 in absolute value, so
//! centering recovers it exactly and reducing mod p leaves f·m ≡ m·1.

use tracing::trace;

use crate::error::{invalid_params, NtruError, Result};
use crate::math::{Poly, TernarySampler};

use super::types::{check_residues, PrivateKey, PublicKey};

impl PublicKey {
    /// Encrypt one message block.
    ///
    /// `message` must have dimension n and ternary coefficients. A new r
    /// with `dr` coefficients of each sign is drawn from `sampler` on every
    /// call and is dropped afterwards.
    pub fn encrypt_block(&self, message: &Poly, sampler: &mut TernarySampler) -> Result<Poly> {
        let params = self.params();
        if message.dimension() != params.n {
            return Err(invalid_params!(
                "message block has dimension {}, expected {}",
                message.dimension(),
                params.n
            ));
        }
        if !message.is_ternary() {
            return Err(invalid_params!("message block coefficients must lie in {{-1, 0, 1}}"));
        }
        if sampler.dimension() != params.n {
            return Err(invalid_params!(
                "sampler degree {} does not match n = {}",
                sampler.dimension(),
                params.n
            ));
        }

        let r = sampler.sample_ternary(params.dr, params.dr)?;
        Ok(r.mul_mod(self.h(), params.q).add_mod(message, params.q))
    }
}

impl PrivateKey {
    /// Decrypt one ciphertext block into a ternary message polynomial.
    ///
    /// # Errors
    ///
    /// - [`NtruError::InvalidCiphertext`] if the block has the wrong dimension
    ///   or coefficients outside [0, q).
    /// - [`NtruError::DecryptionNoiseOverflow`] if f·e exceeds the noise bound
    ///   an honest ciphertext for this key can reach (wrong key, or a
    ///   tampered block).
    pub fn decrypt_block(&self, block: &Poly) -> Result<Poly> {
        let params = self.params();
        check_residues(block, params.n, params.q, "ciphertext block")?;

        let a = self.f().mul_mod(block, params.q).center(params.q);
        let noise = a.linf_norm();
        if noise > params.noise_bound() {
            trace!(noise, bound = params.noise_bound(), "block exceeds noise bound");
            return Err(NtruError::DecryptionNoiseOverflow(format!(
                "centered coefficient {} exceeds bound {}",
                noise,
                params.noise_bound()
            )));
        }

        Ok(self.fp().mul_mod(&a, params.p).center(params.p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ntru::KeyPair;
    use crate::params::NtruParams;

    fn keys(params: &NtruParams, seed: u64) -> (KeyPair, TernarySampler) {
        let mut sampler = TernarySampler::with_seed(params.n, seed);
        let keys = KeyPair::generate(params, &mut sampler).unwrap();
        (keys, sampler)
    }

    #[test]
    fn test_block_roundtrip_toy() {
        let params = NtruParams::toy();
        let (keys, mut sampler) = keys(&params, 1);

        let m = Poly::from_coeffs(vec![1, -1, 0, 0, 1, 1, -1, 0, 1, 0, -1]);
        for _ in 0..50 {
            let e = keys.public.encrypt_block(&m, &mut sampler).unwrap();
            assert!(e.coeffs().iter().all(|&c| (0..32).contains(&c)));
            assert_eq!(keys.private.decrypt_block(&e).unwrap(), m);
        }
    }

    #[test]
    fn test_block_roundtrip_n509() {
        let params = NtruParams::n509();
        let (keys, mut sampler) = keys(&params, 2);

        let m = sampler.sample_ternary(170, 170).unwrap();
        let e = keys.public.encrypt_block(&m, &mut sampler).unwrap();
        assert_eq!(keys.private.decrypt_block(&e).unwrap(), m);
    }

    #[test]
    fn test_fresh_randomness_per_block() {
        let params = NtruParams::moderate();
        let (keys, mut sampler) = keys(&params, 3);

        let m = Poly::zero(params.n);
        let e1 = keys.public.encrypt_block(&m, &mut sampler).unwrap();
        let e2 = keys.public.encrypt_block(&m, &mut sampler).unwrap();
        assert_ne!(e1, e2);
    }

    #[test]
    fn test_rejects_non_ternary_message() {
        let params = NtruParams::toy();
        let (keys, mut sampler) = keys(&params, 4);

        let mut coeffs = vec![0i64; params.n];
        coeffs[2] = 2;
        let err = keys
            .public
            .encrypt_block(&Poly::from_coeffs(coeffs), &mut sampler)
            .unwrap_err();
        assert!(matches!(err, NtruError::InvalidParameters(_)));

        let err = keys
            .public
            .encrypt_block(&Poly::zero(params.n + 1), &mut sampler)
            .unwrap_err();
        assert!(matches!(err, NtruError::InvalidParameters(_)));
    }

    #[test]
    fn test_rejects_malformed_block() {
        let params = NtruParams::toy();
        let (keys, _) = keys(&params, 5);

        let err = keys.private.decrypt_block(&Poly::zero(5)).unwrap_err();
        assert!(matches!(err, NtruError::InvalidCiphertext(_)));

        let err = keys
            .private
            .decrypt_block(&Poly::from_coeffs(vec![-1; params.n]))
            .unwrap_err();
        assert!(matches!(err, NtruError::InvalidCiphertext(_)));
    }

    #[test]
    fn test_noise_overflow_rejected() {
        // (q/2)·f centers to q/2 at every odd coefficient of f, and
        // f = 1 + 3F has at least one
        for (params, seed) in [(NtruParams::toy(), 8), (NtruParams::moderate(), 9)] {
            let (keys, _) = keys(&params, seed);
            let mut coeffs = vec![0i64; params.n];
            coeffs[0] = (params.q / 2) as i64;

            let err = keys
                .private
                .decrypt_block(&Poly::from_coeffs(coeffs))
                .unwrap_err();
            assert!(matches!(err, NtruError::DecryptionNoiseOverflow(_)));
        }
    }

    #[test]
    fn test_wrong_key_detected_at_scale() {
        let params = NtruParams::n509();
        let (alice, mut sampler) = keys(&params, 6);
        let (mallory, _) = keys(&params, 7);

        let m = sampler.sample_ternary(100, 100).unwrap();
        let e = alice.public.encrypt_block(&m, &mut sampler).unwrap();
        match mallory.private.decrypt_block(&e) {
            Ok(recovered) => assert_ne!(recovered, m),
            Err(err) => assert!(matches!(err, NtruError::DecryptionNoiseOverflow(_))),
        }
    }
}
