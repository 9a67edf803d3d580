//! Error handling for NTRU operations
//!
//! Every fallible operation in the crate returns [`NtruError`]. Failures are
//! explicit values: no partial plaintext or placeholder key is ever handed
//! back to the caller.

use std::fmt;

/// NTRU operation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NtruError {
    /// Ring parameters or sampler weights violate their constraints.
    InvalidParameters(String),

    /// The polynomial shares a nontrivial factor with x^N - 1 under the modulus.
    NotInvertible,

    /// Key generation failed to find an invertible f within the retry budget.
    KeyGenerationExhausted {
        /// Number of candidates tried
        attempts: usize,
    },

    /// A recovered block fell outside the message alphabet (wrong key or
    /// parameters too tight for the noise).
    DecryptionNoiseOverflow(String),

    /// A ciphertext block has the wrong shape or out-of-range coefficients.
    InvalidCiphertext(String),

    /// Encoding or decoding of keys/ciphertexts failed.
    Serialization(String),
}

impl fmt::Display for NtruError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NtruError::InvalidParameters(msg) => write!(f, "invalid parameters: {}", msg),
            NtruError::NotInvertible => write!(f, "polynomial is not invertible in the ring"),
            NtruError::KeyGenerationExhausted { attempts } => write!(
                f,
                "key generation exhausted after {} attempts without an invertible f",
                attempts
            ),
            NtruError::DecryptionNoiseOverflow(msg) => write!(f, "decryption failed: {}", msg),
            NtruError::InvalidCiphertext(msg) => write!(f, "invalid ciphertext: {}", msg),
            NtruError::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for NtruError {}

impl From<bincode::Error> for NtruError {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for NTRU operations
pub type Result<T> = std::result::Result<T, NtruError>;

/// Create an `InvalidParameters` error with format string support
macro_rules! invalid_params {
    ($($arg:tt)*) => {
        $crate::error::NtruError::InvalidParameters(format!($($arg)*))
    };
}

pub(crate) use invalid_params;
