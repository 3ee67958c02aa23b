// RSA Errors
// Typed failures reported by every engine operation

use std::string::FromUtf8Error;

use thiserror::Error;

/// Result type for the RSA engine
pub type Result<T> = std::result::Result<T, RsaError>;

/// Errors that can occur in key generation, the transforms and the key format
#[derive(Debug, Error)]
pub enum RsaError {
    /// A bit length or other caller-supplied parameter was rejected
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("key generation failed: {0}")]
    KeyGenerationFailure(String),

    /// The prime search hit its retry cap
    #[error("no {bits}-bit prime found after {attempts} candidates")]
    PrimeSearchExhausted { bits: u64, attempts: u64 },

    #[error("message too large: encoded message must be smaller than the modulus")]
    MessageTooLarge,

    #[error("ciphertext too large: ciphertext must be smaller than the modulus")]
    CiphertextTooLarge,

    #[error("key has no private exponent")]
    NotAPrivateKey,

    #[error("key has no public exponent")]
    NotAPublicKey,

    #[error("malformed key file: {0}")]
    MalformedKeyFile(String),

    #[error("inconsistent key: {0}")]
    InconsistentKey(String),

    /// Decrypted bytes are not valid UTF-8
    #[error("decoded message is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

impl RsaError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RsaError::MalformedKeyFile(reason.into())
    }
}
