// RSA Encryption Implementation
// Raw textbook RSA: c = m^e mod n, no padding

use super::bigint::{mod_pow, RsaBigInt};
use super::codec::encode;
use super::error::{Result, RsaError};
use super::keygen::RsaKey;

/// Encrypt the integer message `m` with the public exponent of `key`
///
/// Fails with [`RsaError::MessageTooLarge`] when `m >= n`; the range check
/// happens before any exponentiation.
pub fn encrypt(m: &RsaBigInt, key: &RsaKey) -> Result<RsaBigInt> {
    let e = key.e().ok_or(RsaError::NotAPublicKey)?;
    if m >= key.n() {
        return Err(RsaError::MessageTooLarge);
    }

    // Compute c = m^e mod n
    Ok(mod_pow(m, e, key.n()))
}

/// Encode bytes as a big-endian integer and encrypt it
pub fn encrypt_bytes(plaintext: &[u8], key: &RsaKey) -> Result<RsaBigInt> {
    encrypt(&encode(plaintext), key)
}

/// Encrypt a string using RSA public key
pub fn encrypt_str(plaintext: &str, key: &RsaKey) -> Result<RsaBigInt> {
    encrypt_bytes(plaintext.as_bytes(), key)
}
