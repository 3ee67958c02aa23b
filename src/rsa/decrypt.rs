// RSA Decryption Implementation
// Raw textbook RSA: m = c^d mod n

use super::bigint::{mod_pow, RsaBigInt};
use super::codec::{decode, decode_utf8};
use super::error::{Result, RsaError};
use super::keygen::RsaKey;

/// Decrypt the integer ciphertext `c` with the private exponent of `key`
///
/// Fails with [`RsaError::NotAPrivateKey`] when the key has no `d` and with
/// [`RsaError::CiphertextTooLarge`] when `c >= n`.
pub fn decrypt(c: &RsaBigInt, key: &RsaKey) -> Result<RsaBigInt> {
    let d = key.d().ok_or(RsaError::NotAPrivateKey)?;
    if c >= key.n() {
        return Err(RsaError::CiphertextTooLarge);
    }

    // Compute m = c^d mod n
    Ok(mod_pow(c, d, key.n()))
}

/// Decrypt and decode to the minimal big-endian bytes of the message
pub fn decrypt_to_bytes(c: &RsaBigInt, key: &RsaKey) -> Result<Vec<u8>> {
    Ok(decode(&decrypt(c, key)?))
}

/// Decrypt ciphertext to a string
pub fn decrypt_to_string(c: &RsaBigInt, key: &RsaKey) -> Result<String> {
    decode_utf8(&decrypt(c, key)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::{encrypt, encrypt_str};
    use crate::rsa::keygen::generate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn textbook_private_key() -> RsaKey {
        RsaKey::new_private(from_u64(3233), from_u64(2753), None).unwrap()
    }

    #[test]
    fn test_decrypt_textbook() {
        let m = decrypt(&from_u64(2790), &textbook_private_key()).unwrap();
        assert_eq!(m, from_u64(65));
    }

    #[test]
    fn test_decrypt_to_string() {
        let text = decrypt_to_string(&from_u64(2790), &textbook_private_key()).unwrap();
        assert_eq!(text, "A");
    }

    #[test]
    fn test_decrypt_out_of_range() {
        let key = textbook_private_key();
        let result = decrypt(&from_u64(3233), &key);
        assert!(matches!(result, Err(RsaError::CiphertextTooLarge)));
    }

    #[test]
    fn test_decrypt_with_public_key() {
        let key = RsaKey::new_public(from_u64(3233), from_u64(17)).unwrap();
        let result = decrypt(&from_u64(2790), &key);
        assert!(matches!(result, Err(RsaError::NotAPrivateKey)));
    }

    #[test]
    fn test_roundtrip_every_textbook_message() {
        let public = RsaKey::new_public(from_u64(3233), from_u64(17)).unwrap();
        let private = textbook_private_key();

        for m in 0..3233u64 {
            let c = encrypt(&from_u64(m), &public).unwrap();
            assert_eq!(decrypt(&c, &private).unwrap(), from_u64(m));
        }
    }

    #[test]
    fn test_roundtrip_generated_key() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let key = generate(512, &mut rng).unwrap();
        let message = "Test message for RSA decryption";

        let ciphertext = encrypt_str(message, &key.to_public().unwrap()).unwrap();
        let decrypted = decrypt_to_string(&ciphertext, &key).unwrap();

        assert_eq!(message, decrypted);
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let key1 = generate(256, &mut rng).unwrap();
        let key2 = generate(256, &mut rng).unwrap();

        let c = encrypt_str("Test", &key1).unwrap();
        // The ciphertext may not even be in range for the second modulus
        if let Ok(bytes) = decrypt_to_bytes(&c, &key2) {
            assert_ne!(bytes, b"Test");
        }
    }
}
