// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod codec;
pub mod config;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keyfile;
pub mod keygen;
pub mod prime;

pub use bigint::{gcd, is_probable_prime, RsaBigInt};
pub use codec::{decode, encode};
pub use config::{KeyGenConfig, KEY_SIZE_ALIGNMENT, MAX_KEY_BITS, MIN_KEY_BITS};
pub use decrypt::{decrypt, decrypt_to_bytes, decrypt_to_string};
pub use encrypt::{encrypt, encrypt_bytes, encrypt_str};
pub use error::{Result, RsaError};
pub use keyfile::{read_private, read_public, write_private, write_public};
pub use keygen::{generate, generate_with_config, RsaKey};
pub use prime::generate_prime;
