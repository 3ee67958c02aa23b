//! Property-based tests.

use num_bigint::BigUint;
use num_traits::One;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rsa_cli::rsa::{
    decode, decrypt, encode, encrypt, gcd, generate, is_probable_prime, RsaError, RsaKey,
};

prop_compose! {
    // Small keys keep the search fast; the properties do not depend on size.
    fn private_key()(seed in any::<u64>(), bits in prop::sample::select(vec![16u32, 32, 64, 128])) -> RsaKey {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate(bits, &mut rng).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn codec_roundtrip(first in 1u8..=255, rest in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut bytes = vec![first];
        bytes.extend(rest);
        prop_assert_eq!(decode(&encode(&bytes)), bytes);
    }

    #[test]
    fn generated_key_invariants(key in private_key()) {
        let (p, q) = key.primes().unwrap();
        let e = key.e().unwrap();
        let d = key.d().unwrap();
        let phi = (p - 1u8) * (q - 1u8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        prop_assert_ne!(p, q);
        prop_assert!(is_probable_prime(p, 32, &mut rng));
        prop_assert!(is_probable_prime(q, 32, &mut rng));
        prop_assert!(gcd(e, &phi).is_one());
        prop_assert_eq!(&(p * q), key.n());
        prop_assert_eq!(key.n().bits(), u64::from(key.bits()));
        prop_assert!(((e * d) % &phi).is_one());
    }

    #[test]
    fn encrypt_decrypt_roundtrip(key in private_key(), raw in any::<u128>()) {
        let m = BigUint::from(raw) % key.n();
        let public = key.to_public().unwrap();

        let c = encrypt(&m, &public).unwrap();
        prop_assert!(&c < key.n());
        prop_assert_eq!(decrypt(&c, &key).unwrap(), m);
    }

    #[test]
    fn out_of_range_inputs_fail(key in private_key(), excess in any::<u64>()) {
        let too_big = key.n() + BigUint::from(excess);

        prop_assert!(matches!(encrypt(&too_big, &key), Err(RsaError::MessageTooLarge)));
        prop_assert!(matches!(decrypt(&too_big, &key), Err(RsaError::CiphertextTooLarge)));
    }
}
