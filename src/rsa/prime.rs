// Prime Generation
// Random primes of an exact bit length

use tracing::debug;

use rand::{CryptoRng, Rng};

use super::bigint::{is_probable_prime, random_odd_with_bits, RsaBigInt};
use super::config::KeyGenConfig;
use super::error::{Result, RsaError};

/// Generate a random prime with exactly `bits` significant bits.
///
/// Each candidate has its top bit set (exact length) and its bottom bit set
/// (odd) before the primality test. Gives up with
/// [`RsaError::PrimeSearchExhausted`] after `config.max_prime_attempts`
/// candidates.
pub fn generate_prime<R>(bits: u32, config: &KeyGenConfig, rng: &mut R) -> Result<RsaBigInt>
where
    R: Rng + CryptoRng + ?Sized,
{
    if bits < 2 {
        return Err(RsaError::InvalidParameter(format!(
            "prime bit length must be at least 2, got {}",
            bits
        )));
    }

    for attempt in 1..=config.max_prime_attempts {
        let candidate = random_odd_with_bits(u64::from(bits), rng);
        if is_probable_prime(&candidate, config.miller_rabin_rounds, rng) {
            debug!(bits, attempt, "found prime");
            return Ok(candidate);
        }
    }

    Err(RsaError::PrimeSearchExhausted {
        bits: u64::from(bits),
        attempts: config.max_prime_attempts,
    })
}
