// RSA Key Generation
// Implements RSA key pair generation and the key type shared by every operation

use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};
use tracing::{debug, info, warn};

use super::bigint::{from_u64, gcd, is_probable_prime, mod_inverse, mod_pow, RsaBigInt};
use super::config::{KeyGenConfig, KEY_SIZE_ALIGNMENT, MAX_KEY_BITS, MIN_KEY_BITS};
use super::error::{Result, RsaError};
use super::prime::generate_prime;

/// RSA key
///
/// A public key carries `(n, e)`. A private key carries `(n, d)` and, when
/// known, `e`. Keys built by the generator also remember `p` and `q`.
/// Keys are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    n: RsaBigInt,
    e: Option<RsaBigInt>,
    d: Option<RsaBigInt>,
    primes: Option<(RsaBigInt, RsaBigInt)>,
    bits: u32,
}

impl RsaKey {
    /// Public key from its modulus and exponent
    pub fn new_public(n: RsaBigInt, e: RsaBigInt) -> Result<Self> {
        let bits = modulus_bits(&n)?;
        Ok(Self {
            n,
            e: Some(e),
            d: None,
            primes: None,
            bits,
        })
    }

    /// Private key from its modulus, private exponent and optional public exponent
    pub fn new_private(n: RsaBigInt, d: RsaBigInt, e: Option<RsaBigInt>) -> Result<Self> {
        let bits = modulus_bits(&n)?;
        Ok(Self {
            n,
            e,
            d: Some(d),
            primes: None,
            bits,
        })
    }

    /// Full key pair derived from two distinct primes and a public exponent
    pub fn from_primes(p: RsaBigInt, q: RsaBigInt, e: RsaBigInt) -> Result<Self> {
        if p == q {
            return Err(RsaError::InvalidParameter("p and q must be distinct".to_string()));
        }
        if p < from_u64(2) || q < from_u64(2) {
            return Err(RsaError::InvalidParameter("p and q must be at least 2".to_string()));
        }

        // n = p * q, φ(n) = (p-1)(q-1)
        let n = &p * &q;
        let phi = totient(&p, &q);

        if e <= RsaBigInt::one() || e >= phi {
            return Err(RsaError::InvalidParameter(format!("e={} is not in (1, φ(n))", e)));
        }

        // d = e^(-1) mod φ(n)
        let d = mod_inverse(&e, &phi).ok_or_else(|| {
            RsaError::InvalidParameter(format!("e={} is not coprime with φ(n)", e))
        })?;

        let bits = modulus_bits(&n)?;
        Ok(Self {
            n,
            e: Some(e),
            d: Some(d),
            primes: Some((p, q)),
            bits,
        })
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> Option<&RsaBigInt> {
        self.e.as_ref()
    }

    pub fn d(&self) -> Option<&RsaBigInt> {
        self.d.as_ref()
    }

    /// The primes `(p, q)`, only known for freshly generated keys
    pub fn primes(&self) -> Option<(&RsaBigInt, &RsaBigInt)> {
        self.primes.as_ref().map(|(p, q)| (p, q))
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    /// The public half of this key
    pub fn to_public(&self) -> Result<Self> {
        let e = self.e.clone().ok_or(RsaError::NotAPublicKey)?;
        Self::new_public(self.n.clone(), e)
    }

    /// Check the key's mathematical consistency.
    ///
    /// With the primes known every RSA invariant is checked. Otherwise, when
    /// both exponents are present, a probe message must survive a round trip.
    pub fn validate<R>(&self, rng: &mut R) -> Result<()>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let inconsistent = |reason: &str| Err(RsaError::InconsistentKey(reason.to_string()));

        if let Some((p, q)) = &self.primes {
            if p == q {
                return inconsistent("p equals q");
            }
            if !is_probable_prime(p, 20, rng) || !is_probable_prime(q, 20, rng) {
                return inconsistent("p or q is not prime");
            }
            if p * q != self.n {
                return inconsistent("n is not p * q");
            }

            let phi = totient(p, q);
            if let Some(e) = &self.e {
                if !gcd(e, &phi).is_one() {
                    return inconsistent("e is not coprime with φ(n)");
                }
                if let Some(d) = &self.d {
                    if !((e * d) % &phi).is_one() {
                        return inconsistent("e * d is not 1 mod φ(n)");
                    }
                }
            }
            return Ok(());
        }

        if let (Some(e), Some(d)) = (&self.e, &self.d) {
            let probe = from_u64(2);
            if self.n > probe {
                let c = mod_pow(&probe, e, &self.n);
                if mod_pow(&c, d, &self.n) != probe {
                    return inconsistent("e and d are not inverse exponents for n");
                }
            }
        }

        Ok(())
    }
}

/// Generate RSA key pair with the default configuration
pub fn generate<R>(total_bits: u32, rng: &mut R) -> Result<RsaKey>
where
    R: Rng + CryptoRng + ?Sized,
{
    generate_with_config(total_bits, &KeyGenConfig::default(), rng)
}

/// Generate RSA key pair with specified bit length
///
/// `total_bits` must be a multiple of 16 between 16 and 16384. The returned
/// modulus has exactly `total_bits` significant bits.
pub fn generate_with_config<R>(total_bits: u32, config: &KeyGenConfig, rng: &mut R) -> Result<RsaKey>
where
    R: Rng + CryptoRng + ?Sized,
{
    if total_bits < MIN_KEY_BITS {
        return Err(RsaError::InvalidParameter(format!(
            "bit length must be at least {}, got {}",
            MIN_KEY_BITS, total_bits
        )));
    }
    if total_bits > MAX_KEY_BITS {
        return Err(RsaError::InvalidParameter(format!(
            "bit length must be at most {}, got {}",
            MAX_KEY_BITS, total_bits
        )));
    }
    if total_bits % KEY_SIZE_ALIGNMENT != 0 {
        return Err(RsaError::InvalidParameter(format!(
            "bit length must be a multiple of {}, got {}",
            KEY_SIZE_ALIGNMENT, total_bits
        )));
    }

    let half_bits = total_bits / 2;

    for attempt in 1..=config.max_modulus_attempts {
        // Step 1: Generate two distinct random primes p and q
        let p = generate_prime(half_bits, config, rng)?;
        let mut q = generate_prime(half_bits, config, rng)?;
        while q == p {
            q = generate_prime(half_bits, config, rng)?;
        }

        // Step 2: The product of two half-length primes can come up one bit short
        let n = &p * &q;
        if n.bits() != u64::from(total_bits) {
            debug!(attempt, got = n.bits(), want = total_bits, "modulus too short, resampling");
            continue;
        }

        // Step 3: Select e coprime with φ(n) and derive d
        let e = select_public_exponent(&totient(&p, &q), config)?;
        let key = RsaKey::from_primes(p, q, e)?;
        key.validate(rng)?;

        info!(bits = total_bits, "generated RSA key pair");
        return Ok(key);
    }

    Err(RsaError::KeyGenerationFailure(format!(
        "no {}-bit modulus after {} prime pairs",
        total_bits, config.max_modulus_attempts
    )))
}

/// Pick the configured exponent if usable, otherwise the smallest odd e >= 3
/// with 1 < e < φ(n) and gcd(e, φ(n)) = 1
fn select_public_exponent(phi: &RsaBigInt, config: &KeyGenConfig) -> Result<RsaBigInt> {
    let preferred = from_u64(config.public_exponent);
    if preferred > RsaBigInt::one() && &preferred < phi && gcd(&preferred, phi).is_one() {
        return Ok(preferred);
    }

    warn!(
        e = config.public_exponent,
        "public exponent unusable for this modulus, searching for another"
    );

    let mut e = from_u64(3);
    for _ in 0..config.max_exponent_candidates {
        if &e >= phi {
            break;
        }
        if gcd(&e, phi).is_one() {
            return Ok(e);
        }
        e += 2u8;
    }

    Err(RsaError::KeyGenerationFailure(
        "no public exponent coprime with φ(n) found".to_string(),
    ))
}

fn totient(p: &RsaBigInt, q: &RsaBigInt) -> RsaBigInt {
    (p - 1u8) * (q - 1u8)
}

fn modulus_bits(n: &RsaBigInt) -> Result<u32> {
    if n.is_zero() {
        return Err(RsaError::InvalidParameter("modulus must be positive".to_string()));
    }
    u32::try_from(n.bits())
        .map_err(|_| RsaError::InvalidParameter("modulus is too large".to_string()))
}
