// Key Generation Configuration

/// Total modulus size must be a multiple of this many bits
pub const KEY_SIZE_ALIGNMENT: u32 = 16;

/// Smallest modulus size accepted by the key generator
pub const MIN_KEY_BITS: u32 = 16;

/// Largest modulus size accepted by the key generator
pub const MAX_KEY_BITS: u32 = 16384;

/// Conventional public exponent (F4)
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Tunables for prime search and key derivation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Preferred public exponent, used whenever it is valid for the drawn primes
    pub public_exponent: u64,
    pub miller_rabin_rounds: u32,
    /// Candidates sampled per prime before giving up
    pub max_prime_attempts: u64,
    /// Prime pairs drawn before giving up on an exact-length modulus
    pub max_modulus_attempts: u32,
    /// Odd exponents tried when the preferred one is unusable
    pub max_exponent_candidates: u64,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
            miller_rabin_rounds: 20,
            max_prime_attempts: 100_000,
            max_modulus_attempts: 64,
            max_exponent_candidates: 65_536,
        }
    }
}

impl KeyGenConfig {
    pub fn with_public_exponent(mut self, e: u64) -> Self {
        self.public_exponent = e;
        self
    }

    pub fn with_miller_rabin_rounds(mut self, rounds: u32) -> Self {
        self.miller_rabin_rounds = rounds;
        self
    }

    pub fn with_max_prime_attempts(mut self, attempts: u64) -> Self {
        self.max_prime_attempts = attempts;
        self
    }

    pub fn with_max_modulus_attempts(mut self, attempts: u32) -> Self {
        self.max_modulus_attempts = attempts;
        self
    }

    pub fn with_max_exponent_candidates(mut self, candidates: u64) -> Self {
        self.max_exponent_candidates = candidates;
        self
    }
}
