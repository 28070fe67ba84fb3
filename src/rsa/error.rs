// RSA Error Types
// Tagged error kinds for the arithmetic core

/// Errors that can occur in the RSA arithmetic core.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller violated a numeric precondition (zero modulus, zero gcd
    /// operand, out-of-range message, zero digit count).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// gcd(e, φ(n)) ≠ 1; the caller must pick a new e or regenerate primes.
    #[error("no modular inverse exists: operands are not coprime")]
    NoInverseExists,

    /// Safe-prime search exhausted its attempt budget.
    #[error("prime generation gave up after {attempts} attempts")]
    PrimeGenerationTimeout { attempts: u64 },
}

/// Result type for RSA core operations
pub type Result<T> = std::result::Result<T, Error>;
