//! Textbook RSA over safe primes.
//!
//! Key pairs are built from two safe primes (p prime with (p-1)/2 also
//! prime) of an exact decimal digit length, and encryption/decryption is
//! plain modular exponentiation over arbitrary-precision integers. There
//! is deliberately no padding scheme and no constant-time arithmetic;
//! this models the classic construction, not a hardened implementation.
//!
//! Randomness is always supplied by the caller, so deterministic testing
//! with a seeded generator and concurrent use with per-thread generators
//! both come for free.
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use num_bigint::BigUint;
//!
//! let mut rng = StdRng::from_entropy();
//! let keypair = rsa_safe::generate_default_keypair(100, &mut rng).unwrap();
//!
//! let message = BigUint::from(4211u32);
//! let ciphertext = keypair.public_key.encrypt(&message).unwrap();
//! assert_eq!(keypair.private_key.decrypt(&ciphertext).unwrap(), message);
//! ```

pub mod codec;
pub mod rsa;

pub use rsa::{
    decrypt, encrypt, extended_gcd, generate_default_keypair, generate_keypair,
    generate_safe_prime, generate_safe_prime_bounded, inverse_mod, is_strong_pseudoprime, power,
    Error, Result, RsaKeyPair, RsaPrivateKey, RsaPublicKey, DEFAULT_PUBLIC_EXPONENT,
};
