// RSA Module - Main module file
// Exports the arithmetic core: exponentiation, primality, keys, cipher

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod prime;

pub use bigint::{extended_gcd, inverse_mod, power};
pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use error::{Error, Result};
pub use keygen::{
    generate_default_keypair, generate_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey,
    DEFAULT_PUBLIC_EXPONENT,
};
pub use prime::{generate_safe_prime, generate_safe_prime_bounded, is_strong_pseudoprime};
