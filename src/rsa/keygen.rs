// RSA Key Generation
// Builds a key pair from two independently generated safe primes

use num_bigint::BigUint;
use rand::Rng;

use super::bigint::inverse_mod;
use super::error::{Error, Result};
use super::prime::generate_safe_prime;

/// Common choice of public exponent; prime, so coprime to φ(n) unless
/// 65537 divides p-1 or q-1
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// RSA Public Key: (e, n)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: BigUint, // Modulus
    pub e: BigUint, // Public exponent
}

/// RSA Private Key: (d, n)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: BigUint, // Modulus (same as public)
    pub d: BigUint, // Private exponent
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub digits: u32,
}

impl RsaPublicKey {
    /// Encrypt a numeric message with this key; requires message < n
    pub fn encrypt(&self, message: &BigUint) -> Result<BigUint> {
        super::encrypt::encrypt(message, &self.e, &self.n)
    }
}

impl RsaPrivateKey {
    /// Decrypt a numeric ciphertext with this key
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint> {
        super::decrypt::decrypt(ciphertext, &self.d, &self.n)
    }
}

/// Generate an RSA key pair whose prime factors are safe primes with
/// exactly `digits` decimal digits each.
///
/// Fails with `NoInverseExists` when e and φ(n) are not coprime; the
/// caller should retry with fresh primes or a different exponent.
/// The prime factors and φ(n) are intermediate values and are not
/// retained in the returned key pair.
pub fn generate_keypair<R: Rng>(digits: u32, e: u64, rng: &mut R) -> Result<RsaKeyPair> {
    if digits == 0 {
        return Err(Error::InvalidInput("digit count must be at least 1"));
    }
    if e < 2 {
        return Err(Error::InvalidInput("public exponent must be at least 2"));
    }

    let e = BigUint::from(e);

    let p = generate_safe_prime(digits, rng)?;
    let mut q = generate_safe_prime(digits, rng)?;
    while q == p {
        // Collisions only really happen at tiny digit counts
        q = generate_safe_prime(digits, rng)?;
    }

    let n = &p * &q;
    let phi = (&p - 1u8) * (&q - 1u8);
    let d = inverse_mod(&e, &phi)?;

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { n: n.clone(), e },
        private_key: RsaPrivateKey { n, d },
        digits,
    })
}

/// Generate a key pair with the default public exponent 65537
pub fn generate_default_keypair<R: Rng>(digits: u32, rng: &mut R) -> Result<RsaKeyPair> {
    generate_keypair(digits, DEFAULT_PUBLIC_EXPONENT, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x4b45)
    }

    #[test]
    fn test_small_keypair_roundtrip() {
        // 3-digit safe primes, e = 17
        let mut rng = rng();
        let keypair = generate_keypair(3, 17, &mut rng).unwrap();
        let m = BigUint::from(5u8);
        assert!(m < keypair.public_key.n);

        let c = keypair.public_key.encrypt(&m).unwrap();
        assert_eq!(keypair.private_key.decrypt(&c).unwrap(), m);
    }

    #[test]
    fn test_default_exponent() {
        // With 4-digit primes, p-1 and q-1 are both below 65537, so the
        // prime exponent is always coprime to φ(n)
        let mut rng = rng();
        let keypair = generate_default_keypair(4, &mut rng).unwrap();
        assert_eq!(keypair.public_key.e, BigUint::from(65537u32));

        let m = BigUint::from(424242u32);
        let c = keypair.public_key.encrypt(&m).unwrap();
        assert_eq!(keypair.private_key.decrypt(&c).unwrap(), m);
    }

    #[test]
    fn test_exponent_times_inverse() {
        let mut rng = rng();
        let keypair = generate_keypair(3, 17, &mut rng).unwrap();
        // e*d ≡ 1 (mod φ) implies m^(e*d) ≡ m (mod n) for any m < n
        for m in [0u32, 1, 2, 99] {
            let m = BigUint::from(m);
            let c = keypair.public_key.encrypt(&m).unwrap();
            assert_eq!(keypair.private_key.decrypt(&c).unwrap(), m);
        }
    }

    #[test]
    fn test_distinct_moduli() {
        let mut rng = rng();
        let a = generate_default_keypair(6, &mut rng).unwrap();
        let b = generate_default_keypair(6, &mut rng).unwrap();
        assert_ne!(a.public_key.n, b.public_key.n);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut rng = rng();
        assert!(matches!(
            generate_keypair(0, 17, &mut rng),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            generate_keypair(3, 1, &mut rng),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_modulus_is_composite_of_two_primes() {
        use crate::rsa::prime::{is_strong_pseudoprime, DEFAULT_ROUNDS};
        let mut rng = rng();
        let keypair = generate_default_keypair(5, &mut rng).unwrap();
        // n itself must not be prime
        assert!(!is_strong_pseudoprime(
            &keypair.public_key.n,
            DEFAULT_ROUNDS,
            &mut rng
        ));
        assert!(keypair.public_key.n > BigUint::one());
    }
}
