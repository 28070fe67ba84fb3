// RSA Decryption
// Textbook exponentiation: m = c^d mod n

use num_bigint::BigUint;

use super::bigint::power;
use super::error::Result;

/// Decrypt a numeric ciphertext: ciphertext^d mod n.
///
/// Recovers the original message for any ciphertext produced by
/// `encrypt` under the matching key, by Euler's theorem.
pub fn decrypt(ciphertext: &BigUint, d: &BigUint, n: &BigUint) -> Result<BigUint> {
    power(ciphertext, d, n)
}
