// RSA Encryption
// Textbook exponentiation: c = m^e mod n, no padding

use num_bigint::BigUint;

use super::bigint::power;
use super::error::{Error, Result};

/// Encrypt a numeric message: message^e mod n.
///
/// The message must satisfy 0 <= message < n; larger values would wrap
/// around the modulus and decrypt to a different number, so they are
/// rejected up front. Equal messages under the same key always produce
/// equal ciphertexts.
pub fn encrypt(message: &BigUint, e: &BigUint, n: &BigUint) -> Result<BigUint> {
    if message >= n {
        return Err(Error::InvalidInput("message must be smaller than the modulus"));
    }
    power(message, e, n)
}
