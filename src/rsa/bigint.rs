// RSA Big Integer Operations
// Modular exponentiation and the extended Euclidean algorithm over num-bigint

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Pow, Zero};

use super::error::{Error, Result};

/// Modular exponentiation: base^exponent mod modulus
/// Uses square-and-multiply; fails with `InvalidInput` when modulus is zero
pub fn power(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidInput("modulus must be at least 1"));
    }
    Ok(mod_pow(base, exponent, modulus))
}

/// Square-and-multiply core, modulus known to be nonzero
pub(crate) fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, u, v) such that a*u + b*v = gcd(a, b)
/// Fails with `InvalidInput` when either operand is zero
pub fn extended_gcd(a: &BigUint, b: &BigUint) -> Result<(BigUint, BigInt, BigInt)> {
    if a.is_zero() || b.is_zero() {
        return Err(Error::InvalidInput("extended_gcd operands must be nonzero"));
    }

    let (mut r0, mut r1) = (BigInt::from(a.clone()), BigInt::from(b.clone()));
    let (mut s0, mut s1) = (BigInt::one(), BigInt::zero());
    let (mut t0, mut t1) = (BigInt::zero(), BigInt::one());

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r = &r0 - &q * &r1;
        r0 = std::mem::replace(&mut r1, r);
        let s = &s0 - &q * &s1;
        s0 = std::mem::replace(&mut s1, s);
        let t = &t0 - &q * &t1;
        t0 = std::mem::replace(&mut t1, t);
    }

    // r0 is nonnegative since both inputs are positive
    Ok((r0.magnitude().clone(), s0, t0))
}

/// Compute modular inverse: a^(-1) mod modulus, normalized to [0, modulus)
/// Fails with `NoInverseExists` when gcd(a, modulus) != 1
pub fn inverse_mod(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let (gcd, u, _) = extended_gcd(a, modulus)?;

    if !gcd.is_one() {
        return Err(Error::NoInverseExists);
    }

    let m = BigInt::from(modulus.clone());
    let inv = u.mod_floor(&m);
    Ok(inv.magnitude().clone())
}

/// 10^exp as a big integer; digit-range bounds for the prime generator
pub(crate) fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}
