// Safe Prime Generation
// Miller-Rabin primality testing and digit-length-exact safe prime search

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use super::bigint::{mod_pow, pow10};
use super::error::{Error, Result};

/// Default number of Miller-Rabin rounds; false-positive probability is
/// bounded by 4^(-rounds)
pub const DEFAULT_ROUNDS: u32 = 30;

/// Small primes for trial division ahead of the witness loop
const SIEVE_PRIMES: &[u32] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Miller-Rabin primality test with a caller-supplied randomness source.
///
/// Returns true if `n` is a strong pseudoprime for `rounds` independent
/// random bases in [2, n-2]. True primes always pass; a composite passes
/// with probability at most 4^(-rounds).
pub fn is_strong_pseudoprime<R: Rng>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
    let two = BigUint::from(2u8);
    let three = BigUint::from(3u8);

    if n == &two || n == &three {
        return true;
    }
    if n <= &BigUint::one() || n.is_even() {
        return false;
    }

    // Trial division rejects most composites before any modular exponentiation
    for &prime in SIEVE_PRIMES {
        let p = BigUint::from(prime);
        if n == &p {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    // Write n-1 as 2^s * r with r odd
    let mut r = n - 1u8;
    let mut s = 0u32;
    while r.is_even() {
        r >>= 1;
        s += 1;
    }

    let n_minus_one = n - 1u8;

    for _ in 0..rounds {
        // Random base a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_one);

        let mut x = mod_pow(&a, &r, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut witnessed = true;
        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                witnessed = false;
                break;
            }
        }

        if witnessed {
            // Composite; no point trying further bases
            return false;
        }
    }

    true
}

/// Generate a safe prime with exactly `digits` decimal digits.
///
/// A safe prime is a prime p such that (p-1)/2 is also prime. The search
/// samples candidates for (p-1)/2 uniformly at random and keeps the first
/// pair that passes both primality tests, so two calls are expected to
/// return different primes.
pub fn generate_safe_prime<R: Rng>(digits: u32, rng: &mut R) -> Result<BigUint> {
    generate_safe_prime_bounded(digits, default_max_attempts(digits), rng)
}

/// Safe prime search with an explicit attempt budget; fails with
/// `PrimeGenerationTimeout` once the budget is exhausted.
pub fn generate_safe_prime_bounded<R: Rng>(
    digits: u32,
    max_attempts: u64,
    rng: &mut R,
) -> Result<BigUint> {
    if digits == 0 {
        return Err(Error::InvalidInput("digit count must be at least 1"));
    }

    // Inclusive range for p, and the matching range for l = (p-1)/2
    let lower = pow10(digits - 1);
    let upper = pow10(digits) - 1u8;
    let l_lower = (&lower - 1u8) >> 1;
    let l_upper = (&upper - 1u8) >> 1;
    let l_bound = &l_upper + 1u8;

    for _ in 0..max_attempts {
        let l = rng.gen_biguint_range(&l_lower, &l_bound);
        if !is_strong_pseudoprime(&l, DEFAULT_ROUNDS, rng) {
            continue;
        }

        let p = (&l << 1) + 1u8;
        // The l range is not digit-exact at the boundary, so p can land
        // outside the requested digit count
        if p < lower || p > upper {
            continue;
        }
        if !is_strong_pseudoprime(&p, DEFAULT_ROUNDS, rng) {
            continue;
        }

        return Ok(p);
    }

    Err(Error::PrimeGenerationTimeout {
        attempts: max_attempts,
    })
}

/// Attempt budget scaled to the search space. Expected iterations grow
/// roughly with digits^2 by the prime density theorem; the cap sits two
/// orders of magnitude above that.
fn default_max_attempts(digits: u32) -> u64 {
    let d = u64::from(digits) + 1;
    400 * d * d
}
