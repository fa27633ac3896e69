//! Prime table sizes for [`HybridRegistry`](crate::HybridRegistry).
//!
//! Bucket indices are computed with a modulus rather than a mask, so table
//! lengths are kept prime to spread hash codes whose low bits are poorly
//! distributed.

/// Largest capacity a registry may be sized to.
///
/// Entry indices are stored as `u32`, and this keeps every index (and the
/// empty-bucket sentinel) representable.
pub const MAX_PRIME_CAPACITY: usize = 0x7FEF_FFFD;

/// Primes past the precomputed table must not satisfy `(p - 1) % HASH_PRIME ==
/// 0`, which would make them a poor modulus for multiplicative hash codes.
const HASH_PRIME: usize = 101;

/// Roughly 1.2x spaced primes used for the common range of table sizes.
const PRIMES: [usize; 72] = [
    3, 7, 11, 17, 23, 29, 37, 47, 59, 71, 89, 107, 131, 163, 197, 239, 293, 353, 431, 521, 631,
    761, 919, 1103, 1327, 1597, 1931, 2333, 2801, 3371, 4049, 4861, 5839, 7013, 8419, 10103,
    12143, 14591, 17519, 21023, 25229, 30293, 36353, 43627, 52361, 62851, 75431, 90523, 108631,
    130363, 156437, 187751, 225307, 270371, 324449, 389357, 467237, 560689, 672827, 807403,
    968897, 1162687, 1395263, 1674319, 2009191, 2411033, 2893249, 3471899, 4166287, 4999559,
    5999471, 7199369,
];

/// Returns `true` if `candidate` is prime.
///
/// Uses trial division by odd numbers, which is only ever run for sizes past
/// the precomputed table.
pub fn is_prime(candidate: usize) -> bool {
    if candidate & 1 == 0 {
        return candidate == 2;
    }
    if candidate < 3 {
        return false;
    }

    let limit = candidate.isqrt();
    let mut divisor = 3;
    while divisor <= limit {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Returns the smallest table size that is prime and at least `min`.
///
/// # Examples
///
/// ```rust
/// use hybrid_registry::prime::get_prime;
///
/// assert_eq!(get_prime(0), 3);
/// assert_eq!(get_prime(100), 107);
/// assert_eq!(get_prime(107), 107);
/// ```
pub fn get_prime(min: usize) -> usize {
    let index = PRIMES.partition_point(|&prime| prime < min);
    if let Some(&prime) = PRIMES.get(index) {
        return prime;
    }

    (min | 1..=usize::MAX)
        .step_by(2)
        .find(|&candidate| is_prime(candidate) && (candidate - 1) % HASH_PRIME != 0)
        .unwrap_or(min)
}

/// Returns the table size to grow to from a table of `old_size`: the smallest
/// prime at least twice as large, clamped to [`MAX_PRIME_CAPACITY`].
///
/// # Panics
///
/// Panics if `old_size` is already at or past [`MAX_PRIME_CAPACITY`].
pub fn expand_prime(old_size: usize) -> usize {
    assert!(old_size < MAX_PRIME_CAPACITY, "capacity overflow");

    let new_size = old_size.checked_mul(2).expect("capacity overflow");
    if new_size > MAX_PRIME_CAPACITY {
        return MAX_PRIME_CAPACITY;
    }

    get_prime(new_size)
}
