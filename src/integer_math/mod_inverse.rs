// src/integer_math/mod_inverse.rs

use num::{BigInt, Integer, One, Zero};

pub struct ModInverse;

impl ModInverse {
    /// Extended Euclidean algorithm: returns the multiplicative inverse of
    /// `a` mod `p`, normalized into [0, p), or `None` when gcd(a, p) > 1.
    /// For prime p the `None` branch only fires when a ≡ 0 (mod p).
    ///
    /// Invariant: for any returned `inv`, (a * inv) mod p == 1.
    pub fn invert(a: &BigInt, p: &BigInt) -> Option<BigInt> {
        let mut r = p.clone();
        let mut new_r = a.mod_floor(p);
        let mut t = BigInt::zero();
        let mut new_t = BigInt::one();

        while !new_r.is_zero() {
            let (quotient, remainder) = r.div_rem(&new_r);
            r = new_r;
            new_r = remainder;
            let next_t = &t - &quotient * &new_t;
            t = new_t;
            new_t = next_t;
        }

        if r > BigInt::one() {
            return None;
        }

        if t < BigInt::zero() {
            t += p;
        }

        Some(t)
    }
}
