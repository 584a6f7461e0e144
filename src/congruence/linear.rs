// src/congruence/linear.rs

use num::{BigInt, Integer, Zero};

use crate::congruence::solution::Solution;
use crate::integer_math::mod_inverse::ModInverse;

pub struct LinearCongruence;

impl LinearCongruence {
    /// Solves a·x ≡ b (mod p) for p an odd prime. When a ≡ 0 the congruence
    /// degenerates: every x works if b ≡ 0, no x works otherwise.
    pub fn solve(a: &BigInt, b: &BigInt, p: &BigInt) -> Solution {
        if a.mod_floor(p).is_zero() {
            return if b.mod_floor(p).is_zero() {
                Solution::InfinitelyMany
            } else {
                Solution::NoSolution
            };
        }

        match ModInverse::invert(a, p) {
            Some(a_inv) => Solution::One((b * &a_inv).mod_floor(p)),
            None => Solution::NoSolution,
        }
    }
}
