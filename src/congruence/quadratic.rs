// src/congruence/quadratic.rs

use num::{BigInt, Integer, Zero};
use log::debug;

use crate::congruence::linear::LinearCongruence;
use crate::congruence::solution::Solution;
use crate::integer_math::mod_inverse::ModInverse;
use crate::square_root::tonelli_shanks::TonelliShanks;

pub struct QuadraticCongruence;

impl QuadraticCongruence {
    /// Solves a·x² + b·x + c ≡ 0 (mod p) for p an odd prime.
    ///
    /// When a ≡ 0 (mod p) the equation is linear and the result is whatever
    /// the linear solver returns for b·x ≡ -c: `One`, `InfinitelyMany`, or
    /// `NoSolution`. Otherwise the square is completed and a root extracted
    /// with Tonelli-Shanks, yielding `Two` (possibly with equal entries) or
    /// `NoSolution` when the completed-square discriminant is a non-residue.
    pub fn solve(a: &BigInt, b: &BigInt, c: &BigInt, p: &BigInt) -> Solution {
        if a.mod_floor(p).is_zero() {
            debug!("quadratic degenerates to {}x ≡ {} (mod {})", b, -c, p);
            return LinearCongruence::solve(b, &-c, p);
        }

        let a_inv = match ModInverse::invert(a, p) {
            Some(inv) => inv,
            None => return Solution::NoSolution,
        };
        let ba = (b * &a_inv).mod_floor(p);
        let ca = (c * &a_inv).mod_floor(p);

        // Complete the square: x² + ba·x + ca ≡ (x + ba/2)² - (ba/2)² + ca
        let half = match ModInverse::invert(&BigInt::from(2), p) {
            Some(inv) => inv,
            None => return Solution::NoSolution,
        };
        let b_div_2 = (&ba * &half).mod_floor(p);
        let alpha = (&b_div_2 * &b_div_2 - &ca).mod_floor(p);
        debug!("completed square: (x + {})² ≡ {} (mod {})", b_div_2, alpha, p);

        match TonelliShanks::sqrt_mod(&alpha, p) {
            Some(y) => {
                let x1 = (&y - &b_div_2).mod_floor(p);
                let x2 = (p - &y - &b_div_2).mod_floor(p);
                Solution::Two(x1, x2)
            }
            None => Solution::NoSolution,
        }
    }
}
