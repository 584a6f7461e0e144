// src/integer_math/legendre.rs

use num::{BigInt, One};

use crate::integer_math::mod_exp::ModExp;

pub struct Legendre;

impl Legendre {
    /// Euler's criterion: a^((p-1)/2) mod p. Equals 1 for a nonzero
    /// quadratic residue mod p, p - 1 for a non-residue, and 0 when
    /// a ≡ 0 (mod p). p must be an odd prime.
    pub fn symbol(a: &BigInt, p: &BigInt) -> BigInt {
        let exponent = (p - BigInt::one()) / BigInt::from(2);
        ModExp::pow(a, &exponent, p)
    }

    /// Linear scan 2, 3, 4, ... for a quadratic non-residue mod p. Half of
    /// [1, p-1] are non-residues, so the scan is short in practice.
    pub fn non_residue_search(p: &BigInt) -> BigInt {
        let non_residue = p - BigInt::one();
        let mut candidate = BigInt::from(2);

        while &candidate < p {
            if Self::symbol(&candidate, p) == non_residue {
                return candidate;
            }
            candidate += 1;
        }

        panic!("No quadratic non-residue found below {}; modulus is not an odd prime", p);
    }
}
