// src/integer_math/mod_exp.rs

use num::{BigInt, Integer, One, Zero};

pub struct ModExp;

impl ModExp {
    /// Computes base^exponent mod modulus by binary square-and-multiply,
    /// O(log exponent) modular multiplications. The exponent must be
    /// non-negative and the modulus positive.
    pub fn pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
        if modulus.is_one() {
            return BigInt::zero();
        }

        let mut result = BigInt::one();
        let mut base = base.mod_floor(modulus);
        let mut exponent = exponent.clone();
        let two = BigInt::from(2);

        while exponent > BigInt::zero() {
            if exponent.is_odd() {
                result = (&result * &base).mod_floor(modulus);
            }
            base = (&base * &base).mod_floor(modulus);
            exponent /= &two;
        }

        result
    }
}
