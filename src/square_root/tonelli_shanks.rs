// src/square_root/tonelli_shanks.rs

use num::{BigInt, Integer, One, Zero};
use log::{debug, trace};

use crate::integer_math::legendre::Legendre;
use crate::integer_math::mod_exp::ModExp;

pub struct TonelliShanks;

impl TonelliShanks {
    /// Finds beta such that beta² ≡ alpha (mod p), for p an odd prime.
    /// The second root is p - beta. Returns `None` when alpha is a
    /// quadratic non-residue (or alpha ≡ 0) mod p.
    pub fn sqrt_mod(alpha: &BigInt, p: &BigInt) -> Option<BigInt> {
        if !Legendre::symbol(alpha, p).is_one() {
            return None;
        }

        // Factor p - 1 = q * 2^s
        let mut q: BigInt = p - BigInt::one();
        let mut s = 0u32;
        while q.is_even() {
            q /= 2;
            s += 1;
        }
        debug!("tonelli_shanks: p - 1 = q * 2^{}, q = {}", s, q);

        // p ≡ 3 (mod 4): the root is alpha^((p+1)/4) directly
        if s == 1 {
            let exponent = (p + BigInt::one()) / BigInt::from(4);
            return Some(ModExp::pow(alpha, &exponent, p));
        }

        let z = Legendre::non_residue_search(p);
        debug!("tonelli_shanks: non-residue z = {}", z);

        let mut c = ModExp::pow(&z, &q, p);
        let mut r = ModExp::pow(alpha, &((&q + BigInt::one()) / BigInt::from(2)), p);
        let mut t = ModExp::pow(alpha, &q, p);
        let mut m = s;

        while !(&t - BigInt::one()).mod_floor(p).is_zero() {
            // Least i in [1, m) with t^(2^i) ≡ 1 (mod p), by repeated squaring
            let mut i = 0u32;
            let mut t2 = (&t * &t).mod_floor(p);
            for candidate in 1..m {
                if (&t2 - BigInt::one()).mod_floor(p).is_zero() {
                    i = candidate;
                    break;
                }
                t2 = (&t2 * &t2).mod_floor(p);
            }
            if i == 0 {
                panic!("tonelli_shanks: order search exhausted [1, {}); modulus is not an odd prime", m);
            }

            let b = ModExp::pow(&c, &(BigInt::one() << (m - i - 1)), p);
            r = (&r * &b).mod_floor(p);
            c = (&b * &b).mod_floor(p);
            t = (&t * &c).mod_floor(p);
            m = i;
            trace!("tonelli_shanks: descent to m = {}", m);
        }

        Some(r)
    }
}
