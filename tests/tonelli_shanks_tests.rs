// tests/tonelli_shanks_tests.rs

use num::{BigInt, Integer, Zero};
use quadratic_congruence::integer_math::mod_exp::ModExp;
use quadratic_congruence::square_root::tonelli_shanks::TonelliShanks;

#[cfg(test)]
mod tonelli_shanks_tests {
    use super::*;

    fn assert_is_square_root(r: &BigInt, alpha: &BigInt, p: &BigInt) {
        assert_eq!(
            (r * r - alpha).mod_floor(p),
            BigInt::zero(),
            "{}² should be ≡ {} (mod {})",
            r,
            alpha,
            p
        );
        let other = p - r;
        assert_eq!(
            (&other * &other - alpha).mod_floor(p),
            BigInt::zero(),
            "the mirrored root {} should also square to {} (mod {})",
            other,
            alpha,
            p
        );
    }

    #[test]
    fn test_sqrt_of_10_mod_13() {
        // 6² = 36 ≡ 10 and 7² = 49 ≡ 10 (mod 13); 13 ≡ 1 (mod 4) so the
        // general descent runs
        let alpha = BigInt::from(10);
        let p = BigInt::from(13);
        let r = TonelliShanks::sqrt_mod(&alpha, &p).expect("10 is a residue mod 13");
        assert!(
            r == BigInt::from(6) || r == BigInt::from(7),
            "root of 10 mod 13 should be 6 or 7, got {}",
            r
        );
        assert_is_square_root(&r, &alpha, &p);
    }

    #[test]
    fn test_non_residue_returns_none() {
        assert_eq!(
            TonelliShanks::sqrt_mod(&BigInt::from(2), &BigInt::from(13)),
            None,
            "2 is a non-residue mod 13"
        );
        assert_eq!(
            TonelliShanks::sqrt_mod(&BigInt::from(29), &BigInt::from(31)),
            None,
            "29 is a non-residue mod 31"
        );
    }

    #[test]
    fn test_zero_alpha_returns_none() {
        // alpha ≡ 0 fails the residue gate (symbol 0, not 1)
        assert_eq!(TonelliShanks::sqrt_mod(&BigInt::zero(), &BigInt::from(13)), None);
        assert_eq!(TonelliShanks::sqrt_mod(&BigInt::from(26), &BigInt::from(13)), None);
    }

    #[test]
    fn test_exhaustive_residues_mod_101() {
        // Every square must get a root back, and it must square correctly.
        // 101 - 1 = 25 * 2², so the descent branch is exercised too.
        let p = BigInt::from(101);
        let mut b = BigInt::from(1);
        while b < p {
            let alpha = (&b * &b).mod_floor(&p);
            let r = TonelliShanks::sqrt_mod(&alpha, &p)
                .unwrap_or_else(|| panic!("{} = {}² should have a root mod 101", alpha, b));
            assert_is_square_root(&r, &alpha, &p);
            b += 1;
        }
    }

    #[test]
    fn test_large_prime_3_mod_4_path() {
        // 1000000000039 - 1 = 2 · 500000000019, so this takes the direct
        // alpha^((p+1)/4) route
        let alpha: BigInt = "881398088036".parse().unwrap();
        let p: BigInt = "1000000000039".parse().unwrap();
        let r = TonelliShanks::sqrt_mod(&alpha, &p).expect("881398088036 is a residue mod 1000000000039");
        assert!(
            r == "208600591990".parse().unwrap() || r == "791399408049".parse().unwrap(),
            "unexpected root {} for 881398088036 mod 1000000000039",
            r
        );
        assert_is_square_root(&r, &alpha, &p);
    }

    #[test]
    fn test_large_prime_general_path() {
        // 1000000000121 - 1 = q * 2³: the descent loop runs on a 40-bit prime
        let p: BigInt = "1000000000121".parse().unwrap();
        let v = BigInt::from(123456789);
        let alpha = ModExp::pow(&v, &BigInt::from(2), &p);
        let r = TonelliShanks::sqrt_mod(&alpha, &p).expect("a square is always a residue");
        assert!(
            r == v || r == &p - &v,
            "root of {} mod {} should be ±{}, got {}",
            alpha,
            p,
            v,
            r
        );
        assert_is_square_root(&r, &alpha, &p);
    }

    #[test]
    fn test_mersenne_prime_fast_path() {
        // 2^127 - 1 ≡ 3 (mod 4), well beyond 64 bits
        let p: BigInt = "170141183460469231731687303715884105727".parse().unwrap();
        let v: BigInt = "123456789123456789123456789".parse().unwrap();
        let alpha = ModExp::pow(&v, &BigInt::from(2), &p);
        let r = TonelliShanks::sqrt_mod(&alpha, &p).expect("a square is always a residue");
        assert!(r == v || r == &p - &v, "root should be ±{}, got {}", v, r);
        assert_is_square_root(&r, &alpha, &p);
    }

    #[test]
    fn test_50_digit_prime_general_path() {
        // p = 10^50 + 577 is prime with p - 1 = q * 2⁶
        let p: BigInt = "100000000000000000000000000000000000000000000000577".parse().unwrap();
        let v: BigInt = "98765432109876543210987654321098765432109876543210".parse().unwrap();
        let alpha = ModExp::pow(&v, &BigInt::from(2), &p);
        let r = TonelliShanks::sqrt_mod(&alpha, &p).expect("a square is always a residue");
        assert!(r == v || r == &p - &v, "root should be ±{} mod p, got {}", v, r);
        assert_is_square_root(&r, &alpha, &p);
    }
}
