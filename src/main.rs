// src/main.rs

use log::info;
use env_logger::Env;
use num::BigInt;

use quadratic_congruence::congruence::quadratic::QuadraticCongruence;
use quadratic_congruence::square_root::tonelli_shanks::TonelliShanks;

fn main() {
    // Initialize the logger
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info")
        .write_style_or("MY_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    let samples: Vec<(BigInt, BigInt, BigInt, BigInt)> = vec![
        (1.into(), 1.into(), (-9).into(), 11.into()),
        (1.into(), 6.into(), 5.into(), 7.into()),
        (1.into(), 6.into(), 11.into(), 31.into()),
        (0.into(), 3.into(), 4.into(), 17.into()),
        (0.into(), 0.into(), 0.into(), 17.into()),
        (
            53212.into(),
            42124.into(),
            53321.into(),
            104395303.into(),
        ),
    ];

    for (a, b, c, p) in &samples {
        let solution = QuadraticCongruence::solve(a, b, c, p);
        info!("{}x² + {}x + {} ≡ 0 (mod {}) -> {}", a, b, c, p, solution);
    }

    let alpha = BigInt::from(881398088036u64);
    let p: BigInt = "1000000000039".parse().unwrap();
    match TonelliShanks::sqrt_mod(&alpha, &p) {
        Some(r) => info!("sqrt of {} mod {} -> {} and {}", alpha, p, r, &p - &r),
        None => info!("{} is not a quadratic residue mod {}", alpha, p),
    }
}
