// src/congruence/solution.rs

use num::BigInt;
use std::fmt::Display;

/// Outcome of a congruence solve. "No solution" and "infinitely many" are
/// distinct variants, never sentinel integers, so a root of zero is not
/// confusable with an absent result. A `Two` may carry equal entries
/// (a repeated root); it is not collapsed to `One`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    NoSolution,
    InfinitelyMany,
    One(BigInt),
    Two(BigInt, BigInt),
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Solution::NoSolution => write!(f, "no solution"),
            Solution::InfinitelyMany => write!(f, "infinitely many solutions"),
            Solution::One(x) => write!(f, "x: {}", x),
            Solution::Two(x1, x2) => write!(f, "x1: {}, x2: {}", x1, x2),
        }
    }
}
