// src/congruence/mod.rs

pub mod solution;
pub mod linear;
pub mod quadratic;
