// src/lib.rs

pub mod integer_math;
pub mod square_root;
pub mod congruence;
