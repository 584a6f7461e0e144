// src/integer_math/mod.rs

pub mod mod_exp;
pub mod mod_inverse;
pub mod legendre;
