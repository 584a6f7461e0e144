// src/square_root/mod.rs

pub mod tonelli_shanks;
