//! A set of utility macros and functions used throughout the directory.

#[macro_use]
pub mod number;
pub mod time;
