#[macro_use]
pub mod directory_model;
