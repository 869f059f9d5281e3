// src/lib.rs
pub mod domain;
pub mod money;
pub mod session;

pub use domain::*;
pub use money::*;
