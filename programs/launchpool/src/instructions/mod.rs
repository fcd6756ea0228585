//! Instruction handlers, grouped by concern

pub mod admin;
pub mod launch;
pub mod market;

pub use admin::*;
pub use launch::*;
pub use market::*;
