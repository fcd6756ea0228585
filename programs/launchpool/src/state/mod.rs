//! State accounts for the market ledger

pub mod market;
pub mod position;
pub mod treasury;
pub mod vesting;

pub use market::*;
pub use position::*;
pub use treasury::*;
pub use vesting::*;
