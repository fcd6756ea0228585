//! Platform Treasury
//!
//! Singleton PDA that accumulates the flat creation fee and the 5%
//! completion fee from every market. Initialization is gated to the fixed
//! deployer identity; the admin capability moves only through the explicit
//! `set_treasury_admin` transition.

use anchor_lang::prelude::*;

/// Global treasury account (singleton PDA)
///
/// Seeds: ["treasury"]
#[account]
#[derive(InitSpace)]
pub struct Treasury {
    /// Admin wallet; the only key allowed to withdraw fees or run
    /// emergency operations
    pub admin: Pubkey,

    /// Cumulative fees collected (lamports)
    pub total_fees: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Treasury {
    pub const SEED: &'static [u8] = b"treasury";
}
