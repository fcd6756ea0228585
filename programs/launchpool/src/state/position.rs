//! Participant Position
//!
//! Append-only share ledger per (market, wallet). Shares accumulate across
//! repeated trades and are never decremented; a claim only flips the
//! `claimed` flag, so the account remains a historical record after payout.

use anchor_lang::prelude::*;

use crate::errors::LedgerError;
use crate::state::Side;

/// Per-wallet position in a single market
///
/// Seeds: ["position", market, user]
///
/// Shares are plain counters, not SPL tokens. They weight the proportional
/// distributions at claim time:
/// - YES wins: tokens pro-rata by `yes_shares`
/// - NO wins: SOL pro-rata by `no_shares`
/// - Refund: `total_contributed` returned in full
#[account]
#[derive(InitSpace)]
pub struct Position {
    /// Wallet that owns this position
    pub user: Pubkey,

    /// Market this position belongs to
    pub market: Pubkey,

    /// YES shares owned (monotonic)
    pub yes_shares: u64,

    /// NO shares owned (monotonic)
    pub no_shares: u64,

    /// Net SOL credited to the pool by this wallet (refund basis)
    pub total_contributed: u64,

    /// One-time claim flag; shares are preserved after settlement
    pub claimed: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Position {
    pub const SEED: &'static [u8] = b"position";

    /// Vote direction implied by the held shares. One wallet can only ever
    /// hold one side (enforced at buy time), so this is unambiguous.
    pub fn side(&self) -> Option<Side> {
        if self.yes_shares > 0 {
            Some(Side::Yes)
        } else if self.no_shares > 0 {
            Some(Side::No)
        } else {
            None
        }
    }

    /// One-way settlement: flips `claimed` exactly once. Share counts are
    /// untouched, so the position keeps its history after payout.
    pub fn settle(&mut self) -> Result<()> {
        require!(!self.claimed, LedgerError::AlreadyClaimed);
        self.claimed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(yes_shares: u64, no_shares: u64) -> Position {
        Position {
            user: Pubkey::new_unique(),
            market: Pubkey::new_unique(),
            yes_shares,
            no_shares,
            total_contributed: 500_000_000,
            claimed: false,
            bump: 254,
        }
    }

    #[test]
    fn test_side_follows_held_shares() {
        assert_eq!(position(1_000, 0).side(), Some(Side::Yes));
        assert_eq!(position(0, 42).side(), Some(Side::No));
        assert_eq!(position(0, 0).side(), None);
    }

    #[test]
    fn test_second_settle_rejected_without_mutation() {
        let mut p = position(1_000, 0);
        p.settle().unwrap();
        assert!(p.claimed);

        let err = p.settle().unwrap_err();
        assert_eq!(err, LedgerError::AlreadyClaimed.into());

        // Nothing besides the flag ever changes, and the flag stays set.
        assert!(p.claimed);
        assert_eq!(p.yes_shares, 1_000);
        assert_eq!(p.total_contributed, 500_000_000);
    }
}
