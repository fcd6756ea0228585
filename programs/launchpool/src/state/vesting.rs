//! Vesting Schedules
//!
//! Linear unlock over a fixed duration with an immediate tranche released
//! at initialization time. Two schedules share the same math:
//! - [`TeamVesting`]: the team's 33% token allocation (8% immediate,
//!   25% vested) after a YES resolution and token launch.
//! - [`FounderVesting`]: the founder's excess SOL when the resolved pool
//!   exceeded the launch cap (8% immediate, 92% vested).
//!
//! The continuous linear formula is authoritative for claims; the monthly
//! tranche projection exists for display only.

use anchor_lang::prelude::*;

use crate::constants::VESTING_TRANCHES;
use crate::errors::LedgerError;

/// Linear unlock: `amount * min(now - start, duration) / duration`,
/// clamped to `[0, amount]`.
pub fn linear_unlocked(amount: u64, start: i64, duration: i64, now: i64) -> u64 {
    let elapsed = now.saturating_sub(start);
    if elapsed <= 0 || duration <= 0 {
        return 0;
    }
    if elapsed >= duration {
        return amount;
    }
    (amount as u128 * elapsed as u128 / duration as u128) as u64
}

/// Next monthly tranche boundary after `now`, for UI projection.
///
/// Returns `(unlock_timestamp, tranche_amount)` or `None` once the schedule
/// has fully vested. The authoritative claimable amount is always the
/// continuous formula, never this discretization.
pub fn next_unlock(amount: u64, start: i64, duration: i64, now: i64) -> Option<(i64, u64)> {
    if duration <= 0 {
        return None;
    }
    let elapsed = now.saturating_sub(start).max(0);
    if elapsed >= duration {
        return None;
    }
    let tranche_len = duration / VESTING_TRANCHES;
    if tranche_len == 0 {
        return None;
    }
    let per_tranche = amount / VESTING_TRANCHES as u64;
    let next_index = elapsed / tranche_len + 1;
    if next_index >= VESTING_TRANCHES {
        // The last boundary is pinned to the schedule end, so a duration
        // that does not divide evenly into tranches still projects its
        // final unlock; that tranche carries the division remainder.
        let final_amount = amount - per_tranche * (VESTING_TRANCHES as u64 - 1);
        return Some((start + duration, final_amount));
    }
    Some((start + next_index * tranche_len, per_tranche))
}

/// Claimable-now for an immediate + vested schedule.
///
/// `claimed` counts both tranches, so the vested portion already taken is
/// `claimed - immediate` once the immediate tranche was released.
fn claimable_now(
    immediate: u64,
    vesting: u64,
    claimed: u64,
    immediate_claimed: bool,
    start: i64,
    duration: i64,
    now: i64,
) -> Result<u64> {
    let mut claimable = 0u64;

    if !immediate_claimed {
        claimable = claimable
            .checked_add(immediate)
            .ok_or(LedgerError::ArithmeticOverflow)?;
    }

    let unlocked_vested = linear_unlocked(vesting, start, duration, now);
    let vested_claimed = claimed.saturating_sub(if immediate_claimed { immediate } else { 0 });
    claimable = claimable
        .checked_add(unlocked_vested.saturating_sub(vested_claimed))
        .ok_or(LedgerError::ArithmeticOverflow)?;

    // A schedule can never pay out more than its total.
    let total = immediate
        .checked_add(vesting)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    Ok(claimable.min(total.saturating_sub(claimed)))
}

/// Team token vesting schedule
///
/// Seeds: ["team_vesting", market]
#[account]
#[derive(InitSpace)]
pub struct TeamVesting {
    /// Market this schedule belongs to
    pub market: Pubkey,

    /// Wallet receiving the vested tokens
    pub team_wallet: Pubkey,

    /// Launched token mint
    pub token_mint: Pubkey,

    /// Total tokens allocated to the team (33% of acquired supply)
    pub total_tokens: u64,

    /// Immediate tranche (8% of acquired supply)
    pub immediate_tokens: u64,

    /// Linearly vested tranche (25% of acquired supply)
    pub vesting_tokens: u64,

    /// Tokens already claimed (immediate + vested)
    pub claimed_tokens: u64,

    /// Whether the immediate tranche has been released
    pub immediate_claimed: bool,

    /// Vesting start (market resolution time)
    pub vesting_start: i64,

    /// Vesting duration in seconds
    pub vesting_duration: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl TeamVesting {
    pub const SEED: &'static [u8] = b"team_vesting";

    /// Vested tokens unlocked by the continuous linear formula.
    pub fn unlocked_vested(&self, now: i64) -> u64 {
        linear_unlocked(self.vesting_tokens, self.vesting_start, self.vesting_duration, now)
    }

    /// Tokens claimable right now.
    pub fn claimable(&self, now: i64) -> Result<u64> {
        claimable_now(
            self.immediate_tokens,
            self.vesting_tokens,
            self.claimed_tokens,
            self.immediate_claimed,
            self.vesting_start,
            self.vesting_duration,
            now,
        )
    }

    /// Next monthly unlock for display.
    pub fn next_unlock(&self, now: i64) -> Option<(i64, u64)> {
        next_unlock(self.vesting_tokens, self.vesting_start, self.vesting_duration, now)
    }
}

/// Founder excess-SOL vesting schedule
///
/// Seeds: ["founder_vesting", market]
#[account]
#[derive(InitSpace)]
pub struct FounderVesting {
    /// Market this schedule belongs to
    pub market: Pubkey,

    /// Founder wallet receiving the vested SOL
    pub founder: Pubkey,

    /// Total excess SOL allocated (lamports)
    pub total_sol: u64,

    /// Immediate tranche (8%)
    pub immediate_sol: u64,

    /// Linearly vested tranche (92%)
    pub vesting_sol: u64,

    /// Lamports already claimed (immediate + vested)
    pub claimed_sol: u64,

    /// Whether the immediate tranche has been released
    pub immediate_claimed: bool,

    /// Vesting start (initialization time)
    pub vesting_start: i64,

    /// Vesting duration in seconds
    pub vesting_duration: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl FounderVesting {
    pub const SEED: &'static [u8] = b"founder_vesting";

    /// Vested SOL unlocked by the continuous linear formula.
    pub fn unlocked_vested(&self, now: i64) -> u64 {
        linear_unlocked(self.vesting_sol, self.vesting_start, self.vesting_duration, now)
    }

    /// Lamports claimable right now.
    pub fn claimable(&self, now: i64) -> Result<u64> {
        claimable_now(
            self.immediate_sol,
            self.vesting_sol,
            self.claimed_sol,
            self.immediate_claimed,
            self.vesting_start,
            self.vesting_duration,
            now,
        )
    }

    /// Next monthly unlock for display.
    pub fn next_unlock(&self, now: i64) -> Option<(i64, u64)> {
        next_unlock(self.vesting_sol, self.vesting_start, self.vesting_duration, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VESTING_DURATION_SECONDS;

    const START: i64 = 1_700_000_000;

    #[test]
    fn test_nothing_unlocked_before_start() {
        assert_eq!(linear_unlocked(1_000, START, VESTING_DURATION_SECONDS, START - 10), 0);
        assert_eq!(linear_unlocked(1_000, START, VESTING_DURATION_SECONDS, START), 0);
    }

    #[test]
    fn test_fully_unlocked_at_duration_end() {
        let amount = 777_777_777;
        assert_eq!(
            linear_unlocked(amount, START, VESTING_DURATION_SECONDS, START + VESTING_DURATION_SECONDS),
            amount
        );
        // And stays there afterwards.
        assert_eq!(
            linear_unlocked(amount, START, VESTING_DURATION_SECONDS, START + VESTING_DURATION_SECONDS * 3),
            amount
        );
    }

    #[test]
    fn test_unlock_is_monotonic() {
        let amount = 25_000_000_000u64;
        let mut previous = 0;
        for step in 0..=24 {
            let now = START + step * (VESTING_DURATION_SECONDS / 24);
            let unlocked = linear_unlocked(amount, START, VESTING_DURATION_SECONDS, now);
            assert!(unlocked >= previous, "unlock decreased at step {step}");
            previous = unlocked;
        }
        assert_eq!(previous, amount);
    }

    #[test]
    fn test_halfway_unlocks_half() {
        let amount = 1_000_000u64;
        let halfway = START + VESTING_DURATION_SECONDS / 2;
        assert_eq!(linear_unlocked(amount, START, VESTING_DURATION_SECONDS, halfway), amount / 2);
    }

    fn schedule(claimed: u64, immediate_claimed: bool) -> FounderVesting {
        FounderVesting {
            market: Pubkey::default(),
            founder: Pubkey::default(),
            total_sol: 10_000,
            immediate_sol: 800,
            vesting_sol: 9_200,
            claimed_sol: claimed,
            immediate_claimed,
            vesting_start: START,
            vesting_duration: VESTING_DURATION_SECONDS,
            bump: 255,
        }
    }

    #[test]
    fn test_immediate_claimable_at_start() {
        let v = schedule(0, false);
        assert_eq!(v.claimable(START).unwrap(), 800);
    }

    #[test]
    fn test_claim_never_exceeds_total() {
        // Everything claimed already: nothing further even long after the end.
        let v = schedule(10_000, true);
        assert_eq!(v.claimable(START + VESTING_DURATION_SECONDS * 2).unwrap(), 0);
    }

    #[test]
    fn test_repeated_claims_accumulate_to_total() {
        let mut v = schedule(0, false);
        let mut total_paid = 0u64;
        for step in 1..=12 {
            let now = START + step * (VESTING_DURATION_SECONDS / 12);
            let claimable = v.claimable(now).unwrap();
            if !v.immediate_claimed && claimable > 0 {
                v.immediate_claimed = true;
            }
            v.claimed_sol += claimable;
            total_paid += claimable;
        }
        assert_eq!(total_paid, v.total_sol);
    }

    #[test]
    fn test_next_unlock_projection() {
        let v = schedule(0, false);
        let (ts, amount) = v.next_unlock(START).unwrap();
        assert_eq!(ts, START + VESTING_DURATION_SECONDS / 12);
        assert_eq!(amount, 9_200 / 12);

        // Past the end of the schedule there is nothing left to project.
        assert!(v.next_unlock(START + VESTING_DURATION_SECONDS).is_none());
    }

    #[test]
    fn test_next_unlock_covers_uneven_duration() {
        // 31_000_001 seconds does not divide by 12; the residual window
        // past the twelfth tranche boundary must still project the final
        // unlock at the schedule end.
        let duration = 31_000_001i64;
        let tranche_len = duration / 12;
        let amount = 9_200u64;

        let just_past_last_boundary = START + 12 * tranche_len;
        let (ts, final_amount) =
            next_unlock(amount, START, duration, just_past_last_boundary).unwrap();
        assert_eq!(ts, START + duration);
        assert_eq!(final_amount, amount - (amount / 12) * 11);

        // Eleven regular tranches plus the clamped final one cover the
        // whole amount.
        assert_eq!((amount / 12) * 11 + final_amount, amount);

        // And the schedule still terminates.
        assert!(next_unlock(amount, START, duration, START + duration).is_none());
    }
}
