//! Resolution & Payout Engine
//!
//! Pure, integer-only settlement math. Instructions call into these
//! functions with the authoritative pool/share totals at execution time;
//! nothing here touches accounts, so every payout rule is unit-testable
//! and replayable off-chain.
//!
//! Rounding policy: proportional splits truncate, and the aggregate
//! remainder of a distribution is accounted to the platform fee, so
//! `sum(payouts) + fee + remainder == pool_balance` holds exactly.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::state::MarketResolution;

/// Token allocation split of an acquired launch supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAllocations {
    /// Platform cut (2%)
    pub platform: u64,
    /// Team cut (33%), routed through the team vesting schedule
    pub team: u64,
    /// YES-voter cut (65% plus split dust)
    pub yes_voters: u64,
}

/// Final outcome from the authoritative totals at resolution time.
///
/// - pool below target: the raise failed, everyone is refunded
/// - YES shares lead: token launch
/// - NO shares lead: SOL distribution
/// - exact tie (or no participation): refund
pub fn determine_resolution(
    pool_balance: u64,
    target_pool: u64,
    total_yes_shares: u64,
    total_no_shares: u64,
) -> MarketResolution {
    if pool_balance < target_pool {
        MarketResolution::Refund
    } else if total_yes_shares > total_no_shares {
        MarketResolution::YesWins
    } else if total_no_shares > total_yes_shares {
        MarketResolution::NoWins
    } else {
        MarketResolution::Refund
    }
}

/// Completion fee (5%) taken off the pool on YesWins / NoWins. Never
/// charged on Refund.
pub fn completion_fee(pool_balance: u64) -> Result<u64> {
    let fee = (pool_balance as u128)
        .checked_mul(COMPLETION_FEE_BPS as u128)
        .ok_or(LedgerError::ArithmeticOverflow)?
        / BPS_DIVISOR as u128;
    Ok(fee as u64)
}

/// Split the post-fee YES pool into the launch budget and the founder
/// excess above the launch cap.
pub fn split_launch_budget(pool_after_fee: u64) -> (u64, u64) {
    let excess = pool_after_fee.saturating_sub(LAUNCH_CAP_LAMPORTS);
    (pool_after_fee - excess, excess)
}

/// 65/33/2 split of the acquired token supply. Truncation dust from the
/// platform and team cuts accrues to the YES-voter pool, so the three
/// parts always sum to `total_supply` exactly.
pub fn token_allocations(total_supply: u64) -> Result<TokenAllocations> {
    let platform = (total_supply as u128 * PLATFORM_TOKEN_SHARE_BPS as u128
        / BPS_DIVISOR as u128) as u64;
    let team = (total_supply as u128 * TEAM_TOKEN_SHARE_BPS as u128 / BPS_DIVISOR as u128) as u64;
    let yes_voters = total_supply
        .checked_sub(platform)
        .and_then(|v| v.checked_sub(team))
        .ok_or(LedgerError::ArithmeticOverflow)?;

    Ok(TokenAllocations {
        platform,
        team,
        yes_voters,
    })
}

/// Team token split: the immediate tranche is 8% of the *total* acquired
/// supply, the rest of the 33% team cut vests linearly.
pub fn team_token_split(total_supply: u64) -> Result<(u64, u64)> {
    let team = token_allocations(total_supply)?.team;
    let immediate = (total_supply as u128 * TEAM_IMMEDIATE_SHARE_BPS as u128
        / BPS_DIVISOR as u128) as u64;
    let vested = team
        .checked_sub(immediate)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    Ok((immediate, vested))
}

/// Founder excess-SOL split: 8% immediate, 92% vested.
pub fn founder_sol_split(total_excess: u64) -> Result<(u64, u64)> {
    let immediate = (total_excess as u128 * FOUNDER_IMMEDIATE_SHARE_BPS as u128
        / BPS_DIVISOR as u128) as u64;
    let vested = total_excess
        .checked_sub(immediate)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    Ok((immediate, vested))
}

/// One holder's truncated pro-rata share of a distribution pool.
pub fn proportional_share(
    holder_shares: u64,
    total_shares: u64,
    distribution_pool: u64,
) -> Result<u64> {
    require!(total_shares > 0, LedgerError::ArithmeticOverflow);
    let share = (holder_shares as u128)
        .checked_mul(distribution_pool as u128)
        .ok_or(LedgerError::ArithmeticOverflow)?
        / total_shares as u128;
    Ok(share as u64)
}

/// Truncation dust left over once every holder has been paid. Accounted to
/// the platform fee so distribution conservation is exact.
pub fn distribution_remainder(distribution_pool: u64, total_paid: u64) -> u64 {
    distribution_pool.saturating_sub(total_paid)
}

/// Vault lamports the platform may sweep once the claim window has closed:
/// everything above the rent floor and the founder's unvested earmark.
pub fn sweepable_residue(vault_lamports: u64, protected_lamports: u64) -> u64 {
    distribution_remainder(vault_lamports, protected_lamports)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL: u64 = 1_000_000_000;

    #[test]
    fn test_resolution_decision_table() {
        // Pool below target always refunds, regardless of the vote.
        assert_eq!(
            determine_resolution(4 * SOL, 5 * SOL, 100, 1),
            MarketResolution::Refund
        );
        assert_eq!(
            determine_resolution(15 * SOL, 15 * SOL, 900, 100),
            MarketResolution::YesWins
        );
        assert_eq!(
            determine_resolution(15 * SOL, 15 * SOL, 100, 900),
            MarketResolution::NoWins
        );
        // Exact tie refunds.
        assert_eq!(
            determine_resolution(15 * SOL, 15 * SOL, 500, 500),
            MarketResolution::Refund
        );
    }

    #[test]
    fn test_yes_wins_scenario_fee_and_split() {
        // Target 15 SOL; 12.4 SOL of YES flow and 2.8 SOL of NO flow
        // filled the pool to 15.2 SOL by expiry.
        let pool = 15_200_000_000u64;
        let fee = completion_fee(pool).unwrap();
        assert_eq!(fee, 760_000_000); // 0.76 SOL

        let after_fee = pool - fee;
        assert_eq!(after_fee, 14_440_000_000); // 14.44 SOL

        // Below the 50 SOL launch cap: the whole remainder funds the launch.
        let (launch, excess) = split_launch_budget(after_fee);
        assert_eq!(launch, after_fee);
        assert_eq!(excess, 0);

        // Acquired supply splits 65/33/2 with zero loss.
        let supply = 1_000_000_000_000u64;
        let alloc = token_allocations(supply).unwrap();
        assert_eq!(alloc.platform, supply / 50); // 2%
        assert_eq!(alloc.team, supply * 33 / 100); // 33%
        assert_eq!(alloc.yes_voters, supply * 65 / 100); // 65%
        assert_eq!(alloc.platform + alloc.team + alloc.yes_voters, supply);
    }

    #[test]
    fn test_excess_above_launch_cap_goes_to_founder() {
        let after_fee = 76 * SOL;
        let (launch, excess) = split_launch_budget(after_fee);
        assert_eq!(launch, LAUNCH_CAP_LAMPORTS);
        assert_eq!(excess, 26 * SOL);
        assert_eq!(launch + excess, after_fee);
    }

    #[test]
    fn test_no_wins_conservation() {
        // 53 NO holders with uneven share counts; pool of 15.2 SOL.
        let pool = 15_200_000_000u64;
        let holders: Vec<u64> = (1..=53).map(|i| 997 * i + i * i * 31).collect();
        let total_shares: u64 = holders.iter().sum();

        let fee = completion_fee(pool).unwrap();
        let distribution_pool = pool - fee;

        let mut paid = 0u64;
        for shares in &holders {
            paid += proportional_share(*shares, total_shares, distribution_pool).unwrap();
        }
        let remainder = distribution_remainder(distribution_pool, paid);

        // No lamport created or destroyed.
        assert_eq!(paid + fee + remainder, pool);
        // Truncation loses strictly less than one lamport per holder.
        assert!(remainder < holders.len() as u64);
    }

    #[test]
    fn test_refund_conservation_no_fee() {
        // Refund pays back exactly what each wallet contributed; the fee
        // engine is never consulted.
        let contributions: Vec<u64> = vec![
            10_000_000,
            250_000_000,
            1_333_333_333,
            42_000_000,
            3_000_000_000,
        ];
        let pool: u64 = contributions.iter().sum();

        let refunded: u64 = contributions.iter().sum();
        assert_eq!(refunded, pool);
    }

    #[test]
    fn test_team_split_matches_immediate_plus_vested() {
        let supply = 1_000_000_000_000u64;
        let (immediate, vested) = team_token_split(supply).unwrap();
        assert_eq!(immediate, supply * 8 / 100); // 8% of total supply
        assert_eq!(vested, supply * 25 / 100); // 25% of total supply
        assert_eq!(immediate + vested, token_allocations(supply).unwrap().team);
    }

    #[test]
    fn test_founder_split() {
        let excess = 26 * SOL;
        let (immediate, vested) = founder_sol_split(excess).unwrap();
        assert_eq!(immediate, excess / 100 * 8);
        assert_eq!(immediate + vested, excess);
    }

    #[test]
    fn test_residue_sweep_routes_dust_to_platform() {
        // NoWins with awkward share counts: truncation dust stays in the
        // vault after every holder has claimed, then sweeps to the
        // treasury, so nothing is ever stranded.
        let pool = 15_200_000_000u64;
        let rent_floor = 890_880u64;
        let holders: [u64; 7] = [13, 997, 44_101, 5, 831, 67_777, 3_061];
        let total_shares: u64 = holders.iter().sum();

        let fee = completion_fee(pool).unwrap();
        let distribution_pool = pool - fee;

        let mut vault = rent_floor + distribution_pool;
        let mut paid = 0u64;
        for shares in holders {
            let share = proportional_share(shares, total_shares, distribution_pool).unwrap();
            vault -= share;
            paid += share;
        }

        let swept = sweepable_residue(vault, rent_floor);
        assert_eq!(swept, distribution_remainder(distribution_pool, paid));
        assert_eq!(paid + fee + swept, pool);
        assert_eq!(vault - swept, rent_floor);
    }

    #[test]
    fn test_residue_sweep_protects_founder_earmark() {
        // YesWins above the launch cap: the unvested founder excess stays
        // in the vault and is never sweepable.
        let rent_floor = 890_880u64;
        let founder_remaining = 26 * SOL;
        let vault = rent_floor + founder_remaining + 1_234;

        assert_eq!(sweepable_residue(vault, rent_floor + founder_remaining), 1_234);
        // Nothing above the protected floor: nothing to sweep.
        assert_eq!(sweepable_residue(rent_floor, rent_floor + founder_remaining), 0);
    }

    #[test]
    fn test_proportional_share_truncates() {
        // 3-way split of 10 lamports: 3+3+3 paid, 1 lamport of dust.
        let paid: u64 = (0..3).map(|_| proportional_share(1, 3, 10).unwrap()).sum();
        assert_eq!(paid, 9);
        assert_eq!(distribution_remainder(10, paid), 1);
    }
}
