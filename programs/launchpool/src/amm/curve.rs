//! Constant-Product Share Pricing
//!
//! Deterministic, fixed-point share calculator. Both reserve pools start
//! equal to the market's target pool, which puts the opening price at
//! exactly 50/50.

use anchor_lang::prelude::*;

use crate::errors::LedgerError;
use crate::state::Side;

/// Price scale: spot prices are expressed in parts per 1e9.
pub const PRICE_SCALE: u64 = 1_000_000_000;

/// Reserve floor (0.1 SOL). Neither pool may be drained below this, which
/// bounds the share count a single trade can mint.
pub const MIN_RESERVE_LAMPORTS: u64 = 100_000_000;

/// Constant-product curve over the YES/NO reserves.
pub struct ConstantProductCurve;

impl ConstantProductCurve {
    /// Shares minted for a SOL contribution on the given side.
    ///
    /// For a YES buy:
    /// 1. `k = yes_pool * no_pool`
    /// 2. `no_pool' = no_pool + contribution`
    /// 3. `yes_pool' = k / no_pool'`
    /// 4. `shares = yes_pool - yes_pool'`
    ///
    /// (and symmetrically for NO). Zero contributions are rejected; every
    /// step is checked and fails with `ArithmeticOverflow` rather than
    /// wrapping.
    pub fn shares_out(
        yes_pool: u64,
        no_pool: u64,
        contribution: u64,
        side: Side,
    ) -> Result<u64> {
        require!(contribution > 0, LedgerError::ContributionTooSmall);
        require!(yes_pool > 0 && no_pool > 0, LedgerError::ArithmeticOverflow);

        let k = (yes_pool as u128)
            .checked_mul(no_pool as u128)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let (bought, other) = match side {
            Side::Yes => (yes_pool, no_pool),
            Side::No => (no_pool, yes_pool),
        };

        let other_new = (other as u128)
            .checked_add(contribution as u128)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let bought_new = k
            .checked_div(other_new)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        // The bought reserve only ever shrinks, so this cannot underflow;
        // still, stay checked.
        let shares = (bought as u128)
            .checked_sub(bought_new)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        require!(
            bought_new >= MIN_RESERVE_LAMPORTS as u128,
            LedgerError::InsufficientPoolBalance
        );

        Ok(shares as u64)
    }

    /// Spot YES price: `no_pool / (yes_pool + no_pool)`, scaled by 1e9.
    pub fn yes_price(yes_pool: u64, no_pool: u64) -> Result<u64> {
        Self::price_of(no_pool, yes_pool)
    }

    /// Spot NO price: `yes_pool / (yes_pool + no_pool)`, scaled by 1e9.
    pub fn no_price(yes_pool: u64, no_pool: u64) -> Result<u64> {
        Self::price_of(yes_pool, no_pool)
    }

    fn price_of(numerator: u64, other: u64) -> Result<u64> {
        let total = (numerator as u128)
            .checked_add(other as u128)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        require!(total > 0, LedgerError::ArithmeticOverflow);

        let price = (numerator as u128)
            .checked_mul(PRICE_SCALE as u128)
            .ok_or(LedgerError::ArithmeticOverflow)?
            / total;

        Ok(price as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL: u64 = 1_000_000_000;

    #[test]
    fn test_balanced_pools_price_fifty_fifty() {
        let yes = ConstantProductCurve::yes_price(15 * SOL, 15 * SOL).unwrap();
        let no = ConstantProductCurve::no_price(15 * SOL, 15 * SOL).unwrap();
        assert_eq!(yes, PRICE_SCALE / 2);
        assert_eq!(no, PRICE_SCALE / 2);
        assert_eq!(yes + no, PRICE_SCALE);
    }

    #[test]
    fn test_zero_contribution_rejected() {
        let err = ConstantProductCurve::shares_out(15 * SOL, 15 * SOL, 0, Side::Yes).unwrap_err();
        assert_eq!(err, LedgerError::ContributionTooSmall.into());
    }

    #[test]
    fn test_buy_yes_moves_price_up() {
        let (mut yes_pool, mut no_pool) = (15 * SOL, 15 * SOL);
        let before = ConstantProductCurve::yes_price(yes_pool, no_pool).unwrap();

        let shares = ConstantProductCurve::shares_out(yes_pool, no_pool, SOL, Side::Yes).unwrap();
        yes_pool -= shares;
        no_pool += SOL;

        let after = ConstantProductCurve::yes_price(yes_pool, no_pool).unwrap();
        assert!(after > before);
        assert_eq!(
            after + ConstantProductCurve::no_price(yes_pool, no_pool).unwrap(),
            PRICE_SCALE
        );
    }

    #[test]
    fn test_price_per_share_increases_for_later_buyers() {
        let (mut yes_pool, mut no_pool) = (10 * SOL, 10 * SOL);

        let first = ConstantProductCurve::shares_out(yes_pool, no_pool, SOL, Side::Yes).unwrap();
        yes_pool -= first;
        no_pool += SOL;

        let second = ConstantProductCurve::shares_out(yes_pool, no_pool, SOL, Side::Yes).unwrap();

        // Same lamports, fewer shares: the curve is monotonically rising.
        assert!(second < first);
    }

    #[test]
    fn test_constant_product_preserved_within_rounding() {
        let (yes_pool, no_pool) = (15 * SOL, 15 * SOL);
        let k = yes_pool as u128 * no_pool as u128;

        let shares = ConstantProductCurve::shares_out(yes_pool, no_pool, 3 * SOL, Side::No).unwrap();
        let k_new = (yes_pool as u128 + 3 * SOL as u128) * (no_pool - shares) as u128;

        let drift = k_new.abs_diff(k);
        assert!(drift < k / 1_000, "k drifted more than 0.1%");
    }

    #[test]
    fn test_sides_are_symmetric() {
        let yes = ConstantProductCurve::shares_out(8 * SOL, 8 * SOL, SOL, Side::Yes).unwrap();
        let no = ConstantProductCurve::shares_out(8 * SOL, 8 * SOL, SOL, Side::No).unwrap();
        assert_eq!(yes, no);
    }

    #[test]
    fn test_reserve_floor_enforced() {
        // A contribution large enough to drain the bought side below the
        // floor must fail instead of emptying the pool.
        let err =
            ConstantProductCurve::shares_out(SOL / 2, SOL / 2, 100 * SOL, Side::Yes).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientPoolBalance.into());
    }

    #[test]
    fn test_deterministic_replay() {
        let a = ConstantProductCurve::shares_out(12_400_000_000, 2_800_000_000, 50_000_000, Side::Yes)
            .unwrap();
        let b = ConstantProductCurve::shares_out(12_400_000_000, 2_800_000_000, 50_000_000, Side::Yes)
            .unwrap();
        assert_eq!(a, b);
    }
}
