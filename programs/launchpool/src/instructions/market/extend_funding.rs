//! Prediction -> Funding Extension
//!
//! Founder-only. Once the pool has hit its target with YES in the lead,
//! the founder may reopen the raise: the vote is frozen (no more NO buys)
//! and the target cap stops applying to YES top-ups.

use anchor_lang::prelude::*;

use crate::errors::LedgerError;
use crate::state::{Market, MarketPhase, MarketResolution};

#[event]
pub struct MarketExtended {
    pub market: Pubkey,
    pub pool_balance: u64,
}

/// Eligibility for the Prediction -> Funding transition. An expired market
/// belongs to resolution, not to an extended raise.
pub fn check_extension(market: &Market, now: i64) -> Result<()> {
    require!(
        market.resolution == MarketResolution::Unresolved,
        LedgerError::AlreadyResolved
    );
    require!(
        market.phase == MarketPhase::Prediction,
        LedgerError::InvalidPhase
    );
    require!(now < market.expiry_time, LedgerError::ExpiredMarket);
    require!(
        market.pool_balance >= market.target_pool,
        LedgerError::TargetNotReached
    );
    require!(
        market.total_yes_shares > market.total_no_shares,
        LedgerError::YesNotWinning
    );
    Ok(())
}

#[derive(Accounts)]
pub struct ExtendToFunding<'info> {
    pub founder: Signer<'info>,

    #[account(
        mut,
        constraint = market.founder == founder.key() @ LedgerError::UnauthorizedCaller,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
    )]
    pub market: Account<'info, Market>,
}

impl<'info> ExtendToFunding<'info> {
    pub fn extend_to_funding(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        check_extension(&self.market, now)?;

        let market = &mut self.market;
        market.phase = MarketPhase::Funding;

        emit!(MarketExtended {
            market: market.key(),
            pool_balance: market.pool_balance,
        });

        msg!("Market extended to funding at {} lamports", market.pool_balance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPIRY: i64 = 1_700_000_000;

    fn filled_market() -> Market {
        Market {
            schema_version: Market::SCHEMA_VERSION,
            founder: Pubkey::new_unique(),
            content_cid: "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi".into(),
            target_pool: 15_000_000_000,
            pool_balance: 15_000_000_000,
            distribution_pool: 0,
            yes_pool: 10_000_000_000,
            no_pool: 22_500_000_000,
            total_yes_shares: 5_000_000_000,
            total_no_shares: 2_800_000_000,
            expiry_time: EXPIRY,
            phase: MarketPhase::Prediction,
            resolution: MarketResolution::Unresolved,
            metadata_uri: String::new(),
            token_mint: None,
            platform_tokens_allocated: 0,
            platform_tokens_claimed: false,
            yes_voter_tokens_allocated: 0,
            team_tokens_allocated: 0,
            founder_excess_sol_allocated: 0,
            founder_vesting_initialized: false,
            fee_checksum: 0,
            treasury: Pubkey::new_unique(),
            bump: 255,
        }
    }

    #[test]
    fn test_filled_yes_leading_market_extends() {
        assert!(check_extension(&filled_market(), EXPIRY - 3_600).is_ok());
    }

    #[test]
    fn test_expired_market_cannot_extend() {
        let market = filled_market();
        let err = check_extension(&market, EXPIRY).unwrap_err();
        assert_eq!(err, LedgerError::ExpiredMarket.into());
    }

    #[test]
    fn test_unfilled_or_no_leading_market_cannot_extend() {
        let mut market = filled_market();
        market.pool_balance = market.target_pool - 1;
        assert_eq!(
            check_extension(&market, EXPIRY - 3_600).unwrap_err(),
            LedgerError::TargetNotReached.into()
        );

        let mut market = filled_market();
        market.total_no_shares = market.total_yes_shares;
        assert_eq!(
            check_extension(&market, EXPIRY - 3_600).unwrap_err(),
            LedgerError::YesNotWinning.into()
        );
    }
}
