//! Market Resolution
//!
//! One-way transition. Callable by anyone after expiry; before expiry by
//! the founder while the market is in Funding, or permissionlessly once
//! the pool is full with NO in the lead (the raise cannot recover).
//!
//! YesWins / NoWins extract the completion fee into the treasury; Refund
//! takes no fee so contributors get back exactly what they put in. The
//! fee-constant checksum is stored so later claims can prove which fee
//! table was in force.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::fee_config_checksum;
use crate::errors::LedgerError;
use crate::payout;
use crate::state::{Market, MarketPhase, MarketResolution, Treasury};

#[event]
pub struct MarketResolved {
    pub market: Pubkey,
    pub resolution: MarketResolution,
    pub pool_balance: u64,
    pub completion_fee: u64,
    pub distribution_pool: u64,
    pub founder_excess: u64,
}

#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
        constraint = market.resolution == MarketResolution::Unresolved
            @ LedgerError::AlreadyResolved,
    )]
    pub market: Account<'info, Market>,

    /// Zero-data vault PDA holding the pool SOL
    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump,
    )]
    pub market_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        constraint = market.treasury == treasury.key() @ LedgerError::UnauthorizedCaller,
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

impl<'info> ResolveMarket<'info> {
    fn may_resolve_now(&self, now: i64) -> bool {
        if now >= self.market.expiry_time {
            return true;
        }
        // Founder may close out a Funding-phase raise early.
        if self.market.phase == MarketPhase::Funding
            && self.caller.key() == self.market.founder
        {
            return true;
        }
        // Full pool with NO leading cannot recover; anyone may settle it.
        self.market.pool_balance >= self.market.target_pool
            && self.market.total_no_shares > self.market.total_yes_shares
    }

    pub fn resolve_market(&mut self, bumps: &ResolveMarketBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        require!(self.may_resolve_now(now), LedgerError::NotYetExpired);

        let pool = self.market.pool_balance;
        let resolution = payout::determine_resolution(
            pool,
            self.market.target_pool,
            self.market.total_yes_shares,
            self.market.total_no_shares,
        );

        let mut fee = 0u64;
        let mut distribution = pool;
        let mut excess = 0u64;

        match resolution {
            MarketResolution::YesWins => {
                fee = payout::completion_fee(pool)?;
                let after_fee = pool
                    .checked_sub(fee)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
                let (launch_budget, founder_excess) =
                    payout::split_launch_budget(after_fee);
                distribution = launch_budget;
                excess = founder_excess;
            }
            MarketResolution::NoWins => {
                fee = payout::completion_fee(pool)?;
                distribution = pool
                    .checked_sub(fee)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
            }
            MarketResolution::Refund => {}
            MarketResolution::Unresolved => {
                return err!(LedgerError::InvalidResolutionState);
            }
        }

        if fee > 0 {
            let market_key = self.market.key();
            let vault_seeds = &[
                Market::VAULT_SEED,
                market_key.as_ref(),
                &[bumps.market_vault],
            ];
            let signer_seeds = &[&vault_seeds[..]];
            system_program::transfer(
                CpiContext::new_with_signer(
                    self.system_program.to_account_info(),
                    system_program::Transfer {
                        from: self.market_vault.to_account_info(),
                        to: self.treasury.to_account_info(),
                    },
                    signer_seeds,
                ),
                fee,
            )?;
            self.treasury.total_fees = self
                .treasury
                .total_fees
                .checked_add(fee)
                .ok_or(LedgerError::ArithmeticOverflow)?;
        }

        let market = &mut self.market;
        market.pool_balance = market
            .pool_balance
            .checked_sub(fee)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        market.distribution_pool = distribution;
        market.founder_excess_sol_allocated = excess;
        market.resolution = resolution;
        market.fee_checksum = fee_config_checksum();

        emit!(MarketResolved {
            market: market.key(),
            resolution,
            pool_balance: pool,
            completion_fee: fee,
            distribution_pool: distribution,
            founder_excess: excess,
        });

        msg!(
            "Resolved {:?}: pool {}, fee {}, distribution {}, excess {}",
            resolution,
            pool,
            fee,
            distribution,
            excess
        );
        Ok(())
    }
}
