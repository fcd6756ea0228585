//! Founder Excess-SOL Vesting
//!
//! When a YES-resolved pool exceeded the launch cap, the excess was
//! earmarked at resolution and stays in the vault. The founder opens a
//! schedule over it (8% immediate, 92% linear over twelve months) and
//! claims from the vault as SOL unlocks.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::VESTING_DURATION_SECONDS;
use crate::errors::LedgerError;
use crate::payout;
use crate::state::{FounderVesting, Market, MarketResolution};

#[event]
pub struct FounderVestingInitialized {
    pub market: Pubkey,
    pub founder: Pubkey,
    pub total_sol: u64,
    pub immediate_sol: u64,
    pub vesting_sol: u64,
}

#[event]
pub struct FounderSolClaimed {
    pub market: Pubkey,
    pub founder: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
}

#[derive(Accounts)]
pub struct InitFounderVesting<'info> {
    #[account(
        mut,
        constraint = founder.key() == market.founder @ LedgerError::UnauthorizedCaller,
    )]
    pub founder: Signer<'info>,

    #[account(
        mut,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
        constraint = market.resolution == MarketResolution::YesWins
            @ LedgerError::InvalidResolutionState,
        constraint = market.founder_excess_sol_allocated > 0 @ LedgerError::NoExcessSol,
        constraint = !market.founder_vesting_initialized @ LedgerError::AlreadyInitialized,
    )]
    pub market: Account<'info, Market>,

    #[account(
        init,
        payer = founder,
        space = 8 + FounderVesting::INIT_SPACE,
        seeds = [FounderVesting::SEED, market.key().as_ref()],
        bump,
    )]
    pub founder_vesting: Account<'info, FounderVesting>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitFounderVesting<'info> {
    pub fn init_founder_vesting(&mut self, bumps: &InitFounderVestingBumps) -> Result<()> {
        let total_sol = self.market.founder_excess_sol_allocated;
        let (immediate_sol, vesting_sol) = payout::founder_sol_split(total_sol)?;

        let now = Clock::get()?.unix_timestamp;
        self.founder_vesting.set_inner(FounderVesting {
            market: self.market.key(),
            founder: self.founder.key(),
            total_sol,
            immediate_sol,
            vesting_sol,
            claimed_sol: 0,
            immediate_claimed: false,
            vesting_start: now,
            vesting_duration: VESTING_DURATION_SECONDS,
            bump: bumps.founder_vesting,
        });

        self.market.founder_vesting_initialized = true;

        emit!(FounderVestingInitialized {
            market: self.market.key(),
            founder: self.founder.key(),
            total_sol,
            immediate_sol,
            vesting_sol,
        });

        msg!(
            "Founder vesting: {} immediate, {} over {} seconds",
            immediate_sol,
            vesting_sol,
            VESTING_DURATION_SECONDS
        );
        Ok(())
    }
}

#[derive(Accounts)]
pub struct ClaimFounderSol<'info> {
    #[account(mut)]
    pub founder: Signer<'info>,

    #[account(
        mut,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
    )]
    pub market: Account<'info, Market>,

    /// Zero-data vault PDA still holding the earmarked excess
    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump,
    )]
    pub market_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [FounderVesting::SEED, market.key().as_ref()],
        bump = founder_vesting.bump,
        constraint = founder_vesting.founder == founder.key()
            @ LedgerError::UnauthorizedCaller,
    )]
    pub founder_vesting: Account<'info, FounderVesting>,

    pub system_program: Program<'info, System>,
}

impl<'info> ClaimFounderSol<'info> {
    pub fn claim_founder_sol(&mut self, bumps: &ClaimFounderSolBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let claimable = self.founder_vesting.claimable(now)?;
        require!(claimable > 0, LedgerError::NothingToClaim);

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
                    to: self.founder.to_account_info(),
                },
                signer_seeds,
            ),
            claimable,
        )?;

        let vesting = &mut self.founder_vesting;
        if !vesting.immediate_claimed {
            vesting.immediate_claimed = true;
        }
        vesting.claimed_sol = vesting
            .claimed_sol
            .checked_add(claimable)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.market.pool_balance = self
            .market
            .pool_balance
            .checked_sub(claimable)
            .ok_or(LedgerError::InsufficientPoolBalance)?;

        emit!(FounderSolClaimed {
            market: market_key,
            founder: self.founder.key(),
            amount: claimable,
            total_claimed: vesting.claimed_sol,
        });

        msg!(
            "Founder claimed {} lamports ({} of {} total)",
            claimable,
            vesting.claimed_sol,
            vesting.total_sol
        );
        Ok(())
    }
}
