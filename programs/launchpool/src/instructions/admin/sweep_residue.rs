//! Vault Residue Sweep
//!
//! Proportional payouts truncate, so after a NoWins claim round a few
//! lamports of dust stay behind in the vault; unclaimed positions also
//! leave their share there. Once the claim window after expiry has
//! closed, the admin sweeps everything above the rent floor and the
//! founder's unvested earmark into the treasury, where it is accounted
//! as platform fees.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::CLAIM_WINDOW_SECONDS;
use crate::errors::LedgerError;
use crate::payout;
use crate::state::{FounderVesting, Market, MarketResolution, Treasury};

#[event]
pub struct VaultResidueSwept {
    pub market: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct SweepVaultResidue<'info> {
    #[account(
        constraint = caller.key() == treasury.admin @ LedgerError::UnauthorizedCaller,
    )]
    pub caller: Signer<'info>,

    #[account(
        mut,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
        constraint = market.resolution != MarketResolution::Unresolved
            @ LedgerError::InvalidResolutionState,
    )]
    pub market: Account<'info, Market>,

    /// Zero-data vault PDA holding the residue
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

    /// Founder vesting schedule; required while it still holds an
    /// unvested earmark in this vault
    #[account(
        constraint = founder_vesting.market == market.key()
            @ LedgerError::AccountNotFound,
    )]
    pub founder_vesting: Option<Account<'info, FounderVesting>>,

    pub system_program: Program<'info, System>,
}

impl<'info> SweepVaultResidue<'info> {
    fn protected_founder_lamports(&self) -> Result<u64> {
        if self.market.founder_excess_sol_allocated == 0 {
            return Ok(0);
        }
        if !self.market.founder_vesting_initialized {
            // Earmarked but no schedule opened yet: protect it all.
            return Ok(self.market.founder_excess_sol_allocated);
        }
        let vesting = self
            .founder_vesting
            .as_ref()
            .ok_or(LedgerError::AccountNotFound)?;
        Ok(vesting.total_sol.saturating_sub(vesting.claimed_sol))
    }

    pub fn sweep_vault_residue(&mut self, bumps: &SweepVaultResidueBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        require!(
            now >= self.market.expiry_time.saturating_add(CLAIM_WINDOW_SECONDS),
            LedgerError::NotYetExpired
        );

        let rent_floor = Rent::get()?.minimum_balance(0);
        let protected = rent_floor
            .checked_add(self.protected_founder_lamports()?)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let residue = payout::sweepable_residue(self.market_vault.lamports(), protected);
        require!(residue > 0, LedgerError::NothingToClaim);

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
            residue,
        )?;

        self.treasury.total_fees = self
            .treasury
            .total_fees
            .checked_add(residue)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        self.market.pool_balance = self.market.pool_balance.saturating_sub(residue);

        emit!(VaultResidueSwept {
            market: market_key,
            amount: residue,
        });

        msg!("Swept {} residue lamports to the treasury", residue);
        Ok(())
    }
}
