//! Emergency Vault Drain
//!
//! Admin-gated recovery path: returns a market vault's SOL to the market
//! founder. The destination is fixed to `market.founder`, so a compromised
//! admin key cannot redirect funds elsewhere.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::LedgerError;
use crate::state::{Market, Treasury};

#[event]
pub struct VaultDrained {
    pub market: Pubkey,
    pub founder: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct EmergencyDrainVault<'info> {
    #[account(mut)]
    pub market: Account<'info, Market>,

    /// Zero-data vault PDA holding the market's SOL
    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump,
    )]
    pub market_vault: SystemAccount<'info>,

    #[account(
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        constraint = market.treasury == treasury.key() @ LedgerError::UnauthorizedCaller,
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: recipient is pinned to `market.founder` in the handler
    #[account(mut)]
    pub founder: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = caller.key() == treasury.admin @ LedgerError::UnauthorizedCaller,
    )]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> EmergencyDrainVault<'info> {
    pub fn emergency_drain_vault(&mut self, bumps: &EmergencyDrainVaultBumps) -> Result<()> {
        require_keys_eq!(
            self.founder.key(),
            self.market.founder,
            LedgerError::UnauthorizedCaller
        );
        // Duplicate-account guard: founder must not alias the vault.
        require!(
            self.founder.key() != self.market_vault.key(),
            LedgerError::UnauthorizedCaller
        );

        // Leave the rent floor so the vault PDA stays alive.
        let rent_floor = Rent::get()?.minimum_balance(0);
        let amount = self
            .market_vault
            .lamports()
            .saturating_sub(rent_floor);
        require!(amount > 0, LedgerError::InsufficientPoolBalance);

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
            amount,
        )?;

        self.market.pool_balance = 0;

        emit!(VaultDrained {
            market: market_key,
            founder: self.founder.key(),
            amount,
        });

        msg!("Drained {} lamports to founder {}", amount, self.founder.key());
        Ok(())
    }
}
