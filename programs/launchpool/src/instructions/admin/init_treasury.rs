//! Treasury Bootstrap
//!
//! One-time creation of the global treasury singleton. Only the fixed
//! deployer identity may initialize it; the admin capability must not be
//! claimable by whoever front-runs the deployment.

use anchor_lang::prelude::*;
use std::str::FromStr;

use crate::constants::DEPLOYER_WALLET;
use crate::errors::LedgerError;
use crate::state::Treasury;

#[event]
pub struct TreasuryInitialized {
    pub admin: Pubkey,
}

#[derive(Accounts)]
pub struct InitTreasury<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Treasury::INIT_SPACE,
        seeds = [Treasury::SEED],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitTreasury<'info> {
    pub fn init_treasury(&mut self, bumps: &InitTreasuryBumps) -> Result<()> {
        let deployer = Pubkey::from_str(DEPLOYER_WALLET)
            .map_err(|_| error!(LedgerError::UnauthorizedCaller))?;
        require_keys_eq!(self.payer.key(), deployer, LedgerError::UnauthorizedCaller);

        self.treasury.set_inner(Treasury {
            admin: self.payer.key(),
            total_fees: 0,
            bump: bumps.treasury,
        });

        emit!(TreasuryInitialized {
            admin: self.payer.key(),
        });

        msg!("Treasury initialized by deployer {}", self.payer.key());
        Ok(())
    }
}
