//! Treasury Admin Transfer
//!
//! Explicit transfer-of-control of the admin capability (to a multisig,
//! DAO, or replacement wallet). Only the current admin can hand it over.

use anchor_lang::prelude::*;

use crate::errors::LedgerError;
use crate::state::Treasury;

#[event]
pub struct TreasuryAdminChanged {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[derive(Accounts)]
pub struct SetTreasuryAdmin<'info> {
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        constraint = treasury.admin == current_admin.key() @ LedgerError::UnauthorizedCaller,
    )]
    pub treasury: Account<'info, Treasury>,

    pub current_admin: Signer<'info>,
}

impl<'info> SetTreasuryAdmin<'info> {
    pub fn set_treasury_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        let old_admin = self.treasury.admin;
        self.treasury.admin = new_admin;

        emit!(TreasuryAdminChanged {
            old_admin,
            new_admin,
        });

        msg!("Treasury admin changed from {} to {}", old_admin, new_admin);
        Ok(())
    }
}
