//! Fee Withdrawal
//!
//! Moves collected platform fees out of the treasury PDA. The treasury is
//! program-owned, so lamports are moved directly; the rent-exempt minimum
//! always stays behind to keep the account alive.

use anchor_lang::prelude::*;

use crate::errors::LedgerError;
use crate::state::Treasury;

#[event]
pub struct FeesWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        constraint = treasury.admin == admin.key() @ LedgerError::UnauthorizedCaller,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: plain SOL recipient chosen by the admin
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,
}

impl<'info> WithdrawFees<'info> {
    pub fn withdraw_fees(&mut self, amount: u64) -> Result<()> {
        let treasury_info = self.treasury.to_account_info();
        let rent_floor = Rent::get()?.minimum_balance(treasury_info.data_len());
        let available = treasury_info.lamports().saturating_sub(rent_floor);
        require!(amount <= available, LedgerError::InsufficientPoolBalance);

        **treasury_info.try_borrow_mut_lamports()? -= amount;
        **self.recipient.to_account_info().try_borrow_mut_lamports()? += amount;

        self.treasury.total_fees = self.treasury.total_fees.saturating_sub(amount);

        emit!(FeesWithdrawn {
            recipient: self.recipient.key(),
            amount,
        });

        msg!("Withdrew {} lamports to {}", amount, self.recipient.key());
        Ok(())
    }
}
