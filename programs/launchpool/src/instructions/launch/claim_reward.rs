//! Participant Reward Claims
//!
//! One claim per position, any time after resolution:
//! - YesWins: YES holders draw launched tokens from the market escrow,
//!   pro-rata by `yes_shares / total_yes_shares`. NO holders forfeit.
//! - NoWins: NO holders draw SOL from the vault, pro-rata by
//!   `no_shares / total_no_shares`. YES holders forfeit.
//! - Refund: every position gets back exactly `total_contributed`.
//!
//! The claim flips `claimed` and leaves the share counts untouched; the
//! position account stays alive as the historical record.
//!
//! The token-side accounts are only required on the YesWins path, so they
//! are optional and validated in the handler.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::LedgerError;
use crate::payout;
use crate::state::{Market, MarketResolution, Position};

#[event]
pub struct RewardClaimed {
    pub market: Pubkey,
    pub user: Pubkey,
    pub resolution: MarketResolution,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
        constraint = market.resolution != MarketResolution::Unresolved
            @ LedgerError::InvalidResolutionState,
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [Position::SEED, market.key().as_ref(), user.key().as_ref()],
        bump = position.bump,
        constraint = position.user == user.key() @ LedgerError::UnauthorizedCaller,
        constraint = !position.claimed @ LedgerError::AlreadyClaimed,
    )]
    pub position: Account<'info, Position>,

    /// Zero-data vault PDA; SOL payouts leave from here
    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump,
    )]
    pub market_vault: SystemAccount<'info>,

    /// Launched token mint (YesWins claims only)
    pub token_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Market-owned escrow holding the acquired supply (YesWins only)
    #[account(mut)]
    pub market_token_escrow: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Claimant's token account (YesWins only)
    #[account(mut)]
    pub user_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Option<Interface<'info, TokenInterface>>,

    pub system_program: Program<'info, System>,
}

impl<'info> ClaimReward<'info> {
    fn pay_sol(&self, amount: u64, vault_bump: u8) -> Result<()> {
        let market_key = self.market.key();
        let vault_seeds = &[Market::VAULT_SEED, market_key.as_ref(), &[vault_bump]];
        let signer_seeds = &[&vault_seeds[..]];
        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.market_vault.to_account_info(),
                    to: self.user.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }

    fn pay_tokens(&self, amount: u64) -> Result<()> {
        let mint = self
            .token_mint
            .as_ref()
            .ok_or(LedgerError::AccountNotFound)?;
        let escrow = self
            .market_token_escrow
            .as_ref()
            .ok_or(LedgerError::AccountNotFound)?;
        let destination = self
            .user_token_account
            .as_ref()
            .ok_or(LedgerError::AccountNotFound)?;
        let token_program = self
            .token_program
            .as_ref()
            .ok_or(LedgerError::AccountNotFound)?;

        require!(
            self.market.token_mint == Some(mint.key()),
            LedgerError::InvalidResolutionState
        );
        require_keys_eq!(escrow.mint, mint.key(), LedgerError::AccountNotFound);
        require_keys_eq!(escrow.owner, self.market.key(), LedgerError::AccountNotFound);
        require_keys_eq!(destination.owner, self.user.key(), LedgerError::AccountNotFound);

        // The market PDA owns the escrow; re-derive its signer seeds.
        let cid_hash =
            anchor_lang::solana_program::hash::hash(self.market.content_cid.as_bytes());
        let founder = self.market.founder;
        let market_seeds = &[
            Market::SEED,
            founder.as_ref(),
            cid_hash.as_ref(),
            &[self.market.bump],
        ];
        let signer_seeds = &[&market_seeds[..]];

        transfer_checked(
            CpiContext::new_with_signer(
                token_program.to_account_info(),
                TransferChecked {
                    from: escrow.to_account_info(),
                    mint: mint.to_account_info(),
                    to: destination.to_account_info(),
                    authority: self.market.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
            mint.decimals,
        )
    }

    pub fn claim_reward(&mut self, bumps: &ClaimRewardBumps) -> Result<()> {
        let resolution = self.market.resolution;
        let amount = match resolution {
            MarketResolution::YesWins => {
                require!(self.position.yes_shares > 0, LedgerError::NothingToClaim);
                require!(
                    self.market.token_mint.is_some(),
                    LedgerError::InvalidResolutionState
                );
                let amount = payout::proportional_share(
                    self.position.yes_shares,
                    self.market.total_yes_shares,
                    self.market.yes_voter_tokens_allocated,
                )?;
                require!(amount > 0, LedgerError::NothingToClaim);
                self.pay_tokens(amount)?;
                amount
            }
            MarketResolution::NoWins => {
                require!(self.position.no_shares > 0, LedgerError::NothingToClaim);
                let amount = payout::proportional_share(
                    self.position.no_shares,
                    self.market.total_no_shares,
                    self.market.distribution_pool,
                )?;
                require!(amount > 0, LedgerError::NothingToClaim);
                self.pay_sol(amount, bumps.market_vault)?;
                self.market.pool_balance = self
                    .market
                    .pool_balance
                    .checked_sub(amount)
                    .ok_or(LedgerError::InsufficientPoolBalance)?;
                amount
            }
            MarketResolution::Refund => {
                let amount = self.position.total_contributed;
                require!(amount > 0, LedgerError::NothingToClaim);
                self.pay_sol(amount, bumps.market_vault)?;
                self.market.pool_balance = self
                    .market
                    .pool_balance
                    .checked_sub(amount)
                    .ok_or(LedgerError::InsufficientPoolBalance)?;
                amount
            }
            MarketResolution::Unresolved => {
                return err!(LedgerError::InvalidResolutionState);
            }
        };

        self.position.settle()?;

        emit!(RewardClaimed {
            market: self.market.key(),
            user: self.user.key(),
            resolution,
            amount,
        });

        msg!("Claim ({:?}): {} paid to {}", resolution, amount, self.user.key());
        Ok(())
    }
}
