//! Platform Token Claim
//!
//! Releases the platform's 2% cut of the launched supply to the fixed
//! platform wallet. Anyone may crank this; the recipient is pinned, so
//! the caller only pays the transaction fee.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use std::str::FromStr;

use crate::constants::PLATFORM_WALLET;
use crate::errors::LedgerError;
use crate::state::{Market, MarketResolution};

#[event]
pub struct PlatformTokensClaimed {
    pub market: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct ClaimPlatformTokens<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
        constraint = market.resolution == MarketResolution::YesWins
            @ LedgerError::InvalidResolutionState,
        constraint = !market.platform_tokens_claimed @ LedgerError::AlreadyClaimed,
    )]
    pub market: Account<'info, Market>,

    #[account(
        constraint = market.token_mint == Some(token_mint.key())
            @ LedgerError::InvalidResolutionState,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Market-owned escrow holding the acquired supply
    #[account(
        mut,
        constraint = market_token_escrow.mint == token_mint.key()
            @ LedgerError::AccountNotFound,
        constraint = market_token_escrow.owner == market.key()
            @ LedgerError::AccountNotFound,
    )]
    pub market_token_escrow: InterfaceAccount<'info, TokenAccount>,

    /// Platform wallet's token account; ownership checked in the handler
    #[account(
        mut,
        constraint = platform_token_account.mint == token_mint.key()
            @ LedgerError::AccountNotFound,
    )]
    pub platform_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> ClaimPlatformTokens<'info> {
    pub fn claim_platform_tokens(&mut self) -> Result<()> {
        let platform_wallet =
            Pubkey::from_str(PLATFORM_WALLET).map_err(|_| LedgerError::UnauthorizedCaller)?;
        require_keys_eq!(
            self.platform_token_account.owner,
            platform_wallet,
            LedgerError::UnauthorizedCaller
        );

        let amount = self.market.platform_tokens_allocated;
        require!(amount > 0, LedgerError::NothingToClaim);

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
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.market_token_escrow.to_account_info(),
                    mint: self.token_mint.to_account_info(),
                    to: self.platform_token_account.to_account_info(),
                    authority: self.market.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
            self.token_mint.decimals,
        )?;

        self.market.platform_tokens_claimed = true;

        emit!(PlatformTokensClaimed {
            market: self.market.key(),
            amount,
        });

        msg!("Platform claimed {} tokens", amount);
        Ok(())
    }
}
