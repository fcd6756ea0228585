//! Token Launch Recording
//!
//! The token launch itself happens off-program: the admin spends the
//! launch budget on an external launchpad and acquires the market's token
//! supply. This instruction is the trust boundary back into the ledger:
//! it deposits the acquired supply into a market-owned escrow, releases
//! the launch budget SOL to the funding wallet, registers the mint and
//! fixes the 65/33/2 allocation split. It runs exactly once per market.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::errors::LedgerError;
use crate::payout;
use crate::state::{Market, MarketResolution, Treasury};

#[event]
pub struct TokenLaunchRecorded {
    pub market: Pubkey,
    pub token_mint: Pubkey,
    pub total_supply: u64,
    pub launch_budget: u64,
    pub yes_voter_tokens: u64,
    pub team_tokens: u64,
    pub platform_tokens: u64,
}

#[derive(Accounts)]
pub struct RecordTokenLaunch<'info> {
    #[account(
        mut,
        constraint = admin.key() == treasury.admin @ LedgerError::UnauthorizedCaller,
    )]
    pub admin: Signer<'info>,

    #[account(
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        constraint = market.treasury == treasury.key() @ LedgerError::UnauthorizedCaller,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
        constraint = market.resolution == MarketResolution::YesWins
            @ LedgerError::InvalidResolutionState,
        constraint = market.token_mint.is_none() @ LedgerError::AlreadyInitialized,
    )]
    pub market: Account<'info, Market>,

    /// Zero-data vault PDA; the launch budget leaves from here
    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump,
    )]
    pub market_vault: SystemAccount<'info>,

    /// Launched token mint
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Admin's account holding the acquired supply
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = admin,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Market-owned escrow for the whole acquired supply
    #[account(
        init,
        payer = admin,
        associated_token::mint = token_mint,
        associated_token::authority = market,
    )]
    pub market_token_escrow: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: wallet that fronted the launch budget; chosen by the admin
    #[account(mut)]
    pub launch_recipient: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RecordTokenLaunch<'info> {
    pub fn record_token_launch(
        &mut self,
        total_token_supply: u64,
        bumps: &RecordTokenLaunchBumps,
    ) -> Result<()> {
        require!(total_token_supply > 0, LedgerError::InvalidMetadata);

        let allocations = payout::token_allocations(total_token_supply)?;

        // The whole acquired supply goes into program custody; every later
        // token claim pays out of this escrow.
        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.funder_token_account.to_account_info(),
                    mint: self.token_mint.to_account_info(),
                    to: self.market_token_escrow.to_account_info(),
                    authority: self.admin.to_account_info(),
                },
            ),
            total_token_supply,
            self.token_mint.decimals,
        )?;

        // Release the launch budget to the wallet that spent it.
        let launch_budget = self.market.distribution_pool;
        if launch_budget > 0 {
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
                        to: self.launch_recipient.to_account_info(),
                    },
                    signer_seeds,
                ),
                launch_budget,
            )?;
        }

        let market = &mut self.market;
        market.pool_balance = market
            .pool_balance
            .checked_sub(launch_budget)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        market.token_mint = Some(self.token_mint.key());
        market.platform_tokens_allocated = allocations.platform;
        market.yes_voter_tokens_allocated = allocations.yes_voters;
        market.team_tokens_allocated = allocations.team;

        emit!(TokenLaunchRecorded {
            market: market.key(),
            token_mint: self.token_mint.key(),
            total_supply: total_token_supply,
            launch_budget,
            yes_voter_tokens: allocations.yes_voters,
            team_tokens: allocations.team,
            platform_tokens: allocations.platform,
        });

        msg!(
            "Launch recorded: supply {}, budget {} lamports",
            total_token_supply,
            launch_budget
        );
        Ok(())
    }
}
