//! Team Token Vesting
//!
//! The team's 33% cut of the launched supply is released on a schedule:
//! 8% of the total supply immediately, the remaining 25% linearly over
//! twelve months. The schedule account is initialized once by the founder
//! after the launch has been recorded; the team wallet then claims from
//! the market escrow as tokens unlock.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::VESTING_DURATION_SECONDS;
use crate::errors::LedgerError;
use crate::payout;
use crate::state::{Market, MarketResolution, TeamVesting};

#[event]
pub struct TeamVestingInitialized {
    pub market: Pubkey,
    pub team_wallet: Pubkey,
    pub total_tokens: u64,
    pub immediate_tokens: u64,
    pub vesting_tokens: u64,
}

#[event]
pub struct TeamTokensClaimed {
    pub market: Pubkey,
    pub team_wallet: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
}

#[derive(Accounts)]
pub struct InitTeamVesting<'info> {
    #[account(
        mut,
        constraint = founder.key() == market.founder @ LedgerError::UnauthorizedCaller,
    )]
    pub founder: Signer<'info>,

    #[account(
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
        constraint = market.resolution == MarketResolution::YesWins
            @ LedgerError::InvalidResolutionState,
        constraint = market.token_mint.is_some() @ LedgerError::InvalidResolutionState,
    )]
    pub market: Account<'info, Market>,

    #[account(
        init,
        payer = founder,
        space = 8 + TeamVesting::INIT_SPACE,
        seeds = [TeamVesting::SEED, market.key().as_ref()],
        bump,
    )]
    pub team_vesting: Account<'info, TeamVesting>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitTeamVesting<'info> {
    pub fn init_team_vesting(
        &mut self,
        team_wallet: Pubkey,
        bumps: &InitTeamVestingBumps,
    ) -> Result<()> {
        let market = &self.market;
        let total_tokens = market.team_tokens_allocated;
        require!(total_tokens > 0, LedgerError::NothingToClaim);

        // The three allocation fields partition the acquired supply, so
        // their sum recovers it for the 8%-of-supply immediate tranche.
        let total_supply = market
            .yes_voter_tokens_allocated
            .checked_add(market.team_tokens_allocated)
            .and_then(|v| v.checked_add(market.platform_tokens_allocated))
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let (immediate_tokens, vesting_tokens) = payout::team_token_split(total_supply)?;

        let now = Clock::get()?.unix_timestamp;
        self.team_vesting.set_inner(TeamVesting {
            market: market.key(),
            team_wallet,
            token_mint: market.token_mint.ok_or(LedgerError::InvalidResolutionState)?,
            total_tokens,
            immediate_tokens,
            vesting_tokens,
            claimed_tokens: 0,
            immediate_claimed: false,
            vesting_start: now,
            vesting_duration: VESTING_DURATION_SECONDS,
            bump: bumps.team_vesting,
        });

        emit!(TeamVestingInitialized {
            market: market.key(),
            team_wallet,
            total_tokens,
            immediate_tokens,
            vesting_tokens,
        });

        msg!(
            "Team vesting: {} immediate, {} over {} seconds",
            immediate_tokens,
            vesting_tokens,
            VESTING_DURATION_SECONDS
        );
        Ok(())
    }
}

#[derive(Accounts)]
pub struct ClaimTeamTokens<'info> {
    pub team_wallet: Signer<'info>,

    #[account(
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [TeamVesting::SEED, market.key().as_ref()],
        bump = team_vesting.bump,
        constraint = team_vesting.team_wallet == team_wallet.key()
            @ LedgerError::UnauthorizedCaller,
    )]
    pub team_vesting: Account<'info, TeamVesting>,

    #[account(
        constraint = token_mint.key() == team_vesting.token_mint
            @ LedgerError::AccountNotFound,
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

    #[account(
        mut,
        constraint = team_token_account.mint == token_mint.key()
            @ LedgerError::AccountNotFound,
        constraint = team_token_account.owner == team_wallet.key()
            @ LedgerError::AccountNotFound,
    )]
    pub team_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> ClaimTeamTokens<'info> {
    pub fn claim_team_tokens(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let claimable = self.team_vesting.claimable(now)?;
        require!(claimable > 0, LedgerError::NothingToClaim);

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
                    to: self.team_token_account.to_account_info(),
                    authority: self.market.to_account_info(),
                },
                signer_seeds,
            ),
            claimable,
            self.token_mint.decimals,
        )?;

        let vesting = &mut self.team_vesting;
        if !vesting.immediate_claimed {
            vesting.immediate_claimed = true;
        }
        vesting.claimed_tokens = vesting
            .claimed_tokens
            .checked_add(claimable)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        emit!(TeamTokensClaimed {
            market: self.market.key(),
            team_wallet: self.team_wallet.key(),
            amount: claimable,
            total_claimed: vesting.claimed_tokens,
        });

        msg!(
            "Team claimed {} tokens ({} of {} total)",
            claimable,
            vesting.claimed_tokens,
            vesting.total_tokens
        );
        Ok(())
    }
}
