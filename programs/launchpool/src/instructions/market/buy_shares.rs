//! Share Purchase (BuyYes / BuyNo)
//!
//! Flow:
//! 1. Re-validate phase, resolution and expiry against the account state
//!    at execution time (callers may race; the ledger is authoritative).
//! 2. Enforce the minimum contribution and, in the Prediction phase, the
//!    target-pool cap. In the Funding phase only YES top-ups are allowed.
//! 3. Enforce the one-position rule (a wallet holds only one side).
//! 4. Transfer the full contribution into the vault PDA.
//! 5. Price the trade on the constant-product curve and credit the shares
//!    to the market totals and the caller's position.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::amm::ConstantProductCurve;
use crate::constants::MIN_CONTRIBUTION_LAMPORTS;
use crate::errors::LedgerError;
use crate::state::{Market, MarketPhase, MarketResolution, Position, Side};

#[event]
pub struct SharesPurchased {
    pub market: Pubkey,
    pub user: Pubkey,
    pub side: Side,
    pub lamports_in: u64,
    pub shares_out: u64,
}

#[derive(Accounts)]
pub struct BuyShares<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = market.schema_version == Market::SCHEMA_VERSION
            @ LedgerError::StaleOrUnparseableRecord,
        constraint = market.resolution == MarketResolution::Unresolved
            @ LedgerError::AlreadyResolved,
    )]
    pub market: Account<'info, Market>,

    /// Zero-data vault PDA; receives the contribution
    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump,
    )]
    pub market_vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Position::INIT_SPACE,
        seeds = [Position::SEED, market.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    pub system_program: Program<'info, System>,
}

impl<'info> BuyShares<'info> {
    pub fn buy(&mut self, side: Side, lamports: u64, bumps: &BuySharesBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        require!(now < self.market.expiry_time, LedgerError::ExpiredMarket);
        require!(
            lamports >= MIN_CONTRIBUTION_LAMPORTS,
            LedgerError::ContributionTooSmall
        );

        match self.market.phase {
            MarketPhase::Prediction => {
                // The pool may not run past its target while votes count.
                let new_balance = self
                    .market
                    .pool_balance
                    .checked_add(lamports)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
                require!(
                    new_balance <= self.market.target_pool,
                    LedgerError::CapReached
                );
            }
            MarketPhase::Funding => {
                // Votes are frozen; only YES top-ups extend the raise.
                require!(side == Side::Yes, LedgerError::InvalidPhase);
            }
        }

        // One position per wallet: never both sides.
        if let Some(held) = self.position.side() {
            require!(held == side, LedgerError::AlreadyHasPosition);
        }

        let shares = ConstantProductCurve::shares_out(
            self.market.yes_pool,
            self.market.no_pool,
            lamports,
            side,
        )?;
        require!(shares > 0, LedgerError::ContributionTooSmall);

        // The full contribution goes into custody; there is no per-trade
        // fee, which keeps refunds exact.
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.user.to_account_info(),
                    to: self.market_vault.to_account_info(),
                },
            ),
            lamports,
        )?;

        let market = &mut self.market;
        market.pool_balance = market
            .pool_balance
            .checked_add(lamports)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        match side {
            Side::Yes => {
                market.yes_pool = market
                    .yes_pool
                    .checked_sub(shares)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
                market.no_pool = market
                    .no_pool
                    .checked_add(lamports)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
                market.total_yes_shares = market
                    .total_yes_shares
                    .checked_add(shares)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
            }
            Side::No => {
                market.no_pool = market
                    .no_pool
                    .checked_sub(shares)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
                market.yes_pool = market
                    .yes_pool
                    .checked_add(lamports)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
                market.total_no_shares = market
                    .total_no_shares
                    .checked_add(shares)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
            }
        }

        let position = &mut self.position;
        if position.user == Pubkey::default() {
            position.user = self.user.key();
            position.market = market.key();
            position.yes_shares = 0;
            position.no_shares = 0;
            position.total_contributed = 0;
            position.claimed = false;
            position.bump = bumps.position;
        }

        match side {
            Side::Yes => {
                position.yes_shares = position
                    .yes_shares
                    .checked_add(shares)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
            }
            Side::No => {
                position.no_shares = position
                    .no_shares
                    .checked_add(shares)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
            }
        }
        position.total_contributed = position
            .total_contributed
            .checked_add(lamports)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        emit!(SharesPurchased {
            market: market.key(),
            user: self.user.key(),
            side,
            lamports_in: lamports,
            shares_out: shares,
        });

        msg!(
            "Buy {:?}: {} lamports -> {} shares (pool now {})",
            side,
            lamports,
            shares,
            market.pool_balance
        );
        Ok(())
    }
}
