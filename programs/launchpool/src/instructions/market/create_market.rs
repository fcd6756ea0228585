//! Market Creation
//!
//! PDA layout:
//! - Market PDA: seeds ["market", founder, hash(content_cid)]. CIDs can be
//!   59 bytes, PDA seeds are capped at 32, so the hash is used.
//! - Vault PDA: seeds ["market_vault", market]. Zero-data, system-owned;
//!   it receives the rent floor here so later pool debits can never push
//!   it below rent exemption.
//!
//! Charges the flat creation fee to the treasury and opens the
//! constant-product curve with both reserves equal to `target_pool`
//! (50/50 opening price).

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::state::{Market, MarketPhase, MarketResolution, Treasury};

#[event]
pub struct MarketCreated {
    pub market: Pubkey,
    pub founder: Pubkey,
    pub target_pool: u64,
    pub expiry_time: i64,
}

#[derive(Accounts)]
#[instruction(content_cid: String)]
pub struct CreateMarket<'info> {
    #[account(mut)]
    pub founder: Signer<'info>,

    #[account(
        init,
        payer = founder,
        space = 8 + Market::INIT_SPACE,
        seeds = [
            Market::SEED,
            founder.key().as_ref(),
            anchor_lang::solana_program::hash::hash(content_cid.as_bytes()).as_ref(),
        ],
        bump,
    )]
    pub market: Account<'info, Market>,

    /// Zero-data vault PDA; funded with the rent floor at creation
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
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarket<'info> {
    pub fn create_market(
        &mut self,
        content_cid: String,
        target_pool: u64,
        expiry_time: i64,
        metadata_uri: String,
        bumps: &CreateMarketBumps,
    ) -> Result<()> {
        require!(
            target_pool >= MIN_TARGET_POOL_LAMPORTS,
            LedgerError::InvalidTargetPool
        );
        require!(
            content_cid.len() <= MAX_CONTENT_CID_LEN,
            LedgerError::InvalidMetadata
        );
        require!(
            metadata_uri.len() <= MAX_METADATA_URI_LEN,
            LedgerError::InvalidMetadata
        );

        let now = Clock::get()?.unix_timestamp;
        require!(expiry_time > now, LedgerError::InvalidExpiry);

        // Flat creation fee to the treasury.
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.founder.to_account_info(),
                    to: self.treasury.to_account_info(),
                },
            ),
            CREATION_FEE_LAMPORTS,
        )?;
        self.treasury.total_fees = self
            .treasury
            .total_fees
            .checked_add(CREATION_FEE_LAMPORTS)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        // Keep the vault permanently rent-exempt so proportional payouts
        // can drain the whole pool without killing the account.
        let vault_rent = Rent::get()?.minimum_balance(0);
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.founder.to_account_info(),
                    to: self.market_vault.to_account_info(),
                },
            ),
            vault_rent,
        )?;

        self.market.set_inner(Market {
            schema_version: Market::SCHEMA_VERSION,
            founder: self.founder.key(),
            content_cid,
            target_pool,
            pool_balance: 0,
            distribution_pool: 0,
            // Both reserves open at target_pool: k = target^2, price 50/50.
            yes_pool: target_pool,
            no_pool: target_pool,
            total_yes_shares: 0,
            total_no_shares: 0,
            expiry_time,
            phase: MarketPhase::Prediction,
            resolution: MarketResolution::Unresolved,
            metadata_uri,
            token_mint: None,
            platform_tokens_allocated: 0,
            platform_tokens_claimed: false,
            yes_voter_tokens_allocated: 0,
            team_tokens_allocated: 0,
            founder_excess_sol_allocated: 0,
            founder_vesting_initialized: false,
            fee_checksum: 0,
            treasury: self.treasury.key(),
            bump: bumps.market,
        });

        emit!(MarketCreated {
            market: self.market.key(),
            founder: self.founder.key(),
            target_pool,
            expiry_time,
        });

        msg!(
            "Market created: target {} lamports, expiry {}",
            target_pool,
            expiry_time
        );
        Ok(())
    }
}
