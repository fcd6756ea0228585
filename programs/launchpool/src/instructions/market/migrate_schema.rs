//! Schema Migration (V1 -> V2)
//!
//! Markets are tagged with a leading `schema_version` byte. Version 1
//! records predate the token-launch and vesting fields; every other
//! instruction rejects them with `StaleOrUnparseableRecord` until this
//! permissionless migration has rewritten them in the version 2 layout.
//!
//! The V1 payload is decoded with a typed Borsh reader, never by blind
//! byte offsets: a record that fails to parse is left untouched and the
//! instruction errors out.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_lang::Discriminator;

use crate::errors::LedgerError;
use crate::state::{Market, MarketPhase, MarketResolution};

#[event]
pub struct SchemaMigrated {
    pub market: Pubkey,
    pub from_version: u8,
    pub to_version: u8,
}

/// Version 1 record layout, kept only for migration decoding.
#[derive(AnchorDeserialize)]
struct MarketV1 {
    schema_version: u8,
    founder: Pubkey,
    content_cid: String,
    target_pool: u64,
    pool_balance: u64,
    distribution_pool: u64,
    yes_pool: u64,
    no_pool: u64,
    total_yes_shares: u64,
    total_no_shares: u64,
    expiry_time: i64,
    phase: MarketPhase,
    resolution: MarketResolution,
    metadata_uri: String,
    treasury: Pubkey,
    bump: u8,
}

#[derive(Accounts)]
pub struct MigrateMarketSchema<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: raw account; discriminator and version tag are validated in
    /// the handler before any typed decode
    #[account(mut, owner = crate::ID)]
    pub market: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> MigrateMarketSchema<'info> {
    pub fn migrate_market_schema(&mut self) -> Result<()> {
        let market_info = self.market.to_account_info();

        let v1 = {
            let data = market_info.try_borrow_data()?;
            require!(
                data.len() > 8 && data[..8] == Market::DISCRIMINATOR,
                LedgerError::StaleOrUnparseableRecord
            );

            // Leading byte after the discriminator is the version tag.
            match data[8] {
                Market::SCHEMA_VERSION => {
                    msg!("Market already at schema version {}", Market::SCHEMA_VERSION);
                    return Ok(());
                }
                1 => {}
                _ => return err!(LedgerError::StaleOrUnparseableRecord),
            }

            MarketV1::deserialize(&mut &data[8..])
                .map_err(|_| error!(LedgerError::StaleOrUnparseableRecord))?
        };

        let upgraded = Market {
            schema_version: Market::SCHEMA_VERSION,
            founder: v1.founder,
            content_cid: v1.content_cid,
            target_pool: v1.target_pool,
            pool_balance: v1.pool_balance,
            distribution_pool: v1.distribution_pool,
            yes_pool: v1.yes_pool,
            no_pool: v1.no_pool,
            total_yes_shares: v1.total_yes_shares,
            total_no_shares: v1.total_no_shares,
            expiry_time: v1.expiry_time,
            phase: v1.phase,
            resolution: v1.resolution,
            metadata_uri: v1.metadata_uri,
            token_mint: None,
            platform_tokens_allocated: 0,
            platform_tokens_claimed: false,
            yes_voter_tokens_allocated: 0,
            team_tokens_allocated: 0,
            founder_excess_sol_allocated: 0,
            founder_vesting_initialized: false,
            fee_checksum: 0,
            treasury: v1.treasury,
            bump: v1.bump,
        };

        // The V2 layout is larger; grow the account and let the payer cover
        // the rent difference.
        let new_len = 8 + Market::INIT_SPACE;
        let required_rent = Rent::get()?.minimum_balance(new_len);
        let current_lamports = market_info.lamports();
        if current_lamports < required_rent {
            system_program::transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    system_program::Transfer {
                        from: self.payer.to_account_info(),
                        to: market_info.clone(),
                    },
                ),
                required_rent - current_lamports,
            )?;
        }
        market_info.realloc(new_len, false)?;

        let mut data = market_info.try_borrow_mut_data()?;
        upgraded.try_serialize(&mut &mut data[..])?;

        emit!(SchemaMigrated {
            market: market_info.key(),
            from_version: 1,
            to_version: Market::SCHEMA_VERSION,
        });

        msg!("Market migrated to schema version {}", Market::SCHEMA_VERSION);
        Ok(())
    }
}
