//! # Launchpool: Prediction-Gated Token Launches
//!
//! A two-sided prediction market over project launches on Solana.
//!
//! ## Overview
//!
//! Backers buy YES or NO shares on a constant-product curve while SOL
//! accumulates in a per-market vault. At resolution the market either
//! launches a token (YES wins: the pool funds the launch and the acquired
//! supply splits 65/33/2 between YES voters, the team and the platform),
//! redistributes the pool to NO holders (NO wins), or refunds everyone
//! (target missed or tie).
//!
//! ## Custody
//! - Pool SOL lives in a zero-data system-owned vault PDA per market.
//! - Launched tokens live in a market-owned escrow token account.
//! - Team tokens and founder excess SOL release on linear vesting
//!   schedules (8% immediate, remainder over twelve months).

use anchor_lang::prelude::*;

pub mod amm;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod payout;
pub mod state;

pub use amm::*;
pub use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Main Launchpool program
#[program]
pub mod launchpool {
    use super::*;

    /// Initialize the singleton treasury (deployer only)
    pub fn init_treasury(ctx: Context<InitTreasury>) -> Result<()> {
        ctx.accounts.init_treasury(&ctx.bumps)
    }

    /// Hand treasury control to a new admin
    pub fn set_treasury_admin(ctx: Context<SetTreasuryAdmin>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.set_treasury_admin(new_admin)
    }

    /// Withdraw collected fees from the treasury
    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_fees(amount)
    }

    /// Open a prediction market for a project launch
    pub fn create_market(
        ctx: Context<CreateMarket>,
        content_cid: String,
        target_pool: u64,
        expiry_time: i64,
        metadata_uri: String,
    ) -> Result<()> {
        ctx.accounts
            .create_market(content_cid, target_pool, expiry_time, metadata_uri, &ctx.bumps)
    }

    /// Buy YES shares on the curve
    pub fn buy_yes(ctx: Context<BuyShares>, lamports: u64) -> Result<()> {
        ctx.accounts.buy(state::Side::Yes, lamports, &ctx.bumps)
    }

    /// Buy NO shares on the curve
    pub fn buy_no(ctx: Context<BuyShares>, lamports: u64) -> Result<()> {
        ctx.accounts.buy(state::Side::No, lamports, &ctx.bumps)
    }

    /// Extend a filled, YES-leading market into the funding phase
    pub fn extend_to_funding(ctx: Context<ExtendToFunding>) -> Result<()> {
        ctx.accounts.extend_to_funding()
    }

    /// Resolve the market and extract the completion fee
    pub fn resolve_market(ctx: Context<ResolveMarket>) -> Result<()> {
        ctx.accounts.resolve_market(&ctx.bumps)
    }

    /// Record an external token launch: deposit supply, release budget
    pub fn record_token_launch(
        ctx: Context<RecordTokenLaunch>,
        total_token_supply: u64,
    ) -> Result<()> {
        ctx.accounts.record_token_launch(total_token_supply, &ctx.bumps)
    }

    /// Claim a participant's reward (tokens, SOL or refund per outcome)
    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        ctx.accounts.claim_reward(&ctx.bumps)
    }

    /// Release the platform's token cut to the platform wallet
    pub fn claim_platform_tokens(ctx: Context<ClaimPlatformTokens>) -> Result<()> {
        ctx.accounts.claim_platform_tokens()
    }

    /// Open the team token vesting schedule
    pub fn init_team_vesting(ctx: Context<InitTeamVesting>, team_wallet: Pubkey) -> Result<()> {
        ctx.accounts.init_team_vesting(team_wallet, &ctx.bumps)
    }

    /// Claim unlocked team tokens
    pub fn claim_team_tokens(ctx: Context<ClaimTeamTokens>) -> Result<()> {
        ctx.accounts.claim_team_tokens()
    }

    /// Open the founder excess-SOL vesting schedule
    pub fn init_founder_vesting(ctx: Context<InitFounderVesting>) -> Result<()> {
        ctx.accounts.init_founder_vesting(&ctx.bumps)
    }

    /// Claim unlocked founder SOL
    pub fn claim_founder_sol(ctx: Context<ClaimFounderSol>) -> Result<()> {
        ctx.accounts.claim_founder_sol(&ctx.bumps)
    }

    /// Move legacy pool lamports off the market account into its vault
    pub fn migrate_market_vault(ctx: Context<MigrateMarketVault>) -> Result<()> {
        ctx.accounts.migrate_market_vault()
    }

    /// Rewrite a version 1 market record in the current layout
    pub fn migrate_market_schema(ctx: Context<MigrateMarketSchema>) -> Result<()> {
        ctx.accounts.migrate_market_schema()
    }

    /// Sweep post-claim vault residue to the treasury (admin only)
    pub fn sweep_vault_residue(ctx: Context<SweepVaultResidue>) -> Result<()> {
        ctx.accounts.sweep_vault_residue(&ctx.bumps)
    }

    /// Admin recovery: drain a market vault back to its founder
    pub fn emergency_drain_vault(ctx: Context<EmergencyDrainVault>) -> Result<()> {
        ctx.accounts.emergency_drain_vault(&ctx.bumps)
    }
}
