//! Market State
//!
//! One account per prediction question. The market account is data-only:
//! every lamport of pool SOL lives in the zero-data vault PDA derived from
//! the market key, so the data-bearing record never has to System-transfer.

use anchor_lang::prelude::*;

/// Market lifecycle phase
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum MarketPhase {
    /// Trading toward the target pool; votes count
    Prediction,
    /// Extended by the founder after the target was reached; YES-only
    /// top-ups, outcome already locked
    Funding,
}

/// Terminal market outcome
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum MarketResolution {
    /// Still trading / awaiting resolution
    Unresolved,
    /// YES wins: token launch, 5% completion fee
    YesWins,
    /// NO wins: SOL redistributed to NO holders, 5% completion fee
    NoWins,
    /// Target missed or tie: full refund, no fee
    Refund,
}

/// Trade direction
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Yes,
    No,
}

/// Prediction market account
///
/// Seeds: ["market", founder, hash(content_cid)]
/// (CIDs can exceed the 32-byte seed limit, so the hash is used.)
///
/// The leading `schema_version` tag distinguishes record layouts; accounts
/// written before the vesting fields existed carry version 1 and must pass
/// through `migrate_market_schema` before other instructions accept them.
#[account]
#[derive(InitSpace)]
pub struct Market {
    /// Record layout version (current: [`Market::SCHEMA_VERSION`])
    pub schema_version: u8,

    /// Project founder who created this market
    pub founder: Pubkey,

    /// Content reference for project metadata (immutable)
    #[max_len(59)]
    pub content_cid: String,

    /// Target pool size in lamports (immutable)
    pub target_pool: u64,

    /// SOL currently credited to the pool (always <= vault balance)
    pub pool_balance: u64,

    /// Snapshot taken at resolution for proportional claims (NO wins)
    pub distribution_pool: u64,

    /// YES reserve of the constant-product curve
    pub yes_pool: u64,

    /// NO reserve of the constant-product curve
    pub no_pool: u64,

    /// Total YES shares minted to participants
    pub total_yes_shares: u64,

    /// Total NO shares minted to participants
    pub total_no_shares: u64,

    /// Unix timestamp when trading stops (immutable)
    pub expiry_time: i64,

    /// Current lifecycle phase
    pub phase: MarketPhase,

    /// Resolution status (one-way transition)
    pub resolution: MarketResolution,

    /// Metadata URI handed to the external token launch
    #[max_len(200)]
    pub metadata_uri: String,

    /// Launched token mint (set by `record_token_launch` after YES wins)
    pub token_mint: Option<Pubkey>,

    /// Platform token allocation (2% of acquired supply)
    pub platform_tokens_allocated: u64,

    /// Whether the platform allocation has been claimed
    pub platform_tokens_claimed: bool,

    /// YES-voter token allocation (65% of acquired supply)
    pub yes_voter_tokens_allocated: u64,

    /// Team token allocation (33% of acquired supply), released through
    /// the team vesting schedule
    pub team_tokens_allocated: u64,

    /// Excess SOL above the launch cap, earmarked for founder vesting
    pub founder_excess_sol_allocated: u64,

    /// Whether the founder vesting schedule has been initialized
    pub founder_vesting_initialized: bool,

    /// Checksum of the fee constants in force at resolution (0 until then)
    pub fee_checksum: u64,

    /// Platform treasury address
    pub treasury: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

impl Market {
    pub const SEED: &'static [u8] = b"market";
    pub const VAULT_SEED: &'static [u8] = b"market_vault";

    /// Current record layout version
    pub const SCHEMA_VERSION: u8 = 2;
}
