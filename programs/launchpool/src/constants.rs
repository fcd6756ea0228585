//! Protocol Constants
//!
//! Single source of truth for every fee, allocation split and vesting
//! parameter. All components (resolution, claims, vesting) read from here;
//! `fee_config_checksum` lets any replica audit which constants were in
//! force when a market resolved.

/// Flat market creation fee paid by the founder (0.015 SOL)
pub const CREATION_FEE_LAMPORTS: u64 = 15_000_000;

/// Minimum contribution per trade (0.01 SOL)
pub const MIN_CONTRIBUTION_LAMPORTS: u64 = 10_000_000;

/// Minimum target pool a market may be created with (0.5 SOL)
pub const MIN_TARGET_POOL_LAMPORTS: u64 = 500_000_000;

/// Completion fee taken from the pool when a market resolves YES or NO (5%)
pub const COMPLETION_FEE_BPS: u64 = 500;

/// Basis points divisor (100%)
pub const BPS_DIVISOR: u64 = 10_000;

/// Launched-token supply split, in basis points of the acquired supply
pub const PLATFORM_TOKEN_SHARE_BPS: u64 = 200; // 2%
pub const TEAM_TOKEN_SHARE_BPS: u64 = 3_300; // 33% (8% immediate + 25% vested)
pub const TEAM_IMMEDIATE_SHARE_BPS: u64 = 800; // 8% of total supply, unlocked at once
pub const YES_VOTER_TOKEN_SHARE_BPS: u64 = 6_500; // 65%

/// Founder excess-SOL split: 8% immediate, remainder vested
pub const FOUNDER_IMMEDIATE_SHARE_BPS: u64 = 800;

/// Resolved YES pools above this cap fund founder vesting instead of the
/// token launch (50 SOL)
pub const LAUNCH_CAP_LAMPORTS: u64 = 50_000_000_000;

/// Linear vesting duration: 12 months of 30 days
pub const VESTING_DURATION_SECONDS: i64 = 31_104_000;

/// Tranche count used by the `next_unlock` display projection
pub const VESTING_TRANCHES: i64 = 12;

/// Claim window after market expiry (90 days). Once it closes, vault
/// residue (truncation dust and forfeited claims) may be swept to the
/// treasury.
pub const CLAIM_WINDOW_SECONDS: i64 = 7_776_000;

/// Maximum content CID length (CIDv1 can be up to 59 chars)
pub const MAX_CONTENT_CID_LEN: usize = 59;

/// Maximum metadata URI length
pub const MAX_METADATA_URI_LEN: usize = 200;

/// Deployer wallet allowed to initialize the treasury singleton
pub const DEPLOYER_WALLET: &str = "92pxeba9NFe3ugWxinTge43nvw3sHnSqw1Kg9pUgoMtt";

/// Platform wallet receiving the 2% token allocation
pub const PLATFORM_WALLET: &str = "7zjf82K8EDMgK2DC5m7Wrs7AjWfqig4ggUXAXdgEERmm";

/// FNV-1a digest of the economic constants above.
///
/// Stored on the market at resolution time so payout computations can be
/// audited against the exact constants that priced them.
pub fn fee_config_checksum() -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let fields: [u64; 8] = [
        COMPLETION_FEE_BPS,
        PLATFORM_TOKEN_SHARE_BPS,
        TEAM_TOKEN_SHARE_BPS,
        TEAM_IMMEDIATE_SHARE_BPS,
        YES_VOTER_TOKEN_SHARE_BPS,
        FOUNDER_IMMEDIATE_SHARE_BPS,
        LAUNCH_CAP_LAMPORTS,
        VESTING_DURATION_SECONDS as u64,
    ];

    let mut digest = FNV_OFFSET;
    for field in fields {
        for byte in field.to_le_bytes() {
            digest ^= byte as u64;
            digest = digest.wrapping_mul(FNV_PRIME);
        }
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_cover_full_supply() {
        assert_eq!(
            PLATFORM_TOKEN_SHARE_BPS + TEAM_TOKEN_SHARE_BPS + YES_VOTER_TOKEN_SHARE_BPS,
            BPS_DIVISOR
        );
    }

    #[test]
    fn test_checksum_is_stable() {
        // Any change to the economic constants must change the digest.
        assert_eq!(fee_config_checksum(), fee_config_checksum());
        assert_ne!(fee_config_checksum(), 0);
    }
}
