//! Error taxonomy for the market ledger.
//!
//! Every transition re-validates phase, resolution and expiry at execution
//! time and rejects at the instruction boundary; no partial mutation is
//! observable by callers.

use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Transition attempted outside its allowed market phase.")]
    InvalidPhase,
    #[msg("Market has already been resolved.")]
    AlreadyResolved,
    #[msg("This reward has already been claimed.")]
    AlreadyClaimed,
    #[msg("Arithmetic overflow or invalid calculation.")]
    ArithmeticOverflow,
    #[msg("Insufficient pool balance for this action.")]
    InsufficientPoolBalance,
    #[msg("This market has already expired.")]
    ExpiredMarket,
    #[msg("Market is not yet eligible for resolution.")]
    NotYetExpired,
    #[msg("Caller is not authorized to perform this action.")]
    UnauthorizedCaller,
    #[msg("A required account was not supplied.")]
    AccountNotFound,
    #[msg("Record schema version does not match; migrate the account first.")]
    StaleOrUnparseableRecord,
    #[msg("Contribution is below the minimum (0.01 SOL) or zero.")]
    ContributionTooSmall,
    #[msg("The target pool has already been filled.")]
    CapReached,
    #[msg("Target pool has not been reached yet.")]
    TargetNotReached,
    #[msg("YES must be leading to extend the market.")]
    YesNotWinning,
    #[msg("Wallet already holds shares on the opposite side.")]
    AlreadyHasPosition,
    #[msg("Invalid target pool size (below the 0.5 SOL minimum).")]
    InvalidTargetPool,
    #[msg("Invalid or excessively long content reference / metadata URI.")]
    InvalidMetadata,
    #[msg("Expiry timestamp must be in the future.")]
    InvalidExpiry,
    #[msg("No excess SOL is available for founder vesting.")]
    NoExcessSol,
    #[msg("Already initialized.")]
    AlreadyInitialized,
    #[msg("Nothing to claim at this time.")]
    NothingToClaim,
    #[msg("Market is not in the required resolution state for this action.")]
    InvalidResolutionState,
}
