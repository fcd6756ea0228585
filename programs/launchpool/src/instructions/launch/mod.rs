//! Token launch recording, reward claims and vesting releases

pub mod claim_platform_tokens;
pub mod claim_reward;
pub mod founder_vesting;
pub mod record_token_launch;
pub mod team_vesting;

pub use claim_platform_tokens::*;
pub use claim_reward::*;
pub use founder_vesting::*;
pub use record_token_launch::*;
pub use team_vesting::*;
