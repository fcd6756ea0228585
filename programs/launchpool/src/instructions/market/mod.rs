//! Market lifecycle: creation, trading, extension, resolution, migrations

pub mod buy_shares;
pub mod create_market;
pub mod extend_funding;
pub mod migrate_schema;
pub mod migrate_vault;
pub mod resolve;

pub use buy_shares::*;
pub use create_market::*;
pub use extend_funding::*;
pub use migrate_schema::*;
pub use migrate_vault::*;
pub use resolve::*;
