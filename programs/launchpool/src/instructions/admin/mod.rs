//! Treasury and emergency administration

pub mod emergency_drain;
pub mod init_treasury;
pub mod set_admin;
pub mod sweep_residue;
pub mod withdraw_fees;

pub use emergency_drain::*;
pub use init_treasury::*;
pub use set_admin::*;
pub use sweep_residue::*;
pub use withdraw_fees::*;
