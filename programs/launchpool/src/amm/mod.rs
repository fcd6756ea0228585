//! # Bonding Curve Module
//!
//! Prices YES/NO shares with a constant-product invariant over two virtual
//! reserve pools:
//!
//! ```text
//!            yes_pool * no_pool = k
//!
//!   Buying YES adds the contribution to the NO reserve and shrinks the
//!   YES reserve to keep k; the difference is the minted share count.
//!   Later buyers therefore receive fewer shares per lamport; the price
//!   is monotonically increasing on each side.
//! ```
//!
//! Spot prices sum to one and read as probabilities:
//!
//! ```text
//!   yes_price = no_pool  / (yes_pool + no_pool)
//!   no_price  = yes_pool / (yes_pool + no_pool)
//! ```
//!
//! All arithmetic is integer-only (u128 intermediates, checked at every
//! step) so any off-chain replica computes bit-identical results.

pub mod curve;

pub use curve::*;
