//! Sticker Pricing Engine
//!
//! Leaf crate: given a static product catalog (fixed sizes, fixed volume
//! discount tiers) and a (size, quantity) pair, computes unit price, total
//! price, discount percentage, and the next discount milestone.
//!
//! # Core Concepts
//!
//! - [`Catalog`]: immutable product data, built once at startup
//! - [`Catalog::quote`]: pure (size, quantity) -> [`PriceQuote`]
//! - [`coerce_quantity`]: free-form quantity input normalized to >= 1
//! - [`NextTier`]: upsell hint toward the next discount milestone
//!
//! # Example
//!
//! ```rust
//! use sticker_pricing::Catalog;
//!
//! let catalog = Catalog::real_estate();
//! let quote = catalog.quote(1, 50.0)?;
//! assert_eq!(quote.total_price, 440.0);
//! assert_eq!(quote.discount_pct, 12);
//! # Ok::<(), sticker_pricing::PricingError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod error;
mod quote;

pub use catalog::{Catalog, ColorOption, DiscountTier, SizeOption};
pub use error::PricingError;
pub use quote::{coerce_quantity, NextTier, PriceQuote};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
