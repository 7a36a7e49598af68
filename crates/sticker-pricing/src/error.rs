//! Error types for the pricing engine
//!
//! The engine has a single failure mode: quoting against a size index that
//! does not exist in the catalog. Quantity input is never rejected; it is
//! normalized before pricing.

/// Pricing engine error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// Size index out of catalog bounds
    #[error("invalid size index {index}: catalog has {available} sizes")]
    InvalidSize {
        /// The offending index
        index: usize,
        /// Number of sizes in the catalog
        available: usize,
    },
}
