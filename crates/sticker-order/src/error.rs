//! Error types for the order wizard
//!
//! Covers:
//! - Pricing failures surfaced through the controller
//! - Illegal wizard step transitions
//! - Gating failures on step progression
//! - Selections that do not exist in the catalog

use crate::wizard::WizardStep;
use sticker_pricing::PricingError;

/// Order wizard error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// Pricing engine failure
    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// Step transition not allowed by the wizard state machine
    #[error("illegal wizard transition: {from:?} -> {to:?}")]
    IllegalTransition {
        /// Current step
        from: WizardStep,
        /// Requested step
        to: WizardStep,
    },

    /// Progression gate failed: size and a positive quantity are required
    #[error("configuration incomplete: {0}")]
    IncompleteConfiguration(&'static str),

    /// Shipping is forced free at the current total and cannot be changed
    #[error("shipping selection is locked while the order qualifies for free shipping")]
    ShippingLocked,

    /// Text option not present in the catalog
    #[error("unknown text option: {0}")]
    UnknownTextOption(String),

    /// Color combination not present in the catalog
    #[error("unknown color option: {0}")]
    UnknownColorOption(String),

    /// Submit attempted before the details step
    #[error("submit is only available from the details step")]
    SubmitUnavailable,
}

impl OrderError {
    /// Check whether the error is a user-input problem rather than a bug
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Pricing(_))
    }
}
