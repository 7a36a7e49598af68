//! Sticker Order Wizard
//!
//! Controller for the two-step order flow:
//!
//! - [`OrderWizard`]: session selections, quote recomputation, step gating
//! - [`WizardStep`]: explicit configure/details state machine
//! - [`ShippingState`]: free-shipping threshold rule over the order total
//! - [`OrderSubmission`]: the payload produced by a submitted order
//!
//! # Example
//!
//! ```rust
//! use sticker_order::{ArtworkMethod, OrderWizard};
//! use sticker_pricing::Catalog;
//!
//! let mut wizard = OrderWizard::new(Catalog::real_estate());
//! wizard.select_size(1)?;
//! wizard.select_preset_quantity(50);
//! wizard.continue_to_details()?;
//! wizard.set_artwork_method(ArtworkMethod::PrintReady);
//! let submission = wizard.submit()?;
//! assert_eq!(submission.quote.total_price, 440.0);
//! # Ok::<(), sticker_order::OrderError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod shipping;
mod wizard;

pub use error::OrderError;
pub use shipping::{
    ShippingOption, ShippingSelection, ShippingState, FREE_EXPRESS_THRESHOLD,
    FREE_STANDARD_THRESHOLD,
};
pub use wizard::{
    allowed_transitions, ArtworkMethod, OrderSubmission, OrderWizard, QuantityMenuEntry,
    WizardStep,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
