//! Shipping options and the free-shipping threshold rule
//!
//! A pure rule applied whenever the computed order total changes:
//! - total >= 100 -> express shipping, free
//! - 60 <= total < 100 -> standard shipping, free
//! - total < 60 -> the customer's remembered paid choice is restored
//!
//! The rule is never evaluated on shipping-option input itself, only on
//! total changes driven by size or quantity.

use serde::{Deserialize, Serialize};

/// Order total at which standard shipping becomes free
pub const FREE_STANDARD_THRESHOLD: f64 = 60.0;
/// Order total at which express shipping becomes free
pub const FREE_EXPRESS_THRESHOLD: f64 = 100.0;

/// A paid shipping tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShippingOption {
    /// Standard shipping, $8.95
    Standard,
    /// Express shipping, $13.95
    Express,
}

impl ShippingOption {
    /// Cost of the paid tier
    #[inline]
    #[must_use]
    pub fn cost(self) -> f64 {
        match self {
            Self::Standard => 8.95,
            Self::Express => 13.95,
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Shipping",
            Self::Express => "Express Shipping",
        }
    }

    /// Default paid tier when no prior paid choice exists (lowest cost)
    #[inline]
    #[must_use]
    pub const fn default_paid() -> Self {
        Self::Standard
    }
}

/// The effective shipping selection, paid or threshold-forced free
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShippingSelection {
    /// Customer-chosen paid tier
    Paid(ShippingOption),
    /// Standard shipping forced free (total >= 60)
    FreeStandard,
    /// Express shipping forced free (total >= 100)
    FreeExpress,
}

impl ShippingSelection {
    /// Effective shipping cost
    #[inline]
    #[must_use]
    pub fn cost(self) -> f64 {
        match self {
            Self::Paid(option) => option.cost(),
            Self::FreeStandard | Self::FreeExpress => 0.0,
        }
    }

    /// Whether the selection is threshold-forced free
    #[inline]
    #[must_use]
    pub fn is_free(self) -> bool {
        matches!(self, Self::FreeStandard | Self::FreeExpress)
    }

    /// Display label, e.g. "Express Shipping - FREE"
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Paid(option) => format!("{} - ${:.2}", option.label(), option.cost()),
            Self::FreeStandard => "Standard Shipping - FREE".to_string(),
            Self::FreeExpress => "Express Shipping - FREE".to_string(),
        }
    }
}

/// Shipping state carried by the wizard
///
/// Remembers the last paid choice so that a total dropping back below the
/// free threshold restores what the customer actually picked, not a fixed
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingState {
    selection: ShippingSelection,
    last_paid: Option<ShippingOption>,
}

impl ShippingState {
    /// Initial state: default paid tier, no remembered choice yet
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: ShippingSelection::Paid(ShippingOption::default_paid()),
            last_paid: None,
        }
    }

    /// Current effective selection
    #[inline]
    #[must_use]
    pub fn selection(&self) -> ShippingSelection {
        self.selection
    }

    /// Record an explicit paid choice
    pub fn choose(&mut self, option: ShippingOption) {
        self.selection = ShippingSelection::Paid(option);
        self.last_paid = Some(option);
    }

    /// Re-evaluate the threshold rule against a new order total
    pub fn apply_total(&mut self, total: f64) {
        let next = if total >= FREE_EXPRESS_THRESHOLD {
            ShippingSelection::FreeExpress
        } else if total >= FREE_STANDARD_THRESHOLD {
            ShippingSelection::FreeStandard
        } else {
            ShippingSelection::Paid(self.last_paid.unwrap_or(ShippingOption::default_paid()))
        };
        if next != self.selection {
            tracing::debug!(total, from = ?self.selection, to = ?next, "shipping rule re-evaluated");
            self.selection = next;
        }
    }
}

impl Default for ShippingState {
    fn default() -> Self {
        Self::new()
    }
}
