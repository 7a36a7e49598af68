//! Product catalog
//!
//! Defines the static catalog the pricing engine quotes against:
//! - Size options with base unit prices
//! - Volume discount tiers over order quantity
//! - Quantity presets for the quick-select menu
//! - Text and color options for the sticker face
//!
//! The catalog is constructed once at startup and never mutated.

use serde::{Deserialize, Serialize};

/// A printable sticker size with its base unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    /// Display name, e.g. "Medium (500mm)"
    pub name: String,
    /// Sticker diameter in millimeters
    pub diameter_mm: u32,
    /// Base price per sticker before any discount
    pub unit_price: f64,
}

impl SizeOption {
    /// Create a size option
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, diameter_mm: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            diameter_mm,
            unit_price,
        }
    }
}

/// A volume discount tier over an inclusive quantity range
///
/// `max: None` marks the unbounded top tier. Tiers partition the positive
/// integers with no gaps and no overlaps, ordered ascending by `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Lowest quantity in the tier (inclusive)
    pub min: u32,
    /// Highest quantity in the tier (inclusive); `None` for the top tier
    pub max: Option<u32>,
    /// Discount fraction in [0, 1)
    pub discount: f64,
}

impl DiscountTier {
    /// Create a bounded tier
    #[inline]
    #[must_use]
    pub const fn bounded(min: u32, max: u32, discount: f64) -> Self {
        Self {
            min,
            max: Some(max),
            discount,
        }
    }

    /// Create the unbounded top tier
    #[inline]
    #[must_use]
    pub const fn open(min: u32, discount: f64) -> Self {
        Self {
            min,
            max: None,
            discount,
        }
    }

    /// Check whether a quantity falls inside this tier
    #[inline]
    #[must_use]
    pub fn contains(&self, quantity: u32) -> bool {
        quantity >= self.min && self.max.map_or(true, |max| quantity <= max)
    }
}

/// A background/text color combination for the sticker face
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    /// Stable identifier, e.g. "white-red"
    pub value: String,
    /// Display label, e.g. "White background, Red text"
    pub label: String,
    /// Background color name
    pub background: String,
    /// Text color name
    pub text: String,
}

impl ColorOption {
    fn new(value: &str, label: &str, background: &str, text: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }
}

/// The product catalog
///
/// Process-wide, read-only pricing data. Build the default real-estate
/// catalog with [`Catalog::real_estate`], or assemble a custom one with the
/// `with_*` builders (used by tests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Product display name
    pub product: String,
    /// ISO currency code for all prices
    pub currency: String,
    /// Available sizes, referenced by index
    pub sizes: Vec<SizeOption>,
    /// Sticker text choices
    pub text_options: Vec<String>,
    /// Sticker color combinations
    pub color_options: Vec<ColorOption>,
    /// Volume discount tiers, ascending by `min`
    pub discount_tiers: Vec<DiscountTier>,
    /// Suggested order quantities for the quick-select menu
    pub quantity_presets: Vec<u32>,
}

impl Catalog {
    /// The default round real-estate sticker catalog
    #[must_use]
    pub fn real_estate() -> Self {
        let catalog = Self {
            product: "Real Estate Stickers (Round)".to_string(),
            currency: "AUD".to_string(),
            sizes: vec![
                SizeOption::new("Small (400mm)", 400, 7.0),
                SizeOption::new("Medium (500mm)", 500, 10.0),
                SizeOption::new("Large (600mm)", 600, 12.0),
                SizeOption::new("Extra Large (700mm)", 700, 15.0),
            ],
            text_options: [
                "SOLD",
                "LEASED",
                "FOR SALE",
                "UNDER CONTRACT",
                "UNDER OFFER",
                "AUCTION",
                "OPEN HOME",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            color_options: vec![
                ColorOption::new("white-red", "White background, Red text", "white", "red"),
                ColorOption::new("red-white", "Red background, White text", "red", "white"),
                ColorOption::new("white-black", "White background, Black text", "white", "black"),
                ColorOption::new("black-white", "Black background, White text", "black", "white"),
                ColorOption::new("white-blue", "White background, Blue text", "white", "blue"),
                ColorOption::new("blue-white", "Blue background, White text", "blue", "white"),
            ],
            discount_tiers: vec![
                DiscountTier::bounded(1, 19, 0.0),
                DiscountTier::bounded(20, 49, 0.05),
                DiscountTier::bounded(50, 99, 0.12),
                DiscountTier::bounded(100, 199, 0.16),
                DiscountTier::open(200, 0.22),
            ],
            quantity_presets: vec![10, 20, 50, 100, 200, 300, 500, 1000],
        };
        catalog.debug_check_tiers();
        catalog
    }

    /// Replace the size list
    #[inline]
    #[must_use]
    pub fn with_sizes(mut self, sizes: Vec<SizeOption>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Replace the discount tier table
    #[inline]
    #[must_use]
    pub fn with_discount_tiers(mut self, tiers: Vec<DiscountTier>) -> Self {
        self.discount_tiers = tiers;
        self.debug_check_tiers();
        self
    }

    /// Look up a size by index
    #[inline]
    #[must_use]
    pub fn size(&self, index: usize) -> Option<&SizeOption> {
        self.sizes.get(index)
    }

    /// First tier whose inclusive range contains `quantity`
    #[inline]
    #[must_use]
    pub fn tier_for(&self, quantity: u32) -> Option<&DiscountTier> {
        self.discount_tiers.iter().find(|t| t.contains(quantity))
    }

    /// First tier whose `min` exceeds `quantity`, if any
    #[inline]
    #[must_use]
    pub fn tier_above(&self, quantity: u32) -> Option<&DiscountTier> {
        self.discount_tiers.iter().find(|t| quantity < t.min)
    }

    // Tiers must cover the positive integers contiguously, ascending, with
    // exactly one unbounded tier at the end.
    fn debug_check_tiers(&self) {
        debug_assert!(!self.discount_tiers.is_empty(), "empty tier table");
        debug_assert_eq!(self.discount_tiers[0].min, 1, "tiers must start at 1");
        debug_assert!(
            self.discount_tiers.last().is_some_and(|t| t.max.is_none()),
            "last tier must be unbounded"
        );
        for pair in self.discount_tiers.windows(2) {
            debug_assert_eq!(
                pair[0].max.map(|m| m + 1),
                Some(pair[1].min),
                "tier gap or overlap between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::real_estate()
    }
}
