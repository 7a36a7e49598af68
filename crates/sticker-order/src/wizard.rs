//! Order wizard controller
//!
//! Holds the customer's selections across the two wizard steps, derives a
//! fresh price quote on every size or quantity change, re-applies the
//! shipping threshold rule to the new total, and gates step progression on
//! completeness of required fields.

use crate::error::OrderError;
use crate::shipping::{ShippingOption, ShippingSelection, ShippingState};
use serde::{Deserialize, Serialize};
use sticker_pricing::{Catalog, PriceQuote, PricingError};

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    /// Select size, text, color, quantity
    Configuring,
    /// Supply artwork, select shipping
    Detailing,
}

/// Steps reachable from `from`
#[must_use]
pub fn allowed_transitions(from: WizardStep) -> Vec<WizardStep> {
    use WizardStep::*;
    match from {
        Configuring => vec![Detailing],
        Detailing => vec![Configuring],
    }
}

/// How the customer will supply print-ready artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtworkMethod {
    /// Customer has print-ready files to upload
    PrintReady,
    /// Customer designs online (external designer)
    DesignOnline,
    /// Customer wants design assistance
    NeedAssistance,
}

/// One row of the quantity quick-select menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityMenuEntry {
    /// Preset quantity
    pub quantity: u32,
    /// Display label, priced when a size is selected
    pub label: String,
}

/// The order submission payload
///
/// What "submit" produces: a snapshot of every selection plus the final
/// quote. Assembled and returned to the caller; no backend call is made.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSubmission {
    /// Product display name
    pub product: String,
    /// ISO currency code
    pub currency: String,
    /// Final quote for the selected size and quantity
    pub quote: PriceQuote,
    /// Selected sticker text, if any
    pub text: Option<String>,
    /// Selected color combination identifier, if any
    pub color: Option<String>,
    /// Artwork supply method, if chosen
    pub artwork_method: Option<ArtworkMethod>,
    /// Uploaded artwork URLs
    pub artwork_urls: Vec<String>,
    /// Shipping label, e.g. "Express Shipping - FREE"
    pub shipping_label: String,
    /// Effective shipping cost
    pub shipping_cost: f64,
    /// Order total including shipping
    pub grand_total: f64,
}

/// The order wizard
///
/// Explicit state object: owns the catalog and all session selections.
/// Pricing is recomputed fresh on every relevant change and never stored.
#[derive(Debug, Clone)]
pub struct OrderWizard {
    catalog: Catalog,
    step: WizardStep,
    size_index: Option<usize>,
    text: Option<String>,
    color: Option<String>,
    preset_quantity: Option<u32>,
    custom_quantity: Option<u32>,
    artwork_method: Option<ArtworkMethod>,
    shipping: ShippingState,
    artwork_urls: Vec<String>,
}

impl OrderWizard {
    /// Create a wizard over a catalog, starting at the configure step
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            step: WizardStep::Configuring,
            size_index: None,
            text: None,
            color: None,
            preset_quantity: None,
            custom_quantity: None,
            artwork_method: None,
            shipping: ShippingState::new(),
            artwork_urls: Vec::new(),
        }
    }

    /// The catalog this wizard prices against
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current wizard step
    #[inline]
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Effective order quantity: custom override wins over the preset
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.custom_quantity.or(self.preset_quantity).unwrap_or(0)
    }

    /// Currently selected size index, if any
    #[inline]
    #[must_use]
    pub fn size_index(&self) -> Option<usize> {
        self.size_index
    }

    /// Current shipping selection
    #[inline]
    #[must_use]
    pub fn shipping(&self) -> ShippingSelection {
        self.shipping.selection()
    }

    /// Uploaded artwork URLs recorded so far
    #[inline]
    #[must_use]
    pub fn artwork_urls(&self) -> &[String] {
        &self.artwork_urls
    }

    /// Select a size by catalog index
    ///
    /// # Errors
    /// [`OrderError::Pricing`] with `InvalidSize` when the index is out of
    /// catalog bounds.
    pub fn select_size(&mut self, index: usize) -> Result<(), OrderError> {
        if self.catalog.size(index).is_none() {
            return Err(PricingError::InvalidSize {
                index,
                available: self.catalog.sizes.len(),
            }
            .into());
        }
        self.size_index = Some(index);
        self.reprice();
        Ok(())
    }

    /// Select sticker text from the catalog options
    pub fn select_text(&mut self, text: &str) -> Result<(), OrderError> {
        if !self.catalog.text_options.iter().any(|t| t == text) {
            return Err(OrderError::UnknownTextOption(text.to_string()));
        }
        self.text = Some(text.to_string());
        Ok(())
    }

    /// Select a color combination by its identifier
    pub fn select_color(&mut self, value: &str) -> Result<(), OrderError> {
        if !self.catalog.color_options.iter().any(|c| c.value == value) {
            return Err(OrderError::UnknownColorOption(value.to_string()));
        }
        self.color = Some(value.to_string());
        Ok(())
    }

    /// Pick a preset quantity; clears any custom override
    pub fn select_preset_quantity(&mut self, quantity: u32) {
        self.preset_quantity = Some(quantity);
        self.custom_quantity = None;
        self.reprice();
    }

    /// Set a custom quantity from free-form input
    ///
    /// Input is coerced the same way the pricing engine coerces it, so "abc"
    /// (parsed upstream to NaN) or a non-positive number lands at 1.
    pub fn set_custom_quantity(&mut self, raw: f64) {
        self.custom_quantity = Some(sticker_pricing::coerce_quantity(raw));
        self.reprice();
    }

    /// Remove the custom quantity override
    pub fn clear_custom_quantity(&mut self) {
        self.custom_quantity = None;
        self.reprice();
    }

    /// Choose the artwork supply method
    pub fn set_artwork_method(&mut self, method: ArtworkMethod) {
        self.artwork_method = Some(method);
    }

    /// Record uploaded artwork URLs
    pub fn record_artwork(&mut self, urls: impl IntoIterator<Item = String>) {
        self.artwork_urls.extend(urls);
    }

    /// Remove one recorded artwork URL
    pub fn remove_artwork(&mut self, url: &str) {
        self.artwork_urls.retain(|u| u != url);
    }

    /// Choose a paid shipping tier
    ///
    /// # Errors
    /// [`OrderError::ShippingLocked`] while the order qualifies for free
    /// shipping; the selection is fixed by the threshold rule.
    pub fn select_shipping(&mut self, option: ShippingOption) -> Result<(), OrderError> {
        if self.shipping.selection().is_free() {
            return Err(OrderError::ShippingLocked);
        }
        self.shipping.choose(option);
        Ok(())
    }

    /// Current quote, or `None` until a size and a positive quantity exist
    #[must_use]
    pub fn quote(&self) -> Option<PriceQuote> {
        let size_index = self.size_index?;
        let quantity = self.quantity();
        if quantity == 0 {
            return None;
        }
        // Size indices are only ever set through select_size.
        self.catalog.quote(size_index, f64::from(quantity)).ok()
    }

    /// Current order total, zero until a quote exists
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.quote().map_or(0.0, |q| q.total_price)
    }

    /// Upsell message for the current quote, if any
    #[must_use]
    pub fn upsell_message(&self) -> Option<String> {
        self.quote().and_then(|q| q.upsell_message())
    }

    /// Quantity quick-select menu, priced when a size is selected
    #[must_use]
    pub fn quantity_menu(&self) -> Vec<QuantityMenuEntry> {
        self.catalog
            .quantity_presets
            .iter()
            .map(|&quantity| {
                let label = match self
                    .size_index
                    .and_then(|i| self.catalog.quote(i, f64::from(quantity)).ok())
                {
                    Some(quote) if quote.discount_pct > 0 => format!(
                        "{} stickers \u{2022} ${:.2} ({}% off)",
                        quantity, quote.total_price, quote.discount_pct
                    ),
                    Some(quote) => {
                        format!("{} stickers \u{2022} ${:.2}", quantity, quote.total_price)
                    }
                    None => format!("{quantity} stickers"),
                };
                QuantityMenuEntry { quantity, label }
            })
            .collect()
    }

    /// Whether the configure step is complete enough to continue
    #[inline]
    #[must_use]
    pub fn is_configuration_complete(&self) -> bool {
        self.size_index.is_some() && self.quantity() > 0
    }

    /// Advance from the configure step to the details step
    ///
    /// # Errors
    /// [`OrderError::IllegalTransition`] when not on the configure step;
    /// [`OrderError::IncompleteConfiguration`] when size or quantity is
    /// missing. Text and color are not gating.
    pub fn continue_to_details(&mut self) -> Result<(), OrderError> {
        self.validate_transition(WizardStep::Detailing)?;
        if self.size_index.is_none() {
            return Err(OrderError::IncompleteConfiguration("no size selected"));
        }
        if self.quantity() == 0 {
            return Err(OrderError::IncompleteConfiguration("no quantity selected"));
        }
        tracing::info!(quantity = self.quantity(), total = self.total(), "entering details step");
        self.step = WizardStep::Detailing;
        Ok(())
    }

    /// Go back to the configure step; always allowed from details
    ///
    /// # Errors
    /// [`OrderError::IllegalTransition`] when already on the configure step.
    pub fn back(&mut self) -> Result<(), OrderError> {
        self.validate_transition(WizardStep::Configuring)?;
        self.step = WizardStep::Configuring;
        Ok(())
    }

    /// Submit the order
    ///
    /// Only reachable from the details step. Assembles the submission
    /// payload from the current selections and final quote; there is no
    /// backend call.
    ///
    /// # Errors
    /// [`OrderError::SubmitUnavailable`] outside the details step.
    pub fn submit(&self) -> Result<OrderSubmission, OrderError> {
        if self.step != WizardStep::Detailing {
            return Err(OrderError::SubmitUnavailable);
        }
        // Guarded by continue_to_details, so a quote must exist.
        let quote = self
            .quote()
            .ok_or(OrderError::IncompleteConfiguration("no quote available"))?;

        let shipping = self.shipping.selection();
        let submission = OrderSubmission {
            product: self.catalog.product.clone(),
            currency: self.catalog.currency.clone(),
            grand_total: quote.total_price + shipping.cost(),
            quote,
            text: self.text.clone(),
            color: self.color.clone(),
            artwork_method: self.artwork_method,
            artwork_urls: self.artwork_urls.clone(),
            shipping_label: shipping.label(),
            shipping_cost: shipping.cost(),
        };
        tracing::info!(
            total = submission.quote.total_price,
            shipping = %submission.shipping_label,
            "order submitted"
        );
        Ok(submission)
    }

    fn validate_transition(&self, to: WizardStep) -> Result<(), OrderError> {
        if allowed_transitions(self.step).contains(&to) {
            Ok(())
        } else {
            Err(OrderError::IllegalTransition {
                from: self.step,
                to,
            })
        }
    }

    // Shipping thresholds track the total; runs after every size or
    // quantity change, never on shipping input.
    fn reprice(&mut self) {
        self.shipping.apply_total(self.total());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sticker_pricing::Catalog;

    fn wizard() -> OrderWizard {
        OrderWizard::new(Catalog::real_estate())
    }

    #[test]
    fn starts_configuring_with_no_quote() {
        let wizard = wizard();
        assert_eq!(wizard.step(), WizardStep::Configuring);
        assert!(wizard.quote().is_none());
        assert_eq!(wizard.total(), 0.0);
    }

    #[test]
    fn custom_quantity_overrides_preset() {
        let mut wizard = wizard();
        wizard.select_preset_quantity(50);
        assert_eq!(wizard.quantity(), 50);
        wizard.set_custom_quantity(73.0);
        assert_eq!(wizard.quantity(), 73);
        wizard.clear_custom_quantity();
        assert_eq!(wizard.quantity(), 50);
    }

    #[test]
    fn custom_quantity_is_coerced() {
        let mut wizard = wizard();
        wizard.set_custom_quantity(-5.0);
        assert_eq!(wizard.quantity(), 1);
        wizard.set_custom_quantity(f64::NAN);
        assert_eq!(wizard.quantity(), 1);
        wizard.set_custom_quantity(12.7);
        assert_eq!(wizard.quantity(), 12);
    }

    #[test]
    fn selecting_unknown_size_fails() {
        let mut wizard = wizard();
        assert!(matches!(
            wizard.select_size(9),
            Err(OrderError::Pricing(_))
        ));
        assert!(wizard.size_index().is_none());
    }

    #[test]
    fn text_and_color_validated_against_catalog() {
        let mut wizard = wizard();
        assert!(wizard.select_text("SOLD").is_ok());
        assert!(matches!(
            wizard.select_text("BANANA"),
            Err(OrderError::UnknownTextOption(_))
        ));
        assert!(wizard.select_color("white-red").is_ok());
        assert!(matches!(
            wizard.select_color("green-purple"),
            Err(OrderError::UnknownColorOption(_))
        ));
    }

    #[test]
    fn gate_requires_size_and_quantity() {
        let mut wizard = wizard();
        assert!(matches!(
            wizard.continue_to_details(),
            Err(OrderError::IncompleteConfiguration("no size selected"))
        ));

        wizard.select_size(0).unwrap();
        assert!(matches!(
            wizard.continue_to_details(),
            Err(OrderError::IncompleteConfiguration("no quantity selected"))
        ));

        wizard.select_preset_quantity(10);
        wizard.continue_to_details().unwrap();
        assert_eq!(wizard.step(), WizardStep::Detailing);
    }

    #[test]
    fn text_and_color_do_not_gate() {
        let mut wizard = wizard();
        wizard.select_size(1).unwrap();
        wizard.set_custom_quantity(3.0);
        assert!(wizard.continue_to_details().is_ok());
    }

    #[test]
    fn back_is_always_allowed_from_details() {
        let mut wizard = wizard();
        wizard.select_size(0).unwrap();
        wizard.select_preset_quantity(10);
        wizard.continue_to_details().unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), WizardStep::Configuring);

        // Not from configuring, though.
        assert!(matches!(
            wizard.back(),
            Err(OrderError::IllegalTransition { .. })
        ));
    }

    #[test]
    fn shipping_follows_total_changes() {
        let mut wizard = wizard();
        wizard.select_size(0).unwrap(); // Small, 7.00

        wizard.select_preset_quantity(5); // 35.00
        assert!(!wizard.shipping().is_free());

        wizard.select_preset_quantity(10); // 70.00
        assert_eq!(wizard.shipping(), ShippingSelection::FreeStandard);

        wizard.select_preset_quantity(20); // 133.00 at 5% off
        assert_eq!(wizard.shipping(), ShippingSelection::FreeExpress);
    }

    #[test]
    fn shipping_locked_while_free() {
        let mut wizard = wizard();
        wizard.select_size(1).unwrap();
        wizard.select_preset_quantity(50); // 440.00
        assert!(matches!(
            wizard.select_shipping(ShippingOption::Express),
            Err(OrderError::ShippingLocked)
        ));
    }

    #[test]
    fn paid_choice_survives_a_free_shipping_excursion() {
        let mut wizard = wizard();
        wizard.select_size(1).unwrap(); // Medium, 10.00
        wizard.set_custom_quantity(4.0); // 40.00
        wizard.select_shipping(ShippingOption::Express).unwrap();

        wizard.set_custom_quantity(50.0); // 440.00 -> free express
        assert!(wizard.shipping().is_free());

        wizard.set_custom_quantity(4.0); // back to 40.00
        assert_eq!(
            wizard.shipping(),
            ShippingSelection::Paid(ShippingOption::Express)
        );
    }

    #[test]
    fn submit_only_from_details() {
        let mut wizard = wizard();
        wizard.select_size(2).unwrap();
        wizard.select_preset_quantity(100);
        assert!(matches!(wizard.submit(), Err(OrderError::SubmitUnavailable)));

        wizard.continue_to_details().unwrap();
        wizard.set_artwork_method(ArtworkMethod::PrintReady);
        wizard.record_artwork(["https://cdn.example/artwork/a.pdf".to_string()]);

        let submission = wizard.submit().unwrap();
        assert_eq!(submission.quote.quantity, 100);
        assert_eq!(submission.quote.discount_pct, 16);
        assert_eq!(submission.shipping_cost, 0.0);
        assert_eq!(submission.artwork_urls.len(), 1);
        assert_eq!(submission.grand_total, submission.quote.total_price);
    }

    #[test]
    fn quantity_menu_is_priced_once_size_is_selected() {
        let mut wizard = wizard();
        let unpriced = wizard.quantity_menu();
        assert_eq!(unpriced[0].label, "10 stickers");

        wizard.select_size(1).unwrap();
        let priced = wizard.quantity_menu();
        assert_eq!(priced.len(), 8);
        assert_eq!(priced[0].label, "10 stickers \u{2022} $100.00");
        assert_eq!(priced[2].label, "50 stickers \u{2022} $440.00 (12% off)");
    }

    #[test]
    fn remove_artwork_drops_only_the_named_url() {
        let mut wizard = wizard();
        wizard.record_artwork([
            "https://cdn.example/a.png".to_string(),
            "https://cdn.example/b.png".to_string(),
        ]);
        wizard.remove_artwork("https://cdn.example/a.png");
        assert_eq!(wizard.artwork_urls(), ["https://cdn.example/b.png"]);
    }
}
