//! # Product Configurator
//!
//! Per-product configuration: the option selection, the amount widget and the
//! price surface they feed.
//!
//! ## Recompute Triggers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  construction ─────────┐                                                │
//! │  option input change ──┤                                                │
//! │  quantity change ──────┼──► compute price ──► price surface             │
//! │  form submit ──────────┤                                                │
//! │  add-to-cart click ────┘                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The configurator owns its [`QuantityControl`] and consumes the control's
//! [`QuantityChanged`] signal directly. Because the signal fires before the
//! control commits, the price is computed from the event's new value rather
//! than from `QuantityControl::value`.

use crate::cart::CartProduct;
use crate::catalog::Product;
use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::{price_breakdown, PriceBreakdown};
use crate::quantity::{QuantityChanged, QuantityControl, QuantitySettings};
use crate::selection::Selection;

/// Configuration state and price surface for one menu product.
#[derive(Debug)]
pub struct ProductConfigurator {
    product: Product,
    selection: Selection,
    quantity: QuantityControl,
    /// Last successfully computed price; what the price element shows.
    surface: PriceBreakdown,
}

impl ProductConfigurator {
    /// Builds the configurator with default options and computes the first
    /// price.
    pub fn new(product: &Product, settings: QuantitySettings) -> CoreResult<Self> {
        let selection = Selection::defaults(product);
        let quantity = QuantityControl::new(settings, &settings.default_value.to_string());
        let surface = price_breakdown(product.price, &product.params, &selection, quantity.value())?;

        Ok(ProductConfigurator {
            product: product.clone(),
            selection,
            quantity,
            surface,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Committed quantity.
    pub fn quantity(&self) -> i64 {
        self.quantity.value()
    }

    pub fn quantity_control(&self) -> &QuantityControl {
        &self.quantity
    }

    /// Registers an extra listener on the quantity control.
    ///
    /// The control itself is never handed out mutably: every quantity change
    /// goes through [`set_quantity`](Self::set_quantity),
    /// [`increase`](Self::increase) or [`decrease`](Self::decrease), which
    /// recompute the price.
    pub fn subscribe_quantity<F>(&mut self, listener: F)
    where
        F: FnMut(&QuantityChanged) + 'static,
    {
        self.quantity.subscribe(listener);
    }

    /// Price currently on the surface.
    pub fn price(&self) -> Money {
        self.surface.total
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        self.surface
    }

    /// Recomputes from the current selection and committed quantity.
    pub fn compute_price(&mut self) -> CoreResult<Money> {
        self.recompute(self.quantity.value())
    }

    /// An option input changed.
    ///
    /// ## Errors
    /// Unknown param or option ids are rejected before the selection changes.
    pub fn set_option(&mut self, param_id: &str, option_id: &str, selected: bool) -> CoreResult<Money> {
        let param = self.product.param(param_id)?;
        param.option(param_id, option_id)?;
        let kind = param.kind;

        self.selection.set(kind, param_id, option_id, selected);
        self.compute_price()
    }

    /// Text was entered in the amount input.
    pub fn set_quantity(&mut self, input: &str) -> CoreResult<Money> {
        let change = self.quantity.set_value(input);
        self.on_quantity_change(change)
    }

    /// The "more" link was clicked.
    pub fn increase(&mut self) -> CoreResult<Money> {
        let change = self.quantity.increase();
        self.on_quantity_change(change)
    }

    /// The "less" link was clicked.
    pub fn decrease(&mut self) -> CoreResult<Money> {
        let change = self.quantity.decrease();
        self.on_quantity_change(change)
    }

    /// The order form was submitted.
    pub fn submit(&mut self) -> CoreResult<Money> {
        self.compute_price()
    }

    /// The add-to-cart button was clicked. Only refreshes the price.
    pub fn add_to_cart(&mut self) -> CoreResult<Money> {
        self.compute_price()
    }

    /// Frozen snapshot of the current configuration for the cart.
    pub fn cart_product(&self) -> CartProduct {
        CartProduct::new(&self.product, self.selection.clone(), self.surface)
    }

    /// Image keys (`"{param}-{option}"`) of the selected options.
    pub fn visible_images(&self) -> Vec<String> {
        self.selection
            .iter()
            .filter(|(param_id, option_id)| {
                self.product
                    .params
                    .get(*param_id)
                    .is_some_and(|param| param.options.contains_key(*option_id))
            })
            .map(|(param_id, option_id)| format!("{param_id}-{option_id}"))
            .collect()
    }

    fn on_quantity_change(&mut self, change: Option<QuantityChanged>) -> CoreResult<Money> {
        match change {
            Some(event) => self.recompute(event.value),
            None => Ok(self.price()),
        }
    }

    fn recompute(&mut self, quantity: i64) -> CoreResult<Money> {
        self.surface = price_breakdown(self.product.price, &self.product.params, &self.selection, quantity)?;
        Ok(self.surface.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
