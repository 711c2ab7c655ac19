//! # Cart
//!
//! The cart panel: an open/closed flag plus the configured products collected
//! so far.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Trigger click ─────────► toggle() ─────────► is_open = !is_open        │
//! │                                                                         │
//! │  Configured product ────► add(line) ────────► products.push(line)       │
//! │                                                                         │
//! │  Start over ────────────► clear() ──────────► products.clear()          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are never merged: two identical configurations are two lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::Product;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PriceBreakdown;
use crate::selection::Selection;
use crate::MAX_CART_PRODUCTS;

/// A configured product frozen at the moment it was taken from the menu.
///
/// ## Price Freezing
/// Name and prices are copied, so later catalog edits don't change what the
/// cart shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    /// Line id (UUID v4).
    #[ts(as = "String")]
    pub id: Uuid,
    pub product_id: String,
    pub name: String,
    pub selection: Selection,
    pub quantity: i64,
    /// Price of one configured product.
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub price: Money,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartProduct {
    /// Snapshots a product, its selection and the price computed for it.
    pub fn new(product: &Product, selection: Selection, breakdown: PriceBreakdown) -> Self {
        CartProduct {
            id: Uuid::new_v4(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            selection,
            quantity: breakdown.quantity,
            unit_price: breakdown.unit,
            price: breakdown.total,
            added_at: Utc::now(),
        }
    }
}

/// The cart panel state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    products: Vec<CartProduct>,
    is_open: bool,
}

impl Cart {
    /// Creates an empty, closed cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Flips the visibility flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Appends a configured product.
    ///
    /// ## Errors
    /// [`CoreError::CartTooLarge`] once [`MAX_CART_PRODUCTS`] lines are held.
    pub fn add(&mut self, product: CartProduct) -> CoreResult<()> {
        if self.products.len() >= MAX_CART_PRODUCTS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_PRODUCTS,
            });
        }
        self.products.push(product);
        Ok(())
    }

    pub fn products(&self) -> &[CartProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of quantities across lines.
    pub fn total_quantity(&self) -> i64 {
        self.products.iter().map(|p| p.quantity).sum()
    }

    /// Sum of line prices.
    pub fn subtotal(&self) -> Money {
        self.products.iter().map(|p| p.price).sum()
    }

    /// Empties the cart. Visibility is unchanged.
    pub fn clear(&mut self) {
        self.products.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
