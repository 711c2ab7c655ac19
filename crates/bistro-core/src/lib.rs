//! # bistro-core: Pure Ordering Logic
//!
//! This crate holds the ordering model behind the restaurant menu widget:
//! price computation, the bounded quantity control, product configuration and
//! the cart. Everything here is pure; rendering and event plumbing live in the
//! app crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ordering Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front end (menu markup, templates)                 │   │
//! │  │    Product header ──► Option inputs ──► Amount widget ──► Cart  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ AppEvent                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/ordering (App)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌──────────┐        │   │
//! │  │   │ catalog  │ │ pricing  │ │configurator│ │   cart   │        │   │
//! │  │   │ Product  │ │ compute_ │ │ quantity + │ │ CartPro- │        │   │
//! │  │   │ Param    │ │ price    │ │ selection  │ │ duct     │        │   │
//! │  │   └──────────┘ └──────────┘ └────────────┘ └──────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (minor units)
//! - [`catalog`] - Product, Param and ProductOption data model
//! - [`selection`] - Chosen option ids per param
//! - [`pricing`] - The price invariant as a pure function
//! - [`quantity`] - Bounded quantity control with change notification
//! - [`configurator`] - Per-product configuration state
//! - [`cart`] - Cart accumulator and visibility flag
//! - [`menu`] - Accordion state (which product is being configured)
//! - [`validation`] - Catalog sanity checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{Catalog, ProductConfigurator, QuantitySettings};
//!
//! let catalog = Catalog::from_json(r#"{
//!     "products": {
//!         "salad": {
//!             "name": "Salad",
//!             "price": 20,
//!             "params": {
//!                 "extras": {
//!                     "label": "Extras",
//!                     "options": {
//!                         "feta": { "label": "Feta", "price": 5 }
//!                     }
//!                 }
//!             }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let product = catalog.product("salad").unwrap();
//! let mut configurator = ProductConfigurator::new(product, QuantitySettings::default()).unwrap();
//! configurator.set_option("extras", "feta", true).unwrap();
//! configurator.set_quantity("2").unwrap();
//! assert_eq!(configurator.price().cents(), 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod configurator;
pub mod error;
pub mod menu;
pub mod money;
pub mod pricing;
pub mod quantity;
pub mod selection;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartProduct};
pub use catalog::{Catalog, Param, ParamKind, Product, ProductOption};
pub use configurator::ProductConfigurator;
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{ConfiguratorState, Menu};
pub use money::Money;
pub use pricing::{compute_price, price_breakdown, PriceBreakdown};
pub use quantity::{QuantityChanged, QuantityControl, QuantitySettings};
pub use selection::Selection;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity a fresh amount widget starts at.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Lowest quantity the amount widget accepts by default.
pub const DEFAULT_QUANTITY_MIN: i64 = 0;

/// Highest quantity the amount widget accepts by default.
pub const DEFAULT_QUANTITY_MAX: i64 = 10;

/// Maximum number of configured products a cart holds.
///
/// ## Business Reason
/// Prevents runaway carts from a stuck add button.
pub const MAX_CART_PRODUCTS: usize = 100;
