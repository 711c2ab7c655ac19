//! # Catalog Types
//!
//! The menu data model: products, their configurable params and each param's
//! options.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Catalog                                       │
//! │   products: productId ──► Product                                      │
//! │                            ├── name, description                        │
//! │                            ├── price (base price, defaults included)   │
//! │                            └── params: paramId ──► Param               │
//! │                                                     ├── label, kind    │
//! │                                                     └── options:       │
//! │                                      optionId ──► ProductOption        │
//! │                                                    ├── label           │
//! │                                                    ├── price (delta)   │
//! │                                                    └── default         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Source Shape
//! The JSON keys products by id, just like the menu's static data source:
//! ```json
//! { "products": { "pizza": { "name": "Pizza", "price": 20, "params": { } } } }
//! ```
//! Maps are `BTreeMap`s so iteration order (and therefore the menu order and
//! every serialized snapshot) is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Param Kind
// =============================================================================

/// How a param's options are presented, which decides how many may be chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Exactly one option, shown as radio buttons.
    Radios,
    /// Any number of options.
    #[default]
    Checkboxes,
    /// Exactly one option, shown as a drop-down.
    Select,
}

impl ParamKind {
    /// Whether picking an option replaces the previous choice.
    pub const fn is_single_choice(&self) -> bool {
        matches!(self, ParamKind::Radios | ParamKind::Select)
    }
}

// =============================================================================
// Product Option
// =============================================================================

/// One selectable value within a param.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductOption {
    /// Display label.
    pub label: String,

    /// Price delta. For default options this amount is already part of the
    /// product's base price.
    pub price: Money,

    /// Selected unless the customer deselects it.
    #[serde(rename = "default", default)]
    pub is_default: bool,
}

// =============================================================================
// Param
// =============================================================================

/// A configurable dimension of a product (size, sauce, toppings...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Param {
    /// Display label.
    pub label: String,

    /// Presentation kind; defaults to checkboxes.
    #[serde(rename = "type", default)]
    pub kind: ParamKind,

    /// Options keyed by option id.
    pub options: BTreeMap<String, ProductOption>,
}

impl Param {
    /// Looks up an option by id.
    pub fn option(&self, param_id: &str, option_id: &str) -> CoreResult<&ProductOption> {
        self.options
            .get(option_id)
            .ok_or_else(|| CoreError::UnknownOption {
                param_id: param_id.to_string(),
                option_id: option_id.to_string(),
            })
    }

    /// Ids of the options flagged as default.
    pub fn default_option_ids(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|(_, option)| option.is_default)
            .map(|(id, _)| id.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A menu product with its option schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Product id (the key in the data source).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Optional blurb shown under the name.
    #[serde(default)]
    pub description: Option<String>,

    /// Base price with every default option included.
    pub price: Money,

    /// Params keyed by param id.
    #[serde(default)]
    pub params: BTreeMap<String, Param>,
}

impl Product {
    /// Returns the base price.
    #[inline]
    pub fn base_price(&self) -> Money {
        self.price
    }

    /// Looks up a param by id.
    pub fn param(&self, param_id: &str) -> CoreResult<&Param> {
        self.params
            .get(param_id)
            .ok_or_else(|| CoreError::UnknownParam {
                product_id: self.id.clone(),
                param_id: param_id.to_string(),
            })
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Product record as it appears in the data source (id is the map key).
#[derive(Debug, Deserialize)]
struct ProductRecord {
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: Money,
    #[serde(default)]
    params: BTreeMap<String, Param>,
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    products: BTreeMap<String, ProductRecord>,
}

/// The full menu, keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

impl Catalog {
    /// Parses a catalog from the data source's JSON text.
    ///
    /// ```rust
    /// use bistro_core::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"{"products": {"cake": {"name": "Cake", "price": 9}}}"#).unwrap();
    /// assert_eq!(catalog.product("cake").unwrap().price.cents(), 9);
    /// assert!(Catalog::from_json("not json").is_err());
    /// ```
    pub fn from_json(text: &str) -> CoreResult<Self> {
        let record: CatalogRecord = serde_json::from_str(text)?;
        let products = record.products.into_iter().map(|(id, record)| Product {
            id,
            name: record.name,
            description: record.description,
            price: record.price,
            params: record.params,
        });
        Ok(Catalog::from_products(products))
    }

    /// Builds a catalog from already constructed products.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Catalog {
            products: products
                .into_iter()
                .map(|product| (product.id.clone(), product))
                .collect(),
        }
    }

    /// Looks up a product by id.
    pub fn product(&self, product_id: &str) -> CoreResult<&Product> {
        self.products
            .get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))
    }

    /// Products in menu order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PIZZA: &str = r#"{
        "products": {
            "pizza": {
                "name": "Nonna Alba's Pizza",
                "description": "Wood fired",
                "price": 20,
                "params": {
                    "sauce": {
                        "label": "Sauce",
                        "type": "radios",
                        "options": {
                            "tomato": { "label": "Tomato", "price": 0, "default": true },
                            "cream": { "label": "Sour cream", "price": 2 }
                        }
                    },
                    "toppings": {
                        "label": "Toppings",
                        "options": {
                            "olives": { "label": "Olives", "price": 2, "default": true },
                            "salami": { "label": "Salami", "price": 3 }
                        }
                    }
                }
            },
            "cake": { "name": "Cake", "price": 9 }
        }
    }"#;

    #[test]
    fn test_from_json_attaches_ids() {
        let catalog = Catalog::from_json(PIZZA).unwrap();
        assert_eq!(catalog.len(), 2);

        let pizza = catalog.product("pizza").unwrap();
        assert_eq!(pizza.id, "pizza");
        assert_eq!(pizza.base_price(), Money::from_cents(20));
        assert_eq!(pizza.description.as_deref(), Some("Wood fired"));

        let cake = catalog.product("cake").unwrap();
        assert!(cake.params.is_empty());
        assert!(cake.description.is_none());
    }

    #[test]
    fn test_param_kind_and_defaults() {
        let catalog = Catalog::from_json(PIZZA).unwrap();
        let pizza = catalog.product("pizza").unwrap();

        let sauce = pizza.param("sauce").unwrap();
        assert_eq!(sauce.kind, ParamKind::Radios);
        assert!(sauce.kind.is_single_choice());

        let toppings = pizza.param("toppings").unwrap();
        assert_eq!(toppings.kind, ParamKind::Checkboxes);
        assert_eq!(toppings.default_option_ids().collect::<Vec<_>>(), vec!["olives"]);
        assert!(!toppings.option("toppings", "salami").unwrap().is_default);
    }

    #[test]
    fn test_lookups_fail_with_typed_errors() {
        let catalog = Catalog::from_json(PIZZA).unwrap();
        assert!(matches!(
            catalog.product("soup"),
            Err(CoreError::ProductNotFound(id)) if id == "soup"
        ));

        let pizza = catalog.product("pizza").unwrap();
        assert!(matches!(pizza.param("size"), Err(CoreError::UnknownParam { .. })));
        assert!(matches!(
            pizza.param("sauce").unwrap().option("sauce", "pesto"),
            Err(CoreError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_products_iterate_in_key_order() {
        let catalog = Catalog::from_json(PIZZA).unwrap();
        let ids: Vec<_> = catalog.products().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cake", "pizza"]);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Catalog::from_json(r#"{"products": {"x": {"price": 1}}}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }

    #[test]
    fn test_from_products_keys_by_id() {
        let parsed = Catalog::from_json(PIZZA).unwrap();
        let rebuilt = Catalog::from_products(parsed.products().cloned());
        assert_eq!(rebuilt, parsed);
        assert_eq!(rebuilt.product("cake").unwrap().id, "cake");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
