//! # Validation Module
//!
//! Sanity checks for catalog data.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Load time (THIS MODULE)                                               │
//! │  ├── Shape: serde rejects missing names / prices                      │
//! │  └── Rules: ids, prices, option lists, defaults                       │
//! │           │  problems are reported, never repaired                     │
//! │           ▼                                                             │
//! │  Event time (pricing / configurator)                                   │
//! │  └── No checks: a lookup failure aborts the handler                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::validation::{validate_catalog, validate_price};
//! use bistro_core::{Catalog, Money};
//!
//! assert!(validate_price("price", Money::from_cents(0)).is_ok());
//!
//! let catalog = Catalog::from_json(r#"{"products": {"cake": {"name": "", "price": -1}}}"#).unwrap();
//! assert_eq!(validate_catalog(&catalog).len(), 2);
//! ```

use crate::catalog::{Catalog, Param, Product};
use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an identifier (product, param or option id).
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a display label or product name.
pub fn validate_label(field: &str, label: &str) -> ValidationResult<()> {
    if label.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a base price or option price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free sauce)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a param's option list.
///
/// ## Rules
/// - At least one option
/// - Single-choice kinds have at most one default
pub fn validate_param(field: &str, param: &Param) -> ValidationResult<()> {
    if param.options.is_empty() {
        return Err(ValidationError::Empty {
            field: format!("{field}.options"),
        });
    }

    let defaults = param.default_option_ids().count();
    if param.kind.is_single_choice() && defaults > 1 {
        return Err(ValidationError::TooManyDefaults {
            field: field.to_string(),
            count: defaults,
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Collects every problem with one product. Field names are dotted paths
/// such as `products.pizza.params.sauce.options.cream.price`.
pub fn validate_product(product: &Product) -> Vec<ValidationError> {
    let base = format!("products.{}", product.id);
    let mut problems = Vec::new();

    problems.extend(validate_id(&format!("{base}.id"), &product.id).err());
    problems.extend(validate_label(&format!("{base}.name"), &product.name).err());
    problems.extend(validate_price(&format!("{base}.price"), product.price).err());

    for (param_id, param) in &product.params {
        let field = format!("{base}.params.{param_id}");
        problems.extend(validate_id(&field, param_id).err());
        problems.extend(validate_label(&format!("{field}.label"), &param.label).err());
        problems.extend(validate_param(&field, param).err());

        for (option_id, option) in &param.options {
            let field = format!("{field}.options.{option_id}");
            problems.extend(validate_id(&field, option_id).err());
            problems.extend(validate_price(&format!("{field}.price"), option.price).err());
        }
    }

    problems
}

/// Collects every problem in the catalog, in menu order.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    catalog.products().flat_map(validate_product).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id_and_label() {
        assert!(validate_id("id", "pizza").is_ok());
        assert!(validate_id("id", "   ").is_err());
        assert!(validate_label("name", "Pizza").is_ok());
        assert!(validate_label("name", "").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", Money::from_cents(0)).is_ok());
        assert!(validate_price("price", Money::from_cents(1099)).is_ok());
        assert_eq!(
            validate_price("price", Money::from_cents(-1)),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_clean_catalog_has_no_problems() {
        let catalog = Catalog::from_json(
            r#"{"products": {"pizza": {"name": "Pizza", "price": 20, "params": {
                "sauce": {"label": "Sauce", "type": "radios", "options": {
                    "tomato": {"label": "Tomato", "price": 0, "default": true}}}}}}}"#,
        )
        .unwrap();
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_problems_are_collected() {
        let catalog = Catalog::from_json(
            r#"{"products": {"pizza": {"name": "Pizza", "price": 20, "params": {
                "crust": {"label": "Crust", "options": {}},
                "sauce": {"label": "Sauce", "type": "select", "options": {
                    "tomato": {"label": "Tomato", "price": 0, "default": true},
                    "cream": {"label": "Cream", "price": -2, "default": true}}}}}}}"#,
        )
        .unwrap();

        let problems = validate_catalog(&catalog);
        assert_eq!(
            problems,
            vec![
                ValidationError::Empty {
                    field: "products.pizza.params.crust.options".to_string()
                },
                ValidationError::TooManyDefaults {
                    field: "products.pizza.params.sauce".to_string(),
                    count: 2
                },
                ValidationError::Negative {
                    field: "products.pizza.params.sauce.options.cream.price".to_string()
                },
            ]
        );
    }
}
