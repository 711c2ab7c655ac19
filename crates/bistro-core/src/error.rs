//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Domain / programming errors                    │
//! │  └── ValidationError  - Catalog and settings rule violations           │
//! │                                                                         │
//! │  app errors (apps/ordering)                                            │
//! │  └── AppError         - What the driver reports                        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid quantity input is NOT an error: the quantity control ignores it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core ordering errors.
///
/// Most of these are programming errors in the data source or the wiring;
/// they abort the current event handler and leave state untouched.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id in the catalog or the app.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The selection has no entry for a param of the product.
    ///
    /// ## When This Occurs
    /// - A selection built for a different product is priced
    /// - The param was added to the catalog after the selection was built
    #[error("Selection has no entry for param {param_id}")]
    MissingSelection { param_id: String },

    /// The product has no param with this id.
    #[error("Product {product_id} has no param {param_id}")]
    UnknownParam {
        product_id: String,
        param_id: String,
    },

    /// The param has no option with this id.
    #[error("Param {param_id} has no option {option_id}")]
    UnknownOption { param_id: String, option_id: String },

    /// A price term does not fit in [`crate::money::Money`].
    ///
    /// ## When This Occurs
    /// - The catalog carries an absurdly large base or option price
    #[error("Price out of range")]
    PriceOverflow,

    /// Cart has exceeded maximum allowed products.
    #[error("Cart cannot have more than {max} products")]
    CartTooLarge { max: usize },

    /// The catalog text could not be parsed.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rule violations found when checking a catalog or quantity settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Lower bound is above the upper bound.
    #[error("{field}: min {min} is greater than max {max}")]
    InvertedRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// A collection that must have entries is empty.
    #[error("{field} must have at least one entry")]
    Empty { field: String },

    /// More than one default in a single-choice param.
    #[error("{field} allows one choice but has {count} defaults")]
    TooManyDefaults { field: String, count: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::MissingSelection {
            param_id: "toppings".to_string(),
        };
        assert_eq!(err.to_string(), "Selection has no entry for param toppings");

        let err = CoreError::ProductNotFound("cake".to_string());
        assert_eq!(err.to_string(), "Product not found: cake");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Negative {
            field: "products.pizza.price".to_string(),
        };
        assert_eq!(err.to_string(), "products.pizza.price must not be negative");

        let err = ValidationError::OutOfRange {
            field: "quantity.default".to_string(),
            min: 0,
            max: 10,
        };
        assert_eq!(err.to_string(), "quantity.default must be between 0 and 10");

        let err = ValidationError::InvertedRange {
            field: "quantity".to_string(),
            min: 5,
            max: 2,
        };
        assert_eq!(err.to_string(), "quantity: min 5 is greater than max 2");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidCatalog(_)));
    }
}
