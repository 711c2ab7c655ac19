//! # Pricing
//!
//! The price invariant as a pure function.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price = ( base                                                         │
//! │          + Σ price of options picked that are NOT default               │
//! │          − Σ price of default options that were deselected )            │
//! │          × quantity                                                     │
//! │                                                                         │
//! │  A default option's price is already inside `base`, so keeping it       │
//! │  costs nothing and dropping it refunds it.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No side effects: the configurator decides where the result is shown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Param;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::selection::Selection;

/// Every intermediate term of one price computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Base price of the product.
    pub base: Money,
    /// Sum of non-default options that are selected.
    pub additions: Money,
    /// Sum of default options that are not selected.
    pub deductions: Money,
    /// `base + additions - deductions`.
    pub unit: Money,
    /// Quantity the unit price was multiplied by.
    pub quantity: i64,
    /// `unit * quantity`.
    pub total: Money,
}

/// Computes every term of the price for a selection and quantity.
///
/// ## Errors
/// [`CoreError::MissingSelection`] when `selection` has no entry for one of
/// `params`. [`CoreError::PriceOverflow`] when a term does not fit in
/// [`Money`]. Options chosen in the selection that the params don't know are
/// ignored.
pub fn price_breakdown(
    base_price: Money,
    params: &BTreeMap<String, Param>,
    selection: &Selection,
    quantity: i64,
) -> CoreResult<PriceBreakdown> {
    let mut additions = Money::zero();
    let mut deductions = Money::zero();

    for (param_id, param) in params {
        if !selection.has_param(param_id) {
            return Err(CoreError::MissingSelection {
                param_id: param_id.clone(),
            });
        }

        for (option_id, option) in &param.options {
            let selected = selection.contains(param_id, option_id) == Some(true);
            let term = match (option.is_default, selected) {
                (false, true) => &mut additions,
                (true, false) => &mut deductions,
                _ => continue,
            };
            *term = term
                .checked_add(option.price)
                .ok_or(CoreError::PriceOverflow)?;
        }
    }

    let unit = base_price
        .checked_add(additions)
        .and_then(|price| price.checked_sub(deductions))
        .ok_or(CoreError::PriceOverflow)?;
    let total = unit
        .checked_multiply_quantity(quantity)
        .ok_or(CoreError::PriceOverflow)?;

    Ok(PriceBreakdown {
        base: base_price,
        additions,
        deductions,
        unit,
        quantity,
        total,
    })
}

/// Computes the total price for a selection and quantity.
///
/// ```rust
/// use bistro_core::{compute_price, Catalog, Money, Selection};
///
/// let catalog = Catalog::from_json(r#"{"products": {"salad": {"name": "Salad", "price": 20,
///     "params": {"extras": {"label": "Extras", "options": {
///         "feta": {"label": "Feta", "price": 5}}}}}}}"#).unwrap();
/// let salad = catalog.product("salad").unwrap();
///
/// let picked = Selection::new().with("extras", ["feta"]);
/// assert_eq!(compute_price(salad.price, &salad.params, &picked, 2).unwrap(), Money::from_cents(50));
///
/// let none = Selection::new().with("extras", Vec::<String>::new());
/// assert_eq!(compute_price(salad.price, &salad.params, &none, 2).unwrap(), Money::from_cents(40));
/// ```
pub fn compute_price(
    base_price: Money,
    params: &BTreeMap<String, Param>,
    selection: &Selection,
    quantity: i64,
) -> CoreResult<Money> {
    price_breakdown(base_price, params, selection, quantity).map(|breakdown| breakdown.total)
}

// =============================================================================
// Unit Tests
// =============================================================================
