//! # Selection
//!
//! The option ids currently chosen for each param of one product.
//!
//! A selection mirrors the product form: it has one entry per param (possibly
//! empty) and is rebuilt or edited whenever an option input changes. Nothing
//! about it is persisted.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{ParamKind, Product};

/// Chosen option ids keyed by param id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection(BTreeMap<String, BTreeSet<String>>);

impl Selection {
    /// An empty selection with no param entries at all.
    pub fn new() -> Self {
        Selection::default()
    }

    /// The form's initial state: every param present, default options chosen.
    ///
    /// ```rust
    /// use bistro_core::{Catalog, Selection};
    ///
    /// let catalog = Catalog::from_json(r#"{"products": {"tea": {"name": "Tea", "price": 3,
    ///     "params": {"milk": {"label": "Milk", "options": {
    ///         "yes": {"label": "Yes", "price": 1, "default": true}}}}}}}"#).unwrap();
    /// let selection = Selection::defaults(catalog.product("tea").unwrap());
    /// assert_eq!(selection.contains("milk", "yes"), Some(true));
    /// ```
    pub fn defaults(product: &Product) -> Self {
        let entries = product
            .params
            .iter()
            .map(|(param_id, param)| {
                let chosen = param.default_option_ids().map(str::to_string).collect();
                (param_id.clone(), chosen)
            })
            .collect();
        Selection(entries)
    }

    /// Replaces the whole entry for a param.
    pub fn with<I, S>(mut self, param_id: &str, option_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(
            param_id.to_string(),
            option_ids.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Whether an option is chosen; `None` when the param has no entry.
    pub fn contains(&self, param_id: &str, option_id: &str) -> Option<bool> {
        self.0.get(param_id).map(|chosen| chosen.contains(option_id))
    }

    /// Whether the selection has an entry for the param.
    pub fn has_param(&self, param_id: &str) -> bool {
        self.0.contains_key(param_id)
    }

    /// Chosen option ids for a param.
    pub fn chosen(&self, param_id: &str) -> impl Iterator<Item = &str> {
        self.0
            .get(param_id)
            .into_iter()
            .flat_map(|chosen| chosen.iter().map(String::as_str))
    }

    /// Applies one option input change and reports whether anything moved.
    ///
    /// Single-choice kinds replace the param's previous choice when an option
    /// is picked; checkboxes add or remove independently.
    pub fn set(&mut self, kind: ParamKind, param_id: &str, option_id: &str, selected: bool) -> bool {
        let chosen = self.0.entry(param_id.to_string()).or_default();
        if selected {
            if kind.is_single_choice() {
                if chosen.len() == 1 && chosen.contains(option_id) {
                    return false;
                }
                chosen.clear();
            }
            chosen.insert(option_id.to_string())
        } else {
            chosen.remove(option_id)
        }
    }

    /// Iterates `(param_id, option_id)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(param_id, chosen)| {
            chosen
                .iter()
                .map(move |option_id| (param_id.as_str(), option_id.as_str()))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn pizza() -> Product {
        Catalog::from_json(
            r#"{"products": {"pizza": {"name": "Pizza", "price": 20, "params": {
                "sauce": {"label": "Sauce", "type": "select", "options": {
                    "tomato": {"label": "Tomato", "price": 0, "default": true},
                    "cream": {"label": "Cream", "price": 2}}},
                "toppings": {"label": "Toppings", "options": {
                    "olives": {"label": "Olives", "price": 2, "default": true},
                    "salami": {"label": "Salami", "price": 3}}}}}}}"#,
        )
        .unwrap()
        .product("pizza")
        .unwrap()
        .clone()
    }

    #[test]
    fn test_defaults_cover_every_param() {
        let selection = Selection::defaults(&pizza());
        assert!(selection.has_param("sauce"));
        assert!(selection.has_param("toppings"));
        assert_eq!(selection.contains("sauce", "tomato"), Some(true));
        assert_eq!(selection.contains("toppings", "salami"), Some(false));
        assert_eq!(selection.contains("size", "large"), None);
    }

    #[test]
    fn test_single_choice_replaces() {
        let mut selection = Selection::defaults(&pizza());
        assert!(selection.set(ParamKind::Select, "sauce", "cream", true));
        assert_eq!(selection.chosen("sauce").collect::<Vec<_>>(), vec!["cream"]);

        // Picking the current choice again changes nothing.
        assert!(!selection.set(ParamKind::Select, "sauce", "cream", true));
    }

    #[test]
    fn test_checkboxes_add_and_remove() {
        let mut selection = Selection::defaults(&pizza());
        assert!(selection.set(ParamKind::Checkboxes, "toppings", "salami", true));
        assert!(selection.set(ParamKind::Checkboxes, "toppings", "olives", false));
        assert!(!selection.set(ParamKind::Checkboxes, "toppings", "olives", false));
        assert_eq!(selection.chosen("toppings").collect::<Vec<_>>(), vec!["salami"]);
    }

    #[test]
    fn test_deselecting_everything_keeps_the_entry() {
        let mut selection = Selection::defaults(&pizza());
        selection.set(ParamKind::Checkboxes, "toppings", "olives", false);
        assert!(selection.has_param("toppings"));
        assert_eq!(selection.chosen("toppings").count(), 0);
    }

    #[test]
    fn test_with_and_iter() {
        let selection = Selection::new()
            .with("toppings", ["salami", "olives"])
            .with("sauce", ["tomato"]);
        let pairs: Vec<_> = selection.iter().collect();
        assert_eq!(
            pairs,
            vec![("sauce", "tomato"), ("toppings", "olives"), ("toppings", "salami")]
        );
    }
}
