//! # Menu
//!
//! Accordion state of the product list: at most one product is expanded
//! (being configured) at a time.
//!
//! ```text
//!          toggle(p)                 toggle(p)
//!   Idle ────────────► Configuring ────────────► Idle
//!                          │
//!                          │ toggle(q), q != p
//!                          ▼
//!            p: Idle, q: Configuring
//! ```

use serde::{Deserialize, Serialize};

/// Whether a product's order form is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfiguratorState {
    Idle,
    Configuring,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    active: Option<String>,
}

impl Menu {
    pub fn new() -> Self {
        Menu::default()
    }

    /// A product header was clicked. Returns the product's new state.
    pub fn toggle(&mut self, product_id: &str) -> ConfiguratorState {
        if self.active.as_deref() == Some(product_id) {
            self.active = None;
            ConfiguratorState::Idle
        } else {
            self.active = Some(product_id.to_string());
            ConfiguratorState::Configuring
        }
    }

    /// Product currently expanded, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn state_of(&self, product_id: &str) -> ConfiguratorState {
        if self.active.as_deref() == Some(product_id) {
            ConfiguratorState::Configuring
        } else {
            ConfiguratorState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_open_and_close() {
        let mut menu = Menu::new();
        assert_eq!(menu.toggle("pizza"), ConfiguratorState::Configuring);
        assert_eq!(menu.active(), Some("pizza"));
        assert_eq!(menu.toggle("pizza"), ConfiguratorState::Idle);
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn test_only_one_product_active() {
        let mut menu = Menu::new();
        menu.toggle("pizza");
        menu.toggle("salad");
        assert_eq!(menu.state_of("pizza"), ConfiguratorState::Idle);
        assert_eq!(menu.state_of("salad"), ConfiguratorState::Configuring);
    }
}
