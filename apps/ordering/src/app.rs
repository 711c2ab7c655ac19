//! # Application
//!
//! Wires a catalog into one configurator per product, the menu accordion and
//! one cart, then routes user events to them.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Validate catalog ──────── problems logged as warnings              │
//! │  2. Build configurators ───── catalog order; each computes its price  │
//! │  3. Menu (nothing open) + Cart (closed, empty)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every event runs to completion before the next one; a failing handler
//! returns its error and leaves the other components untouched.

use bistro_core::validation::validate_catalog;
use bistro_core::{
    Cart, Catalog, ConfiguratorState, CoreError, Menu, Money, ProductConfigurator,
};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::events::AppEvent;

/// Which surface an event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// A product's price element.
    Price { product_id: String, price: Money },
    /// A product's accordion state.
    Product {
        product_id: String,
        state: ConfiguratorState,
    },
    /// The cart panel's visibility.
    Cart { open: bool },
}

/// The running ordering widget.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    configurators: Vec<ProductConfigurator>,
    menu: Menu,
    cart: Cart,
}

impl App {
    /// Loads the configured catalog and builds the app.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let catalog = config.load_catalog()?;
        App::new(config, &catalog)
    }

    /// Builds the app over an already loaded catalog.
    pub fn new(config: AppConfig, catalog: &Catalog) -> AppResult<Self> {
        for problem in validate_catalog(catalog) {
            warn!(%problem, "Catalog problem");
        }

        let configurators = catalog
            .products()
            .map(|product| -> AppResult<ProductConfigurator> {
                let configurator = ProductConfigurator::new(product, config.quantity)?;
                debug!(product_id = %product.id, price = %configurator.price(), "Product rendered");
                Ok(configurator)
            })
            .collect::<AppResult<Vec<_>>>()?;

        info!(products = configurators.len(), "Menu initialized");

        Ok(App {
            config,
            configurators,
            menu: Menu::new(),
            cart: Cart::new(),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Configurators in menu order.
    pub fn configurators(&self) -> &[ProductConfigurator] {
        &self.configurators
    }

    pub fn configurator(&self, product_id: &str) -> AppResult<&ProductConfigurator> {
        self.configurators
            .iter()
            .find(|c| c.id() == product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()).into())
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Routes one user event.
    pub fn dispatch(&mut self, event: AppEvent) -> AppResult<Update> {
        debug!(?event, "Dispatching");

        let (product_id, price) = match event {
            AppEvent::ToggleCart => {
                let open = self.cart.toggle();
                info!(open, "Cart toggled");
                return Ok(Update::Cart { open });
            }
            AppEvent::ToggleProduct { product_id } => {
                // Unknown products must not become active.
                self.configurator(&product_id)?;
                let state = self.menu.toggle(&product_id);
                debug!(%product_id, ?state, "Product toggled");
                return Ok(Update::Product { product_id, state });
            }
            AppEvent::OptionChanged {
                product_id,
                param_id,
                option_id,
                selected,
            } => {
                let price = self
                    .configurator_mut(&product_id)?
                    .set_option(&param_id, &option_id, selected)?;
                (product_id, price)
            }
            AppEvent::QuantityInput { product_id, text } => {
                let price = self.configurator_mut(&product_id)?.set_quantity(&text)?;
                (product_id, price)
            }
            AppEvent::Increase { product_id } => {
                let price = self.configurator_mut(&product_id)?.increase()?;
                (product_id, price)
            }
            AppEvent::Decrease { product_id } => {
                let price = self.configurator_mut(&product_id)?.decrease()?;
                (product_id, price)
            }
            AppEvent::Submit { product_id } => {
                let price = self.configurator_mut(&product_id)?.submit()?;
                (product_id, price)
            }
            AppEvent::AddToCart { product_id } => {
                // The cart does not take products from the menu yet.
                let price = self.configurator_mut(&product_id)?.add_to_cart()?;
                (product_id, price)
            }
        };

        info!(%product_id, %price, "Price updated");
        Ok(Update::Price { product_id, price })
    }

    fn configurator_mut(&mut self, product_id: &str) -> AppResult<&mut ProductConfigurator> {
        self.configurators
            .iter_mut()
            .find(|c| c.id() == product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()).into())
    }
}
