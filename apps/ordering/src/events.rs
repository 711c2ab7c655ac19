//! # Events and Driver Commands
//!
//! [`AppEvent`] is what the front end reports: one variant per interactive
//! element. [`Command`] adds the terminal driver's own verbs on top.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A user interaction routed by [`crate::App::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// Product header clicked (accordion).
    ToggleProduct { product_id: String },
    /// Option checkbox / radio / select changed.
    OptionChanged {
        product_id: String,
        param_id: String,
        option_id: String,
        selected: bool,
    },
    /// Amount input changed.
    QuantityInput { product_id: String, text: String },
    /// "More" link clicked.
    Increase { product_id: String },
    /// "Less" link clicked.
    Decrease { product_id: String },
    /// Order form submitted.
    Submit { product_id: String },
    /// Add-to-cart button clicked.
    AddToCart { product_id: String },
    /// Cart header clicked.
    ToggleCart,
}

/// One line of driver input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(AppEvent),
    /// Print every product with its current price.
    List,
    /// Print the cart as JSON.
    ShowCart,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                          products and current prices
  open <product>                expand / collapse a product
  pick <product> <param> <opt>  select an option
  drop <product> <param> <opt>  deselect an option
  qty <product> <text>          type into the amount input
  more <product> | less <product>
  submit <product> | add <product>
  cart                          toggle the cart panel
  show                          print the cart
  help | quit";

/// Parses one driver line. Blank lines are `None`.
pub fn parse_command(line: &str) -> AppResult<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (verb, args) {
        ("list", []) => Command::List,
        ("show", []) => Command::ShowCart,
        ("help", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        ("cart", []) => Command::Event(AppEvent::ToggleCart),
        ("open", [p]) => Command::Event(AppEvent::ToggleProduct {
            product_id: p.to_string(),
        }),
        ("pick" | "drop", [p, param, option]) => Command::Event(AppEvent::OptionChanged {
            product_id: p.to_string(),
            param_id: param.to_string(),
            option_id: option.to_string(),
            selected: verb == "pick",
        }),
        // The amount input takes the rest of the line verbatim.
        ("qty", [p, rest @ ..]) => Command::Event(AppEvent::QuantityInput {
            product_id: p.to_string(),
            text: rest.join(" "),
        }),
        ("more", [p]) => Command::Event(AppEvent::Increase {
            product_id: p.to_string(),
        }),
        ("less", [p]) => Command::Event(AppEvent::Decrease {
            product_id: p.to_string(),
        }),
        ("submit", [p]) => Command::Event(AppEvent::Submit {
            product_id: p.to_string(),
        }),
        ("add", [p]) => Command::Event(AppEvent::AddToCart {
            product_id: p.to_string(),
        }),
        _ => return Err(AppError::UnknownCommand(line.trim().to_string())),
    };

    Ok(Some(command))
}
