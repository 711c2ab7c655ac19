//! # Quantity Control
//!
//! The amount widget: an integer bounded to `[min, max]` that announces every
//! change.
//!
//! ## Change Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_value("3")                                                         │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  parses?  differs from value?  min <= n <= max?                         │
//! │      │ no to any ──────────────────────────────► value unchanged        │
//! │      ▼ yes to all                                                       │
//! │  1. listeners get QuantityChanged { previous, value: n }                │
//! │     (value() still returns `previous` here)                             │
//! │  2. value = n                                                           │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  input text := value   (always, so rejected text is overwritten)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid input is dropped silently; there is no error channel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{DEFAULT_QUANTITY, DEFAULT_QUANTITY_MAX, DEFAULT_QUANTITY_MIN};

// =============================================================================
// Settings
// =============================================================================

/// Bounds and starting value of a quantity control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitySettings {
    /// Value before the initial input is applied.
    pub default_value: i64,
    /// Lowest accepted value.
    pub min: i64,
    /// Highest accepted value.
    pub max: i64,
}

impl QuantitySettings {
    /// Creates settings, checking `min <= default_value <= max`.
    ///
    /// ```rust
    /// use bistro_core::QuantitySettings;
    ///
    /// assert!(QuantitySettings::new(1, 0, 10).is_ok());
    /// assert!(QuantitySettings::new(11, 0, 10).is_err());
    /// ```
    pub fn new(default_value: i64, min: i64, max: i64) -> Result<Self, ValidationError> {
        let settings = QuantitySettings {
            default_value,
            min,
            max,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the bounds are ordered and the default lies within them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min > self.max {
            return Err(ValidationError::InvertedRange {
                field: "quantity".to_string(),
                min: self.min,
                max: self.max,
            });
        }
        if !self.contains(self.default_value) {
            return Err(ValidationError::OutOfRange {
                field: "quantity.default".to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Whether a value lies within the bounds.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for QuantitySettings {
    /// Starts at 1, accepts 0 through 10.
    fn default() -> Self {
        QuantitySettings {
            default_value: DEFAULT_QUANTITY,
            min: DEFAULT_QUANTITY_MIN,
            max: DEFAULT_QUANTITY_MAX,
        }
    }
}

// =============================================================================
// Change Event
// =============================================================================

/// The "updated" signal, fired once per accepted change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    /// Stored value at the time listeners run.
    pub previous: i64,
    /// Value about to be committed.
    pub value: i64,
}

/// Callback registered with [`QuantityControl::subscribe`].
pub type QuantityListener = Box<dyn FnMut(&QuantityChanged)>;

// =============================================================================
// Control
// =============================================================================

/// A bounded integer with an input text mirror and change listeners.
pub struct QuantityControl {
    settings: QuantitySettings,
    value: i64,
    input: String,
    listeners: Vec<QuantityListener>,
}

impl QuantityControl {
    /// Starts at the configured default, then applies `initial_input` the way
    /// the widget applies the value already sitting in its input field.
    pub fn new(settings: QuantitySettings, initial_input: &str) -> Self {
        let mut control = QuantityControl {
            settings,
            value: settings.default_value,
            input: settings.default_value.to_string(),
            listeners: Vec::new(),
        };
        control.set_value(initial_input);
        control
    }

    /// Committed value.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Text currently shown in the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn settings(&self) -> QuantitySettings {
        self.settings
    }

    /// Registers a listener. Listeners run in registration order.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&QuantityChanged) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Applies text typed into the input field.
    ///
    /// Returns the change that was announced, or `None` when the candidate was
    /// dropped.
    ///
    /// ```rust
    /// use bistro_core::{QuantityControl, QuantitySettings};
    ///
    /// let mut control = QuantityControl::new(QuantitySettings::default(), "1");
    /// assert!(control.set_value("4").is_some());
    /// assert!(control.set_value("lots").is_none());
    /// assert_eq!(control.value(), 4);
    /// assert_eq!(control.input(), "4");
    /// ```
    pub fn set_value(&mut self, candidate: &str) -> Option<QuantityChanged> {
        self.apply(parse_integer(candidate))
    }

    /// Applies a numeric candidate.
    pub fn set_number(&mut self, candidate: i64) -> Option<QuantityChanged> {
        self.apply(Some(candidate))
    }

    /// The "more" link.
    pub fn increase(&mut self) -> Option<QuantityChanged> {
        self.set_number(self.value.saturating_add(1))
    }

    /// The "less" link.
    pub fn decrease(&mut self) -> Option<QuantityChanged> {
        self.set_number(self.value.saturating_sub(1))
    }

    fn apply(&mut self, candidate: Option<i64>) -> Option<QuantityChanged> {
        let change = candidate
            .filter(|&n| n != self.value && self.settings.contains(n))
            .map(|n| QuantityChanged {
                previous: self.value,
                value: n,
            });

        if let Some(event) = change {
            for listener in &mut self.listeners {
                listener(&event);
            }
            self.value = event.value;
        }

        self.input = self.value.to_string();
        change
    }
}

impl fmt::Debug for QuantityControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityControl")
            .field("settings", &self.settings)
            .field("value", &self.value)
            .field("input", &self.input)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Reads a leading integer: skips leading whitespace, takes an optional sign
/// and then as many ASCII digits as follow. Anything after the digits is
/// ignored, so `"2.9"` reads as 2 and `"3 pizzas"` as 3.
fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..digits_end].parse().ok()?;

    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn control() -> QuantityControl {
        QuantityControl::new(QuantitySettings::default(), "1")
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("7"), Some(7));
        assert_eq!(parse_integer("  12"), Some(12));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("+5"), Some(5));
        assert_eq!(parse_integer("2.9"), Some(2));
        assert_eq!(parse_integer("3 pizzas"), Some(3));
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("99999999999999999999999"), None);
    }

    #[test]
    fn test_starts_at_initial_input() {
        let control = QuantityControl::new(QuantitySettings::default(), "3");
        assert_eq!(control.value(), 3);
        assert_eq!(control.input(), "3");

        // A bad initial input leaves the default in place.
        let control = QuantityControl::new(QuantitySettings::default(), "");
        assert_eq!(control.value(), 1);
        assert_eq!(control.input(), "1");
    }

    #[test]
    fn test_non_numeric_input_is_ignored() {
        let mut control = control();
        control.set_value("5");
        assert!(control.set_value("five").is_none());
        assert_eq!(control.value(), 5);
        assert_eq!(control.input(), "5");
    }

    #[test]
    fn test_above_max_is_rejected() {
        let mut control = control();
        control.set_value("10");
        assert!(control.set_value("11").is_none());
        assert!(control.increase().is_none());
        assert_eq!(control.value(), 10);
    }

    #[test]
    fn test_below_min_is_rejected() {
        let mut control = control();
        assert!(control.decrease().is_some());
        assert_eq!(control.value(), 0);
        assert!(control.decrease().is_none());
        assert!(control.set_value("-1").is_none());
        assert_eq!(control.value(), 0);
    }

    #[test]
    fn test_same_value_does_not_announce() {
        let mut control = control();
        assert!(control.set_value("1").is_none());
        assert!(control.set_number(1).is_none());
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut control = control();
        assert_eq!(
            control.increase(),
            Some(QuantityChanged {
                previous: 1,
                value: 2
            })
        );
        control.increase();
        control.decrease();
        assert_eq!(control.value(), 2);
    }

    #[test]
    fn test_listeners_run_before_commit_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut control = control();

        let first = Rc::clone(&seen);
        control.subscribe(move |event| first.borrow_mut().push(("first", *event)));
        let second = Rc::clone(&seen);
        control.subscribe(move |event| second.borrow_mut().push(("second", *event)));

        control.set_value("4");
        control.set_value("nope");

        let event = QuantityChanged {
            previous: 1,
            value: 4,
        };
        assert_eq!(*seen.borrow(), vec![("first", event), ("second", event)]);
        assert_eq!(control.value(), 4);
    }

    #[test]
    fn test_custom_bounds() {
        let settings = QuantitySettings::new(2, 1, 3).unwrap();
        let mut control = QuantityControl::new(settings, "");
        assert_eq!(control.value(), 2);
        assert!(control.set_value("0").is_none());
        assert!(control.set_value("3").is_some());
        assert!(control.increase().is_none());
    }

    #[test]
    fn test_settings_validation() {
        assert!(QuantitySettings::default().validate().is_ok());
        let err = QuantitySettings::new(1, 5, 2).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvertedRange {
                field: "quantity".to_string(),
                min: 5,
                max: 2,
            }
        );
        assert_eq!(err.to_string(), "quantity: min 5 is greater than max 2");
        assert!(matches!(
            QuantitySettings::new(0, 1, 5),
            Err(ValidationError::OutOfRange { field, .. }) if field == "quantity.default"
        ));
    }
}
