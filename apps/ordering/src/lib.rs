//! # Bistro Ordering Library
//!
//! Application layer for the menu ordering widget: configuration, logging,
//! event routing and a line-oriented terminal driver standing in for the
//! browser front end.
//!
//! ## Module Organization
//! ```text
//! bistro_ordering_lib/
//! ├── lib.rs      ◄─── You are here (logging setup, run loop)
//! ├── app.rs      ◄─── App: configurators + menu + cart, dispatch
//! ├── events.rs   ◄─── AppEvent, driver commands
//! ├── config.rs   ◄─── AppConfig from BISTRO_* variables
//! └── error.rs    ◄─── AppError / ErrorCode
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod events;

use std::io::{BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use app::{App, Update};
pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorCode, ErrorReport};
pub use events::{parse_command, AppEvent, Command};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,bistro_ordering_lib=debug";

/// Runs the ordering app against stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, so stdout stays clean)
/// 2. Read configuration from the environment
/// 3. Load the catalog and build the app
/// 4. Process commands until `quit` or end of input
pub fn run() -> AppResult<()> {
    init_tracing();

    info!("Starting Bistro ordering");

    let config = AppConfig::from_env();
    let mut app = App::from_config(config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut app, stdin.lock(), stdout.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for this crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads commands line by line and writes what changed.
///
/// Command errors are printed and the session continues; only I/O failures
/// end it early.
pub fn run_session<R, W>(app: &mut App, input: R, mut output: W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                report(&mut output, &err)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", events::HELP)?,
            Command::List => {
                for configurator in app.configurators() {
                    let product = configurator.product();
                    writeln!(
                        output,
                        "{:<12} {:<28} x{:<3} {}",
                        product.id,
                        product.name,
                        configurator.quantity(),
                        configurator.price()
                    )?;
                }
            }
            Command::ShowCart => {
                let json = serde_json::to_string_pretty(app.cart())
                    .map_err(bistro_core::CoreError::from)?;
                writeln!(output, "{json}")?;
            }
            Command::Event(event) => match app.dispatch(event) {
                Ok(Update::Price { product_id, price }) => {
                    writeln!(output, "{product_id}: {price}")?
                }
                Ok(Update::Product { product_id, state }) => {
                    writeln!(output, "{product_id}: {state:?}")?
                }
                Ok(Update::Cart { open }) => {
                    writeln!(output, "cart: {}", if open { "open" } else { "closed" })?
                }
                Err(err) => report(&mut output, &err)?,
            },
        }
    }

    output.flush()?;
    Ok(())
}

fn report<W: Write>(output: &mut W, err: &AppError) -> AppResult<()> {
    let report = err.report();
    warn!(code = ?report.code, message = %report.message, "Command failed");
    writeln!(output, "error: {}", report.message)?;
    Ok(())
}
