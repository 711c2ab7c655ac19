//! # Bistro Ordering Entry Point
//!
//! Reads one command per line from stdin; `help` lists them.
//!
//! ```bash
//! # Demo menu
//! cargo run -p bistro-ordering
//!
//! # Custom catalog and amount bounds
//! BISTRO_DATA_PATH=./menu.json BISTRO_AMOUNT_MAX=20 cargo run -p bistro-ordering
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match bistro_ordering_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bistro-ordering: {err}");
            ExitCode::FAILURE
        }
    }
}
