//! # Brew CLI Library
//!
//! Core library for the `brew` storefront shell.
//! This is the main entry point that builds the store and runs the shell.
//!
//! ## Module Organization
//! ```text
//! brew_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── ShopConfig from BREW_* variables
//! ├── shell.rs        ◄─── Line parser and read loop
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Menu, details, favorites, profile
//! │   ├── cart.rs     ◄─── Cart and voucher commands
//! │   └── order.rs    ◄─── Stores, checkout, orders
//! └── error.rs        ◄─── Error type shown for failed commands
//! ```
//!
//! ## State
//! One `ShopStore` is owned by the shell for the whole session. Commands
//! borrow it (`&` to read, `&mut` to change), so there is no shared state
//! and no locking.

pub mod commands;
pub mod config;
pub mod error;
pub mod shell;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use brew_core::{Catalog, OrderBook, ShopStore, Store};
use config::ShopConfig;
use error::CliError;
use shell::Shell;

/// Commands run by `brew demo`.
pub const DEMO_SCRIPT: &str = "\
menu all
show 1
add 1 --size large --temp hot --topping cinnamon --topping chocolate -q 2
add 4
add 1 --size large --temp hot --topping chocolate --topping cinnamon
fav 1
note 1 extra hot please
cart
voucher COFFEE10
cart
qty 2 3
stores
store 2
checkout
orders active
profile
";

/// Builds the session store from configuration.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Demo catalogue, demo shop locations                                 │
/// │  2. Customer from BREW_CUSTOMER_NAME / BREW_CUSTOMER_POINTS             │
/// │  3. Demo order history                                                  │
/// │  4. BREW_STORE_ID selects the shop location (if set)                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn build_store(config: &ShopConfig) -> Result<ShopStore, CliError> {
    let mut store = ShopStore::new(Catalog::demo(), Store::demo_stores(), config.customer())
        .with_orders(OrderBook::demo());

    if let Some(store_id) = &config.store_id {
        let selected = store.select_store(store_id)?;
        info!(store_id = %selected.id, name = %selected.name, "store selected from config");
    }

    info!(
        items = store.catalog().len(),
        stores = store.stores().len(),
        orders = store.orders().len(),
        "store initialized"
    );
    Ok(store)
}

/// Runs the interactive shell on stdin/stdout.
pub fn run_shell() -> Result<(), CliError> {
    let mut shell = start()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Welcome to Brew. Type `help` for commands, `quit` to leave.")?;
    shell.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Runs the scripted demo session, echoing each command.
pub fn run_demo() -> Result<(), CliError> {
    let mut shell = start()?;
    let mut stdout = io::stdout();
    run_script(&mut shell, DEMO_SCRIPT.as_bytes(), &mut stdout)?;
    Ok(())
}

/// Echoes every line before handling it.
pub fn run_script<R: BufRead, W: Write>(shell: &mut Shell, input: R, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        writeln!(out, "brew> {}", line)?;
        if shell.handle_line(&line, out)? == shell::Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn start() -> Result<Shell, CliError> {
    init_tracing();
    info!("Starting Brew storefront shell");

    let config = ShopConfig::from_env().map_err(|err| {
        warn!(error = %err, "invalid configuration");
        CliError::from(err)
    })?;
    let store = build_store(&config)?;
    Ok(Shell::new(store, config))
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with shell output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=brew_cli=info` - Show cart and order events
/// - Default: WARN
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_store_defaults() {
        let store = build_store(&ShopConfig::default()).unwrap();
        assert_eq!(store.catalog().len(), 6);
        assert_eq!(store.selected_store().id, "1");
        assert_eq!(store.orders().len(), 9);
        assert_eq!(store.customer().name, "John Doe");
    }

    #[test]
    fn test_build_store_from_config() {
        let config = ShopConfig {
            customer_name: "Rina".to_string(),
            customer_points: 40,
            store_id: Some("3".to_string()),
            ..ShopConfig::default()
        };
        let store = build_store(&config).unwrap();
        assert_eq!(store.customer().name, "Rina");
        assert_eq!(store.customer().points, 40);
        assert_eq!(store.selected_store().id, "3");
    }

    #[test]
    fn test_build_store_unknown_store_id() {
        let config = ShopConfig {
            store_id: Some("12".to_string()),
            ..ShopConfig::default()
        };
        let err = build_store(&config).unwrap_err();
        assert_eq!(err.code, error::ErrorCode::NotFound);
    }

    #[test]
    fn test_demo_script_runs() {
        let config = ShopConfig::default();
        let mut shell = Shell::new(build_store(&config).unwrap(), config);
        let mut out = Vec::new();
        run_script(&mut shell, DEMO_SCRIPT.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("brew> add 4"));
        assert!(out.contains("Voucher \"COFFEE10\" applied successfully!"));
        assert!(out.contains("Ordering from CIPLAZ Bandung, Dago"));
        assert!(out.contains("Order placed: Ice Caffe Latte +1 more (Sit In)"));
        assert!(!out.contains("error["));
        assert!(shell.store().cart().is_empty());
    }
}
