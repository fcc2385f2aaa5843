//! # Interactive Shell
//!
//! Reads one command per line, dispatches it against the owned
//! `ShopStore`, and writes the result.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read line ──► split words ──► clap (ShellLine) ──► dispatch()          │
//! │      ▲                              │                    │              │
//! │      │                         parse error          CommandResult       │
//! │      │                              │                    │              │
//! │      └──────────── write output ◄───┴────────────────────┘              │
//! │                                                                         │
//! │  `quit`/`exit` or end of input stops the loop                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use brew_core::{CategoryFilter, OrderStatus, OrderType, ShopStore};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::commands::{self, cart::AddArgs, CommandResult};
use crate::config::ShopConfig;

/// One line typed at the `brew>` prompt.
#[derive(Debug, Parser)]
#[command(name = "brew", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// List drinks (all, smoothies, coffee-based, tea)
    Menu {
        #[arg(default_value = "coffee-based")]
        category: CategoryFilter,
    },
    /// Show a drink and its options
    Show { item_id: String },
    /// Add a drink to the cart
    Add(AddArgs),
    /// Show the cart
    Cart {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the quantity of a cart line (0 removes it)
    Qty {
        line: usize,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Attach an order note to a cart line (no text clears it)
    Note {
        line: usize,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Remove a cart line
    Remove { line: usize },
    /// Empty the cart
    Clear,
    /// Toggle a drink as favorite
    Fav { item_id: String },
    /// List favorite drinks
    Favs,
    /// Apply a voucher code
    Voucher { code: String },
    /// Remove the applied voucher
    Unvoucher,
    /// List shop locations
    Stores,
    /// Select a shop location
    Store { store_id: String },
    /// Place the cart as an order
    Checkout {
        /// Take away instead of sitting in
        #[arg(long)]
        to_go: bool,
    },
    /// List orders (active, completed, cancelled)
    Orders {
        #[arg(default_value = "active")]
        status: OrderStatus,
    },
    /// Show the customer profile
    Profile,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one parsed command against the store.
pub fn dispatch(store: &mut ShopStore, config: &ShopConfig, command: ShellCommand) -> (Flow, CommandResult) {
    let result = match command {
        ShellCommand::Menu { category } => commands::catalog::menu(store, config, category),
        ShellCommand::Show { item_id } => commands::catalog::show(store, config, &item_id),
        ShellCommand::Add(args) => commands::cart::add_to_cart(store, config, &args),
        ShellCommand::Cart { json: false } => commands::cart::show_cart(store, config),
        ShellCommand::Cart { json: true } => commands::cart::show_cart_json(store),
        ShellCommand::Qty { line, quantity } => commands::cart::update_quantity(store, config, line, quantity),
        ShellCommand::Note { line, text } => commands::cart::set_note(store, line, &text.join(" ")),
        ShellCommand::Remove { line } => commands::cart::remove_from_cart(store, line),
        ShellCommand::Clear => commands::cart::clear_cart(store),
        ShellCommand::Fav { item_id } => commands::catalog::toggle_favorite(store, &item_id),
        ShellCommand::Favs => commands::catalog::favorites(store, config),
        ShellCommand::Voucher { code } => commands::cart::apply_voucher(store, config, &code),
        ShellCommand::Unvoucher => commands::cart::remove_voucher(store),
        ShellCommand::Stores => commands::order::list_stores(store),
        ShellCommand::Store { store_id } => commands::order::select_store(store, &store_id),
        ShellCommand::Checkout { to_go } => {
            let order_type = if to_go { OrderType::ToGo } else { OrderType::SitIn };
            commands::order::checkout(store, config, order_type)
        }
        ShellCommand::Orders { status } => commands::order::list_orders(store, config, status),
        ShellCommand::Profile => commands::catalog::profile(store),
        ShellCommand::Quit => return (Flow::Quit, Ok("Bye\n".to_string())),
    };
    (Flow::Continue, result)
}

/// The interactive session: one store, one configuration.
pub struct Shell {
    store: ShopStore,
    config: ShopConfig,
    prompt: bool,
}

impl Shell {
    pub fn new(store: ShopStore, config: ShopConfig) -> Self {
        Shell {
            store,
            config,
            prompt: true,
        }
    }

    /// Turns the `brew> ` prompt off (scripted input).
    pub fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    pub fn store(&self) -> &ShopStore {
        &self.store
    }

    /// Handles one raw input line, writing its output.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let parsed = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(err) => {
                // Help output also arrives here
                write!(out, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };
        debug!(command = ?parsed.command, "shell line parsed");

        let (flow, result) = dispatch(&mut self.store, &self.config, parsed.command);
        match result {
            Ok(text) => write!(out, "{}", text)?,
            Err(err) => {
                warn!(code = err.code.as_str(), message = %err.message, "command failed");
                writeln!(out, "{}", err)?;
            }
        }
        Ok(flow)
    }

    /// Reads lines until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.print_prompt(out)?;
        for line in input.lines() {
            if self.handle_line(&line?, out)? == Flow::Quit {
                return Ok(());
            }
            self.print_prompt(out)?;
        }
        if self.prompt {
            writeln!(out)?;
        }
        Ok(())
    }

    fn print_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.prompt {
            write!(out, "brew> ")?;
            out.flush()?;
        }
        Ok(())
    }
}
