//! # Console Display
//!
//! A line-oriented stand-in for the storefront pages: one input line is one
//! user action, and the cart is re-rendered after every change.
//!
//! ```text
//! > add 1
//! Cart (1 items)
//!   [1] Monstera                 $15.00 x 1
//!   Total: $15.00
//! ```

use std::fmt::Write as _;

use crate::commands::cart::{self, CartResponse};
use crate::commands::product::{self, ProductDto};
use crate::error::ApiError;
use crate::state::AppContext;

pub const HELP: &str = "\
commands:
  list        show the catalog
  add <id>    add a product to the cart
  inc <id>    one more unit of a cart line
  dec <id>    one less unit (never below 1)
  rm <id>     remove a cart line
  cart        show the cart
  reset       empty the cart
  help        this text
  quit        end the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Add(String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Cart,
    Reset,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parses an input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ApiError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        if words.next().is_some() {
            return Err(ApiError::validation(format!("Too many arguments for '{}'", verb)));
        }

        let with_id = |make: fn(String) -> ConsoleCommand| {
            arg.map(|id| make(id.to_string()))
                .ok_or_else(|| ApiError::validation(format!("'{}' needs a product id", verb)))
        };

        let command = match verb.to_lowercase().as_str() {
            "list" | "ls" => ConsoleCommand::List,
            "add" => with_id(ConsoleCommand::Add)?,
            "inc" | "+" => with_id(ConsoleCommand::Increment)?,
            "dec" | "-" => with_id(ConsoleCommand::Decrement)?,
            "rm" | "remove" => with_id(ConsoleCommand::Remove)?,
            "cart" => ConsoleCommand::Cart,
            "reset" | "clear" => ConsoleCommand::Reset,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            other => {
                return Err(ApiError::validation(format!("Unknown command '{}'", other)));
            }
        };

        Ok(Some(command))
    }
}

/// Runs a command and renders its output.
pub async fn execute(ctx: &AppContext, command: &ConsoleCommand) -> Result<String, ApiError> {
    let cart = match command {
        ConsoleCommand::List => return Ok(render_catalog(&product::list_products(ctx))),
        ConsoleCommand::Help => return Ok(HELP.to_string()),
        ConsoleCommand::Quit => return Ok(String::new()),
        ConsoleCommand::Cart => cart::get_cart(ctx),
        ConsoleCommand::Add(id) => cart::add_to_cart(ctx, id).await?,
        ConsoleCommand::Increment(id) => cart::increment_item(ctx, id).await?,
        ConsoleCommand::Decrement(id) => cart::decrement_item(ctx, id).await?,
        ConsoleCommand::Remove(id) => cart::remove_item(ctx, id).await?,
        ConsoleCommand::Reset => cart::clear_cart(ctx).await?,
    };

    Ok(render_cart(&cart))
}

pub fn render_catalog(products: &[ProductDto]) -> String {
    let mut out = String::from("Catalog");
    for p in products {
        let _ = write!(out, "\n  [{}] {:<24} {:>10}", p.id, p.name, p.price_display);
    }
    out
}

pub fn render_cart(cart: &CartResponse) -> String {
    let mut out = format!("Cart ({} items)", cart.totals.total_items);

    if cart.items.is_empty() {
        out.push_str("\n  (empty)");
    }

    for item in &cart.items {
        let _ = write!(
            out,
            "\n  [{}] {:<24} {:>10} x {}",
            item.id, item.name, item.price, item.quantity
        );
    }

    let _ = write!(out, "\n  Total: {}", cart.totals.total_display);
    out
}
