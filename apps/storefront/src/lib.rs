//! # GreenLife Storefront Library
//!
//! Session runtime for the GreenLife plant store: configuration, logging,
//! the cart dispatcher and the command handlers a display calls into.
//!
//! ## Module Organization
//! ```text
//! greenlife_storefront/
//! ├── lib.rs          ◄─── You are here (startup & console session)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppContext (one per session)
//! │   ├── cart.rs     ◄─── Cart dispatcher, handle, subscription
//! │   └── config.rs   ◄─── Store configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog listing/lookup
//! │   └── cart.rs     ◄─── Cart manipulation commands
//! ├── console.rs      ◄─── Line parser and text rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use greenlife_core::Catalog;

use console::ConsoleCommand;
use error::ApiError;
use state::{AppContext, StoreConfig, DEFAULT_LOG_FILTER};

/// Runs one interactive storefront session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → GREENLIFE_* env                      │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG wins, otherwise the configured log_filter                │
/// │                                                                         │
/// │  3. Start Session ────────────────────────────────────────────────────► │
/// │     • Built-in plant catalog                                            │
/// │     • Empty cart, dispatcher task spawned                               │
/// │                                                                         │
/// │  4. Read Commands Until quit/EOF ─────────────────────────────────────► │
/// │     • Each line re-renders the cart                                     │
/// │     • Rejected commands print the error and the cart is unchanged       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), ApiError> {
    let config = match StoreConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(DEFAULT_LOG_FILTER);
            return Err(e.into());
        }
    };
    init_tracing(&config.log_filter);

    info!("Starting GreenLife storefront");

    let ctx = AppContext::start(config, Catalog::plants());

    println!("Welcome to {}! Type 'help' for commands.", ctx.config.store_name);
    println!("{}", console::render_catalog(&commands::product::list_products(&ctx)));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match ConsoleCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if command == ConsoleCommand::Quit {
            break;
        }

        match console::execute(&ctx, &command).await {
            Ok(output) => println!("{}", output),
            Err(e) => {
                warn!(code = ?e.code, "Command failed: {}", e.message);
                println!("{}", e);
            }
        }
    }

    ctx.close().await?;
    info!("Storefront session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=greenlife=trace` - Show trace for greenlife crates only
/// - Default: the configured `log_filter`
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
