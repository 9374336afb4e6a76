//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State                                        │
//! │                                                                         │
//! │  AppContext::start(config, catalog)                                    │
//! │          │                                                              │
//! │          ├──────────────────┬──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ StoreConfig  │  │   Catalog    │  │   CartHandle     │              │
//! │  │ (read-only)  │  │ (read-only)  │  │ ──► dispatcher   │              │
//! │  │              │  │              │  │     task owns    │              │
//! │  │              │  │              │  │     CartLedger   │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  One ledger per context. Nothing is global: handlers receive the       │
//! │  context explicitly.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartDispatcher, CartHandle, CartSubscription};
pub use config::{StoreConfig, CONFIG_PATH_ENV, DEFAULT_LOG_FILTER};

use chrono::{DateTime, Utc};
use greenlife_core::{CartLedger, Catalog};
use tracing::info;
use uuid::Uuid;

use crate::error::DispatchError;

/// Everything one storefront session needs.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub config: StoreConfig,
    pub catalog: Catalog,
    pub cart: CartHandle,
}

impl AppContext {
    /// Starts a session: an empty ledger under the configured policy and the
    /// dispatcher task that owns it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: StoreConfig, catalog: Catalog) -> Self {
        let session_id = Uuid::new_v4();
        let ledger = CartLedger::with_policy(config.duplicate_add);
        let cart = CartDispatcher::new(ledger).start(config.queue_capacity);

        info!(
            %session_id,
            store = %config.store_name,
            products = catalog.len(),
            "Storefront session started"
        );

        AppContext {
            session_id,
            started_at: Utc::now(),
            config,
            catalog,
            cart,
        }
    }

    /// Ends the session; the dispatcher drains queued commands and stops.
    pub async fn close(&self) -> Result<(), DispatchError> {
        info!(session_id = %self.session_id, "Storefront session closing");
        self.cart.shutdown().await
    }
}
