//! # GreenLife Storefront Entry Point
//!
//! Console front end for a single shopping session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GreenLife Storefront                             │
//! │                                                                         │
//! │   stdin ──► ConsoleCommand::parse ──► commands::cart / product          │
//! │                                               │                         │
//! │                                               ▼                         │
//! │                                     CartHandle ──► dispatcher task      │
//! │                                               │                         │
//! │   stdout ◄── console::render_cart ◄───────────┘                         │
//! │   stderr ◄── tracing                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(e) = greenlife_storefront::run().await {
        eprintln!("storefront: {}", e);
        std::process::exit(1);
    }
}
