//! # Command Handlers
//!
//! Everything a display can ask of a storefront session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog listing and lookup
//! └── cart.rs     ◄─── Cart manipulation
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Display (console, web)                                                │
//! │         │  add_to_cart(&ctx, "1")                                      │
//! │         ▼                                                               │
//! │  Handler ──► catalog lookup ──► CartHandle::add ──► dispatcher task    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<CartResponse, ApiError>  (both serializable)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers receive the session's [`AppContext`](crate::state::AppContext)
//! explicitly.

pub mod cart;
pub mod product;
