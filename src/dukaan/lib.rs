//! # Dukaan Architecture
//!
//! Dukaan is a **UI-agnostic storefront library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client, and the same core could back a web UI or
//! anything else.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Enforces the owner gate on mutations                     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Query Engine (query.rs)    │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogStore trait over four JSON records       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Checkout Is a Link
//!
//! There is no payment or order pipeline. "Checkout" constructs a
//! `https://wa.me/<number>?text=...` deep link with a prefilled message;
//! everything after that happens in a chat thread. The owner gate is an
//! obfuscation for a single-owner local store, not an account system—see
//! [`auth`] for exactly how weak it is and why it stays that way.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`query`]: The catalog filter/sort pipeline
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `StoreConfig`, `Category`)
//! - [`auth`]: The owner-code verifier and its hash
//! - [`seed`]: The sample catalog and default configuration
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod error;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;
