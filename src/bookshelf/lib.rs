//! # Bookshelf Architecture
//!
//! Bookshelf is a small library inventory manager: it tracks books, whether
//! they are checked out, and keeps the whole inventory in one JSON file. The
//! crate is a library with a CLI client on top, not the other way around.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot subcommands and the interactive menu            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / issue / return / list / search / config            │
//! │  - Turns inventory outcomes into user-facing messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory (inventory.rs)                                   │
//! │  - Ordered books, status transitions, save after mutation   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure model
//!
//! Nothing below the CLI panics or exits on a bad file. A failed save is
//! logged and returned; memory stays ahead of disk. A failed load is logged
//! and leaves an empty inventory. Issuing an issued book, returning an
//! available one, or asking for an unknown ISBN are ordinary outcomes, not
//! errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per command
//! - [`inventory`]: The in-memory collection and its persistence rules
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `BookStatus`, `BookRecord`, `Transition`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
