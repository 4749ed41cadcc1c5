//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for every
//! UI (the one-shot CLI subcommands and the interactive menu alike).
//!
//! The facade dispatches to `commands/*.rs` and returns structured
//! [`CmdResult`] values. It holds no business logic and never touches the
//! terminal.
//!
//! `LibraryApi<S: BookStore>` is generic over the storage backend:
//! - Production: `LibraryApi<JsonFileStore>`
//! - Testing: `LibraryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::BookStore;
use std::path::{Path, PathBuf};

pub struct LibraryApi<S: BookStore> {
    inventory: Inventory<S>,
    config_dir: PathBuf,
}

impl<S: BookStore> LibraryApi<S> {
    /// Opens the inventory backed by `store`, loading it immediately.
    pub fn open(store: S, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            inventory: Inventory::open(store),
            config_dir: config_dir.into(),
        }
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        isbn: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, title, author, isbn)
    }

    pub fn issue_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::checkout::issue(&mut self.inventory, isbn)
    }

    pub fn return_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::checkout::return_book(&mut self.inventory, isbn)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn search_title(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::by_title(&self.inventory, term)
    }

    pub fn search_isbn(&self, isbn: &str) -> Result<commands::CmdResult> {
        commands::search::by_isbn(&self.inventory, isbn)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Why the inventory came up empty at open time, if loading failed.
    pub fn load_error(&self) -> Option<&str> {
        self.inventory.load_error()
    }

    pub fn inventory(&self) -> &Inventory<S> {
        &self.inventory
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
