//! # Storage Layer
//!
//! The [`BookStore`] trait is the seam between the inventory and wherever its
//! records live. The inventory only ever loads the whole list once and
//! overwrites it wholesale after each mutation, so the trait stays that small.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, one JSON array per file,
//!   pretty-printed with 4-space indentation.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence.
//!
//! ## Storage Format
//!
//! ```text
//! books.json
//! [
//!     {
//!         "title": "Dune",
//!         "author": "Frank Herbert",
//!         "isbn": "111",
//!         "status": "available"
//!     }
//! ]
//! ```

use crate::error::Result;
use crate::model::BookRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for book record storage.
pub trait BookStore {
    /// Load every persisted record in insertion order.
    ///
    /// A backing location that does not exist yet is an empty inventory, not an error.
    fn load_records(&self) -> Result<Vec<BookRecord>>;

    /// Replace the persisted records with `records`.
    fn save_records(&mut self, records: &[BookRecord]) -> Result<()>;

    /// Where the records live, for log and user messages.
    fn location(&self) -> String;
}
