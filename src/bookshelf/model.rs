use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Issued => "issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "available" => Ok(BookStatus::Available),
            "issued" => Ok(BookStatus::Issued),
            other => Err(LibraryError::InvalidStatus(other.to_string())),
        }
    }
}

/// Outcome of a status change on a single book.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The status changed.
    Applied,
    /// The book was already in the target state; nothing changed.
    AlreadyInState,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// The on-disk form of a book: exactly four string keys.
///
/// Missing keys and unknown keys are both rejected by serde, so a record
/// without `status` never silently defaults to available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::with_status(title, author, isbn, BookStatus::Available)
    }

    pub fn with_status(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        status: BookStatus,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status,
        }
    }

    /// Checks the book out. Only an available book can be issued.
    pub fn issue(&mut self) -> Transition {
        self.transition(BookStatus::Available, BookStatus::Issued)
    }

    /// Checks the book back in. Only an issued book can be returned.
    pub fn return_book(&mut self) -> Transition {
        self.transition(BookStatus::Issued, BookStatus::Available)
    }

    fn transition(&mut self, from: BookStatus, to: BookStatus) -> Transition {
        if self.status != from {
            return Transition::AlreadyInState;
        }
        self.status = to;
        Transition::Applied
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    pub fn to_record(&self) -> BookRecord {
        BookRecord {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            status: self.status.to_string(),
        }
    }

    pub fn from_record(record: BookRecord) -> Result<Self> {
        let status = record.status.parse()?;
        Ok(Self {
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            status,
        })
    }

    /// One-line summary, e.g. `Dune by Frank Herbert | ISBN: 111 | Status: available`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} | ISBN: {} | Status: {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}
