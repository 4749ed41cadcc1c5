//! # Inventory
//!
//! [`Inventory`] owns the ordered book collection and keeps it in step with a
//! [`BookStore`]. Insertion order is display order. ISBNs are not unique;
//! lookups by ISBN return the first match.
//!
//! Every mutation is followed by a full save. Persistence failures never abort
//! the caller: they are logged, returned as `Err`, and the in-memory collection
//! stays as it was (ahead of disk until the next successful save). A failed
//! load resets the collection to empty, discarding any entries that did parse.

use crate::error::Result;
use crate::model::{Book, BookRecord, Transition};
use crate::store::BookStore;
use tracing::{debug, error, info};

/// Result of an issue/return by ISBN.
#[derive(Debug)]
pub enum Checkout {
    /// No book carries that ISBN.
    NotFound,
    /// The first book with that ISBN was already in the target state.
    AlreadyInState(Book),
    /// The status changed. `saved` holds the outcome of the follow-up save.
    Applied { book: Book, saved: Result<()> },
}

pub struct Inventory<S: BookStore> {
    store: S,
    books: Vec<Book>,
    load_error: Option<String>,
}

impl<S: BookStore> Inventory<S> {
    /// Builds the inventory and loads whatever the store holds.
    ///
    /// A load failure leaves the inventory empty; the cause is kept in
    /// [`Inventory::load_error`].
    pub fn open(store: S) -> Self {
        let mut inventory = Self {
            store,
            books: Vec::new(),
            load_error: None,
        };
        let _ = inventory.load();
        inventory
    }

    /// Replaces the in-memory collection with the store's contents.
    ///
    /// Returns the number of books loaded. On any read, parse or mapping
    /// failure the collection is emptied and the error returned.
    pub fn load(&mut self) -> Result<usize> {
        match self.read_books() {
            Ok(books) => {
                debug!("loaded {} books from {}", books.len(), self.store.location());
                self.books = books;
                self.load_error = None;
                Ok(self.books.len())
            }
            Err(e) => {
                error!("error loading books: {}", e);
                self.books.clear();
                self.load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn read_books(&self) -> Result<Vec<Book>> {
        self.store
            .load_records()?
            .into_iter()
            .map(Book::from_record)
            .collect()
    }

    /// Writes the whole collection to the store.
    pub fn save(&mut self) -> Result<()> {
        let records: Vec<BookRecord> = self.books.iter().map(Book::to_record).collect();
        match self.store.save_records(&records) {
            Ok(()) => {
                debug!("saved {} books to {}", records.len(), self.store.location());
                Ok(())
            }
            Err(e) => {
                error!("error saving books: {}", e);
                Err(e)
            }
        }
    }

    /// Appends a book and persists. The book is kept even if the save fails.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        let title = book.title.clone();
        self.books.push(book);
        let saved = self.save();
        info!("book added: {}", title);
        saved
    }

    /// Case-insensitive substring match on the title, in insertion order.
    pub fn search_by_title(&self, term: &str) -> Vec<&Book> {
        let needle = term.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// First book whose ISBN matches exactly.
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    pub fn search_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn == isbn)
    }

    pub fn display_all(&self) -> &[Book] {
        &self.books
    }

    /// Issues the first book with `isbn`, saving only if its status changed.
    pub fn issue(&mut self, isbn: &str) -> Checkout {
        self.checkout(isbn, Book::issue)
    }

    /// Returns the first book with `isbn`, saving only if its status changed.
    pub fn return_book(&mut self, isbn: &str) -> Checkout {
        self.checkout(isbn, Book::return_book)
    }

    fn checkout(&mut self, isbn: &str, apply: fn(&mut Book) -> Transition) -> Checkout {
        let Some(book) = self.search_by_isbn_mut(isbn) else {
            return Checkout::NotFound;
        };
        match apply(book) {
            Transition::AlreadyInState => Checkout::AlreadyInState(book.clone()),
            Transition::Applied => {
                let book = book.clone();
                let saved = self.save();
                Checkout::Applied { book, saved }
            }
        }
    }

    /// Why the last load failed, if it did.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
