use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Book;
use crate::store::BookStore;

pub fn run<S: BookStore>(
    inventory: &mut Inventory<S>,
    title: String,
    author: String,
    isbn: String,
) -> Result<CmdResult> {
    let book = Book::new(title, author, isbn);
    let saved = inventory.add_book(book.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book added: {}", book.title)));
    if let Err(e) = saved {
        result.add_message(CmdMessage::error(format!("Error saving books: {}", e)));
    }
    Ok(result.with_affected_books(vec![book]))
}
