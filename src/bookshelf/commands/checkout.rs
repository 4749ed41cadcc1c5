use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::{Checkout, Inventory};
use crate::store::BookStore;

const NOT_ISSUABLE: &str = "Book not available or not found.";
const NOT_RETURNABLE: &str = "Book not found or not issued.";

pub fn issue<S: BookStore>(inventory: &mut Inventory<S>, isbn: &str) -> Result<CmdResult> {
    let outcome = inventory.issue(isbn);
    Ok(report(outcome, "Issued", NOT_ISSUABLE))
}

pub fn return_book<S: BookStore>(inventory: &mut Inventory<S>, isbn: &str) -> Result<CmdResult> {
    let outcome = inventory.return_book(isbn);
    Ok(report(outcome, "Returned", NOT_RETURNABLE))
}

fn report(outcome: Checkout, verb: &str, refusal: &str) -> CmdResult {
    let mut result = CmdResult::default();
    match outcome {
        Checkout::Applied { book, saved } => {
            result.add_message(CmdMessage::success(format!("{}: {}", verb, book.title)));
            if let Err(e) = saved {
                result.add_message(CmdMessage::error(format!("Error saving books: {}", e)));
            }
            result.affected_books.push(book);
        }
        Checkout::AlreadyInState(_) | Checkout::NotFound => {
            result.add_message(CmdMessage::warning(refusal));
        }
    }
    result
}
