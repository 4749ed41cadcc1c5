//! The interactive six-choice loop.
//!
//! Generic over the input and output streams so it can be driven from tests.
//! End of input is treated like choosing Exit.

use super::render::{render_books, render_messages, MENU};
use bookshelf::api::LibraryApi;
use bookshelf::error::Result;
use bookshelf::store::BookStore;
use std::io::{BufRead, Write};

pub fn run_menu<S, R, W>(api: &mut LibraryApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Enter choice: ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(title) = prompt(input, out, "Title: ")? else {
                    break;
                };
                let Some(author) = prompt(input, out, "Author: ")? else {
                    break;
                };
                let Some(isbn) = prompt(input, out, "ISBN: ")? else {
                    break;
                };
                let result = api.add_book(title, author, isbn)?;
                write!(out, "{}", render_messages(&result.messages))?;
            }
            "2" => {
                let Some(isbn) = prompt(input, out, "Enter ISBN to issue: ")? else {
                    break;
                };
                let result = api.issue_book(&isbn)?;
                write!(out, "{}", render_messages(&result.messages))?;
            }
            "3" => {
                let Some(isbn) = prompt(input, out, "Enter ISBN to return: ")? else {
                    break;
                };
                let result = api.return_book(&isbn)?;
                write!(out, "{}", render_messages(&result.messages))?;
            }
            "4" => {
                let result = api.list_books()?;
                write!(out, "{}", render_books(&result.listed_books))?;
                write!(out, "{}", render_messages(&result.messages))?;
            }
            "5" => {
                let Some(term) = prompt(input, out, "Search by title: ")? else {
                    break;
                };
                let result = api.search_title(&term)?;
                write!(out, "{}", render_books(&result.listed_books))?;
                write!(out, "{}", render_messages(&result.messages))?;
            }
            "6" => break,
            _ => writeln!(out, "Invalid choice. Try again.")?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes `label`, then reads one line without its terminator. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
