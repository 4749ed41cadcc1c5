//! Text rendering for the terminal. Everything returns a `String` so the
//! menu can write to any `Write` and tests can inspect the output.

use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::config::LibraryConfig;
use bookshelf::model::Book;
use colored::Colorize;

pub(super) const MENU: &str = "\nLibrary Inventory Manager\n\
1. Add Book\n\
2. Issue Book\n\
3. Return Book\n\
4. View All Books\n\
5. Search Book\n\
6. Exit\n";

/// One `describe()` line per book.
pub(super) fn render_books(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| format!("{}\n", book.describe()))
        .collect()
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub(super) fn render_config(config: &LibraryConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}
