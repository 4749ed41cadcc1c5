use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::BookStore;

pub fn by_title<S: BookStore>(inventory: &Inventory<S>, term: &str) -> Result<CmdResult> {
    let matches: Vec<_> = inventory
        .search_by_title(term)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_listed_books(matches))
}

pub fn by_isbn<S: BookStore>(inventory: &Inventory<S>, isbn: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match inventory.search_by_isbn(isbn) {
        Some(book) => result.listed_books.push(book.clone()),
        None => result.add_message(CmdMessage::info(format!("No book with ISBN {}.", isbn))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn stocked() -> Inventory<InMemoryStore> {
        let mut inventory = Inventory::open(InMemoryStore::new());
        add::run(&mut inventory, "Dune Messiah".into(), "Frank Herbert".into(), "112".into())
            .unwrap();
        add::run(&mut inventory, "Emma".into(), "Jane Austen".into(), "222".into()).unwrap();
        add::run(&mut inventory, "DUNE".into(), "Frank Herbert".into(), "111".into()).unwrap();
        inventory
    }

    #[test]
    fn title_search_ignores_case() {
        let inventory = stocked();
        let result = by_title(&inventory, "dune").unwrap();
        let titles: Vec<_> = result.listed_books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune Messiah", "DUNE"]);
    }

    #[test]
    fn title_search_without_matches() {
        let inventory = stocked();
        let result = by_title(&inventory, "war and peace").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books found.");
    }

    #[test]
    fn isbn_search_is_exact() {
        let inventory = stocked();
        let result = by_isbn(&inventory, "222").unwrap();
        assert_eq!(result.listed_books[0].title, "Emma");

        let result = by_isbn(&inventory, "22").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No book with ISBN 22.");
    }
}
