use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::BookStore;

pub fn run<S: BookStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    let books = inventory.display_all().to_vec();
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books in the inventory."));
    }
    Ok(result.with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let mut inventory = Inventory::open(InMemoryStore::new());
        add::run(&mut inventory, "Zeta".into(), "a".into(), "1".into()).unwrap();
        add::run(&mut inventory, "Alpha".into(), "b".into(), "2".into()).unwrap();

        let result = run(&inventory).unwrap();
        let titles: Vec<_> = result.listed_books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Zeta", "Alpha"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_inventory_says_so() {
        let inventory = Inventory::open(InMemoryStore::new());
        let result = run(&inventory).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books in the inventory.");
    }
}
