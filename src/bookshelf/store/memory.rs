use super::BookStore;
use crate::error::Result;
use crate::model::BookRecord;

/// Keeps records in memory. Used by tests that don't need a filesystem.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    records: Vec<BookRecord>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// How many times the records have been written.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load_records(&self) -> Result<Vec<BookRecord>> {
        Ok(self.records.clone())
    }

    fn save_records(&mut self, records: &[BookRecord]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_saves_and_replaces_records() {
        let mut store = InMemoryStore::new();
        let record = BookRecord {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            isbn: "111".into(),
            status: "available".into(),
        };

        store.save_records(&[record.clone()]).unwrap();
        store.save_records(&[record.clone(), record.clone()]).unwrap();

        assert_eq!(store.saves(), 2);
        assert_eq!(store.load_records().unwrap().len(), 2);
    }
}
