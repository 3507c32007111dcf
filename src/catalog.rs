use crate::error::EngineResult;
use crate::models::CardRecord;
use std::collections::HashMap;
use std::path::Path;

/// Read-only source of static card attributes.
///
/// Lookups never fail for unknown names; callers get `None` and fall back
/// to the engine's safe defaults (legal everywhere, price 0, Utility role).
/// `records()` must iterate in a stable order across calls — the
/// replacement recommender relies on it for deterministic tie-breaking.
pub trait CardCatalog {
    fn lookup(&self, card_name: &str) -> Option<&CardRecord>;

    /// All records in stable (insertion) order
    fn records(&self) -> &[CardRecord];
}

/// Catalog backed by an in-memory snapshot, in insertion order.
///
/// Serves both as the test fixture implementation and as the production
/// snapshot once records have been resolved from an external source.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: Vec<CardRecord>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records, preserving their order.
    /// A duplicate name replaces the earlier record's attributes but keeps
    /// its original position.
    pub fn from_records(records: impl IntoIterator<Item = CardRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Load a catalog from a JSON array of card records
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let records: Vec<CardRecord> = serde_json::from_str(&content)?;
        log::info!(
            "Loaded card catalog with {} records from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(Self::from_records(records))
    }

    pub fn insert(&mut self, record: CardRecord) {
        match self.index.get(&record.name) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CardCatalog for InMemoryCatalog {
    fn lookup(&self, card_name: &str) -> Option<&CardRecord> {
        self.index.get(card_name).map(|&pos| &self.records[pos])
    }

    fn records(&self) -> &[CardRecord] {
        &self.records
    }
}
