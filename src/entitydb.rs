//! The entity store boundary (spec §1: "the relational storage layer ...
//! entities are queried via an injected lookup interface"; spec §9: "abstract
//! behind a small query interface"). `recognize_entities` is the only stage
//! that talks to this trait.

use crate::token::EntityRow;

/// A read-only session over the entity store for the duration of one
/// pipeline run. May be supplied by the caller (spec §5: "not closed here")
/// or created internally and committed/closed on exit; both are represented
/// uniformly by this trait, with lifetime management left to the concrete
/// implementation's `Drop`.
pub trait EntityDb {
    /// All entities whose name starts with `word` (a `LIKE "word %"` match)
    /// or exactly equals it, per spec §4.9.
    fn find_entities_with_prefix(&self, word: &str) -> crate::error::Result<Vec<EntityRow>>;
}

/// An in-memory entity store for tests and small embedded deployments.
#[derive(Debug, Default)]
pub struct MemoryEntityDb {
    rows: Vec<EntityRow>,
}

impl MemoryEntityDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: EntityRow) -> &mut Self {
        self.rows.push(row);
        self
    }
}

impl EntityDb for MemoryEntityDb {
    fn find_entities_with_prefix(&self, word: &str) -> crate::error::Result<Vec<EntityRow>> {
        let matches = self
            .rows
            .iter()
            .filter(|row| row.name == word || row.name.starts_with(&format!("{word} ")))
            .cloned()
            .collect();
        Ok(matches)
    }
}

/// A no-op entity store: `recognize_entities` degrades to a pass-through
/// stage when the caller has no entity backend to offer (spec §5: the
/// entity session is optional).
#[derive(Debug, Default)]
pub struct NullEntityDb;

impl EntityDb for NullEntityDb {
    fn find_entities_with_prefix(&self, _word: &str) -> crate::error::Result<Vec<EntityRow>> {
        Ok(Vec::new())
    }
}
