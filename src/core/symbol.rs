//! Symbol interning.
//!
//! At most one symbol exists per distinct name; every consumer compares
//! `SymbolId`s, so the intern table is authoritative for the lifetime of
//! the owning `Runtime`. The table is append-only and must stay intact
//! even when an interleaved operation fails.

use ahash::RandomState;
use hashbrown::HashMap;

/// Identity handle for an interned name. Compare these, never the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

pub struct SymbolTable {
    by_name: HashMap<String, SymbolId, RandomState>,
    names: Vec<Box<str>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            by_name: HashMap::with_hasher(RandomState::with_seeds(0, 0, 0, 0)),
            names: Vec::new(),
        }
    }

    /// Returns the one id for `name`, creating it on first sight.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }
        let id = SymbolId(self.names.len() as u32);
        self.names.push(name.into());
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Lookup without interning.
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: SymbolId) -> &str {
        &self.names[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
