use vdt_types::{SyllableEntry, Syllables};

use crate::preprocess::KeyNormalizer;

/// What happened to the diacritic-free alias of an inserted syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasOutcome {
    /// Folded key equals the original key, one entry only
    Same,
    /// Alias stored next to the original key
    Added,
    /// Alias slot already held by an earlier row, original key only
    Taken,
}

/// Builds the syllable lookup table.
///
/// Every entry is stored under its upper-cased display name. A later row with
/// the same display key replaces the earlier one. The diacritic-free alias is
/// first-come: once a slot is occupied it is never overwritten by an alias.
pub struct SyllableIndex<'a, N: KeyNormalizer + ?Sized> {
    normalizer: &'a N,
    table: Syllables,
    aliases: usize,
    collisions: usize,
}

impl<'a, N: KeyNormalizer + ?Sized> SyllableIndex<'a, N> {
    pub fn new(normalizer: &'a N) -> Self {
        Self {
            normalizer,
            table: Syllables::new(),
            aliases: 0,
            collisions: 0,
        }
    }

    pub fn insert(&mut self, entry: SyllableEntry) -> AliasOutcome {
        let original_key = self.normalizer.original_key(&entry.name);
        let normalized_key = self.normalizer.normalized_key(&entry.name);

        if normalized_key == original_key {
            self.table.insert(original_key, entry);
            return AliasOutcome::Same;
        }

        self.table.insert(original_key, entry.clone());
        if self.table.insert_if_absent(normalized_key.as_str(), entry) {
            self.aliases += 1;
            AliasOutcome::Added
        } else {
            tracing::debug!("Alias {} already taken, keeping earlier entry", normalized_key);
            self.collisions += 1;
            AliasOutcome::Taken
        }
    }

    /// Aliases stored so far
    pub fn alias_count(&self) -> usize {
        self.aliases
    }

    /// Aliases dropped because their slot was occupied
    pub fn collision_count(&self) -> usize {
        self.collisions
    }

    pub fn into_table(self) -> Syllables {
        self.table
    }
}
