use serde::{Deserialize, Serialize};

use crate::table::Table;

/// One common given-name syllable from the reference sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableEntry {
    pub name: String,
    pub strokes: i64,
    pub element: String,
}

/// Missing fields read back as 0 / "" so a hand-edited meanings file still loads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CucMeaning {
    pub number: i64,
    pub name: String,
    /// Qualitative label, e.g. "cát", "hung", "trong cát có hung"
    pub luck: String,
    pub alias: String,
    pub palace: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CucScore {
    pub number: i64,
    pub name: String,
    pub score: i64,
}

/// Extended per-category record from the "81 Cục" sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CucDetail {
    pub number: i64,
    pub cuc_name: String,
    pub alias: String,
    pub description: String,
    pub family: String,
    pub tinh_danh_dien: String,
    pub health: String,
    pub career: String,
    pub tinh_danh_phan: String,
    pub tinh_danh_bat: String,
    pub phuc_duc: String,
}

/// Keyed by upper-cased display name, plus diacritic-free aliases
pub type Syllables = Table<SyllableEntry>;
/// Keyed by stringified Cục number
pub type CucMeanings = Table<CucMeaning>;
pub type CucScores = Table<CucScore>;
pub type CucDetails = Table<CucDetail>;
/// Element tag -> free-text list of names
pub type ElementGroups = Table<String>;
