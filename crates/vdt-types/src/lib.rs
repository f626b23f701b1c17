pub mod table;
pub mod types;

pub use table::Table;
pub use types::{
    CucDetail, CucDetails, CucMeaning, CucMeanings, CucScore, CucScores, ElementGroups,
    SyllableEntry, Syllables,
};
