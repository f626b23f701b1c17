//! One builder per output table. Each reads a fixed window of one sheet and
//! never fails: unreadable cells fall back to `0` or `""`.

pub mod details;
pub mod elements;
pub mod meanings;
pub mod scores;
pub mod syllables;

pub use details::extract_details;
pub use elements::extract_element_groups;
pub use meanings::extract_meanings;
pub use scores::extract_scores;
pub use syllables::extract_syllables;
