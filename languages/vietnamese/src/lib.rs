pub mod element;
pub mod luck;
pub mod processor;

pub use element::NguHanh;
pub use luck::{LuckLabel, derive_score};
pub use processor::VietnameseProcessor;
