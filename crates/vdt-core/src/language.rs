use crate::preprocess::KeyNormalizer;

/// Language-specific key handling and luck scoring
pub trait LanguageProcessor: KeyNormalizer {
    /// Language identifier (ISO 639-1 code: "vi", ...)
    fn language_code(&self) -> &str;
}

/// Turns a Cục's luck label and meaning text into a 1..=10 score
pub trait LuckScorer {
    fn score(&self, luck: &str, meaning: &str) -> u8;
}
