use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;
use vdt_core::language::{LanguageProcessor, LuckScorer};
use vdt_core::preprocess::KeyNormalizer;

use crate::luck::derive_score;

/// Vietnamese key folding and luck scoring
pub struct VietnameseProcessor;

impl VietnameseProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Diacritic-free, upper-cased lookup key: "Nguyễn" -> "NGUYEN"
    pub fn normalize(&self, text: &str) -> String {
        self.normalized_key(text)
    }
}

impl Default for VietnameseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyNormalizer for VietnameseProcessor {
    fn fold(&self, text: &str) -> String {
        // đ/Đ carry a stroke, not a combining mark, so NFKD leaves them alone
        text.nfkd()
            .filter(|c| canonical_combining_class(*c) == 0)
            .map(|c| match c {
                'Đ' => 'D',
                'đ' => 'd',
                other => other,
            })
            .collect()
    }
}

impl LanguageProcessor for VietnameseProcessor {
    fn language_code(&self) -> &str {
        "vi"
    }
}

impl LuckScorer for VietnameseProcessor {
    fn score(&self, luck: &str, meaning: &str) -> u8 {
        derive_score(luck, meaning)
    }
}
