use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

/// Derives lookup keys from display names
pub trait KeyNormalizer {
    /// Drop diacritics: NFKD, then discard every combining mark
    fn fold(&self, text: &str) -> String {
        text.nfkd()
            .filter(|c| canonical_combining_class(*c) == 0)
            .collect()
    }

    /// Trimmed and upper-cased, diacritics kept
    fn original_key(&self, text: &str) -> String {
        text.trim().to_uppercase()
    }

    /// Trimmed, folded, upper-cased
    fn normalized_key(&self, text: &str) -> String {
        self.fold(text.trim()).to_uppercase()
    }
}

pub struct DefaultNormalizer;
impl KeyNormalizer for DefaultNormalizer {}
