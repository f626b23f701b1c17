use unicode_normalization::UnicodeNormalization;

const CAT: &str = "cát";
const HUNG: &str = "hung";

/// Meaning-text phrases that override the label score. Checked in order,
/// the last matching rule wins.
const REFINEMENTS: &[(&[&str], u8)] = &[
    (&["đại cát"], 10),
    (&["hung ác", "hung sát"], 1),
    (&["thuận lợi", "tốt đẹp"], 9),
];

/// Qualitative luck rating of a Cục
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuckLabel {
    /// "cát"
    Auspicious,
    /// "hung"
    Inauspicious,
    /// "trong cát có hung": good with a bad streak
    AuspiciousWithHung,
    /// "trong hung có cát": bad with a good streak
    InauspiciousWithCat,
    /// any other label mentioning both cát and hung
    Mixed,
    Unknown,
}

impl LuckLabel {
    /// Classify a label. Specific phrases take precedence over the generic
    /// mixed rule they also satisfy.
    pub fn parse(label: &str) -> Self {
        let label = fold_case(label);

        if label == CAT || label == "cat" {
            LuckLabel::Auspicious
        } else if label == HUNG {
            LuckLabel::Inauspicious
        } else if label.contains("trong cát có hung") {
            LuckLabel::AuspiciousWithHung
        } else if label.contains("trong hung có cát") {
            LuckLabel::InauspiciousWithCat
        } else if label.contains(CAT) && label.contains(HUNG) {
            LuckLabel::Mixed
        } else {
            LuckLabel::Unknown
        }
    }

    pub fn base_score(&self) -> u8 {
        match self {
            LuckLabel::Auspicious => 10,
            LuckLabel::Inauspicious => 2,
            LuckLabel::AuspiciousWithHung => 4,
            LuckLabel::InauspiciousWithCat => 6,
            LuckLabel::Mixed => 5,
            LuckLabel::Unknown => 5,
        }
    }
}

/// Score a Cục from 1 (worst) to 10 (best)
pub fn derive_score(luck: &str, meaning: &str) -> u8 {
    let label = LuckLabel::parse(luck);
    let meaning = fold_case(meaning);

    REFINEMENTS
        .iter()
        .filter(|(phrases, _)| phrases.iter().any(|p| meaning.contains(*p)))
        .map(|(_, score)| *score)
        .last()
        .unwrap_or_else(|| label.base_score())
}

/// NFC then lower-case, so composed and decomposed input compare equal
fn fold_case(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}
