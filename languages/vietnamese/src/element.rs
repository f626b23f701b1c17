use vdt_core::preprocess::KeyNormalizer;

use crate::processor::VietnameseProcessor;

/// Ngũ Hành: the five elements, in the order the reference sheet lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NguHanh {
    Moc,  // Wood
    Hoa,  // Fire
    Tho,  // Earth
    Kim,  // Metal
    Thuy, // Water
}

impl NguHanh {
    pub const ALL: [NguHanh; 5] = [
        NguHanh::Moc,
        NguHanh::Hoa,
        NguHanh::Tho,
        NguHanh::Kim,
        NguHanh::Thuy,
    ];

    /// Parse a tag, ignoring case and diacritics ("Thủy", "THUY", "thuỷ")
    pub fn from_str(s: &str) -> Option<Self> {
        match VietnameseProcessor.normalized_key(s).as_str() {
            "MOC" => Some(NguHanh::Moc),
            "HOA" => Some(NguHanh::Hoa),
            "THO" => Some(NguHanh::Tho),
            "KIM" => Some(NguHanh::Kim),
            "THUY" => Some(NguHanh::Thuy),
            _ => None,
        }
    }

    /// Upper-case Vietnamese tag
    pub fn as_str(&self) -> &'static str {
        match self {
            NguHanh::Moc => "MỘC",
            NguHanh::Hoa => "HỎA",
            NguHanh::Tho => "THỔ",
            NguHanh::Kim => "KIM",
            NguHanh::Thuy => "THỦY",
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            NguHanh::Moc => "Wood",
            NguHanh::Hoa => "Fire",
            NguHanh::Tho => "Earth",
            NguHanh::Kim => "Metal",
            NguHanh::Thuy => "Water",
        }
    }
}
