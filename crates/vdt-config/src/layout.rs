//! Row/column windows of the source workbook.
//!
//! Rows and columns are 1-based, the way they read in a spreadsheet
//! (column B is 2). Every table gets its own record so an extractor never
//! carries literal offsets.

use serde::{Deserialize, Deserializer, Serialize};

/// Sheet plus the inclusive row span to scan
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Window {
    pub sheet: String,
    pub first_row: u32,
    /// `None` scans to the last used row of the sheet
    pub last_row: Option<u32>,
}

impl Window {
    fn new(sheet: &str, first_row: u32, last_row: Option<u32>) -> Self {
        Self {
            sheet: sheet.to_string(),
            first_row,
            last_row,
        }
    }

    /// Rows to visit given the sheet's last used row
    pub fn rows(&self, sheet_height: u32) -> std::ops::RangeInclusive<u32> {
        let last = self.last_row.unwrap_or(sheet_height);
        self.first_row..=last
    }
}

/// Window fields given in a config file; anything left out keeps the
/// owning layout's default
#[derive(Deserialize)]
struct WindowOverride {
    sheet: Option<String>,
    first_row: Option<u32>,
    /// Outer `None` when the key is absent, `Some(None)` for an explicit null
    #[serde(default, deserialize_with = "present")]
    last_row: Option<Option<u32>>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Option<u32>>, D::Error> {
    Option::<u32>::deserialize(deserializer).map(Some)
}

fn merge_window<'de, D: Deserializer<'de>>(
    base: Window,
    deserializer: D,
) -> Result<Window, D::Error> {
    let over = WindowOverride::deserialize(deserializer)?;
    Ok(Window {
        sheet: over.sheet.unwrap_or(base.sheet),
        first_row: over.first_row.unwrap_or(base.first_row),
        last_row: over.last_row.unwrap_or(base.last_row),
    })
}

fn syllable_window<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Window, D::Error> {
    merge_window(SyllableLayout::default().window, deserializer)
}

fn meaning_window<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Window, D::Error> {
    merge_window(MeaningLayout::default().window, deserializer)
}

fn score_window<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Window, D::Error> {
    merge_window(ScoreLayout::default().window, deserializer)
}

fn detail_window<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Window, D::Error> {
    merge_window(DetailLayout::default().window, deserializer)
}

/// "Tên thường Dùng": numbered list of common syllables
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SyllableLayout {
    #[serde(deserialize_with = "syllable_window")]
    pub window: Window,
    pub stt_col: u32,
    pub name_col: u32,
    pub strokes_col: u32,
    pub element_col: u32,
}

impl Default for SyllableLayout {
    fn default() -> Self {
        Self {
            window: Window::new("Tên thường Dùng", 6, None),
            stt_col: 2,
            name_col: 3,
            strokes_col: 4,
            element_col: 5,
        }
    }
}

/// "Ý Nghĩa Tứ Cục": luck rating and meaning per Cục
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MeaningLayout {
    #[serde(deserialize_with = "meaning_window")]
    pub window: Window,
    pub number_col: u32,
    pub name_col: u32,
    pub luck_col: u32,
    pub alias_col: u32,
    pub palace_col: u32,
    pub meaning_col: u32,
}

impl Default for MeaningLayout {
    fn default() -> Self {
        Self {
            window: Window::new("Ý Nghĩa Tứ Cục", 7, None),
            number_col: 2,
            name_col: 3,
            luck_col: 4,
            alias_col: 5,
            palace_col: 6,
            meaning_col: 7,
        }
    }
}

/// Score block on "Sheet2" (columns N..Q)
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ScoreLayout {
    #[serde(deserialize_with = "score_window")]
    pub window: Window,
    pub number_col: u32,
    pub name_col: u32,
    pub score_col: u32,
}

impl Default for ScoreLayout {
    fn default() -> Self {
        Self {
            window: Window::new("Sheet2", 20, Some(100)),
            number_col: 14,
            name_col: 15,
            score_col: 17,
        }
    }
}

/// Five consecutive rows on "DT", one per element, starting at `first_row`
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ElementLayout {
    pub sheet: String,
    pub first_row: u32,
    pub tag_col: u32,
    pub names_col: u32,
}

impl Default for ElementLayout {
    fn default() -> Self {
        Self {
            sheet: "DT".to_string(),
            first_row: 6,
            tag_col: 22,
            names_col: 23,
        }
    }
}

/// "81 Cục Việt Danh": number in `number_col`, then ten text columns
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DetailLayout {
    #[serde(deserialize_with = "detail_window")]
    pub window: Window,
    pub number_col: u32,
    pub cuc_name_col: u32,
    pub alias_col: u32,
    pub description_col: u32,
    pub family_col: u32,
    pub tinh_danh_dien_col: u32,
    pub health_col: u32,
    pub career_col: u32,
    pub tinh_danh_phan_col: u32,
    pub tinh_danh_bat_col: u32,
    pub phuc_duc_col: u32,
}

impl Default for DetailLayout {
    fn default() -> Self {
        Self {
            window: Window::new("81 Cục Việt Danh", 3, None),
            number_col: 2,
            cuc_name_col: 3,
            alias_col: 4,
            description_col: 5,
            family_col: 6,
            tinh_danh_dien_col: 7,
            health_col: 8,
            career_col: 9,
            tinh_danh_phan_col: 10,
            tinh_danh_bat_col: 11,
            phuc_duc_col: 12,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LayoutsConfig {
    pub syllables: SyllableLayout,
    pub meanings: MeaningLayout,
    pub scores: ScoreLayout,
    pub elements: ElementLayout,
    pub details: DetailLayout,
}
