use vdt_config::layout::SyllableLayout;
use vdt_core::dictionary::SyllableIndex;
use vdt_core::preprocess::KeyNormalizer;
use vdt_types::{SyllableEntry, Syllables};

use crate::types::Sheet;

/// Syllable table keyed by display name plus diacritic-free aliases
pub fn extract_syllables<S: Sheet, N: KeyNormalizer + ?Sized>(
    sheet: &S,
    layout: &SyllableLayout,
    normalizer: &N,
) -> Syllables {
    let mut index = SyllableIndex::new(normalizer);
    let mut rows = 0;

    for row in layout.window.rows(sheet.height()) {
        let stt = sheet.cell(row, layout.stt_col);
        let name = sheet.cell(row, layout.name_col);
        let strokes = sheet.cell(row, layout.strokes_col);
        if stt.is_empty() || name.is_empty() || strokes.is_empty() {
            continue;
        }

        index.insert(SyllableEntry {
            name: name.to_text(),
            strokes: strokes.as_int(),
            element: sheet.cell(row, layout.element_col).as_text(),
        });
        rows += 1;
    }

    tracing::info!(
        "{}: {} syllable rows, {} aliases, {} alias collisions",
        sheet.name(),
        rows,
        index.alias_count(),
        index.collision_count()
    );
    index.into_table()
}
