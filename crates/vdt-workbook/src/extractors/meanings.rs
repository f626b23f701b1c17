use vdt_config::layout::MeaningLayout;
use vdt_types::{CucMeaning, CucMeanings};

use crate::types::Sheet;

pub fn extract_meanings<S: Sheet>(sheet: &S, layout: &MeaningLayout) -> CucMeanings {
    let mut meanings = CucMeanings::new();

    for row in layout.window.rows(sheet.height()) {
        let number = sheet.cell(row, layout.number_col);
        let name = sheet.cell(row, layout.name_col);
        if number.is_empty() || name.is_empty() {
            continue;
        }

        let number = number.as_int();
        if number <= 0 {
            tracing::debug!("{}: row {} has no Cục number, skipped", sheet.name(), row);
            continue;
        }

        meanings.insert(
            number.to_string(),
            CucMeaning {
                number,
                name: name.as_text(),
                luck: sheet.cell(row, layout.luck_col).as_text(),
                alias: sheet.cell(row, layout.alias_col).as_text(),
                palace: sheet.cell(row, layout.palace_col).as_text(),
                meaning: sheet.cell(row, layout.meaning_col).as_text(),
            },
        );
    }

    tracing::info!("{}: {} Cục meanings", sheet.name(), meanings.len());
    meanings
}
