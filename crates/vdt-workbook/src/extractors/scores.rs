use vdt_config::layout::ScoreLayout;
use vdt_types::{CucScore, CucScores};

use crate::types::Sheet;

/// Raw scores as typed into the workbook. `derive-scores` replaces these.
pub fn extract_scores<S: Sheet>(sheet: &S, layout: &ScoreLayout) -> CucScores {
    let mut scores = CucScores::new();

    for row in layout.window.rows(sheet.height()) {
        let number = sheet.cell(row, layout.number_col);
        let name = sheet.cell(row, layout.name_col);
        if number.is_empty() || name.is_empty() {
            continue;
        }

        let number = number.as_int();
        if number <= 0 {
            continue;
        }

        scores.insert(
            number.to_string(),
            CucScore {
                number,
                name: name.as_text(),
                score: sheet.cell(row, layout.score_col).as_int(),
            },
        );
    }

    tracing::info!("{}: {} Cục scores", sheet.name(), scores.len());
    scores
}
