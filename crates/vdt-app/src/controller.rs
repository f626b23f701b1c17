use anyhow::Context;
use vdt_config::Config;
use vdt_core::language::{LanguageProcessor, LuckScorer};
use vdt_core::scoring::derive_scores;
use vdt_types::CucMeaning;
use vdt_workbook::Workbook;
use vdt_workbook::extractors::{
    extract_details, extract_element_groups, extract_meanings, extract_scores, extract_syllables,
};

use crate::io::{
    DETAILS_FILE, ELEMENTS_FILE, JsonStyle, MEANINGS_FILE, SCORES_FILE, SYLLABLES_FILE,
    read_table, write_table,
};
use crate::status::RunSummary;

/// Runs the extraction and scoring passes against one config
pub struct Pipeline<'a, P> {
    config: &'a Config,
    processor: &'a P,
}

impl<'a, P: LanguageProcessor + LuckScorer> Pipeline<'a, P> {
    pub fn new(config: &'a Config, processor: &'a P) -> Self {
        Self { config, processor }
    }

    fn style(&self) -> JsonStyle {
        if self.config.output.pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }

    fn syllable_style(&self) -> JsonStyle {
        if self.config.output.compact_syllables {
            JsonStyle::Compact
        } else {
            self.style()
        }
    }

    /// Build all five tables from the workbook and write them out.
    /// A missing sheet aborts; tables written before it stay on disk.
    pub fn extract<W: Workbook>(
        &self,
        workbook: &mut W,
        summary: &mut RunSummary,
    ) -> anyhow::Result<()> {
        let layouts = &self.config.layouts;
        let out = &self.config.paths.output_dir;
        tracing::info!(
            "Extracting tables ({} key rules) into {}",
            self.processor.language_code(),
            out.display()
        );

        let sheet = workbook.sheet(&layouts.syllables.window.sheet)?;
        let syllables = extract_syllables(&sheet, &layouts.syllables, self.processor);
        let path = write_table(out, SYLLABLES_FILE, &syllables, self.syllable_style())?;
        summary.record(SYLLABLES_FILE, syllables.len(), path);

        let sheet = workbook.sheet(&layouts.meanings.window.sheet)?;
        let meanings = extract_meanings(&sheet, &layouts.meanings);
        let path = write_table(out, MEANINGS_FILE, &meanings, self.style())?;
        summary.record(MEANINGS_FILE, meanings.len(), path);

        let sheet = workbook.sheet(&layouts.scores.window.sheet)?;
        let scores = extract_scores(&sheet, &layouts.scores);
        let path = write_table(out, SCORES_FILE, &scores, self.style())?;
        summary.record(SCORES_FILE, scores.len(), path);

        let sheet = workbook.sheet(&layouts.elements.sheet)?;
        let groups = extract_element_groups(&sheet, &layouts.elements);
        let path = write_table(out, ELEMENTS_FILE, &groups, self.style())?;
        summary.record(ELEMENTS_FILE, groups.len(), path);

        let sheet = workbook.sheet(&layouts.details.window.sheet)?;
        let details = extract_details(&sheet, &layouts.details);
        let path = write_table(out, DETAILS_FILE, &details, self.style())?;
        summary.record(DETAILS_FILE, details.len(), path);

        Ok(())
    }

    /// Re-read the written meanings table and replace the score table with
    /// scores derived from each Cục's luck label and meaning text
    pub fn derive_scores(&self, summary: &mut RunSummary) -> anyhow::Result<()> {
        let out = &self.config.paths.output_dir;
        let meanings_path = out.join(MEANINGS_FILE);

        let meanings = match read_table::<CucMeaning>(&meanings_path) {
            Ok(meanings) => meanings,
            Err(err) if err.is_not_found() => {
                return Err(err).with_context(|| {
                    format!(
                        "{} is required; run `extract` first",
                        meanings_path.display()
                    )
                });
            }
            Err(err) => return Err(err.into()),
        };
        tracing::info!("Deriving scores for {} Cục", meanings.len());

        let scores = derive_scores(&meanings, self.processor)?;
        for (key, score) in scores.iter() {
            tracing::debug!("Cục {}: score {}", key, score.score);
        }

        let path = write_table(out, SCORES_FILE, &scores, self.style())?;
        summary.record(SCORES_FILE, scores.len(), path);
        Ok(())
    }
}
