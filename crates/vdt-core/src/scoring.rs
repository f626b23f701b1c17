use vdt_types::{CucMeanings, CucScore, CucScores};

use crate::error::ScoreError;
use crate::language::LuckScorer;

/// Score every Cục in `meanings`, keeping key order
pub fn derive_scores<S: LuckScorer + ?Sized>(
    meanings: &CucMeanings,
    scorer: &S,
) -> Result<CucScores, ScoreError> {
    let mut scores = CucScores::new();

    for (key, meaning) in meanings.iter() {
        let number: i64 = key
            .trim()
            .parse()
            .map_err(|_| ScoreError::InvalidKey(key.to_string()))?;
        let score = scorer.score(&meaning.luck, &meaning.meaning);

        scores.insert(
            key,
            CucScore {
                number,
                name: meaning.name.clone(),
                score: i64::from(score),
            },
        );
    }

    Ok(scores)
}
