#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("Cục key is not a number: {0:?}")]
    InvalidKey(String),
}
