use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no content for locale `{0}`")]
    MissingLocale(String),
    #[error("locale `{0}` defines no sections")]
    NoSections(String),
}
