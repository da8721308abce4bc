use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArnError {
    #[error("not an ARN: missing 'arn:' prefix")]
    MissingPrefix,

    #[error("malformed ARN: expected 6 colon-separated sections, found {0}")]
    NotEnoughSections(usize),

    #[error("missing value for template variable {0}")]
    MissingVariable(&'static str),
}
