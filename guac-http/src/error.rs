/// Failures that prevent a response body from being classified at all.
///
/// Shape mismatches are not errors: they surface as the `Unrecognized`
/// variant of the per-endpoint response types.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
