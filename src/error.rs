use thiserror::Error;

/// Client-side error taxonomy.
///
/// `Remote` means the server processed the request and rejected it (its
/// message is surfaced verbatim); `Transport` means the request never
/// completed or the body could not be decoded; `Validation` is a local
/// rejection that never produced a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("could not reach server: {0}")]
    Transport(String),

    #[error("{0}")]
    Remote(String),
}
