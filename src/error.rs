use thiserror::Error;

use crate::client::TransportError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Too Many Requests")]
    TooManyRequests,
    #[error("Access forbidden, the web API did not return a readable response")]
    AccessForbidden,
    #[error("Match history of this player is private")]
    PrivateProfile,
    #[error("Match not found")]
    MatchNotFound,
    #[error("Failed to decode web API response: {0}")]
    Parsing(String),
    #[error("Unknown web API response: {0}")]
    Unknown(String),
    #[error("{0}")]
    Generic(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Only throttling is worth another attempt, everything else is final.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TooManyRequests)
    }
}
