use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid rating range {min}..={max}; expected 1 <= min <= max <= 5")]
    InvalidRatingRange { min: u8, max: u8 },

    #[error("unknown sentiment filter '{0}'; expected all, positive, neutral or negative")]
    UnknownSentiment(String),
}
