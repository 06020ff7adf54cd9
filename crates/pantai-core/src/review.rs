use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownSentiment;

/// Polarity label attached to every review in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Panel order used by every ranking view.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive parse of a dataset label.
impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(UnknownSentiment(other.to_string())),
        }
    }
}

/// One row of the labelled dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// Location name. Not unique: many reviews share a title.
    pub title: String,
    /// Star rating in `1..=5`.
    pub stars: u8,
    pub sentiment: Sentiment,
    pub text: Option<String>,
    /// Normalized copy of `text` used for keyword search. Derived at load time.
    #[serde(skip)]
    pub text_processed: String,
}

impl Review {
    /// Build a review, deriving the searchable text from `text`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        stars: u8,
        sentiment: Sentiment,
        text: Option<String>,
    ) -> Self {
        let text_processed = crate::normalize_text(text.as_deref());
        Self {
            title: title.into(),
            stars,
            sentiment,
            text,
            text_processed,
        }
    }
}
