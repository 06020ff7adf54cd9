//! Row selection by rating range, sentiment and keyword.

use std::str::FromStr;

use pantai_core::{Review, Sentiment};
use serde::Serialize;

use crate::SearchError;

/// Inclusive star-rating bounds with `1 <= min <= max <= 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingRange {
    min: u8,
    max: u8,
}

impl RatingRange {
    pub const FULL: RatingRange = RatingRange { min: 1, max: 5 };

    /// # Errors
    ///
    /// Returns [`SearchError::InvalidRatingRange`] unless `1 <= min <= max <= 5`.
    pub fn new(min: u8, max: u8) -> Result<Self, SearchError> {
        if min < 1 || max > 5 || min > max {
            return Err(SearchError::InvalidRatingRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> u8 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> u8 {
        self.max
    }

    #[must_use]
    pub fn contains(self, stars: u8) -> bool {
        (self.min..=self.max).contains(&stars)
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self::FULL
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentimentFilter {
    #[default]
    All,
    Only(Sentiment),
}

impl SentimentFilter {
    #[must_use]
    pub fn matches(self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(selected) => selected == sentiment,
        }
    }
}

impl std::fmt::Display for SentimentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentFilter::All => f.write_str("all"),
            SentimentFilter::Only(s) => write!(f, "{s}"),
        }
    }
}

/// `"all"` (or the Indonesian `"semua"`) in any case selects every
/// sentiment; category names must match exactly.
impl FromStr for SentimentFilter {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("semua") {
            return Ok(SentimentFilter::All);
        }
        trimmed
            .parse::<Sentiment>()
            .map(SentimentFilter::Only)
            .map_err(|_| SearchError::UnknownSentiment(s.to_string()))
    }
}

/// The three dashboard filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub rating: RatingRange,
    pub sentiment: SentimentFilter,
    pub keyword: Option<String>,
}

impl ReviewFilter {
    /// Lowercased keyword, or `None` when the keyword is missing or blank.
    fn search_term(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .map(str::to_lowercase)
    }

    /// Return the reviews that satisfy every active predicate, in their
    /// original order.
    #[must_use]
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        let term = self.search_term();
        reviews
            .iter()
            .filter(|r| self.rating.contains(r.stars))
            .filter(|r| self.sentiment.matches(r.sentiment))
            .filter(|r| {
                term.as_deref()
                    .is_none_or(|t| r.text_processed.contains(t))
            })
            .collect()
    }
}
