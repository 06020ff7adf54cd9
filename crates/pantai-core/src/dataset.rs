//! Loading the labelled review CSV into an immutable [`Dataset`].

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

use crate::review::{Review, Sentiment};
use crate::LoadError;

/// Columns that must be present in the header row. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["title", "stars", "sentimen", "text"];

#[derive(Debug, Deserialize)]
struct RawRow {
    title: String,
    stars: String,
    sentimen: String,
    text: Option<String>,
}

/// The full review table, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    reviews: Vec<Review>,
}

impl Dataset {
    #[must_use]
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Parse a dataset from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when a required column is missing, a row is
    /// malformed, or the CSV itself cannot be parsed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column.to_string()));
            }
        }

        let mut reviews = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            reviews.push(parse_record(&record, &headers)?);
        }

        Ok(Self { reviews })
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Distinct sentiment labels in order of first appearance.
    #[must_use]
    pub fn sentiment_labels(&self) -> Vec<Sentiment> {
        let mut seen = Vec::with_capacity(Sentiment::ALL.len());
        for review in &self.reviews {
            if !seen.contains(&review.sentiment) {
                seen.push(review.sentiment);
                if seen.len() == Sentiment::ALL.len() {
                    break;
                }
            }
        }
        seen
    }
}

/// Load and validate the review dataset from a CSV file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened, or any error from
/// [`Dataset::from_reader`].
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let dataset = Dataset::from_reader(std::io::BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        reviews = dataset.len(),
        "loaded review dataset"
    );
    Ok(dataset)
}

fn parse_record(record: &StringRecord, headers: &StringRecord) -> Result<Review, LoadError> {
    let line = record.position().map_or(0, csv::Position::line);
    let invalid = |reason: String| LoadError::InvalidRow { line, reason };

    let raw: RawRow = record
        .deserialize(Some(headers))
        .map_err(|e| invalid(e.to_string()))?;

    // Titles group verbatim; only all-blank ones are rejected.
    if raw.title.trim().is_empty() {
        return Err(invalid("title must be non-empty".to_string()));
    }

    let stars = parse_stars(&raw.stars).ok_or_else(|| {
        invalid(format!(
            "stars must be an integer between 1 and 5, got '{}'",
            raw.stars
        ))
    })?;

    let sentiment: Sentiment = raw
        .sentimen
        .trim()
        .parse()
        .map_err(|e: crate::UnknownSentiment| invalid(e.to_string()))?;

    Ok(Review::new(raw.title, stars, sentiment, raw.text))
}

/// Accepts `"4"` as well as float-formatted integers such as `"4.0"`.
fn parse_stars(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u8>() {
        return (1..=5).contains(&value).then_some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    (1..=5u8).find(|&s| f64::from(s) == value)
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
