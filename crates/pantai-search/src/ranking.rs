//! Per-location aggregation and the two weighted rankings.
//!
//! Both rankings group rows by `title` in ascending title order and then
//! apply a stable descending sort on score, so equal scores keep
//! title-ascending order and repeated runs produce identical output.
//!
//! The `ln(1 + n)` volume factor rewards locations with more reviews while
//! keeping a single perfect review from dominating.

use std::collections::BTreeMap;

use pantai_core::{Review, Sentiment};
use serde::Serialize;

/// Number of locations in the headline ranking.
pub const GLOBAL_TOP_N: usize = 3;
/// Number of locations in each per-sentiment panel.
pub const SENTIMENT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStats {
    pub title: String,
    /// Mean star rating, rounded to 2 decimals.
    pub rating_mean: f64,
    pub review_count: usize,
    /// Share of positive reviews in percent, rounded to 2 decimals.
    pub positive_percentage: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentLocationStats {
    pub title: String,
    pub rating_mean: f64,
    pub review_count: usize,
    pub score: f64,
    /// Whole stars shown next to the location (`rating_mean` rounded).
    pub display_stars: u8,
}

/// Outcome of ranking one sentiment category.
///
/// `Empty` means the category has no rows in the current filtered set; it is
/// kept distinct so renderers can say so for that category specifically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SentimentRanking {
    Ranked { locations: Vec<SentimentLocationStats> },
    Empty,
}

impl SentimentRanking {
    #[must_use]
    pub fn locations(&self) -> &[SentimentLocationStats] {
        match self {
            SentimentRanking::Ranked { locations } => locations,
            SentimentRanking::Empty => &[],
        }
    }

    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.locations().iter().any(|l| l.title == title)
    }
}

#[derive(Debug, Default)]
struct Tally {
    star_sum: u32,
    count: usize,
    positives: usize,
}

impl Tally {
    #[allow(clippy::cast_precision_loss)]
    fn rating_mean(&self) -> f64 {
        round2(f64::from(self.star_sum) / self.count as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn positive_percentage(&self) -> f64 {
        round2(self.positives as f64 / self.count as f64 * 100.0)
    }
}

fn tally_by_title<'a, I>(reviews: I) -> BTreeMap<&'a str, Tally>
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut groups: BTreeMap<&str, Tally> = BTreeMap::new();
    for review in reviews {
        let tally = groups.entry(review.title.as_str()).or_default();
        tally.star_sum += u32::from(review.stars);
        tally.count += 1;
        if review.sentiment == Sentiment::Positive {
            tally.positives += 1;
        }
    }
    groups
}

/// Two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[allow(clippy::cast_precision_loss)]
fn volume_weight(review_count: usize) -> f64 {
    (review_count as f64).ln_1p()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn display_stars(rating_mean: f64) -> u8 {
    rating_mean.round_ties_even().clamp(0.0, 5.0) as u8
}

/// Global ranking: `rating_mean × positive share × ln(1 + review_count)`.
///
/// Returns at most `top_n` locations; fewer when fewer titles exist.
#[must_use]
pub fn rank_locations(reviews: &[&Review], top_n: usize) -> Vec<LocationStats> {
    let mut stats: Vec<LocationStats> = tally_by_title(reviews.iter().copied())
        .into_iter()
        .map(|(title, tally)| {
            let rating_mean = tally.rating_mean();
            let positive_percentage = tally.positive_percentage();
            LocationStats {
                title: title.to_string(),
                rating_mean,
                review_count: tally.count,
                positive_percentage,
                score: rating_mean * (positive_percentage / 100.0) * volume_weight(tally.count),
            }
        })
        .collect();

    stats.sort_by(|a, b| b.score.total_cmp(&a.score));
    stats.truncate(top_n);
    stats
}

/// Ranking within one sentiment: `rating_mean × ln(1 + review_count)`.
///
/// Rows are restricted to `sentiment` before aggregating, which is why the
/// positive-share term is absent.
#[must_use]
pub fn rank_by_sentiment(
    reviews: &[&Review],
    sentiment: Sentiment,
    top_n: usize,
) -> SentimentRanking {
    let groups = tally_by_title(
        reviews
            .iter()
            .copied()
            .filter(|r| r.sentiment == sentiment),
    );
    if groups.is_empty() {
        return SentimentRanking::Empty;
    }

    let mut locations: Vec<SentimentLocationStats> = groups
        .into_iter()
        .map(|(title, tally)| {
            let rating_mean = tally.rating_mean();
            SentimentLocationStats {
                title: title.to_string(),
                rating_mean,
                review_count: tally.count,
                score: rating_mean * volume_weight(tally.count),
                display_stars: display_stars(rating_mean),
            }
        })
        .collect();

    locations.sort_by(|a, b| b.score.total_cmp(&a.score));
    locations.truncate(top_n);
    SentimentRanking::Ranked { locations }
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod tests;
