//! One full recomputation of the dashboard for a set of controls.

use pantai_core::{Dataset, Review, Sentiment};
use serde::Serialize;

use crate::filter::ReviewFilter;
use crate::ranking::{
    rank_by_sentiment, rank_locations, LocationStats, SentimentRanking, GLOBAL_TOP_N,
    SENTIMENT_TOP_N,
};
use crate::selector::{select_reviews, ReviewSelection, Selection, REVIEW_PAGE_SIZE};

/// Everything a single interaction supplies: the filter controls and the
/// optional drill-down pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub filter: ReviewFilter,
    pub selection: Option<Selection>,
}

/// Headline metrics over the filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub review_count: usize,
    /// `None` when there are no reviews to average.
    pub mean_rating: Option<f64>,
    pub positive_count: usize,
    pub negative_count: usize,
}

impl SummaryStats {
    #[allow(clippy::cast_precision_loss)]
    fn from_reviews(reviews: &[&Review]) -> Self {
        let count_of = |s: Sentiment| reviews.iter().filter(|r| r.sentiment == s).count();
        let mean_rating = (!reviews.is_empty()).then(|| {
            let sum: u32 = reviews.iter().map(|r| u32::from(r.stars)).sum();
            f64::from(sum) / reviews.len() as f64
        });
        Self {
            review_count: reviews.len(),
            mean_rating,
            positive_count: count_of(Sentiment::Positive),
            negative_count: count_of(Sentiment::Negative),
        }
    }

    /// Mean rating with two decimals, or `"N/A"` for an empty set.
    #[must_use]
    pub fn mean_rating_label(&self) -> String {
        self.mean_rating
            .map_or_else(|| "N/A".to_string(), |m| format!("{m:.2}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPanel {
    pub sentiment: Sentiment,
    /// Filtered reviews carrying this sentiment.
    pub review_count: usize,
    pub ranking: SentimentRanking,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub result_count: usize,
    /// Set when the filters leave no reviews at all. Rankings are then empty.
    pub no_matches: bool,
    pub summary: SummaryStats,
    pub top_locations: Vec<LocationStats>,
    /// Positive, neutral and negative panels, in that order.
    pub sentiment_panels: Vec<SentimentPanel>,
    pub drill_down: Option<ReviewSelection>,
    pub sentiment_options: Vec<String>,
}

impl DashboardView {
    #[must_use]
    pub fn panel(&self, sentiment: Sentiment) -> Option<&SentimentPanel> {
        self.sentiment_panels
            .iter()
            .find(|p| p.sentiment == sentiment)
    }
}

/// Run the filter, both rankings and the validated drill-down.
#[must_use]
pub fn build_dashboard(dataset: &Dataset, query: &DashboardQuery) -> DashboardView {
    let filtered = query.filter.apply(dataset.reviews());
    tracing::debug!(
        min_rating = query.filter.rating.min(),
        max_rating = query.filter.rating.max(),
        sentiment = %query.filter.sentiment,
        keyword = query.filter.keyword.as_deref().unwrap_or(""),
        results = filtered.len(),
        "dashboard recomputed"
    );

    let summary = SummaryStats::from_reviews(&filtered);
    let no_matches = filtered.is_empty();

    let (top_locations, sentiment_panels) = if no_matches {
        (Vec::new(), Vec::new())
    } else {
        let panels = Sentiment::ALL
            .iter()
            .map(|&sentiment| SentimentPanel {
                sentiment,
                review_count: filtered.iter().filter(|r| r.sentiment == sentiment).count(),
                ranking: rank_by_sentiment(&filtered, sentiment, SENTIMENT_TOP_N),
            })
            .collect();
        (rank_locations(&filtered, GLOBAL_TOP_N), panels)
    };

    let drill_down = query
        .selection
        .as_ref()
        .and_then(|selection| resolve_drill_down(selection, &sentiment_panels, &filtered));

    let sentiment_options = std::iter::once("all".to_string())
        .chain(dataset.sentiment_labels().iter().map(ToString::to_string))
        .collect();

    DashboardView {
        result_count: filtered.len(),
        no_matches,
        summary,
        top_locations,
        sentiment_panels,
        drill_down,
        sentiment_options,
    }
}

/// A selection only renders while its title is still in the top-5 of its
/// sentiment panel; stale pointers are dropped without error.
fn resolve_drill_down(
    selection: &Selection,
    panels: &[SentimentPanel],
    filtered: &[&Review],
) -> Option<ReviewSelection> {
    let still_ranked = panels
        .iter()
        .any(|p| p.sentiment == selection.sentiment && p.ranking.contains_title(&selection.title));
    if !still_ranked {
        tracing::debug!(
            title = %selection.title,
            sentiment = %selection.sentiment,
            "selection no longer in top ranking; hiding drill-down"
        );
        return None;
    }
    Some(select_reviews(
        filtered,
        &selection.title,
        selection.sentiment,
        REVIEW_PAGE_SIZE,
    ))
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
