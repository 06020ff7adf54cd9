//! Filtering, ranking and drill-down over the Pantai review dataset.
//!
//! Every interaction runs the same pure pipeline: a [`ReviewFilter`] narrows
//! the dataset, the ranking functions aggregate the filtered rows by location
//! title, and the selector pages through raw reviews for one
//! location/sentiment pair. [`build_dashboard`] composes all three into the
//! view model rendered by the CLI and served by the HTTP API.

pub mod dashboard;
pub mod error;
pub mod filter;
pub mod ranking;
pub mod selector;

pub use dashboard::{build_dashboard, DashboardQuery, DashboardView, SentimentPanel, SummaryStats};
pub use error::SearchError;
pub use filter::{RatingRange, ReviewFilter, SentimentFilter};
pub use pantai_core::normalize_text;
pub use ranking::{
    rank_by_sentiment, rank_locations, LocationStats, SentimentLocationStats, SentimentRanking,
    GLOBAL_TOP_N, SENTIMENT_TOP_N,
};
pub use selector::{select_reviews, ReviewPage, ReviewRow, ReviewSelection, Selection, REVIEW_PAGE_SIZE};
