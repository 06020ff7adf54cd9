use axum::{
    extract::{Query, State},
    Extension, Json,
};
use pantai_search::{select_reviews, RatingRange, ReviewFilter, ReviewSelection, SentimentFilter};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::dashboard::parse_sentiment;
use super::{map_search_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ReviewsQuery {
    pub title: String,
    pub sentiment: String,
    pub min_rating: Option<u8>,
    pub max_rating: Option<u8>,
    pub keyword: Option<String>,
    pub limit: Option<i64>,
}

/// Page size for the drill-down endpoint: defaults to the dashboard's page
/// size and never exceeds 50.
pub(super) fn normalize_limit(limit: Option<i64>) -> usize {
    let default = i64::try_from(pantai_search::REVIEW_PAGE_SIZE).unwrap_or(10);
    usize::try_from(limit.unwrap_or(default).clamp(1, 50)).unwrap_or(1)
}

/// Reviews for any `(title, sentiment)` pair, without the top-5 check the
/// dashboard applies.
pub(super) async fn list_reviews(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<ApiResponse<ReviewSelection>>, ApiError> {
    let rating = RatingRange::new(
        query.min_rating.unwrap_or(RatingRange::FULL.min()),
        query.max_rating.unwrap_or(RatingRange::FULL.max()),
    )
    .map_err(|e| map_search_error(req_id.0.clone(), &e))?;
    let sentiment =
        parse_sentiment(&query.sentiment).map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    let filter = ReviewFilter {
        rating,
        sentiment: SentimentFilter::All,
        keyword: query.keyword,
    };
    let filtered = filter.apply(state.dataset.reviews());
    let data = select_reviews(
        &filtered,
        &query.title,
        sentiment,
        normalize_limit(query.limit),
    );

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
