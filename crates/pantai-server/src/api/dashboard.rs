use axum::{
    extract::{Query, State},
    Extension, Json,
};
use pantai_core::Sentiment;
use pantai_search::{
    build_dashboard, DashboardQuery, DashboardView, RatingRange, ReviewFilter, SearchError,
    Selection, SentimentFilter,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_search_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// Dashboard controls as query parameters. Every field is optional; missing
/// ones fall back to the unfiltered view.
#[derive(Debug, Default, Deserialize)]
pub(super) struct DashboardParams {
    pub min_rating: Option<u8>,
    pub max_rating: Option<u8>,
    pub sentiment: Option<String>,
    pub keyword: Option<String>,
    pub selected_title: Option<String>,
    pub selected_sentiment: Option<String>,
}

impl DashboardParams {
    fn filter(&self) -> Result<ReviewFilter, SearchError> {
        let rating = RatingRange::new(
            self.min_rating.unwrap_or(RatingRange::FULL.min()),
            self.max_rating.unwrap_or(RatingRange::FULL.max()),
        )?;
        let sentiment = match self.sentiment.as_deref() {
            Some(raw) => raw.parse::<SentimentFilter>()?,
            None => SentimentFilter::All,
        };
        Ok(ReviewFilter {
            rating,
            sentiment,
            keyword: self.keyword.clone(),
        })
    }
}

pub(super) fn parse_sentiment(raw: &str) -> Result<Sentiment, SearchError> {
    raw.trim()
        .parse::<Sentiment>()
        .map_err(|_| SearchError::UnknownSentiment(raw.to_string()))
}

pub(super) async fn get_dashboard(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<ApiResponse<DashboardView>>, ApiError> {
    let filter = params
        .filter()
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    let selection = match (params.selected_title, params.selected_sentiment.as_deref()) {
        (Some(title), Some(raw)) => Some(Selection {
            title,
            sentiment: parse_sentiment(raw).map_err(|e| map_search_error(req_id.0.clone(), &e))?,
        }),
        (None, None) => None,
        _ => {
            return Err(ApiError::new(
                req_id.0,
                "bad_request",
                "selected_title and selected_sentiment must be given together",
            ))
        }
    };

    let view = build_dashboard(&state.dataset, &DashboardQuery { filter, selection });

    Ok(Json(ApiResponse {
        data: view,
        meta: ResponseMeta::new(req_id.0),
    }))
}
