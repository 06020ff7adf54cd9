//! Drill-down into the raw reviews of one location/sentiment pair.

use pantai_core::{Review, Sentiment};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Maximum number of reviews shown in a drill-down.
pub const REVIEW_PAGE_SIZE: usize = 10;

/// The "show reviews for" pointer. Owned by the caller and passed in on
/// every request; it is never stored by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub title: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub stars: u8,
    pub text: Option<String>,
}

/// First page of matching reviews plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPage {
    pub title: String,
    pub sentiment: Sentiment,
    pub reviews: Vec<ReviewRow>,
    pub total: usize,
}

impl ReviewPage {
    #[must_use]
    pub fn shown(&self) -> usize {
        self.reviews.len()
    }

    /// `"Showing X of Y"` footer for the review table.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("Showing {} of {}", self.shown(), self.total)
    }
}

impl Serialize for ReviewPage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReviewPage", 6)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("sentiment", &self.sentiment)?;
        state.serialize_field("reviews", &self.reviews)?;
        state.serialize_field("shown", &self.shown())?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("caption", &self.caption())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReviewSelection {
    Found(ReviewPage),
    NoMatches { title: String, sentiment: Sentiment },
}

/// Return the first `page_size` reviews whose title and sentiment both match
/// exactly, keeping their original order.
///
/// Any pair is accepted. Deciding whether a selection is still relevant to
/// the current rankings is left to the caller.
#[must_use]
pub fn select_reviews(
    reviews: &[&Review],
    title: &str,
    sentiment: Sentiment,
    page_size: usize,
) -> ReviewSelection {
    let mut total = 0;
    let mut page = Vec::with_capacity(page_size.min(reviews.len()));
    for review in reviews
        .iter()
        .filter(|r| r.sentiment == sentiment && r.title == title)
    {
        total += 1;
        if page.len() < page_size {
            page.push(ReviewRow {
                stars: review.stars,
                text: review.text.clone(),
            });
        }
    }

    if total == 0 {
        return ReviewSelection::NoMatches {
            title: title.to_string(),
            sentiment,
        };
    }

    ReviewSelection::Found(ReviewPage {
        title: title.to_string(),
        sentiment,
        reviews: page,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(title: &str, sentiment: Sentiment, count: usize) -> Vec<Review> {
        (0..count)
            .map(|i| {
                let stars = u8::try_from(i % 5 + 1).expect("stars fit in u8");
                Review::new(title, stars, sentiment, Some(format!("review {i}")))
            })
            .collect()
    }

    #[test]
    fn caps_page_and_reports_total() {
        let reviews = rows("X", Sentiment::Positive, 15);
        let refs: Vec<&Review> = reviews.iter().collect();

        let ReviewSelection::Found(page) =
            select_reviews(&refs, "X", Sentiment::Positive, REVIEW_PAGE_SIZE)
        else {
            panic!("expected a page of reviews");
        };
        assert_eq!(page.shown(), 10);
        assert_eq!(page.total, 15);
        assert_eq!(page.caption(), "Showing 10 of 15");
        assert_eq!(page.reviews[0].text.as_deref(), Some("review 0"));
        assert_eq!(page.reviews[9].text.as_deref(), Some("review 9"));
    }

    #[test]
    fn matches_title_and_sentiment_exactly() {
        let mut reviews = rows("X", Sentiment::Positive, 2);
        reviews.extend(rows("X", Sentiment::Negative, 3));
        reviews.extend(rows("x", Sentiment::Positive, 4));
        let refs: Vec<&Review> = reviews.iter().collect();

        let ReviewSelection::Found(page) =
            select_reviews(&refs, "X", Sentiment::Negative, REVIEW_PAGE_SIZE)
        else {
            panic!("expected a page of reviews");
        };
        assert_eq!(page.total, 3);
        assert_eq!(page.caption(), "Showing 3 of 3");
    }

    #[test]
    fn missing_pair_is_explicit_no_matches() {
        let reviews = rows("X", Sentiment::Positive, 2);
        let refs: Vec<&Review> = reviews.iter().collect();
        assert_eq!(
            select_reviews(&refs, "Y", Sentiment::Positive, REVIEW_PAGE_SIZE),
            ReviewSelection::NoMatches {
                title: "Y".to_string(),
                sentiment: Sentiment::Positive,
            }
        );
    }

    #[test]
    fn page_serializes_caption_and_status() {
        let reviews = rows("X", Sentiment::Neutral, 1);
        let refs: Vec<&Review> = reviews.iter().collect();
        let selection = select_reviews(&refs, "X", Sentiment::Neutral, REVIEW_PAGE_SIZE);
        let json = serde_json::to_value(&selection).expect("serialize");
        assert_eq!(json["status"], "found");
        assert_eq!(json["caption"], "Showing 1 of 1");
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["reviews"][0]["stars"], 1);
    }
}
