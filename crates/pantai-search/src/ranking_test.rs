use super::*;

fn review(title: &str, stars: u8, sentiment: Sentiment) -> Review {
    Review::new(title, stars, sentiment, None)
}

fn refs(reviews: &[Review]) -> Vec<&Review> {
    reviews.iter().collect()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn more_reviews_outrank_single_review_at_same_quality() {
    let reviews = vec![
        review("A", 5, Sentiment::Positive),
        review("A", 5, Sentiment::Positive),
        review("B", 5, Sentiment::Positive),
    ];
    let ranked = rank_locations(&refs(&reviews), GLOBAL_TOP_N);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].title, "A");
    assert!(approx_eq(ranked[0].rating_mean, 5.0));
    assert_eq!(ranked[0].review_count, 2);
    assert!(approx_eq(ranked[0].positive_percentage, 100.0));
    assert!(approx_eq(ranked[0].score, 5.0 * 3.0_f64.ln()));
    assert!((ranked[0].score - 5.49).abs() < 0.01);

    assert_eq!(ranked[1].title, "B");
    assert!(approx_eq(ranked[1].score, 5.0 * 2.0_f64.ln()));
    assert!((ranked[1].score - 3.47).abs() < 0.01);
}

#[test]
fn mean_and_positive_share_are_rounded_to_two_decimals() {
    let reviews = vec![
        review("Bobby", 5, Sentiment::Positive),
        review("Bobby", 4, Sentiment::Neutral),
        review("Bobby", 4, Sentiment::Negative),
    ];
    let ranked = rank_locations(&refs(&reviews), GLOBAL_TOP_N);
    assert!(approx_eq(ranked[0].rating_mean, 4.33));
    assert!(approx_eq(ranked[0].positive_percentage, 33.33));
    assert!(approx_eq(
        ranked[0].score,
        4.33 * 0.3333 * 4.0_f64.ln()
    ));
}

#[test]
fn location_without_positive_reviews_scores_zero() {
    let reviews = vec![
        review("Nirwana", 5, Sentiment::Neutral),
        review("Bobby", 1, Sentiment::Positive),
    ];
    let ranked = rank_locations(&refs(&reviews), GLOBAL_TOP_N);
    assert_eq!(ranked[0].title, "Bobby");
    assert_eq!(ranked[1].title, "Nirwana");
    assert!(approx_eq(ranked[1].score, 0.0));
}

#[test]
fn global_ranking_is_truncated_to_top_n() {
    let reviews = vec![
        review("A", 5, Sentiment::Positive),
        review("B", 4, Sentiment::Positive),
        review("C", 3, Sentiment::Positive),
        review("D", 2, Sentiment::Positive),
    ];
    let ranked = rank_locations(&refs(&reviews), GLOBAL_TOP_N);
    let titles: Vec<&str> = ranked.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn fewer_titles_than_top_n_returns_all_without_padding() {
    let reviews = vec![review("Solo", 3, Sentiment::Positive)];
    assert_eq!(rank_locations(&refs(&reviews), GLOBAL_TOP_N).len(), 1);
    assert!(rank_locations(&[], GLOBAL_TOP_N).is_empty());
}

#[test]
fn equal_scores_break_ties_by_title_ascending() {
    let reviews = vec![
        review("Pantai Pokemon", 4, Sentiment::Positive),
        review("Pantai Annora", 4, Sentiment::Positive),
        review("Pantai Bobby", 4, Sentiment::Positive),
    ];
    let ranked = rank_locations(&refs(&reviews), GLOBAL_TOP_N);
    let titles: Vec<&str> = ranked.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Pantai Annora", "Pantai Bobby", "Pantai Pokemon"]);
}

#[test]
fn ranking_does_not_depend_on_row_order() {
    let mut reviews = vec![
        review("A", 4, Sentiment::Positive),
        review("B", 4, Sentiment::Positive),
        review("C", 5, Sentiment::Negative),
        review("A", 3, Sentiment::Neutral),
        review("B", 5, Sentiment::Positive),
        review("D", 4, Sentiment::Positive),
    ];
    let forward = rank_locations(&refs(&reviews), GLOBAL_TOP_N);
    let forward_pos = rank_by_sentiment(&refs(&reviews), Sentiment::Positive, SENTIMENT_TOP_N);
    reviews.reverse();
    assert_eq!(rank_locations(&refs(&reviews), GLOBAL_TOP_N), forward);
    assert_eq!(
        rank_by_sentiment(&refs(&reviews), Sentiment::Positive, SENTIMENT_TOP_N),
        forward_pos
    );
}

#[test]
fn score_strictly_increases_with_review_count() {
    let mut previous = f64::NEG_INFINITY;
    for n in 1..=50 {
        let reviews: Vec<Review> = (0..n)
            .map(|_| review("A", 4, Sentiment::Positive))
            .collect();
        let score = rank_locations(&refs(&reviews), 1)[0].score;
        assert!(score > previous, "score did not increase at n={n}");
        previous = score;
    }
}

#[test]
fn sentiment_ranking_only_counts_that_sentiment() {
    let reviews = vec![
        review("A", 5, Sentiment::Positive),
        review("A", 1, Sentiment::Negative),
        review("A", 1, Sentiment::Negative),
        review("B", 2, Sentiment::Negative),
    ];
    let ranking = rank_by_sentiment(&refs(&reviews), Sentiment::Negative, SENTIMENT_TOP_N);
    let locations = ranking.locations();
    assert_eq!(locations.len(), 2);
    // B: 2 × ln 2 ≈ 1.39 beats A: 1 × ln 3 ≈ 1.10
    assert_eq!(locations[0].title, "B");
    assert!(approx_eq(locations[0].score, 2.0 * 2.0_f64.ln()));
    assert_eq!(locations[1].title, "A");
    assert_eq!(locations[1].review_count, 2);
    assert!(approx_eq(locations[1].rating_mean, 1.0));
    assert!(approx_eq(locations[1].score, 3.0_f64.ln()));
}

#[test]
fn sentiment_ranking_truncates_to_top_five() {
    let reviews: Vec<Review> = ["A", "B", "C", "D", "E", "F", "G"]
        .iter()
        .map(|t| review(t, 4, Sentiment::Neutral))
        .collect();
    let ranking = rank_by_sentiment(&refs(&reviews), Sentiment::Neutral, SENTIMENT_TOP_N);
    let titles: Vec<&str> = ranking.locations().iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn sentiment_without_rows_is_empty_outcome() {
    let reviews = vec![review("A", 5, Sentiment::Positive)];
    let ranking = rank_by_sentiment(&refs(&reviews), Sentiment::Negative, SENTIMENT_TOP_N);
    assert_eq!(ranking, SentimentRanking::Empty);
    assert!(ranking.locations().is_empty());
    assert!(!ranking.contains_title("A"));
}

#[test]
fn display_stars_round_the_mean() {
    let reviews = vec![
        review("A", 5, Sentiment::Positive),
        review("A", 4, Sentiment::Positive),
        review("A", 4, Sentiment::Positive),
        review("B", 3, Sentiment::Positive),
        review("B", 2, Sentiment::Positive),
    ];
    let ranking = rank_by_sentiment(&refs(&reviews), Sentiment::Positive, SENTIMENT_TOP_N);
    let a = &ranking.locations()[0];
    assert_eq!(a.title, "A");
    assert_eq!(a.display_stars, 4);
    let b = &ranking.locations()[1];
    assert!(approx_eq(b.rating_mean, 2.5));
    assert_eq!(b.display_stars, 2);
}

#[test]
fn two_decimal_ties_round_to_even() {
    // 17 stars over 8 reviews is exactly 2.125.
    let mut reviews = vec![review("A", 3, Sentiment::Positive)];
    for _ in 0..7 {
        reviews.push(review("A", 2, Sentiment::Negative));
    }
    let ranked = rank_locations(&refs(&reviews), GLOBAL_TOP_N);
    assert!(approx_eq(ranked[0].rating_mean, 2.12));
    assert!(approx_eq(ranked[0].positive_percentage, 12.5));

    // One positive in 32 is exactly 3.125%.
    let mut reviews = vec![review("B", 4, Sentiment::Positive)];
    for _ in 0..31 {
        reviews.push(review("B", 4, Sentiment::Neutral));
    }
    let ranked = rank_locations(&refs(&reviews), GLOBAL_TOP_N);
    assert!(approx_eq(ranked[0].positive_percentage, 3.12));
}

#[test]
fn empty_outcome_serializes_with_status_tag() {
    let json = serde_json::to_value(SentimentRanking::Empty).expect("serialize");
    assert_eq!(json["status"], "empty");
    let ranked = SentimentRanking::Ranked { locations: vec![] };
    let json = serde_json::to_value(ranked).expect("serialize");
    assert_eq!(json["status"], "ranked");
    assert!(json["locations"].as_array().is_some());
}
