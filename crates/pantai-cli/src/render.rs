//! Plain-text rendering of dashboard views for the terminal.

use std::io::{self, Write};

use pantai_core::Sentiment;
use pantai_search::{DashboardView, ReviewSelection, SentimentPanel, SentimentRanking};

const RANK_BADGES: [&str; 3] = ["1st", "2nd", "3rd"];

fn capitalize(sentiment: Sentiment) -> String {
    let label = sentiment.as_str();
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Render the whole dashboard: metrics, top-3, sentiment panels and the
/// drill-down when one is present.
pub(crate) fn render_dashboard(out: &mut impl Write, view: &DashboardView) -> io::Result<()> {
    writeln!(out, "Search results: {} reviews found", view.result_count)?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<18}{:<18}NEGATIVE REVIEWS",
        "AVERAGE RATING", "POSITIVE REVIEWS"
    )?;
    writeln!(
        out,
        "{:<18}{:<18}{}",
        view.summary.mean_rating_label(),
        view.summary.positive_count,
        view.summary.negative_count
    )?;
    writeln!(out)?;

    if view.no_matches {
        writeln!(
            out,
            "No reviews match the current filters. Try widening the rating range, sentiment or keyword."
        )?;
        return Ok(());
    }

    writeln!(out, "Top 3 beaches")?;
    writeln!(out, "{:<6}{:<30}{:<9}{:<11}REVIEWS", "RANK", "BEACH", "RATING", "POSITIVE")?;
    for (badge, stats) in RANK_BADGES.iter().zip(&view.top_locations) {
        let positive = format!("{:.1}%", stats.positive_percentage);
        writeln!(
            out,
            "{:<6}{:<30}{:<9.2}{:<11}{}",
            badge,
            stats.title,
            stats.rating_mean,
            positive,
            stats.review_count
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Recommended beaches by sentiment")?;
    for panel in &view.sentiment_panels {
        render_panel(out, panel)?;
    }

    if let Some(selection) = &view.drill_down {
        writeln!(out)?;
        render_review_selection(out, selection)?;
    }

    Ok(())
}

fn render_panel(out: &mut impl Write, panel: &SentimentPanel) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{} ({})]", capitalize(panel.sentiment), panel.review_count)?;
    match &panel.ranking {
        SentimentRanking::Empty => {
            writeln!(out, "  no data for sentiment {}", panel.sentiment)?;
        }
        SentimentRanking::Ranked { locations } => {
            for (idx, stats) in locations.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {:<30}{:<7}({:.1})  {} reviews",
                    idx + 1,
                    stats.title,
                    "*".repeat(usize::from(stats.display_stars)),
                    stats.rating_mean,
                    stats.review_count
                )?;
            }
        }
    }
    Ok(())
}

/// Render a drill-down table, or a notice when the pair has no reviews.
pub(crate) fn render_review_selection(
    out: &mut impl Write,
    selection: &ReviewSelection,
) -> io::Result<()> {
    match selection {
        ReviewSelection::NoMatches { title, sentiment } => {
            writeln!(out, "No {sentiment} reviews found for {title}.")?;
        }
        ReviewSelection::Found(page) => {
            writeln!(out, "Reviews for {} ({})", page.title, page.sentiment)?;
            writeln!(out, "{:<7}REVIEW", "STARS")?;
            for row in &page.reviews {
                writeln!(
                    out,
                    "{:<7}{}",
                    row.stars,
                    row.text.as_deref().unwrap_or("-")
                )?;
            }
            writeln!(out, "{}", page.caption())?;
        }
    }
    Ok(())
}

pub(crate) fn render_sentiment_options(
    out: &mut impl Write,
    labels: &[Sentiment],
) -> io::Result<()> {
    writeln!(out, "all")?;
    for label in labels {
        writeln!(out, "{label}")?;
    }
    Ok(())
}
