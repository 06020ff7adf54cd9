mod render;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pantai_core::{Dataset, Sentiment};
use pantai_search::{
    build_dashboard, select_reviews, DashboardQuery, RatingRange, ReviewFilter, SearchError,
    SentimentFilter, Selection, REVIEW_PAGE_SIZE,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pantai-cli")]
#[command(about = "Search and rank Karimunjawa beach reviews")]
struct Cli {
    /// Review dataset CSV (overrides PANTAI_DATASET_PATH)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show result count, metrics, top-3 ranking and per-sentiment panels
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,

        /// Expand the reviews of this beach (must be in its sentiment's top 5)
        #[arg(long, requires = "show_sentiment")]
        show_reviews_for: Option<String>,

        /// Sentiment panel the expanded beach belongs to
        #[arg(long, requires = "show_reviews_for")]
        show_sentiment: Option<String>,
    },
    /// Show the first reviews of one beach for one sentiment
    Reviews {
        /// Beach title, matched exactly
        #[arg(long)]
        title: String,

        /// positive, neutral or negative
        #[arg(long)]
        sentiment: String,

        #[command(flatten)]
        rating: RatingArgs,

        /// Only reviews whose text contains this keyword
        #[arg(long)]
        keyword: Option<String>,
    },
    /// List the sentiment filter options found in the dataset
    Sentiments,
}

#[derive(Debug, Args)]
struct RatingArgs {
    /// Lowest star rating to include (1-5)
    #[arg(long, default_value_t = 1)]
    min_rating: u8,

    /// Highest star rating to include (1-5)
    #[arg(long, default_value_t = 5)]
    max_rating: u8,
}

impl RatingArgs {
    fn to_range(&self) -> Result<RatingRange, SearchError> {
        RatingRange::new(self.min_rating, self.max_rating)
    }
}

#[derive(Debug, Args)]
struct FilterArgs {
    #[command(flatten)]
    rating: RatingArgs,

    /// all, positive, neutral or negative
    #[arg(long, default_value = "all")]
    sentiment: String,

    /// Only reviews whose text contains this keyword
    #[arg(long)]
    keyword: Option<String>,
}

impl FilterArgs {
    fn to_filter(&self) -> Result<ReviewFilter, SearchError> {
        Ok(ReviewFilter {
            rating: self.rating.to_range()?,
            sentiment: self.sentiment.parse::<SentimentFilter>()?,
            keyword: self.keyword.clone(),
        })
    }
}

fn parse_sentiment(raw: &str) -> anyhow::Result<Sentiment> {
    raw.trim()
        .parse::<Sentiment>()
        .map_err(|e| anyhow::anyhow!("{e}; expected positive, neutral or negative"))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = pantai_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("no command given; try `pantai-cli dashboard --help`");
        return Ok(());
    };

    let dataset_path = cli.dataset.unwrap_or(config.dataset_path);
    let dataset = pantai_core::load_dataset(&dataset_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&dataset, command, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(dataset: &Dataset, command: Commands, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard {
            filter,
            show_reviews_for,
            show_sentiment,
        } => {
            let selection = match (show_reviews_for, show_sentiment) {
                (Some(title), Some(sentiment)) => Some(Selection {
                    title,
                    sentiment: parse_sentiment(&sentiment)?,
                }),
                _ => None,
            };
            let query = DashboardQuery {
                filter: filter.to_filter()?,
                selection,
            };
            let view = build_dashboard(dataset, &query);
            render::render_dashboard(out, &view)?;
        }
        Commands::Reviews {
            title,
            sentiment,
            rating,
            keyword,
        } => {
            let filter = ReviewFilter {
                rating: rating.to_range()?,
                sentiment: SentimentFilter::All,
                keyword,
            };
            let filtered = filter.apply(dataset.reviews());
            let selection =
                select_reviews(&filtered, &title, parse_sentiment(&sentiment)?, REVIEW_PAGE_SIZE);
            render::render_review_selection(out, &selection)?;
        }
        Commands::Sentiments => {
            render::render_sentiment_options(out, &dataset.sentiment_labels())?;
        }
    }
    Ok(())
}
