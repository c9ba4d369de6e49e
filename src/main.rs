use std::path::{Path, PathBuf};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use riot_match_collector::output::{self, DEFAULT_DATA_DIR};
use riot_match_collector::{CollectionRequest, Collector, CollectorConfig, Progress, Region};

/// Collect a player's match history from the Riot API into a JSON file.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Riot ID game name, the part before the '#'
    #[arg(short, long)]
    game_name: String,

    /// Riot ID tag line, the part after the '#'
    #[arg(short, long)]
    tag: String,

    /// Number of matches to collect
    #[arg(short, long, default_value_t = 100)]
    amount: usize,

    /// Output file name without extension [default: {game_name}#{tag}+{timestamp}]
    #[arg(short, long)]
    filename: Option<String>,

    /// Riot API key, also read from API_KEY in the environment or a .env file
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: String,

    /// Regional routing value
    #[arg(long, default_value_t = Region::Europe)]
    region: Region,

    /// Directory the dataset is written to
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Give up on a match after this many rate-limited responses [default: never]
    #[arg(long)]
    max_rate_limit_retries: Option<u32>,
}

fn init_tracing() {
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("riot_match_collector=info"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Load variables from `path`, or from `.env` in the working directory or its
/// parents. Variables already set in the environment win. A missing file is
/// not an error; the key may still come from the environment or `--api-key`.
fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_path(path).ok().map(|_| path.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}

/// Renders run progress as two terminal progress bars.
#[derive(Default)]
struct BarProgress {
    ids: Option<ProgressBar>,
    matches: Option<ProgressBar>,
}

impl BarProgress {
    fn bar(total: usize, message: &'static str) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .expect("hardcoded template is valid")
                .progress_chars("#>-"),
        );
        pb.set_message(message);
        pb
    }

    fn finish(&self) {
        for pb in [&self.ids, &self.matches].into_iter().flatten() {
            pb.finish();
        }
    }
}

impl Progress for BarProgress {
    fn ids_listed(&mut self, fetched: usize, total: usize) {
        self.ids
            .get_or_insert_with(|| Self::bar(total, "match ids"))
            .set_position(fetched as u64);
    }

    fn match_fetched(&mut self, fetched: usize, total: usize) {
        self.matches
            .get_or_insert_with(|| Self::bar(total, "matches"))
            .set_position(fetched as u64);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let env_file = load_env_file(None);

    let cli = Cli::parse();
    if let Some(path) = &env_file {
        debug!(path = %path.display(), "loaded environment file");
    }
    info!(
        game_name = %cli.game_name,
        tag = %cli.tag,
        amount = cli.amount,
        region = %cli.region,
        "starting collection"
    );

    let config = CollectorConfig::new(cli.api_key, cli.region)?
        .with_max_rate_limit_retries(cli.max_rate_limit_retries);
    let collector = Collector::new(&config)?;

    let stem = cli.filename.unwrap_or_else(|| {
        output::default_file_stem(&cli.game_name, &cli.tag, &chrono::Local::now())
    });
    let path = output::output_path(&cli.data_dir, &stem);

    let request = CollectionRequest::new(cli.game_name, cli.tag, cli.amount);
    let mut progress = BarProgress::default();
    let result = collector
        .collect_to_file(&request, &path, &mut progress)
        .await;
    progress.finish();
    let result = result?;

    if let Some(failure) = &result.failure {
        warn!(
            match_id = %failure.match_id,
            saved = result.records.len(),
            "collection stopped early: {}",
            failure.error
        );
    }
    Ok(())
}
