use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use season_tracker::api;
use season_tracker::api::state::AppState;
use season_tracker::calculate;
use season_tracker::config::AppConfig;
use season_tracker::models::{Contestant, ContestantId, Episode, EpisodeId};
use season_tracker::parse_id_list;
use season_tracker::rating::{apply_episode, expected_score, EpisodeResult};
use season_tracker::seed;
use season_tracker::storage::{self, StorageConfig};

#[derive(Parser)]
#[command(name = "season-tracker")]
#[command(about = "Local rating tracker for elimination-show contestants")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write the sample roster and premiere episode
    Seed {
        /// Overwrite existing data
        #[arg(long)]
        force: bool,
    },

    /// Print the current standings table
    Standings,

    /// Add a contestant to the roster
    AddContestant {
        /// Display name
        #[arg(long)]
        name: String,

        /// Portrait URL
        #[arg(long)]
        image_url: Option<String>,

        /// Starting rating (defaults to the configured initial rating)
        #[arg(long)]
        initial_rating: Option<i64>,
    },

    /// Record an episode and update ratings
    AddEpisode {
        /// Episode number as aired
        #[arg(long)]
        number: u32,

        /// Episode title
        #[arg(long)]
        title: String,

        /// Comma-separated contestant ids, e.g. "2" or "1,4"
        #[arg(long, default_value = "")]
        winners: String,

        /// Comma-separated contestant ids
        #[arg(long, default_value = "")]
        eliminated: String,

        /// Comma-separated contestant ids
        #[arg(long, default_value = "")]
        top_performers: String,

        /// Comma-separated contestant ids
        #[arg(long, default_value = "")]
        bottom_performers: String,
    },

    /// Show the expected score between two ratings
    Predict { rating_a: f64, rating_b: f64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting season-tracker v{}", env!("CARGO_PKG_VERSION"));

    // Load the config file if present; CLI flags override it.
    let config_path = PathBuf::from(&cli.config);
    let mut config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = PathBuf::from(dir);
    }

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(config);
            let app = api::build_router(state);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Dashboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }

        Commands::Seed { force } => {
            let storage = StorageConfig::new(config.data_dir.clone());

            if !force && storage.contestants_path().exists() {
                println!("Store already has data. Use --force to overwrite.");
                return Ok(());
            }

            let (roster, episodes) = seed::seed_store(&storage)?;
            println!(
                "Seeded {} contestants and {} episode(s) into {:?}.",
                roster.len(),
                episodes.len(),
                storage.data_dir
            );
        }

        Commands::Standings => {
            let storage = StorageConfig::new(config.data_dir.clone());
            let roster = storage::load_roster(&storage)?;
            let episodes = storage::load_episodes(&storage)?;

            if roster.is_empty() {
                println!("No contestants yet. Run `seed` or `add-contestant` first.");
                return Ok(());
            }

            println!("{:<5} {:<28} {:>8} {:>8}", "Rank", "Contestant", "Rating", "Change");
            println!("{}", "-".repeat(52));
            for entry in calculate::standings(&roster, &episodes) {
                let name = if entry.eliminated {
                    format!("{} (eliminated)", entry.name)
                } else {
                    entry.name.clone()
                };
                let change = if entry.delta > 0 {
                    format!("+{}", entry.delta)
                } else {
                    entry.delta.to_string()
                };
                println!(
                    "{:<5} {:<28} {:>8} {:>8}",
                    entry.rank, name, entry.rating, change
                );
            }
        }

        Commands::AddContestant {
            name,
            image_url,
            initial_rating,
        } => {
            let storage = StorageConfig::new(config.data_dir.clone());
            let mut roster = storage::load_roster(&storage)?;

            let id = ContestantId::next(roster.iter().map(|c| c.id));
            let rating = initial_rating.unwrap_or(config.rating.initial_rating);

            let mut contestant = Contestant::new(id, name, rating);
            if let Some(url) = image_url {
                contestant = contestant.with_image_url(url);
            }

            println!(
                "Added contestant {} ({}) at rating {}.",
                contestant.name, contestant.id, contestant.current_rating
            );
            roster.push(contestant);
            storage::save_roster(&storage, &roster)?;
        }

        Commands::AddEpisode {
            number,
            title,
            winners,
            eliminated,
            top_performers,
            bottom_performers,
        } => {
            let winners = parse_id_list(&winners)
                .unwrap_or_else(|| panic!("Invalid --winners id list: {}", winners));
            let eliminated = parse_id_list(&eliminated)
                .unwrap_or_else(|| panic!("Invalid --eliminated id list: {}", eliminated));
            let top_performers = parse_id_list(&top_performers).unwrap_or_else(|| {
                panic!("Invalid --top-performers id list: {}", top_performers)
            });
            let bottom_performers = parse_id_list(&bottom_performers).unwrap_or_else(|| {
                panic!("Invalid --bottom-performers id list: {}", bottom_performers)
            });

            let storage = StorageConfig::new(config.data_dir.clone());
            let roster = storage::load_roster(&storage)?;
            let episodes = storage::load_episodes(&storage)?;

            let episode = Episode::new(
                EpisodeId::next(episodes.iter().map(|e| e.id)),
                number,
                title,
                chrono::Utc::now().date_naive(),
            )
            .with_winners(winners)
            .with_eliminated(eliminated)
            .with_top_performers(top_performers)
            .with_bottom_performers(bottom_performers);

            let updated = apply_episode(&roster, &EpisodeResult::from(&episode));

            println!("=== Episode {}: {} ===", episode.number, episode.title);
            let mut adjusted = 0;
            for (old, new) in roster.iter().zip(updated.iter()) {
                if new.rating_history.len() > old.rating_history.len() {
                    let delta = new.current_rating - old.current_rating;
                    let sign = if delta >= 0 { "+" } else { "" };
                    println!(
                        "  {:<28} {} -> {} ({}{})",
                        new.name, old.current_rating, new.current_rating, sign, delta
                    );
                    adjusted += 1;
                }
            }
            if adjusted == 0 {
                println!("  (no contestants adjusted)");
            }

            storage::save_roster(&storage, &updated)?;
            storage::append_episode(&storage, &episode)?;
        }

        Commands::Predict { rating_a, rating_b } => {
            let expected_a = expected_score(rating_a, rating_b);
            let expected_b = expected_score(rating_b, rating_a);
            println!(
                "Expected score for {} vs {}: {:.3} / {:.3}",
                rating_a, rating_b, expected_a, expected_b
            );
        }
    }

    Ok(())
}
