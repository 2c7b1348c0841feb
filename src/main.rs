use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use rtm_gap::catalog::file::{load_fixture, JsonFileCatalog};
use rtm_gap::catalog::models::{ItemLink, UnlinkedItem};
use rtm_gap::catalog::seed;
use rtm_gap::catalog::traits::{RequirementCatalog, StaticCatalog};
use rtm_gap::config::{self, Config, LatencyMode};
use rtm_gap::output::terminal;
use rtm_gap::service::commit::LogCommit;
use rtm_gap::service::GapAnalysisService;

/// rtm-gap: find work items that are not traced to any requirement, and fix that.
///
/// Scores unlinked tasks, test cases, issues and sign-offs against the
/// requirement catalog, then links them or drafts new requirements.
#[derive(Parser)]
#[command(name = "rtm-gap", version, about)]
struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List work items not yet linked to a requirement
    Items,

    /// List the requirement catalog
    Requirements,

    /// Recommend the best existing requirement for each item
    Recommend {
        /// Item ids (default: all unlinked items)
        ids: Vec<String>,
    },

    /// Draft new requirements from items
    Suggest {
        /// Item ids (default: all unlinked items)
        ids: Vec<String>,
    },

    /// Link items to requirements, given as ITEM=REQ pairs
    Link {
        #[arg(required = true, value_parser = parse_link)]
        links: Vec<ItemLink>,
    },

    /// Draft and create new requirements from items
    Create {
        /// Item ids (default: all unlinked items)
        ids: Vec<String>,
    },

    /// Link confident matches and convert everything else
    Triage {
        /// Link at or above this score (default: RTM_LINK_THRESHOLD or 70)
        #[arg(long, value_parser = config::parse_threshold)]
        threshold: Option<u8>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rtm_gap=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let service = build_service(&config)?;
    let spin = config.latency == LatencyMode::Demo && !cli.json;

    match cli.command {
        Commands::Items => {
            let items = with_spinner(spin, "Loading unlinked items...", service.get_unlinked_items()).await;
            if cli.json {
                print_json(&items)?;
            } else {
                terminal::display_unlinked_items(&items);
            }
        }

        Commands::Requirements => {
            let requirements = service.requirements().await?;
            if cli.json {
                print_json(&requirements)?;
            } else {
                terminal::display_requirements(&requirements);
            }
        }

        Commands::Recommend { ids } => {
            let ids = ids_or_all(&service, ids, spin).await;
            let recommendations = with_spinner(
                spin,
                "Analyzing unlinked items...",
                service.get_recommendations(&ids),
            )
            .await?;
            if cli.json {
                print_json(&recommendations)?;
            } else {
                terminal::display_recommendations(&recommendations);
            }
        }

        Commands::Suggest { ids } => {
            let ids = ids_or_all(&service, ids, spin).await;
            let suggestions = with_spinner(
                spin,
                "Drafting requirements...",
                service.suggest_new_requirements(&ids),
            )
            .await?;
            if cli.json {
                print_json(&suggestions)?;
            } else {
                terminal::display_suggestions(&suggestions);
            }
        }

        Commands::Link { links } => {
            let removed = with_spinner(spin, "Linking items...", service.link_items(&links)).await?;
            let remaining = service.unlinked_count().await;
            if cli.json {
                print_json(&removed)?;
            } else {
                terminal::display_removed("Linked", &removed, remaining);
            }
        }

        Commands::Create { ids } => {
            let ids = ids_or_all(&service, ids, spin).await;
            let suggestions = with_spinner(
                spin,
                "Drafting requirements...",
                service.suggest_new_requirements(&ids),
            )
            .await?;
            let removed = with_spinner(
                spin,
                "Creating requirements...",
                service.create_requirements(&suggestions),
            )
            .await?;
            let remaining = service.unlinked_count().await;
            if cli.json {
                print_json(&suggestions)?;
            } else {
                terminal::display_suggestions(&suggestions);
                terminal::display_removed("Created", &removed, remaining);
            }
        }

        Commands::Triage { threshold } => {
            let threshold = threshold.unwrap_or(config.link_threshold);
            let report = with_spinner(spin, "Triaging unlinked items...", service.triage(threshold)).await?;
            if cli.json {
                print_json(&report)?;
            } else {
                terminal::display_triage(&report, threshold);
                println!("{}", "Triage complete.".bold());
            }
        }
    }

    Ok(())
}

/// Build the service from the built-in seed or the configured fixture.
fn build_service(config: &Config) -> Result<Arc<GapAnalysisService>> {
    config.require_fixture()?;

    let (catalog, items): (Arc<dyn RequirementCatalog>, Vec<UnlinkedItem>) =
        match &config.fixture_path {
            Some(path) => {
                let fixture = load_fixture(path)?;
                info!(
                    path = %path.display(),
                    requirements = fixture.requirements.len(),
                    items = fixture.unlinked_items.len(),
                    "Loaded fixture"
                );
                (Arc::new(JsonFileCatalog::new(path.clone())), fixture.unlinked_items)
            }
            None => (
                Arc::new(StaticCatalog::new(seed::requirements())),
                seed::unlinked_items(),
            ),
        };

    let mut builder = GapAnalysisService::builder(catalog, items)
        .latency(config.latency.profile())
        .unknown_ids(config.unknown_ids)
        .commit_hook(Arc::new(LogCommit));
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }

    Ok(Arc::new(builder.build()))
}

/// An empty id list on the command line means "every unlinked item".
async fn ids_or_all(service: &GapAnalysisService, ids: Vec<String>, spin: bool) -> Vec<String> {
    if !ids.is_empty() {
        return ids;
    }
    with_spinner(spin, "Loading unlinked items...", service.get_unlinked_items())
        .await
        .into_iter()
        .map(|i| i.id)
        .collect()
}

fn parse_link(raw: &str) -> Result<ItemLink, String> {
    match raw.split_once('=') {
        Some((item, req)) if !item.trim().is_empty() && !req.trim().is_empty() => {
            Ok(ItemLink::new(item.trim(), req.trim()))
        }
        _ => Err(format!("expected ITEM=REQ, got '{raw}'")),
    }
}

/// Show a spinner while `fut` runs out its simulated latency.
async fn with_spinner<F, T>(enabled: bool, message: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    if !enabled {
        return fut.await;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = fut.await;
    pb.finish_and_clear();
    result
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
