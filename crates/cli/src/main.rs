use anyhow::{anyhow, bail, Context, Result};
use catalog::{BourbonId, BourbonRecord, Catalog, HeaderMode};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{Recommendation, StrategyKind};
use server::RecommendationOrchestrator;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{debug, info};

/// bourbon-recs - Distillery recommendations from a bourbon tasting table
#[derive(Parser)]
#[command(name = "bourbon-recs")]
#[command(about = "Recommend distilleries from bourbons you already like", long_about = None)]
struct Cli {
    /// Path to the bourbon tasting table (CSV)
    #[arg(short, long, env = "BOURBON_DATA_FILE", default_value = "bourbonlouisville.csv")]
    data_file: PathBuf,

    /// The table has no header row
    #[arg(long, env = "BOURBON_NO_HEADER")]
    no_header: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn header_mode(&self) -> HeaderMode {
        if self.no_header {
            HeaderMode::Absent
        } else {
            HeaderMode::Present
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend distilleries for a set of bourbons
    Recommend {
        /// Bourbon ids, comma separated (e.g. 2,14,31)
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,

        /// Scoring strategy: tag-overlap or flavor-similarity
        #[arg(long, default_value_t = StrategyKind::FlavorSimilarity)]
        strategy: StrategyKind,

        /// Show each recommendation's flavor profile
        #[arg(long)]
        explain: bool,
    },

    /// Show one bourbon's flavor profile, tags and distillery
    Bourbon {
        /// Bourbon id to display
        #[arg(long)]
        id: BourbonId,
    },

    /// Search bourbons by bourbon or distillery name
    Search {
        /// Text to look for (case-insensitive substring match)
        #[arg(long)]
        query: String,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,

        /// Bourbons picked per request
        #[arg(long, default_value = "3")]
        picks: usize,

        /// Scoring strategy: tag-overlap or flavor-similarity
        #[arg(long, default_value_t = StrategyKind::FlavorSimilarity)]
        strategy: StrategyKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    info!("Using data file {}", cli.data_file.display());

    println!("Loading bourbon catalog from {}...", cli.data_file.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.data_file, cli.header_mode())
            .context("Failed to load bourbon catalog")?,
    );
    println!(
        "{} Loaded {} bourbons in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            ids,
            strategy,
            explain,
        } => handle_recommend(catalog, ids, strategy, explain).await?,
        Commands::Bourbon { id } => handle_bourbon(&catalog, id)?,
        Commands::Search { query } => handle_search(&catalog, &query)?,
        Commands::Benchmark {
            requests,
            concurrent,
            picks,
            strategy,
        } => handle_benchmark(catalog, requests, concurrent, picks, strategy).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    ids: Vec<i64>,
    strategy: StrategyKind,
    explain: bool,
) -> Result<()> {
    println!("{}", "Selected bourbons:".bold().blue());
    for &id in &ids {
        match BourbonId::try_from(id).ok().and_then(|id| catalog.get(id)) {
            Some(record) => println!("  {} {} ({})", id.to_string().green(), record.name, record.distillery.name),
            None => println!("  {} {}", id.to_string().red(), "not in catalog".dimmed()),
        }
    }

    let orchestrator = RecommendationOrchestrator::new(catalog, strategy);
    let recommendations = orchestrator
        .get_recommendations(ids)
        .await
        .map_err(|e| anyhow!("{}: {}", e, e.detail()))?;

    print_recommendations(&recommendations, strategy, explain);
    Ok(())
}

/// Handle the 'bourbon' command
fn handle_bourbon(catalog: &Catalog, id: BourbonId) -> Result<()> {
    let record = catalog
        .get(id)
        .ok_or_else(|| anyhow!("Bourbon {} not found", id))?;

    println!("{}", format!("Bourbon {}: {}", id, display_name(record)).bold().blue());
    print_distillery(record);

    let tags: Vec<String> = record.tags().iter().map(|t| t.to_string()).collect();
    println!("{}Tags: {}", "• ".cyan(), if tags.is_empty() { "none".to_string() } else { tags.join(", ") });

    println!("Flavor profile:");
    for (attr, value) in record.flavor_profile.iter() {
        let bar = "█".repeat(value.max(0.0).round() as usize);
        println!("  {:<16} {:>4} {}", attr.name(), value, bar.yellow());
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str) -> Result<()> {
    let matches = catalog.search(query);

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    if matches.is_empty() {
        println!("  no bourbons or distilleries match");
        return Ok(());
    }
    for record in matches.iter().take(20) {
        let tags: Vec<String> = record.tags().iter().map(|t| t.to_string()).collect();
        println!(
            "{}: {} - {} [{}]",
            record.id.to_string().green(),
            display_name(record),
            record.distillery.name,
            tags.join(", ")
        );
    }
    if matches.len() > 20 {
        println!("  ... and {} more", matches.len() - 20);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    requests: usize,
    concurrent: usize,
    picks: usize,
    strategy: StrategyKind,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let (first, last) = catalog
        .id_range()
        .ok_or_else(|| anyhow!("Catalog is empty"))?;
    let span = last - first + 1;

    let orchestrator = RecommendationOrchestrator::new(catalog, strategy);

    // Random selections drawn from the ids actually present
    let selections: Vec<Vec<i64>> = (0..requests)
        .map(|_| {
            (0..picks)
                .map(|_| i64::from(rand::random::<u32>() % span + first))
                .collect()
        })
        .collect();

    let wall_clock = Instant::now();
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut pending = selections.into_iter();
    let mut tasks = JoinSet::new();

    // Keep at most `concurrent` requests in flight
    loop {
        while tasks.len() < concurrent.max(1) {
            let Some(ids) = pending.next() else { break };
            let orchestrator = orchestrator.clone();
            tasks.spawn(async move {
                let start = Instant::now();
                orchestrator.get_recommendations(ids).await?;
                Ok::<_, recommender::RecommendError>(start.elapsed())
            });
        }
        match tasks.join_next().await {
            Some(result) => timings.push(result??),
            None => break,
        }
    }
    let total_time = wall_clock.elapsed();
    debug!("Benchmark completed {} requests", timings.len());

    timings.sort();
    let sum: Duration = timings.iter().sum();
    let avg_latency = sum / timings.len() as u32;
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", format!("Benchmark results ({}):", strategy).bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Recommendation], strategy: StrategyKind, explain: bool) {
    println!("{}", format!("Distillery recommendations ({}):", strategy).bold().blue());
    if recommendations.is_empty() {
        println!("  nothing matched");
        return;
    }

    for (idx, rec) in recommendations.iter().enumerate() {
        let rank = (idx + 1).to_string().green();
        match rec {
            Recommendation::Match(info) => {
                println!("{}. {}", rank, info.name.bold());
                println!("   {}", info.address);
                if !info.amenities.is_empty() {
                    println!("   Amenities: {}", info.amenities.join(", "));
                }
                if info.military_discount {
                    println!("   {}", "Military discount".cyan());
                }
            }
            Recommendation::Similar(similar) => {
                println!(
                    "{}. {} (via {}) - Similarity Score: {:.4}",
                    rank,
                    similar.name.bold(),
                    similar.bourbon,
                    similar.similarity_score
                );
                println!("   {}", similar.address);
                if !similar.amenities.is_empty() {
                    println!("   Amenities: {}", similar.amenities.join(", "));
                }
                if similar.military_discount {
                    println!("   {}", "Military discount".cyan());
                }
                if explain {
                    let profile: Vec<String> = similar
                        .flavor_profile
                        .iter()
                        .filter(|&(_, value)| value != 0.0)
                        .map(|(attr, value)| format!("{}={}", attr, value))
                        .collect();
                    println!("   Profile: {}", profile.join(", "));
                }
            }
        }
    }
}

fn print_distillery(record: &BourbonRecord) {
    let distillery = &record.distillery;
    println!("{}Distillery: {}", "• ".green(), distillery.name);
    println!("{}Address: {}", "• ".green(), distillery.address);
    if !distillery.website.is_empty() {
        println!("{}Website: {}", "• ".green(), distillery.website);
    }
    if !distillery.amenities.is_empty() {
        println!("{}Amenities: {}", "• ".green(), distillery.amenities.join(", "));
    }
    if record.has_military_discount {
        println!("{}Military discount", "• ".green());
    }
}

fn display_name(record: &BourbonRecord) -> &str {
    if record.has_name() {
        &record.name
    } else {
        "(unnamed)"
    }
}
