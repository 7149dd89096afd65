use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{Dataset, UserId};
use pipeline::{PipelineConfig, PopularityEntry, Snapshot};
use rayon::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// BookRecs - Book Recommendation System
#[derive(Parser)]
#[command(name = "book-recs")]
#[command(about = "Popularity and collaborative-filtering book recommendations", long_about = None)]
struct Cli {
    /// Directory holding Books.csv, Users.csv and Ratings.csv
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// JSON file overriding pipeline thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top books by average rating
    Top {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Recommend books for a user
    Recommend {
        /// User ID to get recommendations for
        #[arg(long)]
        user_id: String,
    },

    /// Browse top books and recommendations from a prompt
    Interactive,

    /// Time repeated lookups for random known users
    Benchmark {
        /// Number of lookups to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };

    println!("Loading book-crossing dataset from {}...", cli.data_dir.display());
    let start = Instant::now();
    let dataset = Dataset::load_from_dir(&cli.data_dir)
        .context("Failed to load book-crossing dataset")?;
    let snapshot = Arc::new(Snapshot::build(&dataset, &config)?);
    println!("{} Built recommender in {:?}", "✓".green(), start.elapsed());

    match cli.command {
        Commands::Top { format } => handle_top(&snapshot, format)?,
        Commands::Recommend { user_id } => handle_recommend(&snapshot, &user_id),
        Commands::Interactive => handle_interactive(&snapshot)?,
        Commands::Benchmark { requests } => handle_benchmark(snapshot, requests),
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<PipelineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: PipelineConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    info!("Using pipeline config {:?}", config);
    Ok(config)
}

/// The shell owns input validation: anything that is not an integer is a
/// user error. Integers outside the `UserId` range are still valid input.
fn parse_user_id(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Result of a lookup typed into the shell
#[derive(Debug, PartialEq)]
enum Lookup {
    InvalidInput,
    Titles(i64, Vec<String>),
}

fn lookup(snapshot: &Snapshot, input: &str) -> Lookup {
    let Some(id) = parse_user_id(input) else {
        return Lookup::InvalidInput;
    };
    // An integer no user can carry is simply an unknown user.
    let titles = UserId::try_from(id)
        .map(|user_id| snapshot.recommend(user_id))
        .unwrap_or_default();
    Lookup::Titles(id, titles)
}

/// Handle the 'top' command
fn handle_top(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    let top = snapshot.get_top_books();
    match format {
        OutputFormat::Table => print_top_books(top),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(top)?);
        }
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(snapshot: &Snapshot, input: &str) {
    match lookup(snapshot, input) {
        Lookup::InvalidInput => println!("{}", "Please enter a valid User ID.".yellow()),
        Lookup::Titles(user_id, titles) => print_recommendations(user_id, &titles),
    }
}

/// Handle the 'interactive' command
fn handle_interactive(snapshot: &Snapshot) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", "Book Recommendation System".bold().blue());
    loop {
        println!();
        println!("  1) Top {} Books", snapshot.get_top_books().len());
        println!("  2) User-Based Recommendation");
        println!("  q) Quit");
        print!("Select one: ");
        io::stdout().flush()?;

        let Some(choice) = lines.next().transpose()? else {
            break;
        };
        match choice.trim() {
            "1" => print_top_books(snapshot.get_top_books()),
            "2" => {
                print!("Enter User ID: ");
                io::stdout().flush()?;
                let Some(input) = lines.next().transpose()? else {
                    break;
                };
                if !input.trim().is_empty() {
                    handle_recommend(snapshot, &input);
                }
            }
            "q" | "quit" | "exit" => break,
            other => println!("Unknown option '{}'", other),
        }
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(snapshot: Arc<Snapshot>, requests: usize) {
    let users = snapshot.similarity().users();
    if users.is_empty() || requests == 0 {
        println!("Nothing to benchmark: no known users or no requests.");
        return;
    }

    let user_ids: Vec<UserId> = (0..requests)
        .map(|_| users[rand::random::<u64>() as usize % users.len()])
        .collect();

    // Lookups only read the snapshot, so they fan out across threads freely
    let start = Instant::now();
    let mut timings: Vec<Duration> = user_ids
        .par_iter()
        .map(|&user_id| {
            let started = Instant::now();
            let titles = snapshot.recommend(user_id);
            std::hint::black_box(titles);
            started.elapsed()
        })
        .collect();
    let wall_time = start.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / wall_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);
}

fn print_top_books(top: &[PopularityEntry]) {
    println!("{}", format!("Top {} Books", top.len()).bold().blue());
    for (rank, entry) in top.iter().enumerate() {
        println!(
            "{:>3}. {} by {} ({}) - {} ratings, avg {:.2}",
            (rank + 1).to_string().green(),
            entry.title,
            entry.author,
            entry.year_of_publication,
            entry.num_ratings,
            entry.avg_rating
        );
    }
}

fn print_recommendations(user_id: i64, titles: &[String]) {
    println!("{}", format!("Recommended Books for User {}", user_id).bold().blue());
    if titles.is_empty() {
        println!("No recommendations found for this user.");
        return;
    }
    for title in titles {
        println!("  - {}", title);
    }
}
