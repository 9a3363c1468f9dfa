use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;
use thunderstore_client::config::Config;
use thunderstore_client::models::PackageListing;
use thunderstore_client::{Client, Result};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "thunderstore-cli")]
#[command(about = "Query a Thunderstore-compatible mod registry", long_about = None)]
#[command(version = VERSION)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every package published in a community
    List {
        /// Community slug, e.g. content-warning
        community: String,
    },
    /// Show download and rating metrics for a package
    Metrics {
        /// Package namespace (owner)
        namespace: String,
        /// Package name
        name: String,
    },
    /// Show download metrics for one package version
    VersionMetrics {
        /// Package namespace (owner)
        namespace: String,
        /// Package name
        name: String,
        /// Version number, e.g. 1.0.0
        version: String,
    },
}

fn main() {
    thunderstore_client::init_tracing();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref()).unwrap_or_else(|_| {
        tracing::warn!("Failed to load config, using defaults");
        Config::default()
    });

    let client = Client::from_config(&config)?;

    match &args.command {
        Commands::List { community } => {
            let list = client.fetch_package_list(community)?;
            if args.json {
                let packages: Vec<&PackageListing> = list.iter().collect();
                println!("{}", serde_json::to_string_pretty(&packages)?);
            } else {
                for package in &list {
                    print_listing(package);
                }
                println!("{} packages", list.len());
            }
        }
        Commands::Metrics { namespace, name } => {
            let metrics = client.fetch_package_metrics(namespace, name)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                println!(
                    "downloads: {}  rating: {}  latest: {}",
                    fmt_u64(metrics.downloads),
                    fmt_u64(metrics.rating_score),
                    metrics.latest_version.as_deref().unwrap_or("-")
                );
            }
        }
        Commands::VersionMetrics {
            namespace,
            name,
            version,
        } => {
            let metrics = client.fetch_package_version_metrics(namespace, name, version)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                println!("downloads: {}", fmt_u64(metrics.downloads));
            }
        }
    }

    Ok(())
}

fn print_listing(package: &PackageListing) {
    let full_name = package.full_name.as_deref().unwrap_or("<unnamed>");
    let latest = package
        .versions
        .first()
        .and_then(|v| v.version_number.as_deref())
        .unwrap_or("-");

    let mut flags = Vec::new();
    if package.is_pinned == Some(true) {
        flags.push("pinned");
    }
    if package.is_deprecated == Some(true) {
        flags.push("deprecated");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", ")).yellow().to_string()
    };

    println!(
        "{}  {}  {}{}",
        full_name.bold(),
        latest,
        format!("{} versions", package.versions.len()).dimmed(),
        flags
    );
}

fn fmt_u64(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
