use anyhow::Result;
use clap::{Parser, Subcommand};
use fxm::index::{SubstringIndex, import_file};
use fxm::utils::AppConfig;
use fxm::{output, server};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fxm")]
#[command(about = "In-memory, case-insensitive substring matching")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to config.json in the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load entries and print the values matching each pattern
    Query {
        /// Tab-separated `key<TAB>value` file
        entries: PathBuf,

        /// Substrings to look up
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Load entries and print the sorted search list
    Dump {
        /// Tab-separated `key<TAB>value` file
        entries: PathBuf,
    },
    /// Load entries and show index statistics
    Stats {
        /// Tab-separated `key<TAB>value` file
        entries: PathBuf,
    },
    /// Serve JSON-lines requests on stdin/stdout
    Serve {
        /// Entries to register before serving
        #[arg(long)]
        preload: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config {
        /// Also write it to the app data directory
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    init_tracing(&config);

    let color = !cli.no_color;
    let index = SubstringIndex::with_config(config.index.clone());

    match cli.command {
        Commands::Query { entries, patterns } => {
            load(&index, &entries)?;
            for pattern in &patterns {
                output::print_values(pattern, &index.retrieve(pattern), color)?;
            }
        }
        Commands::Dump { entries } => {
            load(&index, &entries)?;
            let stdout = io::stdout();
            index.dump_search_list(&mut stdout.lock())?;
        }
        Commands::Stats { entries } => {
            load(&index, &entries)?;
            index.rebuild();
            output::print_stats(&index.stats(), color)?;
        }
        Commands::Serve { preload } => {
            if let Some(path) = preload {
                load(&index, &path)?;
            }
            server::serve_stdio(&index)?;
        }
        Commands::Config { save } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                let path = config.save()?;
                eprintln!("fxm: saved config to {}", path.display());
            }
        }
    }

    Ok(())
}

fn load(index: &SubstringIndex, path: &Path) -> Result<()> {
    let report = import_file(index, path)?;
    if report.rejected > 0 {
        eprintln!(
            "fxm: skipped {} entries with malformed keys in {}",
            report.rejected,
            path.display()
        );
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the config file's `log_filter`
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
