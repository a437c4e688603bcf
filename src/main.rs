use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use slotbook::{Commands, Container, ContainerConfig, Router, StoreBackend};

#[derive(Parser)]
#[command(name = "slotbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.slotbook")]
    data_dir: String,

    #[arg(long, global = true, value_enum, default_value_t = StoreBackend::Json)]
    store: StoreBackend,

    /// JSON file with `services` and `providers` arrays
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Treat an unreadable booking store as empty instead of failing
    #[arg(long, global = true)]
    lenient_storage: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let data_dir = expand_tilde(&cli.data_dir);
    if cli.store != StoreBackend::Memory {
        std::fs::create_dir_all(&data_dir)?;
    }

    let container = Container::new(ContainerConfig {
        data_dir,
        store: cli.store,
        catalog_path: cli.catalog.as_deref().map(expand_tilde),
        lenient_storage: cli.lenient_storage,
    })?;

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn book_accepts_partial_drafts() {
        let cli = Cli::try_parse_from(["slotbook", "book", "--service", "s1"]).unwrap();
        assert!(matches!(cli.command, Commands::Book { .. }));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let res = Cli::try_parse_from(["slotbook", "stats", "--date", "10/06/2024"]);
        assert!(res.is_err(), "dates must be YYYY-MM-DD");
    }

    #[test]
    fn store_flag_parses_backends() {
        let cli = Cli::try_parse_from(["slotbook", "--store", "duckdb", "slots"]).unwrap();
        assert_eq!(cli.store, StoreBackend::Duckdb);

        let res = Cli::try_parse_from(["slotbook", "--store", "sqlite", "slots"]);
        assert!(res.is_err());
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/var/lib/slotbook"), "/var/lib/slotbook");
    }
}
