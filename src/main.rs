use anyhow::Context;
use clap::{Parser, Subcommand};
use dogs_lib::modules::breed::commands::{self, BreedsOutcome};
use dogs_lib::shared::utils::logger::init_logger;
use dogs_lib::shared::AppConfig;

#[derive(Parser)]
#[command(name = "dogs")]
#[command(about = "Look up dog breeds in the record store and the remote catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Lookup(Lookup),
    /// Apply pending database migrations
    Migrate,
}

#[derive(Subcommand)]
enum Lookup {
    /// Search the record store by breed name
    StoreSearch {
        /// Case-insensitive name fragment
        query: String,
    },
    /// Search the remote catalog by breed name
    CatalogSearch {
        /// Case-insensitive name fragment
        query: String,
    },
    /// List every breed in the remote catalog
    CatalogList,
    /// List every breed in the record store
    StoreList,
    /// Fetch one catalog breed by id
    CatalogGet { id: i32 },
    /// Fetch one record store breed by id
    StoreGet { id: i32 },
}

async fn run_lookup(lookup: Lookup, config: &AppConfig) -> anyhow::Result<BreedsOutcome> {
    let aggregator =
        dogs_lib::build_aggregator(config).context("Failed to initialize breed services")?;

    let outcome = match lookup {
        Lookup::StoreSearch { query } => commands::search_store_breeds(&aggregator, &query).await,
        Lookup::CatalogSearch { query } => {
            commands::search_catalog_breeds(&aggregator, &query).await
        }
        Lookup::CatalogList => commands::list_catalog_breeds(&aggregator).await,
        Lookup::StoreList => commands::list_store_breeds(&aggregator).await,
        Lookup::CatalogGet { id } => commands::get_catalog_breed(&aggregator, id).await,
        Lookup::StoreGet { id } => commands::get_store_breed(&aggregator, id).await,
    };

    Ok(outcome)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let outcome = match cli.command {
        Commands::Migrate => {
            let applied =
                dogs_lib::run_migrations(&config).context("Failed to run migrations")?;
            println!("{} migration(s) applied", applied);
            return Ok(());
        }
        Commands::Lookup(lookup) => run_lookup(lookup, &config).await?,
    };

    let failed = !outcome.is_ok();
    println!(
        "{}",
        serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?
    );

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
