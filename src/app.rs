//! Application wiring: backend selection and command dispatch.
//!
//! The store is constructed once here and handed to the generic
//! command handlers; nothing else in the crate holds storage state.

use tracing::info;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::store::{self, MemoryStore, StudentStore};

/// Select the configured backend and run one command against it.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match config.storage.backend.as_str() {
        "memory" => {
            // A fresh memory store starts with the sample records, the
            // same data a persistent backend gets from `init --seed`.
            let store = MemoryStore::new();
            store::seed_sample_data(&store).await?;
            info!(backend = "memory", "store ready");
            dispatch(&store, cli.command).await
        }
        #[cfg(feature = "sqlite")]
        "sqlite" => {
            let pool = crate::db::create_pool(&config.storage.database)?;
            crate::db::run_migrations(&pool)?;
            info!(backend = "sqlite", database = %config.storage.database, "store ready");
            let store = crate::store::SqliteStore::new(pool);
            dispatch(&store, cli.command).await
        }
        other => Err(ConfigError::InvalidValue {
            field: "storage.backend",
            reason: format!("backend {other:?} is not available in this build"),
        }
        .into()),
    }
}

async fn dispatch<S: StudentStore>(store: &S, command: Commands) -> Result<()> {
    match command {
        Commands::Add(args) => crate::cli::records::add(store, args).await,
        Commands::Update(args) => crate::cli::records::update(store, args).await,
        Commands::Delete(args) => crate::cli::records::delete(store, args).await,
        Commands::Get(args) => crate::cli::records::get(store, args).await,
        Commands::List(args) => crate::cli::records::list(store, args).await,
        Commands::Search(args) => crate::cli::query::search(store, args).await,
        Commands::Filter(args) => crate::cli::query::filter(store, args).await,
        Commands::Stats(args) => crate::cli::stats::stats(store, args).await,
        Commands::Clear(args) => crate::cli::admin::clear(store, args).await,
        Commands::Init(args) => crate::cli::admin::init(store, args).await,
    }
}
