//! Handlers for the `clear` and `init` maintenance commands.

use dialoguer::Confirm;
use tracing::info;

use crate::cli::output;
use crate::cli::{ClearArgs, InitArgs};
use crate::error::Result;
use crate::store::{seed_sample_data, StudentStore};

/// Execute `clear`. Prompts for confirmation unless `--yes` is given.
pub async fn clear<S: StudentStore>(store: &S, args: ClearArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Remove every student record?")
            .default(false)
            .interact()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        if !confirmed {
            output::note("Aborted.");
            return Ok(());
        }
    }

    store.clear().await?;
    info!("store cleared");
    output::ok("All records removed; id assignment restarts at 1");
    Ok(())
}

/// Execute `init`. Backend setup (migrations, pool) happens at startup;
/// this command exists to seed sample data explicitly.
pub async fn init<S: StudentStore>(store: &S, args: InitArgs) -> Result<()> {
    if args.seed {
        seed_sample_data(store).await?;
        output::ok("Sample data seeded (5 records)");
    }
    output::ok("Store ready");
    Ok(())
}
