use anyhow::Context;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use stockroom_cli::{menu, AppState, Console, Menu};
use stockroom_core::ProductRepository;
use stockroom_store::{app_config::Config, import_file, DbClient, SqliteProductRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom_cli=warn,stockroom_store=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(database = %config.database.path.display(), "Starting Stockroom");

    let db = DbClient::new(&config.database.path)
        .await
        .with_context(|| format!("Failed to open {}", config.database.path.display()))?;
    db.migrate().await.context("Failed to prepare the record store")?;

    let products: Arc<dyn ProductRepository> =
        Arc::new(SqliteProductRepository::new(db.pool.clone()));

    import_file(products.as_ref(), &config.import.path)
        .await
        .with_context(|| format!("Failed to import {}", config.import.path.display()))?;

    let state = AppState {
        products,
        backup_path: config.backup.path.clone(),
    };

    let stdout = io::stdout();
    let on_terminal = stdout.is_terminal();
    let mut console = Console::new(io::stdin().lock(), stdout.lock()).clearing_screen(on_terminal);

    console.clear()?;
    menu::run(&Menu::standard(), &mut console, &state).await?;

    Ok(())
}
