use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use lemon_core::repositories::MenuItemRepository;
use lemon_core::services::MenuService;
use lemon_infrastructure::{create_pool, run_migrations, MediaStorage, PgMenuItemRepository};
use lemon_shared::config::AppConfig;

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    lemon_shared::telemetry::init_cli_telemetry();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let pool = create_pool(&config.database).await?;
    info!("Connected to database");

    if let Command::Migrate = cli.command {
        run_migrations(&pool).await?;
        println!("Migrations applied.");
        return Ok(());
    }

    let repository: Arc<dyn MenuItemRepository> = Arc::new(PgMenuItemRepository::new(pool));
    let admin = commands::Admin {
        menu: MenuService::new(repository),
        media: MediaStorage::from_settings(&config.media),
    };

    admin.run(cli.command).await
}
