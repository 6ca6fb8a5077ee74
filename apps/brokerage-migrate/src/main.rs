//! brokerage-migrate: schema migration runner for the brokerage data store

mod config;
mod logging;

use anyhow::{Context, Result};
use brokerage_service::{BrokerageModule, Migrator};
use clap::{Parser, Subcommand};
use config::AppConfig;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brokerage-migrate", version, about = "Brokerage schema migrations")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured database URL
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending migrations
    Up {
        /// Apply at most this many
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Revert applied migrations
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.database_url {
        cfg.brokerage.database.url = url;
    }
    cfg.logging.init();

    let conn = Database::connect(cfg.brokerage.database.connect_options())
        .await
        .context("Failed to connect to brokerage database")?;
    let module = BrokerageModule::with_connection(conn);
    let db = module.connection();

    match cli.command {
        Command::Up { steps } => {
            Migrator::up(db, steps).await?;
            tracing::info!(?steps, "Migrations applied");
        }
        Command::Down { steps } => {
            Migrator::down(db, Some(steps)).await?;
            tracing::info!(steps, "Migrations reverted");
        }
        Command::Status => {
            for line in status_lines(db).await? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// One `<state>  <name>` line per known migration, applied ones first
async fn status_lines(db: &DatabaseConnection) -> Result<Vec<String>> {
    let applied = Migrator::get_applied_migrations(db).await?;
    let pending = Migrator::get_pending_migrations(db).await?;

    let lines = applied
        .iter()
        .map(|m| format!("applied  {}", m.name()))
        .chain(pending.iter().map(|m| format!("pending  {}", m.name())))
        .collect();
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> DatabaseConnection {
        let cfg = brokerage_service::Config::default();
        Database::connect(cfg.database.connect_options()).await.unwrap()
    }

    #[tokio::test]
    async fn status_lists_every_migration() {
        let db = memory_db().await;
        Migrator::up(&db, Some(2)).await.unwrap();

        let lines = status_lines(&db).await.unwrap();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "applied  m20250301_000001_create_owners");
        assert_eq!(lines[1], "applied  m20250301_000002_create_clients");
        assert_eq!(lines[2], "pending  m20250301_000003_create_agents");
        assert!(lines[2..].iter().all(|l| l.starts_with("pending  ")));
    }
}
