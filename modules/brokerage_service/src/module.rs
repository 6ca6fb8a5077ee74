//! Module declaration and lifecycle

use crate::config::Config;
use crate::contract::BrokerageApi;
use crate::domain::{Repositories, Service};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmAgentRepository, SeaOrmClientRepository, SeaOrmOwnerRepository,
    SeaOrmPropertyRepository, SeaOrmRentalContractRepository, SeaOrmSaleContractRepository,
    SeaOrmVisitRepository,
};
use anyhow::{Context, Result};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Brokerage service module: owns the connection and the domain service
pub struct BrokerageModule {
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl BrokerageModule {
    /// Connect, optionally migrate, and build the service
    pub async fn init(config: &Config) -> Result<Self> {
        let conn = Database::connect(config.database.connect_options())
            .await
            .context("Failed to connect to brokerage database")?;

        let module = Self::with_connection(conn);
        if config.run_migrations {
            module.migrate().await?;
        }

        tracing::info!("Brokerage service initialized");
        Ok(module)
    }

    /// Build the module over an existing connection without touching the schema
    pub fn with_connection(conn: DatabaseConnection) -> Self {
        let db = Arc::new(conn);

        let repos = Repositories {
            owners: Arc::new(SeaOrmOwnerRepository::new(db.clone())),
            clients: Arc::new(SeaOrmClientRepository::new(db.clone())),
            agents: Arc::new(SeaOrmAgentRepository::new(db.clone())),
            properties: Arc::new(SeaOrmPropertyRepository::new(db.clone())),
            visits: Arc::new(SeaOrmVisitRepository::new(db.clone())),
            sale_contracts: Arc::new(SeaOrmSaleContractRepository::new(db.clone())),
            rental_contracts: Arc::new(SeaOrmRentalContractRepository::new(db.clone())),
        };

        Self {
            db,
            service: Arc::new(Service::new(repos)),
        }
    }

    /// Apply all pending migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(self.db.as_ref(), None)
            .await
            .context("Brokerage migrations failed")?;
        tracing::info!("Brokerage service migrations completed");
        Ok(())
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn BrokerageApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
