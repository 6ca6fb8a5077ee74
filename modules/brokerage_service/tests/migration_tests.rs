//! Schema migrations applied, inspected and reverted through the migrator

mod common;

use brokerage_service::{BrokerageModule, Config, Migrator};
use common::new_owner;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::collections::HashSet;

async fn empty_database() -> DatabaseConnection {
    Database::connect(Config::default().database.connect_options())
        .await
        .expect("in-memory database")
}

async fn applied_names(db: &DatabaseConnection) -> Vec<String> {
    Migrator::get_applied_migrations(db)
        .await
        .unwrap()
        .iter()
        .map(|m| m.name().to_string())
        .collect()
}

#[tokio::test]
async fn every_migration_is_recorded_under_its_own_name() {
    let db = empty_database().await;

    Migrator::up(&db, None).await.unwrap();

    let names = applied_names(&db).await;
    assert_eq!(names.len(), 7);
    assert_eq!(names.iter().collect::<HashSet<_>>().len(), 7);
    assert_eq!(names[0], "m20250301_000001_create_owners");
    assert_eq!(names[6], "m20250301_000007_create_rental_contracts");
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn migrations_revert_and_reapply() {
    let db = empty_database().await;
    Migrator::up(&db, None).await.unwrap();

    Migrator::down(&db, Some(2)).await.unwrap();
    assert_eq!(applied_names(&db).await.len(), 5);
    let pending: Vec<String> = Migrator::get_pending_migrations(&db)
        .await
        .unwrap()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(
        pending,
        [
            "m20250301_000006_create_sale_contracts",
            "m20250301_000007_create_rental_contracts"
        ]
    );

    Migrator::down(&db, None).await.unwrap();
    assert!(applied_names(&db).await.is_empty());

    Migrator::up(&db, None).await.unwrap();
    assert_eq!(applied_names(&db).await.len(), 7);

    // The reapplied schema accepts writes
    let module = BrokerageModule::with_connection(db);
    let owner = module.service().create_owner(new_owner("A")).await.unwrap();
    assert_eq!(module.service().get_owner(owner.id).await.unwrap(), owner);
}

#[tokio::test]
async fn stepped_up_applies_in_order() {
    let db = empty_database().await;

    Migrator::up(&db, Some(3)).await.unwrap();
    assert_eq!(
        applied_names(&db).await,
        [
            "m20250301_000001_create_owners",
            "m20250301_000002_create_clients",
            "m20250301_000003_create_agents"
        ]
    );
    assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 4);
}
