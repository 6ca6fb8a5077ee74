//! Database migrations for the brokerage service
//!
//! Tables are created parents first; protected references use `RESTRICT`,
//! ownership chains use `CASCADE`, and the visit agent uses `SET NULL`.

use sea_orm_migration::prelude::*;

mod m20250301_000001_create_owners;
mod m20250301_000002_create_clients;
mod m20250301_000003_create_agents;
mod m20250301_000004_create_properties;
mod m20250301_000005_create_visits;
mod m20250301_000006_create_sale_contracts;
mod m20250301_000007_create_rental_contracts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_owners::Migration),
            Box::new(m20250301_000002_create_clients::Migration),
            Box::new(m20250301_000003_create_agents::Migration),
            Box::new(m20250301_000004_create_properties::Migration),
            Box::new(m20250301_000005_create_visits::Migration),
            Box::new(m20250301_000006_create_sale_contracts::Migration),
            Box::new(m20250301_000007_create_rental_contracts::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Owners {
    Table,
    Id,
    Name,
    Surname,
    NationalId,
    Phone,
    Email,
    Address,
    RegisteredOn,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    Name,
    Surname,
    NationalId,
    Phone,
    Email,
    PropertyPreferences,
    MaxBudget,
    RegisteredOn,
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    Id,
    Name,
    Surname,
    Phone,
    Email,
    LicenseNumber,
    HiredOn,
    Salary,
    CommissionPct,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    OwnerId,
    Address,
    PropertyType,
    Rooms,
    Bathrooms,
    SurfaceM2,
    SalePrice,
    RentalPrice,
    Status,
    PublishedOn,
    Description,
}

#[derive(DeriveIden)]
enum Visits {
    Table,
    Id,
    PropertyId,
    ClientId,
    AgentId,
    VisitDate,
    VisitTime,
    ClientComments,
    Rating,
}

#[derive(DeriveIden)]
enum SaleContracts {
    Table,
    Id,
    PropertyId,
    OwnerId,
    ClientId,
    AgentId,
    ContractDate,
    FinalPrice,
    ClosingDate,
    Status,
    AgentCommission,
}

#[derive(DeriveIden)]
enum RentalContracts {
    Table,
    Id,
    PropertyId,
    OwnerId,
    ClientId,
    AgentId,
    StartDate,
    EndDate,
    MonthlyRent,
    Status,
    SecurityDeposit,
}

fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}
