use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalContracts::Table)
                    .if_not_exists()
                    .col(&mut id_column(RentalContracts::Id))
                    .col(ColumnDef::new(RentalContracts::PropertyId).integer().not_null())
                    .col(ColumnDef::new(RentalContracts::OwnerId).integer().not_null())
                    .col(ColumnDef::new(RentalContracts::ClientId).integer().not_null())
                    .col(ColumnDef::new(RentalContracts::AgentId).integer().not_null())
                    .col(ColumnDef::new(RentalContracts::StartDate).date().not_null())
                    .col(ColumnDef::new(RentalContracts::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(RentalContracts::MonthlyRent)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RentalContracts::Status)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RentalContracts::SecurityDeposit)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .check(
                        Expr::col(RentalContracts::EndDate)
                            .gte(Expr::col(RentalContracts::StartDate)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_contracts_property")
                            .from(RentalContracts::Table, RentalContracts::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_contracts_owner")
                            .from(RentalContracts::Table, RentalContracts::OwnerId)
                            .to(Owners::Table, Owners::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_contracts_client")
                            .from(RentalContracts::Table, RentalContracts::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_contracts_agent")
                            .from(RentalContracts::Table, RentalContracts::AgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One rental per property
        manager
            .create_index(
                Index::create()
                    .name("uq_rental_contracts_property_id")
                    .table(RentalContracts::Table)
                    .col(RentalContracts::PropertyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_rental_contracts_owner_id", RentalContracts::OwnerId),
            ("idx_rental_contracts_client_id", RentalContracts::ClientId),
            ("idx_rental_contracts_agent_id", RentalContracts::AgentId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(RentalContracts::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalContracts::Table).to_owned())
            .await
    }
}
