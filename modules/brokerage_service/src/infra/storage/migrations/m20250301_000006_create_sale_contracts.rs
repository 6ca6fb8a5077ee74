use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SaleContracts::Table)
                    .if_not_exists()
                    .col(&mut id_column(SaleContracts::Id))
                    .col(ColumnDef::new(SaleContracts::PropertyId).integer().not_null())
                    .col(ColumnDef::new(SaleContracts::OwnerId).integer().not_null())
                    .col(ColumnDef::new(SaleContracts::ClientId).integer().not_null())
                    .col(ColumnDef::new(SaleContracts::AgentId).integer().not_null())
                    .col(ColumnDef::new(SaleContracts::ContractDate).date().not_null())
                    .col(
                        ColumnDef::new(SaleContracts::FinalPrice)
                            .decimal_len(15, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SaleContracts::ClosingDate).date())
                    .col(ColumnDef::new(SaleContracts::Status).string_len(50).not_null())
                    .col(
                        ColumnDef::new(SaleContracts::AgentCommission)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_contracts_property")
                            .from(SaleContracts::Table, SaleContracts::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_contracts_owner")
                            .from(SaleContracts::Table, SaleContracts::OwnerId)
                            .to(Owners::Table, Owners::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_contracts_client")
                            .from(SaleContracts::Table, SaleContracts::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_contracts_agent")
                            .from(SaleContracts::Table, SaleContracts::AgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One sale per property
        manager
            .create_index(
                Index::create()
                    .name("uq_sale_contracts_property_id")
                    .table(SaleContracts::Table)
                    .col(SaleContracts::PropertyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_sale_contracts_owner_id", SaleContracts::OwnerId),
            ("idx_sale_contracts_client_id", SaleContracts::ClientId),
            ("idx_sale_contracts_agent_id", SaleContracts::AgentId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(SaleContracts::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SaleContracts::Table).to_owned())
            .await
    }
}
