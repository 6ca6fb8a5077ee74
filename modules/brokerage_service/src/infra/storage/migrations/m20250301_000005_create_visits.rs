use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visits::Table)
                    .if_not_exists()
                    .col(&mut id_column(Visits::Id))
                    .col(ColumnDef::new(Visits::PropertyId).integer().not_null())
                    .col(ColumnDef::new(Visits::ClientId).integer().not_null())
                    .col(ColumnDef::new(Visits::AgentId).integer())
                    .col(ColumnDef::new(Visits::VisitDate).date().not_null())
                    .col(ColumnDef::new(Visits::VisitTime).time().not_null())
                    .col(ColumnDef::new(Visits::ClientComments).text())
                    .col(ColumnDef::new(Visits::Rating).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visits_property")
                            .from(Visits::Table, Visits::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visits_client")
                            .from(Visits::Table, Visits::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visits_agent")
                            .from(Visits::Table, Visits::AgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_visits_property_id", Visits::PropertyId),
            ("idx_visits_client_id", Visits::ClientId),
            ("idx_visits_agent_id", Visits::AgentId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Visits::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visits::Table).to_owned())
            .await
    }
}
