use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(&mut id_column(Clients::Id))
                    .col(ColumnDef::new(Clients::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Clients::Surname).string_len(100).not_null())
                    .col(ColumnDef::new(Clients::NationalId).string_len(20).not_null())
                    .col(ColumnDef::new(Clients::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Clients::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Clients::PropertyPreferences).text())
                    .col(
                        ColumnDef::new(Clients::MaxBudget)
                            .decimal_len(15, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Clients::RegisteredOn).date().not_null())
                    .to_owned(),
            )
            .await?;

        // Independent of owners: the same person may be both
        manager
            .create_index(
                Index::create()
                    .name("uq_clients_national_id")
                    .table(Clients::Table)
                    .col(Clients::NationalId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}
