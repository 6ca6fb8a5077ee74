use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owners::Table)
                    .if_not_exists()
                    .col(&mut id_column(Owners::Id))
                    .col(ColumnDef::new(Owners::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Owners::Surname).string_len(100).not_null())
                    .col(ColumnDef::new(Owners::NationalId).string_len(20).not_null())
                    .col(ColumnDef::new(Owners::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Owners::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Owners::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Owners::RegisteredOn).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_owners_national_id")
                    .table(Owners::Table)
                    .col(Owners::NationalId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owners::Table).to_owned())
            .await
    }
}
