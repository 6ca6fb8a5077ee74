use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(&mut id_column(Properties::Id))
                    .col(ColumnDef::new(Properties::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Properties::Address).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Properties::PropertyType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Rooms).integer().not_null())
                    .col(ColumnDef::new(Properties::Bathrooms).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::SurfaceM2)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::SalePrice).decimal_len(15, 2))
                    .col(ColumnDef::new(Properties::RentalPrice).decimal_len(15, 2))
                    .col(ColumnDef::new(Properties::Status).string_len(50).not_null())
                    .col(ColumnDef::new(Properties::PublishedOn).date().not_null())
                    .col(ColumnDef::new(Properties::Description).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_owner")
                            .from(Properties::Table, Properties::OwnerId)
                            .to(Owners::Table, Owners::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_owner_id")
                    .table(Properties::Table)
                    .col(Properties::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}
