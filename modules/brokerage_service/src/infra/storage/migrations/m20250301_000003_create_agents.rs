use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agents::Table)
                    .if_not_exists()
                    .col(&mut id_column(Agents::Id))
                    .col(ColumnDef::new(Agents::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Agents::Surname).string_len(100).not_null())
                    .col(ColumnDef::new(Agents::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Agents::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Agents::LicenseNumber).string_len(50).not_null())
                    .col(ColumnDef::new(Agents::HiredOn).date().not_null())
                    .col(ColumnDef::new(Agents::Salary).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Agents::CommissionPct)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_agents_license_number")
                    .table(Agents::Table)
                    .col(Agents::LicenseNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agents::Table).to_owned())
            .await
    }
}
