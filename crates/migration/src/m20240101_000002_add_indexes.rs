use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Company: name lookups back the keyword search
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_name")
                    .table(Company::Table)
                    .col(Company::Name)
                    .to_owned(),
            )
            .await?;

        // Company: sector filter for reporting queries
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_sector")
                    .table(Company::Table)
                    .col(Company::Sector)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_company_name").table(Company::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_company_sector").table(Company::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Name, Sector }
