//! Create `company` table.
//! Sector is stored by symbolic name so enum reordering never changes stored meaning.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Company::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Company::Name, 255))
                    .col(string_len_null(Company::Country, 128))
                    .col(string_len_null(Company::Ceo, 128))
                    .col(date_null(Company::FoundationDate))
                    .col(big_integer_null(Company::Revenue))
                    .col(string_len(Company::Sector, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
    Name,
    Country,
    Ceo,
    FoundationDate,
    Revenue,
    Sector,
}
