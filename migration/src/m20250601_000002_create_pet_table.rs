use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(string_len(Pet::Name, 100))
                    .col(string_len(Pet::Origin, 100))
                    .col(string_len(Pet::Destination, 100))
                    .col(string_len(Pet::Breed, 100))
                    .col(integer(Pet::Age))
                    .col(date(Pet::Date))
                    .col(integer(Pet::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_user_id")
                            .from(Pet::Table, Pet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the route filters and the available flights grouping
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pet_route")
                    .table(Pet::Table)
                    .col(Pet::Origin)
                    .col(Pet::Destination)
                    .col(Pet::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pet {
    Table,
    Id,
    Name,
    Origin,
    Destination,
    Breed,
    Age,
    Date,
    UserId,
}
