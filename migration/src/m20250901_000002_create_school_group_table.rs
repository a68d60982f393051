use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(SchoolGroup::Id))
                    .col(string_uniq(SchoolGroup::Name))
                    .col(string_len(SchoolGroup::Kind, 20))
                    .col(
                        timestamp_with_time_zone(SchoolGroup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SchoolGroup {
    Table,
    Id,
    Name,
    Kind,
    CreatedAt,
}
