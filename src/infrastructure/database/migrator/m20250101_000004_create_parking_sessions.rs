//! Create parking_sessions table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingSessions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ParkingSessions::Receipt)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ParkingSessions::Plate).string().not_null())
                    .col(ColumnDef::new(ParkingSessions::Brand).string().not_null())
                    .col(ColumnDef::new(ParkingSessions::Model).string().not_null())
                    .col(ColumnDef::new(ParkingSessions::Color).string().not_null())
                    .col(
                        ColumnDef::new(ParkingSessions::ClientCpf)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingSessions::SpotCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingSessions::EntryDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ParkingSessions::ExitDate).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_parking_sessions_client_cpf")
                    .table(ParkingSessions::Table)
                    .col(ParkingSessions::ClientCpf)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ParkingSessions {
    Table,
    Id,
    Receipt,
    Plate,
    Brand,
    Model,
    Color,
    ClientCpf,
    SpotCode,
    EntryDate,
    ExitDate,
}
