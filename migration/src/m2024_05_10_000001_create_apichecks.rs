//! Migration to create the apichecks table.
//!
//! This migration creates the baseline monitor table with a string primary
//! key, org/tenant scoping columns, and the update timestamp.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apichecks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Apichecks::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Apichecks::Name).string().not_null())
                    .col(
                        ColumnDef::new(Apichecks::MonitorId)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Apichecks::OrgId)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Apichecks::Tenant)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Apichecks::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Apichecks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apichecks_org_id")
                    .table(Apichecks::Table)
                    .col(Apichecks::OrgId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apichecks_tenant")
                    .table(Apichecks::Table)
                    .col(Apichecks::Tenant)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Apichecks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Apichecks {
    Table,
    Id,
    Name,
    MonitorId,
    OrgId,
    Tenant,
    IsDeleted,
    UpdatedAt,
}
