//! Monitor entity model
//!
//! This module contains the SeaORM entity model for the apichecks table,
//! which stores the registered API health-check monitors, plus the
//! read-only count projections returned by the count endpoints.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Monitor entity representing a registered API health-check
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "apichecks")]
pub struct Model {
    /// Unique identifier for the monitor (primary key, assigned at creation)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Human-readable label, 1-128 characters
    pub name: String,

    /// Secondary reference identifier, not validated here
    pub monitor_id: String,

    /// Owning organization, used for scoped queries
    pub org_id: String,

    /// Owning tenant, used for scoped queries
    pub tenant: String,

    /// Soft-delete flag; present in the schema but never read or written
    pub is_deleted: bool,

    /// Set at creation and refreshed on every update
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Total monitor count projection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalMonitorCount {
    pub total_monitors_count: i64,
}

/// Monitor count scoped to one tenant
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalMonitorCountForTenant {
    pub tenant_name: String,
    pub total_monitors_count: i64,
}

/// Monitor count scoped to one organization
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalMonitorCountForOrg {
    pub org_name: String,
    pub total_monitors_count: i64,
}
