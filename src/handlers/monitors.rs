//! # Monitor API Handlers
//!
//! This module contains handlers for the monitor CRUD, listing, and count
//! endpoints. Read endpoints are public; create, update, and delete require
//! operator authentication.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::OperatorAuth;
use crate::error::ApiError;
use crate::models::monitor::{
    Model as MonitorModel, TotalMonitorCount, TotalMonitorCountForOrg, TotalMonitorCountForTenant,
};
use crate::pagination::{Pages, PaginationQuery};
use crate::server::AppState;
use crate::services::{CreateMonitorRequest, UpdateMonitorRequest};

/// Wire representation of a monitor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonitorDto {
    /// Unique identifier (assigned at creation)
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// Display name, 1-128 characters
    #[schema(example = "payments-api-check")]
    pub name: String,
    /// Secondary reference identifier
    pub monitor_id: String,
    /// Owning organization
    pub org_id: String,
    /// Owning tenant
    pub tenant: String,
    /// Soft-delete flag (schema-level only; deletion is physical)
    pub is_deleted: bool,
    /// Timestamp of creation or last update (ISO 8601)
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub updated_at: String,
}

impl From<MonitorModel> for MonitorDto {
    fn from(model: MonitorModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            monitor_id: model.monitor_id,
            org_id: model.org_id,
            tenant: model.tenant,
            is_deleted: model.is_deleted,
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

fn to_dtos(models: Vec<MonitorModel>) -> Vec<MonitorDto> {
    models.into_iter().map(MonitorDto::from).collect()
}

/// Get a monitor by ID
#[utoipa::path(
    get,
    path = "/api/v1/monitors/{id}",
    params(("id" = String, Path, description = "Monitor ID")),
    responses(
        (status = 200, description = "Monitor retrieved successfully", body = MonitorDto),
        (status = 404, description = "Monitor not found", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn get_monitor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MonitorDto>, ApiError> {
    let monitor = state.service.get(&id).await?;
    Ok(Json(monitor.into()))
}

/// List monitors with pagination
#[utoipa::path(
    get,
    path = "/api/v1/monitors",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of monitors", body = Pages<MonitorDto>),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn list_monitors(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Pages<MonitorDto>>, ApiError> {
    let count = state.service.count().await?;
    let pages = Pages::new(&query, count);
    let items = state.service.query(pages.offset(), pages.limit()).await?;
    Ok(Json(pages.with_items(to_dtos(items))))
}

/// List monitors owned by an organization
#[utoipa::path(
    get,
    path = "/api/v1/monitors/org/{org_id}",
    params(
        ("org_id" = String, Path, description = "Organization ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "One page of monitors for the organization", body = Pages<MonitorDto>),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn list_monitors_by_org(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Pages<MonitorDto>>, ApiError> {
    let count = state.service.count_by_org(&org_id).await?;
    let pages = Pages::new(&query, count);
    let items = state
        .service
        .get_by_org(&org_id, pages.offset(), pages.limit())
        .await?;
    Ok(Json(pages.with_items(to_dtos(items))))
}

/// List monitors owned by a tenant
#[utoipa::path(
    get,
    path = "/api/v1/monitors/tenant/{tenant}",
    params(
        ("tenant" = String, Path, description = "Tenant name"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "One page of monitors for the tenant", body = Pages<MonitorDto>),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn list_monitors_by_tenant(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Pages<MonitorDto>>, ApiError> {
    let count = state.service.count_by_tenant(&tenant).await?;
    let pages = Pages::new(&query, count);
    let items = state
        .service
        .get_by_tenant(&tenant, pages.offset(), pages.limit())
        .await?;
    Ok(Json(pages.with_items(to_dtos(items))))
}

/// Total monitor count
#[utoipa::path(
    get,
    path = "/api/v1/monitorscount",
    responses(
        (status = 200, description = "Total number of monitors", body = TotalMonitorCount),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn count_monitors(
    State(state): State<AppState>,
) -> Result<Json<TotalMonitorCount>, ApiError> {
    let count = state.service.count().await?;
    Ok(Json(TotalMonitorCount {
        total_monitors_count: count,
    }))
}

/// Monitor count for an organization
#[utoipa::path(
    get,
    path = "/api/v1/orgmonitorscount/{org_id}",
    params(("org_id" = String, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Number of monitors owned by the organization", body = TotalMonitorCountForOrg),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn count_monitors_by_org(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
) -> Result<Json<TotalMonitorCountForOrg>, ApiError> {
    let count = state.service.count_by_org(&org_id).await?;
    Ok(Json(TotalMonitorCountForOrg {
        org_name: org_id,
        total_monitors_count: count,
    }))
}

/// Monitor count for a tenant
#[utoipa::path(
    get,
    path = "/api/v1/tenantmonitorscount/{tenant}",
    params(("tenant" = String, Path, description = "Tenant name")),
    responses(
        (status = 200, description = "Number of monitors owned by the tenant", body = TotalMonitorCountForTenant),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn count_monitors_by_tenant(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
) -> Result<Json<TotalMonitorCountForTenant>, ApiError> {
    let count = state.service.count_by_tenant(&tenant).await?;
    Ok(Json(TotalMonitorCountForTenant {
        tenant_name: tenant,
        total_monitors_count: count,
    }))
}

/// Create a new monitor
#[utoipa::path(
    post,
    path = "/api/v1/monitors",
    security(("bearer_auth" = [])),
    request_body = CreateMonitorRequest,
    responses(
        (status = 201, description = "Monitor created successfully", body = MonitorDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn create_monitor(
    State(state): State<AppState>,
    _operator_auth: OperatorAuth,
    Json(request): Json<CreateMonitorRequest>,
) -> Result<(StatusCode, Json<MonitorDto>), ApiError> {
    let monitor = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(monitor.into())))
}

/// Rename an existing monitor
#[utoipa::path(
    put,
    path = "/api/v1/monitors/{id}",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Monitor ID")),
    request_body = UpdateMonitorRequest,
    responses(
        (status = 200, description = "Monitor updated successfully", body = MonitorDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 404, description = "Monitor not found", body = ApiError),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn update_monitor(
    State(state): State<AppState>,
    _operator_auth: OperatorAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateMonitorRequest>,
) -> Result<Json<MonitorDto>, ApiError> {
    let monitor = state.service.update(&id, request).await?;
    Ok(Json(monitor.into()))
}

/// Delete a monitor, returning its pre-deletion snapshot
#[utoipa::path(
    delete,
    path = "/api/v1/monitors/{id}",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Monitor ID")),
    responses(
        (status = 200, description = "Monitor deleted; body holds the removed record", body = MonitorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 404, description = "Monitor not found", body = ApiError),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "monitors"
)]
pub async fn delete_monitor(
    State(state): State<AppState>,
    _operator_auth: OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<MonitorDto>, ApiError> {
    let monitor = state.service.delete(&id).await?;
    Ok(Json(monitor.into()))
}
