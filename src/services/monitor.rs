//! # Monitor Service
//!
//! Business rules for monitor records: name validation, identity and
//! timestamp assignment, and orchestration of repository calls. The service
//! is stateless across calls; every operation is one or two sequential
//! repository calls with no wrapping transaction.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::monitor::Model as MonitorModel;
use crate::repositories::MonitorRepository;

const MAX_NAME_CHARS: usize = 128;

/// Request data for creating a new monitor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMonitorRequest {
    /// Display name for the monitor (required, 1-128 characters)
    #[schema(example = "payments-api-check")]
    pub name: String,
}

impl CreateMonitorRequest {
    pub fn validate(&self) -> Result<(), RepositoryError> {
        validate_monitor_name(&self.name)
    }
}

/// Request data for renaming an existing monitor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateMonitorRequest {
    /// New display name for the monitor (required, 1-128 characters)
    #[schema(example = "payments-api-check")]
    pub name: String,
}

impl UpdateMonitorRequest {
    pub fn validate(&self) -> Result<(), RepositoryError> {
        validate_monitor_name(&self.name)
    }
}

fn validate_monitor_name(name: &str) -> Result<(), RepositoryError> {
    if name.is_empty() {
        return Err(RepositoryError::validation_error(
            "Monitor name cannot be empty",
        ));
    }

    // Length is counted in characters, not bytes.
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(RepositoryError::validation_error(
            "Monitor name cannot exceed 128 characters",
        ));
    }

    Ok(())
}

/// Use-case logic for monitors, generic over the repository so it can be
/// exercised against an in-memory fake.
#[derive(Clone)]
pub struct MonitorService<R> {
    repo: R,
}

impl<R: MonitorRepository> MonitorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the monitor with the given id.
    pub async fn get(&self, id: &str) -> Result<MonitorModel, RepositoryError> {
        self.repo.get(id).await
    }

    /// Returns one unfiltered page of monitors, ordered ascending by id.
    pub async fn query(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MonitorModel>, RepositoryError> {
        self.repo.query(offset, limit).await.map_err(|err| {
            tracing::warn!(error = %err, "monitor query failed");
            err
        })
    }

    /// Returns one page of monitors owned by the given organization.
    pub async fn get_by_org(
        &self,
        org_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MonitorModel>, RepositoryError> {
        self.repo
            .get_by_org(org_id, offset, limit)
            .await
            .map_err(|err| {
                tracing::warn!(org_id, error = %err, "monitor org listing failed");
                err
            })
    }

    /// Returns one page of monitors owned by the given tenant.
    pub async fn get_by_tenant(
        &self,
        tenant: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MonitorModel>, RepositoryError> {
        self.repo
            .get_by_tenant(tenant, offset, limit)
            .await
            .map_err(|err| {
                tracing::warn!(tenant, error = %err, "monitor tenant listing failed");
                err
            })
    }

    /// Returns the total number of monitors.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        self.repo.count().await
    }

    /// Returns the number of monitors owned by the given organization.
    pub async fn count_by_org(&self, org_id: &str) -> Result<i64, RepositoryError> {
        self.repo.count_by_org(org_id).await
    }

    /// Returns the number of monitors owned by the given tenant.
    pub async fn count_by_tenant(&self, tenant: &str) -> Result<i64, RepositoryError> {
        self.repo.count_by_tenant(tenant).await
    }

    /// Creates a new monitor from the request.
    ///
    /// Validation happens before any repository call. The id and timestamp
    /// are assigned here, never by the caller, and the returned value is
    /// re-fetched so it reflects exactly what storage holds.
    pub async fn create(&self, req: CreateMonitorRequest) -> Result<MonitorModel, RepositoryError> {
        req.validate()?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        self.repo
            .create(MonitorModel {
                id: id.clone(),
                name: req.name,
                monitor_id: String::new(),
                org_id: String::new(),
                tenant: String::new(),
                is_deleted: false,
                updated_at: now.into(),
            })
            .await?;

        self.get(&id).await
    }

    /// Renames the monitor with the given id and refreshes its timestamp.
    ///
    /// Like `create`, the returned value is re-fetched after persisting so
    /// both mutations report the stored state.
    pub async fn update(
        &self,
        id: &str,
        req: UpdateMonitorRequest,
    ) -> Result<MonitorModel, RepositoryError> {
        req.validate()?;

        let mut monitor = self.get(id).await?;
        monitor.name = req.name;
        monitor.updated_at = Utc::now().into();

        self.repo.update(monitor).await?;
        self.get(id).await
    }

    /// Deletes the monitor with the given id, returning the value as it
    /// existed immediately before deletion.
    pub async fn delete(&self, id: &str) -> Result<MonitorModel, RepositoryError> {
        let monitor = self.get(id).await?;
        self.repo.delete(id).await?;
        Ok(monitor)
    }
}
