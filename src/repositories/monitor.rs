//! # Monitor Repository
//!
//! This module contains the repository abstraction for Monitor entities and
//! its SeaORM implementation. Each call executes exactly one storage
//! operation (delete looks the row up first); there are no retries, no
//! cross-call transactions, and no validation at this layer.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::error::RepositoryError;
use crate::models::monitor::{
    ActiveModel as MonitorActiveModel, Column, Entity as Monitor, Model as MonitorModel,
};

/// Data access contract for monitor records.
///
/// Listings are ordered ascending by `id` and sliced to `[offset, offset+limit)`;
/// an empty page is `Ok(vec![])`, never an error.
#[async_trait]
pub trait MonitorRepository: Send + Sync {
    /// Returns the monitor with the given id, or `NotFound`.
    async fn get(&self, id: &str) -> Result<MonitorModel, RepositoryError>;
    /// Returns one page of monitors filtered by `org_id`.
    async fn get_by_org(
        &self,
        org_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MonitorModel>, RepositoryError>;
    /// Returns one page of monitors filtered by `tenant`.
    async fn get_by_tenant(
        &self,
        tenant: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MonitorModel>, RepositoryError>;
    /// Returns one unfiltered page of monitors.
    async fn query(&self, offset: u64, limit: u64) -> Result<Vec<MonitorModel>, RepositoryError>;
    /// Returns the total number of monitors.
    async fn count(&self) -> Result<i64, RepositoryError>;
    /// Returns the number of monitors owned by `org_id`.
    async fn count_by_org(&self, org_id: &str) -> Result<i64, RepositoryError>;
    /// Returns the number of monitors owned by `tenant`.
    async fn count_by_tenant(&self, tenant: &str) -> Result<i64, RepositoryError>;
    /// Inserts a fully-populated record whose id was assigned by the caller.
    async fn create(&self, monitor: MonitorModel) -> Result<(), RepositoryError>;
    /// Persists all mutable fields of a record whose id must already exist.
    async fn update(&self, monitor: MonitorModel) -> Result<(), RepositoryError>;
    /// Removes the monitor with the given id; `NotFound` if absent.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

/// SeaORM-backed repository for monitor records
#[derive(Clone)]
pub struct SeaOrmMonitorRepository {
    db: DatabaseConnection,
}

impl SeaOrmMonitorRepository {
    /// Create a new repository over the given connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MonitorRepository for SeaOrmMonitorRepository {
    async fn get(&self, id: &str) -> Result<MonitorModel, RepositoryError> {
        Monitor::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("monitor {}", id)))
    }

    async fn get_by_org(
        &self,
        org_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MonitorModel>, RepositoryError> {
        Monitor::find()
            .filter(Column::OrgId.eq(org_id))
            .order_by_asc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    async fn get_by_tenant(
        &self,
        tenant: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MonitorModel>, RepositoryError> {
        Monitor::find()
            .filter(Column::Tenant.eq(tenant))
            .order_by_asc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    async fn query(&self, offset: u64, limit: u64) -> Result<Vec<MonitorModel>, RepositoryError> {
        Monitor::find()
            .order_by_asc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count = Monitor::find()
            .count(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;
        Ok(count as i64)
    }

    async fn count_by_org(&self, org_id: &str) -> Result<i64, RepositoryError> {
        let count = Monitor::find()
            .filter(Column::OrgId.eq(org_id))
            .count(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;
        Ok(count as i64)
    }

    async fn count_by_tenant(&self, tenant: &str) -> Result<i64, RepositoryError> {
        let count = Monitor::find()
            .filter(Column::Tenant.eq(tenant))
            .count(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;
        Ok(count as i64)
    }

    async fn create(&self, monitor: MonitorModel) -> Result<(), RepositoryError> {
        let record = MonitorActiveModel {
            id: Set(monitor.id),
            name: Set(monitor.name),
            monitor_id: Set(monitor.monitor_id),
            org_id: Set(monitor.org_id),
            tenant: Set(monitor.tenant),
            is_deleted: Set(monitor.is_deleted),
            updated_at: Set(monitor.updated_at),
        };

        record
            .insert(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    async fn update(&self, monitor: MonitorModel) -> Result<(), RepositoryError> {
        let record = MonitorActiveModel {
            id: Unchanged(monitor.id),
            name: Set(monitor.name),
            monitor_id: Set(monitor.monitor_id),
            org_id: Set(monitor.org_id),
            tenant: Set(monitor.tenant),
            is_deleted: Set(monitor.is_deleted),
            updated_at: Set(monitor.updated_at),
        };

        record
            .update(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let monitor = self.get(id).await?;

        monitor
            .delete(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use migration::MigratorTrait;
    use sea_orm::{ConnectOptions, Database};

    async fn setup_test_db() -> DatabaseConnection {
        // A single connection keeps every statement on the same in-memory db.
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.expect("Failed to init test DB");

        migration::Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        db
    }

    fn sample_monitor(id: &str, org_id: &str, tenant: &str) -> MonitorModel {
        MonitorModel {
            id: id.to_string(),
            name: format!("monitor {}", id),
            monitor_id: String::new(),
            org_id: org_id.to_string(),
            tenant: tenant.to_string(),
            is_deleted: false,
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = setup_test_db().await;
        let repo = SeaOrmMonitorRepository::new(db);

        repo.create(sample_monitor("m1", "org-a", "tenant-a"))
            .await
            .unwrap();

        let found = repo.get("m1").await.unwrap();
        assert_eq!(found.id, "m1");
        assert_eq!(found.name, "monitor m1");
        assert_eq!(found.org_id, "org-a");
        assert!(!found.is_deleted);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let db = setup_test_db().await;
        let repo = SeaOrmMonitorRepository::new(db);

        let result = repo.get("absent").await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_storage_error() {
        let db = setup_test_db().await;
        let repo = SeaOrmMonitorRepository::new(db);

        repo.create(sample_monitor("dup", "org-a", "tenant-a"))
            .await
            .unwrap();
        let result = repo.create(sample_monitor("dup", "org-b", "tenant-b")).await;

        assert!(matches!(result, Err(RepositoryError::Database(_))));
    }

    #[tokio::test]
    async fn test_query_orders_by_id_and_paginates() {
        let db = setup_test_db().await;
        let repo = SeaOrmMonitorRepository::new(db);

        for id in ["c", "a", "b"] {
            repo.create(sample_monitor(id, "org-a", "tenant-a"))
                .await
                .unwrap();
        }

        let all = repo.query(0, 10).await.unwrap();
        let ids: Vec<_> = all.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let page = repo.query(1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "b");

        let past_end = repo.query(10, 5).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_scoped_listings_and_counts() {
        let db = setup_test_db().await;
        let repo = SeaOrmMonitorRepository::new(db);

        repo.create(sample_monitor("m1", "org-a", "tenant-x"))
            .await
            .unwrap();
        repo.create(sample_monitor("m2", "org-a", "tenant-y"))
            .await
            .unwrap();
        repo.create(sample_monitor("m3", "org-b", "tenant-y"))
            .await
            .unwrap();

        let org_a = repo.get_by_org("org-a", 0, 10).await.unwrap();
        assert_eq!(org_a.len(), 2);
        assert!(org_a.iter().all(|m| m.org_id == "org-a"));

        let tenant_y = repo.get_by_tenant("tenant-y", 0, 10).await.unwrap();
        assert_eq!(tenant_y.len(), 2);

        assert_eq!(repo.count().await.unwrap(), 3);
        assert_eq!(repo.count_by_org("org-a").await.unwrap(), 2);
        assert_eq!(repo.count_by_org("org-missing").await.unwrap(), 0);
        assert_eq!(repo.count_by_tenant("tenant-y").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_persists_mutable_fields() {
        let db = setup_test_db().await;
        let repo = SeaOrmMonitorRepository::new(db);

        repo.create(sample_monitor("m1", "org-a", "tenant-a"))
            .await
            .unwrap();

        let mut monitor = repo.get("m1").await.unwrap();
        monitor.name = "renamed".to_string();
        monitor.updated_at = Utc::now().into();
        repo.update(monitor).await.unwrap();

        let found = repo.get("m1").await.unwrap();
        assert_eq!(found.name, "renamed");
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = setup_test_db().await;
        let repo = SeaOrmMonitorRepository::new(db);

        repo.create(sample_monitor("m1", "org-a", "tenant-a"))
            .await
            .unwrap();

        repo.delete("m1").await.unwrap();

        let result = repo.get("m1").await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));

        let result = repo.delete("m1").await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
