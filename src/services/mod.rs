//! # Service Layer
//!
//! This module contains the business-rule layer sitting between the HTTP
//! handlers and the repositories: input validation, identity assignment,
//! and timestamp maintenance.

pub mod monitor;

pub use monitor::{CreateMonitorRequest, MonitorService, UpdateMonitorRequest};
