//! # Data Models
//!
//! This module contains the data models used throughout the Hawkeye
//! management service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod monitor;

pub use monitor::Entity as Monitor;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "hawkeye-management".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
