//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities, providing a clean data-access API the
//! service layer can be tested against.

pub mod monitor;

pub use monitor::{MonitorRepository, SeaOrmMonitorRepository};
