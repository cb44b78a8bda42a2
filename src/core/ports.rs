// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the three external collaborators as traits: the biometric
//   attendance source, the employee directory, and the schedule store.
//
// Responsibilities
// - Keep the pipeline independent of any concrete backend by coding against
//   traits. Relational adapters are a deployment concern; this crate ships
//   in-memory implementations in the adapters layer.
//
// Testing guidance
// - Use the in-memory adapters for tests and local development.

use crate::core::attendance::{AttendanceEvent, EmployeeIdentity};
use crate::core::schedule::{ScheduleRow, WeekKey};
use async_trait::async_trait;
use chrono::Weekday;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error(
        "duplicate schedule row for employee {} week {}..{}",
        key.employee_id, key.week_start, key.week_end
    )]
    DuplicateKey { key: WeekKey },

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AttendanceSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<AttendanceEvent>, StoreError>;
}

#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<EmployeeIdentity>, StoreError>;
}

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Exact-equality lookup on the full key triple. This is an existence
    /// check, not a range or overlap test.
    async fn find_row(&self, key: &WeekKey) -> Result<Option<ScheduleRow>, StoreError>;

    /// Inserts a new row. Fails with `DuplicateKey` when a row with the same
    /// key already exists; callers treat that as a benign lost race.
    async fn insert_row(&self, row: ScheduleRow) -> Result<(), StoreError>;

    /// Writes one weekday column and the recomputed total in a single
    /// all-or-nothing update against the row identified by `key`.
    async fn update_hours(
        &self,
        key: &WeekKey,
        day: Weekday,
        hours: f64,
        total_hours: f64,
    ) -> Result<(), StoreError>;
}
