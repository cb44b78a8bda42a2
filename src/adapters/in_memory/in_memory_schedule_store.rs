// In memory implementation of the ScheduleStore port.
//
// Purpose
// - Exercise reconciliation and projection without a database.
//
// Responsibilities
// - Store schedule rows in a map keyed by the week-key triple.
// - Enforce the one-row-per-key invariant by rejecting duplicate inserts, the
//   way a relational backend would with a unique constraint.

use crate::core::ports::{ScheduleStore, StoreError};
use crate::core::schedule::{ScheduleRow, WeekKey};
use chrono::Weekday;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryScheduleStore {
    rows: RwLock<HashMap<WeekKey, ScheduleRow>>,
    is_offline: bool,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }

    /// All rows, ordered by key, for assertions and the demo report.
    pub async fn snapshot(&self) -> Vec<ScheduleRow> {
        let guard = self.rows.read().await;
        let mut rows: Vec<ScheduleRow> = guard.values().cloned().collect();
        rows.sort_by_key(|row| (row.key.employee_id, row.key.week_start));
        rows
    }
}

#[async_trait::async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn find_row(&self, key: &WeekKey) -> Result<Option<ScheduleRow>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Connection("schedule store offline".to_string()));
        }
        Ok(self.rows.read().await.get(key).cloned())
    }

    async fn insert_row(&self, row: ScheduleRow) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Connection("schedule store offline".to_string()));
        }
        // Check and insert under one write guard; this is the uniqueness
        // authority the reconciler relies on.
        let mut guard = self.rows.write().await;
        if guard.contains_key(&row.key) {
            return Err(StoreError::DuplicateKey { key: row.key });
        }
        guard.insert(row.key, row);
        Ok(())
    }

    async fn update_hours(
        &self,
        key: &WeekKey,
        day: Weekday,
        hours: f64,
        total_hours: f64,
    ) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Connection("schedule store offline".to_string()));
        }
        let mut guard = self.rows.write().await;
        let Some(row) = guard.get_mut(key) else {
            return Err(StoreError::Backend(format!(
                "no schedule row for employee {} week {}",
                key.employee_id, key.week_start
            )));
        };
        row.hours.set(day, hours);
        row.total_hours = total_hours;
        Ok(())
    }
}
