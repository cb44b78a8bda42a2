// Schedule reconciliation: ensure exactly one schedule row exists per employee
// per week touched by attendance data.
//
// Purpose
// - Guarantee idempotent row creation: re-running over the same events creates
//   nothing new, and a lost insert race is recovered, not fatal.
//
// Responsibilities
// - Per event: derive the week key, check for an existing row by exact key
//   equality, insert a blank row when absent.
// - Skip events without a resolved employee id; a missing id must never be
//   coerced into a reconciliation key.

use crate::core::attendance::ResolvedEvent;
use crate::core::ports::{ScheduleStore, StoreError};
use crate::core::schedule::{ScheduleRow, WeekKey};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub rows_created: u64,
    pub rows_existing: u64,
    pub skipped_missing_id: u64,
}

impl ReconcileOutcome {
    /// Weeks that have a row after this pass, created or pre-existing.
    pub fn rows_reconciled(&self) -> u64 {
        self.rows_created + self.rows_existing
    }
}

pub struct ScheduleReconciler<'a, S: ScheduleStore> {
    store: &'a S,
}

impl<'a, S: ScheduleStore> ScheduleReconciler<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn reconcile(
        &self,
        events: &[ResolvedEvent],
    ) -> Result<ReconcileOutcome, StoreError> {
        let mut outcome = ReconcileOutcome::default();
        for entry in events {
            let Some(employee_id) = entry.employee_id else {
                tracing::warn!(
                    employee_name = %entry.event.employee_name,
                    date = %entry.event.date,
                    "event without employee id reached reconciliation, skipping"
                );
                outcome.skipped_missing_id += 1;
                continue;
            };

            let key = WeekKey::for_date(employee_id, entry.event.date);
            if self.store.find_row(&key).await?.is_some() {
                outcome.rows_existing += 1;
                continue;
            }

            match self.store.insert_row(ScheduleRow::blank(key)).await {
                Ok(()) => {
                    tracing::debug!(
                        employee_id,
                        week_start = %key.week_start,
                        week_end = %key.week_end,
                        "inserted blank schedule row"
                    );
                    outcome.rows_created += 1;
                }
                Err(StoreError::DuplicateKey { .. }) => {
                    // Lost the insert race to a concurrent writer. The row is
                    // there now; re-read and carry on.
                    let existing = self.store.find_row(&key).await?;
                    tracing::debug!(
                        employee_id,
                        week_start = %key.week_start,
                        recovered = existing.is_some(),
                        "schedule row already inserted concurrently"
                    );
                    outcome.rows_existing += 1;
                }
                Err(other) => return Err(other),
            }
        }
        Ok(outcome)
    }
}
