// Hour projection: write each day's logged hours into the matching weekday
// column of its week's schedule row.
//
// Purpose
// - Project attendance hours into reconciled rows and keep the weekly total
//   equal to the sum of the seven columns.
//
// Responsibilities
// - Overwrite, never accumulate: an event is the authoritative total for its
//   day, so re-running projection is idempotent.
// - Update only the row with the exact matching key, one store write per event.

use crate::core::attendance::ResolvedEvent;
use crate::core::ports::{ScheduleStore, StoreError};
use crate::core::schedule::WeekKey;
use chrono::Datelike;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectOutcome {
    pub rows_updated: u64,
    pub skipped_missing_id: u64,
    pub skipped_missing_row: u64,
}

pub struct HourProjector<'a, S: ScheduleStore> {
    store: &'a S,
}

impl<'a, S: ScheduleStore> HourProjector<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn project(&self, events: &[ResolvedEvent]) -> Result<ProjectOutcome, StoreError> {
        let mut outcome = ProjectOutcome::default();
        for entry in events {
            let Some(employee_id) = entry.employee_id else {
                tracing::warn!(
                    employee_name = %entry.event.employee_name,
                    date = %entry.event.date,
                    "event without employee id reached projection, skipping"
                );
                outcome.skipped_missing_id += 1;
                continue;
            };

            let key = WeekKey::for_date(employee_id, entry.event.date);
            let Some(row) = self.store.find_row(&key).await? else {
                tracing::warn!(
                    employee_id,
                    week_start = %key.week_start,
                    "no schedule row for event at projection time, skipping"
                );
                outcome.skipped_missing_row += 1;
                continue;
            };

            let day = entry.event.date.weekday();
            let mut hours = row.hours;
            hours.set(day, entry.event.hours_worked);
            self.store
                .update_hours(&key, day, entry.event.hours_worked, hours.total())
                .await?;
            outcome.rows_updated += 1;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod hour_projector_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_schedule_store::InMemoryScheduleStore;
    use crate::core::attendance::AttendanceEvent;
    use crate::core::schedule::ScheduleRow;
    use chrono::{NaiveDate, Weekday};
    use rstest::{fixture, rstest};

    fn resolved(employee_id: i64, y: i32, m: u32, d: u32, hours: f64) -> ResolvedEvent {
        ResolvedEvent {
            employee_id: Some(employee_id),
            event: AttendanceEvent {
                employee_external_id: 1001,
                employee_name: "John Doe".to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                hours_worked: hours,
            },
        }
    }

    #[fixture]
    async fn reconciled_store() -> InMemoryScheduleStore {
        let store = InMemoryScheduleStore::new();
        let key = WeekKey::for_date(7, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        store.insert_row(ScheduleRow::blank(key)).await.unwrap();
        store
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_the_hours_into_the_weekday_column(
        #[future(awt)] reconciled_store: InMemoryScheduleStore,
    ) {
        let projector = HourProjector::new(&reconciled_store);
        let outcome = projector
            .project(&[resolved(7, 2024, 3, 6, 8.5)])
            .await
            .unwrap();

        assert_eq!(outcome.rows_updated, 1);
        let key = WeekKey::for_date(7, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        let row = reconciled_store.find_row(&key).await.unwrap().unwrap();
        assert_eq!(row.hours.get(Weekday::Wed), 8.5);
        assert_eq!(row.total_hours, 8.5);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_total_two_days_of_the_same_week(
        #[future(awt)] reconciled_store: InMemoryScheduleStore,
    ) {
        let projector = HourProjector::new(&reconciled_store);
        projector
            .project(&[
                resolved(7, 2024, 3, 6, 8.5),
                resolved(7, 2024, 3, 8, 4.0),
            ])
            .await
            .unwrap();

        let key = WeekKey::for_date(7, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        let row = reconciled_store.find_row(&key).await.unwrap().unwrap();
        assert_eq!(row.hours.get(Weekday::Wed), 8.5);
        assert_eq!(row.hours.get(Weekday::Fri), 4.0);
        assert_eq!(row.total_hours, 12.5);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_overwrite_instead_of_doubling_on_rerun(
        #[future(awt)] reconciled_store: InMemoryScheduleStore,
    ) {
        let projector = HourProjector::new(&reconciled_store);
        let events = [resolved(7, 2024, 3, 6, 8.5)];
        projector.project(&events).await.unwrap();
        projector.project(&events).await.unwrap();

        let key = WeekKey::for_date(7, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        let row = reconciled_store.find_row(&key).await.unwrap().unwrap();
        assert_eq!(row.hours.get(Weekday::Wed), 8.5);
        assert_eq!(row.total_hours, 8.5);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_an_event_whose_week_has_no_row(
        #[future(awt)] reconciled_store: InMemoryScheduleStore,
    ) {
        let projector = HourProjector::new(&reconciled_store);
        // Week of 2024-03-18 was never reconciled.
        let outcome = projector
            .project(&[resolved(7, 2024, 3, 20, 8.0)])
            .await
            .unwrap();

        assert_eq!(outcome.rows_updated, 0);
        assert_eq!(outcome.skipped_missing_row, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_events_without_an_employee_id(
        #[future(awt)] reconciled_store: InMemoryScheduleStore,
    ) {
        let projector = HourProjector::new(&reconciled_store);
        let mut event = resolved(7, 2024, 3, 6, 8.0);
        event.employee_id = None;
        let outcome = projector.project(&[event]).await.unwrap();

        assert_eq!(outcome.skipped_missing_id, 1);
        assert_eq!(outcome.rows_updated, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_a_store_failure(
        #[future(awt)] reconciled_store: InMemoryScheduleStore,
    ) {
        let mut store = reconciled_store;
        store.toggle_offline();
        let projector = HourProjector::new(&store);
        let result = projector.project(&[resolved(7, 2024, 3, 6, 8.0)]).await;
        assert!(matches!(result, Err(StoreError::Connection(_))));
    }
}
