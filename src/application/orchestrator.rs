// ETL orchestration: fetch, resolve identities, reconcile schedules, project
// hours, in that order.
//
// Purpose
// - Sequence the stages, short-circuit on empty or failed stages, and surface
//   a terminal run report instead of raising past the boundary.
//
// Responsibilities
// - Each stage runs under a bounded timeout; an elapsed timeout surfaces as a
//   retryable store Timeout, never a hang.
// - Non-fatal per-row conditions accumulate into the summary; fatal errors
//   abort the remaining stages.

use crate::application::errors::{EtlError, Stage};
use crate::application::identity_resolver::{resolve_identities, split_unmatched};
use crate::application::projector::HourProjector;
use crate::application::reconciler::ScheduleReconciler;
use crate::core::ports::{AttendanceSource, DirectorySource, ScheduleStore, StoreError};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub events_fetched: u64,
    pub events_resolved: u64,
    pub unmatched_dropped: u64,
    pub rows_created: u64,
    pub rows_existing: u64,
    pub rows_updated: u64,
    pub skipped_missing_id: u64,
    pub skipped_missing_row: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Aborted { stage: Stage, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub status: RunStatus,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn is_completed(&self) -> bool {
        matches!(self.status, RunStatus::Completed)
    }
}

pub struct EtlOrchestrator<A, D, S>
where
    A: AttendanceSource,
    D: DirectorySource,
    S: ScheduleStore,
{
    attendance: Arc<A>,
    directory: Arc<D>,
    schedule: Arc<S>,
    stage_timeout: Duration,
}

impl<A, D, S> EtlOrchestrator<A, D, S>
where
    A: AttendanceSource,
    D: DirectorySource,
    S: ScheduleStore,
{
    pub fn new(
        attendance: Arc<A>,
        directory: Arc<D>,
        schedule: Arc<S>,
        stage_timeout: Duration,
    ) -> Self {
        Self {
            attendance,
            directory,
            schedule,
            stage_timeout,
        }
    }

    pub async fn run(&self) -> RunReport {
        let mut summary = RunSummary::default();

        let events = match self.bounded(self.attendance.fetch_all()).await {
            Ok(events) => events,
            Err(error) => return Self::abort(Stage::Fetch, error.into(), summary),
        };
        summary.events_fetched = events.len() as u64;
        if events.is_empty() {
            tracing::error!("no attendance events fetched, stopping");
            return Self::abort_empty(Stage::Fetch, summary);
        }
        tracing::info!(events = summary.events_fetched, "fetched attendance events");

        let identities = match self.bounded(self.directory.fetch_all()).await {
            Ok(identities) => identities,
            Err(error) => return Self::abort(Stage::Fetch, error.into(), summary),
        };
        tracing::info!(identities = identities.len(), "fetched employee directory");

        let resolved = resolve_identities(events, &identities);
        let (matched, dropped) = split_unmatched(resolved);
        summary.events_resolved = matched.len() as u64;
        summary.unmatched_dropped = dropped;
        if matched.is_empty() {
            tracing::error!("no attendance events resolved to an employee, stopping");
            return Self::abort_empty(Stage::Resolve, summary);
        }
        tracing::info!(
            resolved = summary.events_resolved,
            dropped,
            "resolved identities"
        );

        let reconciler = ScheduleReconciler::new(&*self.schedule);
        let reconciled = match self.bounded(reconciler.reconcile(&matched)).await {
            Ok(outcome) => outcome,
            Err(error) => return Self::abort(Stage::Reconcile, error.into(), summary),
        };
        summary.rows_created = reconciled.rows_created;
        summary.rows_existing = reconciled.rows_existing;
        summary.skipped_missing_id = reconciled.skipped_missing_id;
        if reconciled.rows_reconciled() == 0 {
            tracing::error!("reconciliation produced no schedule rows, stopping");
            return Self::abort_empty(Stage::Reconcile, summary);
        }
        tracing::info!(
            created = reconciled.rows_created,
            existing = reconciled.rows_existing,
            "reconciled schedule rows"
        );

        let projector = HourProjector::new(&*self.schedule);
        let projected = match self.bounded(projector.project(&matched)).await {
            Ok(outcome) => outcome,
            Err(error) => return Self::abort(Stage::Project, error.into(), summary),
        };
        summary.rows_updated = projected.rows_updated;
        summary.skipped_missing_id += projected.skipped_missing_id;
        summary.skipped_missing_row = projected.skipped_missing_row;
        tracing::info!(updated = projected.rows_updated, "projected hours");

        tracing::info!("ETL run completed");
        RunReport {
            status: RunStatus::Completed,
            summary,
        }
    }

    async fn bounded<T>(
        &self,
        operation: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.stage_timeout, operation).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.stage_timeout)),
        }
    }

    fn abort(stage: Stage, error: EtlError, summary: RunSummary) -> RunReport {
        tracing::error!(%stage, %error, "ETL run aborted");
        RunReport {
            status: RunStatus::Aborted {
                stage,
                reason: error.to_string(),
            },
            summary,
        }
    }

    fn abort_empty(stage: Stage, summary: RunSummary) -> RunReport {
        Self::abort(stage, EtlError::EmptyResult { stage }, summary)
    }
}
