// Identity resolution: join attendance records to the employee directory by
// case-insensitive name equality.
//
// Purpose
// - Turn free-text attendance names into canonical employee ids before any
//   schedule work happens.
//
// Responsibilities
// - Left join with attendance as the driving side: output cardinality equals
//   input cardinality, unmatched events carry a None id.
// - Never perform input or output; the caller decides what to do with the
//   unmatched remainder.

use crate::core::attendance::{AttendanceEvent, EmployeeIdentity, ResolvedEvent};
use std::collections::HashMap;

/// Joins every attendance event to the directory on lowercased names. Exact
/// case-insensitive equality only; no fuzzy matching.
pub fn resolve_identities(
    events: Vec<AttendanceEvent>,
    identities: &[EmployeeIdentity],
) -> Vec<ResolvedEvent> {
    let by_name: HashMap<String, i64> = identities
        .iter()
        .map(|identity| (identity.display_name.to_lowercase(), identity.id))
        .collect();

    events
        .into_iter()
        .map(|event| {
            let employee_id = by_name.get(&event.employee_name.to_lowercase()).copied();
            ResolvedEvent { employee_id, event }
        })
        .collect()
}

/// Drops events that failed to resolve, warning once per dropped event.
/// Returns the matched events and the dropped count for the run summary.
pub fn split_unmatched(resolved: Vec<ResolvedEvent>) -> (Vec<ResolvedEvent>, u64) {
    let mut matched = Vec::with_capacity(resolved.len());
    let mut dropped = 0u64;
    for entry in resolved {
        if entry.employee_id.is_some() {
            matched.push(entry);
        } else {
            tracing::warn!(
                employee_name = %entry.event.employee_name,
                date = %entry.event.date,
                "no directory match for attendance event, dropping"
            );
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::warn!(dropped, "attendance events dropped with unmatched identities");
    }
    (matched, dropped)
}
