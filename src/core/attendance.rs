// Attendance-side domain types: what the biometric source and the employee
// directory hand us, and the joined shape the pipeline works on.
//
// Boundaries
// - Plain data. No input or output here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One biometric attendance record: an employee worked `hours_worked` hours on
/// `date`. The source system produces at most one per employee per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    pub employee_external_id: i64,
    pub employee_name: String,
    pub date: NaiveDate,
    pub hours_worked: f64,
}

/// Canonical employee record from the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeIdentity {
    pub id: i64,
    pub display_name: String,
}

/// An attendance event after identity resolution. `employee_id` is None when
/// the event's name had no directory match; such events are dropped before
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    pub employee_id: Option<i64>,
    pub event: AttendanceEvent,
}

#[cfg(test)]
mod attendance_types_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_round_trip_an_attendance_event_through_json() {
        let event = AttendanceEvent {
            employee_external_id: 42,
            employee_name: "John Doe".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            hours_worked: 8.5,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: AttendanceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[rstest]
    fn it_should_keep_the_employee_id_optional_on_a_resolved_event() {
        let event = AttendanceEvent {
            employee_external_id: 42,
            employee_name: "Ghost".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            hours_worked: 8.0,
        };
        let resolved = ResolvedEvent {
            employee_id: None,
            event,
        };
        assert!(resolved.employee_id.is_none());
    }
}
