// Schedule-side domain types: the weekly work-schedule row and its natural key.
//
// Purpose
// - Model one schedule row per employee per week, with one hour slot per
//   weekday and a running total.
//
// Boundaries
// - Plain data plus pure accessors. No input or output.
//
// Testing guidance
// - The weekday accessors are exhaustive matches; the compiler guarantees all
//   seven days are covered. Tests assert the slot mapping and the total.

use crate::core::week_window::week_window;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Natural key of a schedule row. At most one row may exist per key; the
/// schedule store enforces this with a duplicate-key rejection on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub employee_id: i64,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
}

impl WeekKey {
    /// Key of the week row that an attendance on `date` belongs to.
    pub fn for_date(employee_id: i64, date: NaiveDate) -> Self {
        let window = week_window(date);
        Self {
            employee_id,
            week_start: window.start,
            week_end: window.end,
        }
    }
}

/// Fixed record of seven hour slots, one per weekday. Indexed through
/// exhaustive matches on `chrono::Weekday` rather than a keyed map, so a
/// missing day is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeekdayHours {
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
    pub sunday: f64,
}

impl WeekdayHours {
    pub fn get(&self, day: Weekday) -> f64 {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, hours: f64) {
        match day {
            Weekday::Mon => self.monday = hours,
            Weekday::Tue => self.tuesday = hours,
            Weekday::Wed => self.wednesday = hours,
            Weekday::Thu => self.thursday = hours,
            Weekday::Fri => self.friday = hours,
            Weekday::Sat => self.saturday = hours,
            Weekday::Sun => self.sunday = hours,
        }
    }

    pub fn total(&self) -> f64 {
        self.monday
            + self.tuesday
            + self.wednesday
            + self.thursday
            + self.friday
            + self.saturday
            + self.sunday
    }
}

/// One persisted work-schedule row. Created blank by the reconciler, mutated
/// only by the hour projector, never deleted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub key: WeekKey,
    pub hours: WeekdayHours,
    pub total_hours: f64,
}

impl ScheduleRow {
    /// A freshly reconciled row: all weekday slots and the total at zero.
    pub fn blank(key: WeekKey) -> Self {
        Self {
            key,
            hours: WeekdayHours::default(),
            total_hours: 0.0,
        }
    }
}
