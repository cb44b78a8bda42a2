// In memory implementation of the AttendanceSource port.
//
// Purpose
// - Support pipeline tests and local development without a biometric database.
//
// Responsibilities
// - Hand back a fixed set of attendance events.
// - Simulate an unreachable source through the offline toggle.

use crate::core::attendance::AttendanceEvent;
use crate::core::ports::{AttendanceSource, StoreError};

pub struct InMemoryAttendanceSource {
    events: Vec<AttendanceEvent>,
    is_offline: bool,
}

impl InMemoryAttendanceSource {
    pub fn new(events: Vec<AttendanceEvent>) -> Self {
        Self {
            events,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl AttendanceSource for InMemoryAttendanceSource {
    async fn fetch_all(&self) -> Result<Vec<AttendanceEvent>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Connection(
                "attendance source offline".to_string(),
            ));
        }
        Ok(self.events.clone())
    }
}
