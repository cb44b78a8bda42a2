// In memory implementation of the DirectorySource port.

use crate::core::attendance::EmployeeIdentity;
use crate::core::ports::{DirectorySource, StoreError};

pub struct InMemoryDirectorySource {
    identities: Vec<EmployeeIdentity>,
    is_offline: bool,
}

impl InMemoryDirectorySource {
    pub fn new(identities: Vec<EmployeeIdentity>) -> Self {
        Self {
            identities,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl DirectorySource for InMemoryDirectorySource {
    async fn fetch_all(&self) -> Result<Vec<EmployeeIdentity>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Connection(
                "employee directory offline".to_string(),
            ));
        }
        Ok(self.identities.clone())
    }
}
