use crate::core::ports::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Pipeline stages in execution order, used for abort reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fetch,
    Resolve,
    Reconcile,
    Project,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Resolve => "resolve",
            Stage::Reconcile => "reconcile",
            Stage::Project => "project",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum EtlError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{stage} stage produced no usable rows")]
    EmptyResult { stage: Stage },
}
