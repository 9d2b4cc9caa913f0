//! Refresh events — records published around every cache reload.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Phase of a dataset reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPhase {
    /// A reload is about to start.
    Started,
    /// The reload completed or failed.
    Finished,
}

/// A reload notification for one logical dataset.
///
/// Subscribers always observe `Started` followed by `Finished`, even when
/// the reload fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshEvent {
    pub dataset: Dataset,
    pub phase: RefreshPhase,
}

impl RefreshEvent {
    /// Event marking the start of a reload.
    #[must_use]
    pub fn started(dataset: Dataset) -> Self {
        Self {
            dataset,
            phase: RefreshPhase::Started,
        }
    }

    /// Event marking the end of a reload (successful or not).
    #[must_use]
    pub fn finished(dataset: Dataset) -> Self {
        Self {
            dataset,
            phase: RefreshPhase::Finished,
        }
    }
}
