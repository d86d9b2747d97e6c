//! Core (execution unit) model.

use serde::{Deserialize, Serialize};

use super::{CoreId, JobId};

/// One execution unit. Created idle at start-up; only its occupant changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Core {
    /// Zero-based index.
    pub id: CoreId,
    /// Job currently holding the core.
    pub occupant: Option<JobId>,
}

impl Core {
    /// Creates an idle core.
    pub fn new(id: CoreId) -> Self {
        Self { id, occupant: None }
    }

    /// Whether no job holds this core.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.occupant.is_none()
    }
}
