//! Friends feed entries. Read-only sample data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    pub handle: String,
    /// Friend's percent of goal, may exceed 100
    pub chad_percent: u32,
    pub last_action: String,
}

impl Friend {
    pub fn new(
        id: impl Into<String>,
        handle: impl Into<String>,
        chad_percent: u32,
        last_action: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            handle: handle.into(),
            chad_percent,
            last_action: last_action.into(),
        }
    }

    pub fn display_handle(&self) -> String {
        format!("@{}", self.handle)
    }
}
