//! Workspace domain entity

use serde::{Deserialize, Serialize};

/// A physical work bay. Only the count of active workspaces matters to
/// scheduling; identity is never used for per-booking assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique workspace ID
    pub id: i32,
    /// Human-readable label ("Bay 3")
    pub name: String,
    /// Whether this workspace currently contributes capacity
    pub is_active: bool,
}

impl Workspace {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_workspace_is_active() {
        let w = Workspace::new(1, "Bay 1");
        assert!(w.is_active);
        assert_eq!(w.name, "Bay 1");
    }
}
