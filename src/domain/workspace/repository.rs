//! Workspace registry interface

use async_trait::async_trait;

use super::model::Workspace;
use crate::domain::DomainResult;

/// Registry of physical workspaces. The scheduler only reads
/// [`active_capacity`](WorkspaceRegistry::active_capacity); activation and
/// deactivation are administrative actions that affect future admissions
/// only — already-admitted bookings are never retroactively invalidated.
#[async_trait]
pub trait WorkspaceRegistry: Send + Sync {
    /// Number of active workspaces, the capacity ceiling for new admissions
    async fn active_capacity(&self) -> DomainResult<usize>;

    /// Register a workspace
    async fn save(&self, workspace: Workspace) -> DomainResult<()>;

    /// Activate or deactivate a workspace
    async fn set_active(&self, id: i32, active: bool) -> DomainResult<()>;

    /// All workspaces, active or not
    async fn list(&self) -> DomainResult<Vec<Workspace>>;
}
