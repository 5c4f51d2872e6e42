pub mod model;
pub mod repository;

pub use model::Workspace;
pub use repository::WorkspaceRegistry;
