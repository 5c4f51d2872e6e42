pub mod booking;
pub mod catalog;
pub mod error;
pub mod workspace;

// Re-export commonly used types
pub use booking::{Booking, BookingLedger, BookingStatus};
pub use catalog::{ServiceCatalog, ServiceOffering};
pub use error::{DomainError, DomainResult};
pub use workspace::{Workspace, WorkspaceRegistry};
