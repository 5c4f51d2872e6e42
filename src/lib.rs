//! # Turnos Scheduling Core
//!
//! Scheduling core for a workshop appointment ("turno") system: computes
//! which start times are actually free for a given date and service
//! duration, and admits bookings against a shared pool of physical
//! workspaces without letting concurrent requests overcommit capacity.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, status enums and repository traits
//! - **application**: Capacity model, availability calculator, admission
//!   controller and the scheduling service facade
//! - **infrastructure**: In-memory repository implementations
//!
//! Transport, authentication, notifications and reporting are external
//! collaborators and live outside this crate.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use config::{default_config_path, AppConfig, SchedulingConfig};

// Re-export the service facade and its collaborator traits for easy access
pub use application::{AdmissionController, SchedulingService, Slot, SlotAvailabilityCalculator};
pub use domain::{
    Booking, BookingLedger, BookingStatus, DomainError, DomainResult, ServiceCatalog,
    ServiceOffering, Workspace, WorkspaceRegistry,
};
pub use infrastructure::{InMemoryBookingLedger, InMemoryServiceCatalog, InMemoryWorkspaceRegistry};
