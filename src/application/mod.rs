pub mod admission;
pub mod availability;
pub mod capacity;
pub mod scheduling;

// Re-export key types for convenience
pub use admission::AdmissionController;
pub use availability::{Slot, SlotAvailabilityCalculator};
pub use scheduling::SchedulingService;
