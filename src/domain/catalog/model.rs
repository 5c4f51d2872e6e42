//! Service offering domain entity

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A bookable service (oil change, alignment, ...) with a fixed duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Unique service ID
    pub id: i32,
    /// Service name
    pub name: String,
    /// How long one execution of the service occupies a workspace
    pub duration_minutes: i64,
    /// Inactive services cannot be booked
    pub is_active: bool,
}

impl ServiceOffering {
    pub fn new(id: i32, name: impl Into<String>, duration_minutes: i64) -> Self {
        Self {
            id,
            name: name.into(),
            duration_minutes,
            is_active: true,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_converts_minutes() {
        let s = ServiceOffering::new(1, "Oil change", 45);
        assert_eq!(s.duration(), Duration::minutes(45));
        assert!(s.is_active);
    }
}
