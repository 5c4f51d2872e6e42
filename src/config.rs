//! Configuration module

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Default configuration file location (~/.config/turnos/config.toml)
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("turnos")
        .join("config.toml")
}

/// Application configuration, loaded from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scheduling: SchedulingSection,
    pub logging: LoggingSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scheduling: SchedulingSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DomainResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        let cfg: AppConfig =
            toml::from_str(&raw).map_err(|e| DomainError::InvalidConfig(e.to_string()))?;
        // Fail fast on inconsistent business hours
        cfg.scheduling.to_scheduling_config()?;
        Ok(cfg)
    }

    /// Parsed and validated scheduling parameters
    pub fn scheduling(&self) -> DomainResult<SchedulingConfig> {
        self.scheduling.to_scheduling_config()
    }
}

/// `[scheduling]` section, raw TOML representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingSection {
    /// Opening time, `HH:MM`
    pub open_time: String,
    /// Closing time, `HH:MM`
    pub close_time: String,
    /// Candidate slot granularity in minutes
    pub slot_step_minutes: i64,
    /// How many days ahead bookings are accepted
    pub lookahead_days: i64,
}

impl Default for SchedulingSection {
    fn default() -> Self {
        Self {
            open_time: "08:00".to_string(),
            close_time: "19:00".to_string(),
            slot_step_minutes: 30,
            lookahead_days: 60,
        }
    }
}

impl SchedulingSection {
    fn to_scheduling_config(&self) -> DomainResult<SchedulingConfig> {
        let open_time = parse_time(&self.open_time)?;
        let close_time = parse_time(&self.close_time)?;
        if open_time >= close_time {
            return Err(DomainError::InvalidConfig(format!(
                "open_time {} must be before close_time {}",
                self.open_time, self.close_time
            )));
        }
        if self.slot_step_minutes <= 0 {
            return Err(DomainError::InvalidConfig(
                "slot_step_minutes must be positive".to_string(),
            ));
        }
        if self.lookahead_days < 0 {
            return Err(DomainError::InvalidConfig(
                "lookahead_days must not be negative".to_string(),
            ));
        }
        Ok(SchedulingConfig {
            open_time,
            close_time,
            slot_step_minutes: self.slot_step_minutes,
            lookahead_days: self.lookahead_days,
        })
    }
}

fn parse_time(s: &str) -> DomainResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| DomainError::InvalidConfig(format!("Invalid time of day: {}", s)))
}

/// `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level filter (e.g. `info`, `turnos_core=debug`)
    pub level: String,
    /// Output format: `text` or `json`
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Validated scheduling parameters used by the availability calculator and
/// the admission controller
#[derive(Debug, Clone)]
pub struct SchedulingConfig {
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub slot_step_minutes: i64,
    pub lookahead_days: i64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        // Defaults match SchedulingSection::default()
        Self {
            open_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            slot_step_minutes: 30,
            lookahead_days: 60,
        }
    }
}

impl SchedulingConfig {
    /// Length of the business day
    pub fn business_span(&self) -> Duration {
        self.close_time - self.open_time
    }

    /// Candidate step granularity
    pub fn slot_step(&self) -> Duration {
        Duration::minutes(self.slot_step_minutes)
    }

    /// Check a requested duration before any ledger access: it must be
    /// positive and fit within one business day.
    pub fn validated_duration(&self, duration_minutes: i64) -> DomainResult<Duration> {
        if duration_minutes <= 0 {
            return Err(DomainError::InvalidDuration(format!(
                "{} minutes",
                duration_minutes
            )));
        }
        let duration = Duration::minutes(duration_minutes);
        if duration > self.business_span() {
            return Err(DomainError::InvalidDuration(format!(
                "{} minutes exceeds the {}-minute business day",
                duration_minutes,
                self.business_span().num_minutes()
            )));
        }
        Ok(duration)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        let cfg = AppConfig::default();
        let sched = cfg.scheduling().unwrap();
        assert_eq!(sched.open_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(sched.close_time, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(sched.slot_step_minutes, 30);
        assert_eq!(sched.lookahead_days, 60);
    }

    #[test]
    fn parses_toml_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [scheduling]
            open_time = "09:30"
            close_time = "18:00"
            slot_step_minutes = 15
            lookahead_days = 14

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        let sched = cfg.scheduling().unwrap();
        assert_eq!(sched.open_time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(sched.slot_step_minutes, 15);
        assert_eq!(sched.lookahead_days, 14);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, "json");
    }

    #[test]
    fn rejects_inverted_business_hours() {
        let section = SchedulingSection {
            open_time: "19:00".to_string(),
            close_time: "08:00".to_string(),
            ..SchedulingSection::default()
        };
        assert!(matches!(
            section.to_scheduling_config(),
            Err(DomainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_malformed_time() {
        let section = SchedulingSection {
            open_time: "8am".to_string(),
            ..SchedulingSection::default()
        };
        assert!(matches!(
            section.to_scheduling_config(),
            Err(DomainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_nonpositive_step() {
        let section = SchedulingSection {
            slot_step_minutes: 0,
            ..SchedulingSection::default()
        };
        assert!(matches!(
            section.to_scheduling_config(),
            Err(DomainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validated_duration_bounds() {
        let sched = SchedulingConfig::default();
        assert!(sched.validated_duration(60).is_ok());
        assert!(matches!(
            sched.validated_duration(0),
            Err(DomainError::InvalidDuration(_))
        ));
        assert!(matches!(
            sched.validated_duration(-30),
            Err(DomainError::InvalidDuration(_))
        ));
        // 08:00-19:00 is 660 minutes
        assert!(sched.validated_duration(660).is_ok());
        assert!(matches!(
            sched.validated_duration(661),
            Err(DomainError::InvalidDuration(_))
        ));
    }
}
