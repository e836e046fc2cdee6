//! Clock Service
//!
//! Shows the current time for a fixed civil timezone in a UI target,
//! refreshed on a timer. Runs independently of the content load.
//!
//! The zone is resolved from its IANA name through chrono-tz. When that
//! fails the clock falls back to shifting UTC by a fixed number of hours
//! (Panama is UTC-5 year round).

use crate::config::ClockConfig;
use crate::page::{SharedPage, TargetProvider};
use crate::render::set_text;
use chrono::format::StrftimeItems;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use chrono_tz::Tz;
use std::fmt::Write;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Errors raised while producing clock text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The time could not be formatted with the configured pattern
    #[error("Format error: cannot render time with pattern {pattern:?}")]
    Format { pattern: String },

    /// The fixed offset moves the instant outside the representable range
    #[error("Offset error: cannot shift time by {hours} hours")]
    Offset { hours: i64 },
}

/// How wall-clock time is derived from an instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockZone {
    /// Timezone-aware conversion
    Named(Tz),
    /// UTC shifted by a fixed number of hours
    Shifted(i64),
}

impl ClockZone {
    /// Resolve `name`, falling back to a fixed shift when it is unknown
    pub fn resolve(name: &str, fallback_offset_hours: i64) -> Self {
        match name.parse::<Tz>() {
            Ok(tz) => ClockZone::Named(tz),
            Err(e) => {
                tracing::warn!(
                    timezone = name,
                    offset_hours = fallback_offset_hours,
                    error = %e,
                    "Unknown timezone, using fixed UTC offset"
                );
                ClockZone::Shifted(fallback_offset_hours)
            }
        }
    }
}

/// Formats instants as wall-clock text for one zone
#[derive(Debug, Clone)]
pub struct ClockFormatter {
    zone: ClockZone,
    pattern: String,
}

impl ClockFormatter {
    pub fn new(zone: ClockZone, pattern: impl Into<String>) -> Self {
        Self {
            zone,
            pattern: pattern.into(),
        }
    }

    pub fn zone(&self) -> ClockZone {
        self.zone
    }

    /// Wall-clock text for `instant`
    pub fn format(&self, instant: DateTime<Utc>) -> Result<String, ClockError> {
        let items = StrftimeItems::new(&self.pattern);
        let mut out = String::new();

        let written = match self.zone {
            ClockZone::Named(tz) => write!(
                out,
                "{}",
                instant.with_timezone(&tz).format_with_items(items)
            ),
            ClockZone::Shifted(hours) => {
                let shifted = ChronoDuration::try_hours(hours)
                    .and_then(|offset| instant.naive_utc().checked_add_signed(offset))
                    .ok_or(ClockError::Offset { hours })?;
                write!(out, "{}", shifted.format_with_items(items))
            }
        };

        written.map_err(|_| ClockError::Format {
            pattern: self.pattern.clone(),
        })?;
        Ok(out)
    }
}

/// Periodic clock bound to one UI target
#[derive(Debug, Clone)]
pub struct ClockService {
    formatter: ClockFormatter,
    target: String,
    placeholder: String,
    interval: Duration,
}

impl ClockService {
    pub fn new(
        formatter: ClockFormatter,
        target: impl Into<String>,
        placeholder: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            formatter,
            target: target.into(),
            placeholder: placeholder.into(),
            interval,
        }
    }

    /// Build from configuration
    pub fn from_config(config: &ClockConfig) -> Self {
        let zone = ClockZone::resolve(&config.timezone, config.fallback_offset_hours);
        Self::new(
            ClockFormatter::new(zone, config.format.clone()),
            config.target.clone(),
            config.placeholder.clone(),
            Duration::from_secs(config.interval_secs.max(1)),
        )
    }

    pub fn formatter(&self) -> &ClockFormatter {
        &self.formatter
    }

    /// Clock text for `now`, or the placeholder when formatting fails
    pub fn display(&self, now: DateTime<Utc>) -> String {
        match self.formatter.format(now) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Clock error");
                self.placeholder.clone()
            }
        }
    }

    /// Render one tick into the page
    pub fn tick<P: TargetProvider + ?Sized>(&self, page: &mut P, now: DateTime<Utc>) {
        let text = self.display(now);
        set_text(page, &self.target, Some(text.as_str()));
    }

    /// Start ticking against the system clock
    pub async fn start<P>(self, page: SharedPage<P>) -> ClockHandle
    where
        P: TargetProvider + Send + 'static,
    {
        self.start_with(page, Utc::now).await
    }

    /// Start ticking with a custom time source.
    ///
    /// Renders immediately, then once per interval until the handle is
    /// cancelled or dropped. Pages without the clock target get no clock.
    pub async fn start_with<P, F>(self, page: SharedPage<P>, now: F) -> ClockHandle
    where
        P: TargetProvider + Send + 'static,
        F: Fn() -> DateTime<Utc> + Send + 'static,
    {
        if page.lock().await.target(&self.target).is_none() {
            tracing::debug!(target_id = %self.target, "No clock target on page, clock not started");
            return ClockHandle { task: None };
        }

        tracing::info!(
            target_id = %self.target,
            interval_secs = self.interval.as_secs(),
            zone = ?self.formatter.zone,
            "Starting clock"
        );

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // First tick completes immediately
                ticker.tick().await;
                let mut guard = page.lock().await;
                self.tick(&mut *guard, now());
            }
        });

        ClockHandle { task: Some(task) }
    }
}

/// Running clock; dropping it stops the timer
#[derive(Debug)]
pub struct ClockHandle {
    task: Option<JoinHandle<()>>,
}

impl ClockHandle {
    /// Whether the timer is ticking
    pub fn is_running(&self) -> bool {
        self.task.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }

    /// Stop the timer
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Clock cancelled");
        }
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
