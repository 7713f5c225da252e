use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::ops::Add;

///
/// Timestamp
/// (seconds since the Unix epoch)
///
/// There is no `now()` constructor: the reference instant for
/// time-windowed reports is always supplied by the caller, which keeps
/// report evaluation deterministic and testable.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse an RFC 3339 instant ("2025-06-01T12:00:00Z").
    #[allow(clippy::cast_sign_loss)]
    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt =
            DateTime::parse_from_rfc3339(s).map_err(|e| format!("timestamp parse error: {e}"))?;
        let ts = dt.timestamp();
        if ts < 0 {
            return Err("timestamp before epoch".to_string());
        }

        Ok(Self(ts as u64))
    }

    /// Parse either integer seconds or an RFC 3339 instant.
    pub fn parse_flexible(s: &str) -> Result<Self, String> {
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Self(n));
        }

        Self::parse_rfc3339(s)
    }

    /// Render as RFC 3339 in UTC; falls back to raw seconds past the
    /// representable range.
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        i64::try_from(self.0)
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .map_or_else(
                || self.0.to_string(),
                |dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            )
    }

    /// Window lower bound: this instant moved back by `duration`,
    /// clamped at the epoch.
    #[must_use]
    pub const fn saturating_sub(self, duration: Duration) -> Self {
        Self(self.0.saturating_sub(duration.get()))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs.get()))
    }
}

///
/// Duration
/// (in seconds)
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Duration(u64);

impl Duration {
    pub const ZERO: Self = Self(0);

    // ratio constants
    const SECS_PER_MIN: u64 = 60;
    const MINS_PER_HOUR: u64 = 60;
    const HOURS_PER_DAY: u64 = 24;

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    // ---- Constructors ----

    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn from_minutes(mins: u64) -> Self {
        Self(mins.saturating_mul(Self::SECS_PER_MIN))
    }

    #[must_use]
    pub const fn from_hours(hours: u64) -> Self {
        Self::from_minutes(hours.saturating_mul(Self::MINS_PER_HOUR))
    }

    #[must_use]
    pub const fn from_days(days: u64) -> Self {
        Self::from_hours(days.saturating_mul(Self::HOURS_PER_DAY))
    }
}

///
/// TESTS
///
