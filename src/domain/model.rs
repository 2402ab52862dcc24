use crate::utils::error::BedtimeError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Desired wake time, a time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WakeTime {
    hour: u32,
    minute: u32,
}

impl WakeTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn seconds_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60
    }
}

impl Default for WakeTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl From<NaiveTime> for WakeTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl FromStr for WakeTime {
    type Err = BedtimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self::from)
            .map_err(|e| BedtimeError::InvalidConfigValueError {
                field: "wake".to_string(),
                value: s.to_string(),
                reason: format!("Expected HH:MM ({})", e),
            })
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Requested hours of sleep. Range checks belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SleepAmount(pub f64);

impl SleepAmount {
    pub const MIN: f64 = 4.0;
    pub const MAX: f64 = 12.0;
    pub const STEP: f64 = 0.25;

    pub fn hours(&self) -> f64 {
        self.0
    }

    /// Saturates at the `i64` bounds; NaN gives 0.
    pub fn whole_hours(&self) -> i64 {
        self.0.floor() as i64
    }

    /// Minutes left over after the whole hours, rounded to the nearest minute.
    pub fn remainder_minutes(&self) -> i64 {
        ((self.0 - self.0.floor()) * 60.0).round() as i64
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(7.5)
    }
}

/// Cups of coffee per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoffeeIntake(pub u32);

impl CoffeeIntake {
    pub const MAX: u32 = 20;

    pub fn cups(&self) -> u32 {
        self.0
    }
}

/// The three numeric inputs of the regression model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepFeatures {
    /// Wake time as seconds since midnight.
    pub wake: f64,
    pub estimated_sleep: f64,
    pub coffee: f64,
}

impl SleepFeatures {
    pub fn new(wake: WakeTime, sleep: SleepAmount, coffee: CoffeeIntake) -> Self {
        Self {
            wake: wake.seconds_since_midnight() as f64,
            estimated_sleep: sleep.hours(),
            coffee: f64::from(coffee.cups()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ClockFormat {
    #[default]
    #[cfg_attr(feature = "cli", value(name = "24h"))]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[cfg_attr(feature = "cli", value(name = "12h"))]
    #[serde(rename = "12h")]
    TwelveHour,
}

/// Recommended time to fall asleep.
///
/// `day_offset` is relative to the wake day: `0` is the same day, `-1` the
/// day before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bedtime {
    time: NaiveTime,
    day_offset: i64,
}

impl Bedtime {
    /// The point `seconds` before `wake`.
    pub fn before(wake: WakeTime, seconds: i64) -> Self {
        // one day of headroom keeps offset_seconds() from overflowing
        let offset = wake
            .seconds_since_midnight()
            .saturating_sub(seconds)
            .max(i64::MIN + SECONDS_PER_DAY);
        let secs = offset.rem_euclid(SECONDS_PER_DAY) as u32;
        Self {
            // rem_euclid keeps secs inside one day
            time: NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default(),
            day_offset: offset.div_euclid(SECONDS_PER_DAY),
        }
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn day_offset(&self) -> i64 {
        self.day_offset
    }

    /// Signed seconds from midnight of the wake day.
    pub fn offset_seconds(&self) -> i64 {
        self.day_offset * SECONDS_PER_DAY + i64::from(self.time.num_seconds_from_midnight())
    }

    pub fn is_before(&self, wake: WakeTime) -> bool {
        self.offset_seconds() < wake.seconds_since_midnight()
    }

    pub fn format(&self, clock: ClockFormat) -> String {
        match clock {
            ClockFormat::TwentyFourHour => self.time.format("%H:%M").to_string(),
            ClockFormat::TwelveHour => self.time.format("%-I:%M %p").to_string(),
        }
    }
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ClockFormat::TwentyFourHour))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub bedtime: Bedtime,
    pub source: EstimateSource,
}

/// What the CLI prints with `--json`. The estimate source is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedtimeReport {
    pub bedtime: String,
    pub day_offset: i64,
}

impl BedtimeReport {
    pub fn new(bedtime: &Bedtime, clock: ClockFormat) -> Self {
        Self {
            bedtime: bedtime.format(clock),
            day_offset: bedtime.day_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wake_time() {
        let wake: WakeTime = "07:45".parse().unwrap();
        assert_eq!(wake, WakeTime::new(7, 45).unwrap());
        assert_eq!(wake.seconds_since_midnight(), 7 * 3600 + 45 * 60);
        assert!("25:00".parse::<WakeTime>().is_err());
        assert!("seven".parse::<WakeTime>().is_err());
    }

    #[test]
    fn test_default_wake_time_is_nine() {
        assert_eq!(WakeTime::default().to_string(), "09:00");
    }

    #[test]
    fn test_sleep_amount_split() {
        let sleep = SleepAmount(7.75);
        assert_eq!(sleep.whole_hours(), 7);
        assert_eq!(sleep.remainder_minutes(), 45);
        assert_eq!(SleepAmount(8.0).remainder_minutes(), 0);
        assert_eq!(SleepAmount(f64::INFINITY).whole_hours(), i64::MAX);
        assert_eq!(SleepAmount(f64::NAN).remainder_minutes(), 0);
    }

    #[test]
    fn test_bedtime_before_saturates() {
        let wake = WakeTime::default();
        let earliest = Bedtime::before(wake, i64::MAX);
        assert!(earliest.is_before(wake));
        assert_eq!(earliest.offset_seconds(), i64::MIN + SECONDS_PER_DAY);

        let latest = Bedtime::before(wake, i64::MIN);
        assert_eq!(latest.offset_seconds(), i64::MAX);
    }

    #[test]
    fn test_bedtime_wraps_to_previous_day() {
        let wake = WakeTime::new(9, 0).unwrap();
        let bedtime = Bedtime::before(wake, 12 * 3600);
        assert_eq!(bedtime.to_string(), "21:00");
        assert_eq!(bedtime.day_offset(), -1);
        assert!(bedtime.is_before(wake));
    }

    #[test]
    fn test_bedtime_same_day() {
        let wake = WakeTime::new(9, 0).unwrap();
        let bedtime = Bedtime::before(wake, 4 * 3600);
        assert_eq!(bedtime.to_string(), "05:00");
        assert_eq!(bedtime.day_offset(), 0);
    }

    #[test]
    fn test_twelve_hour_format() {
        let wake = WakeTime::new(9, 0).unwrap();
        let bedtime = Bedtime::before(wake, 12 * 3600 + 30 * 60);
        assert_eq!(bedtime.format(ClockFormat::TwelveHour), "8:30 PM");
        assert_eq!(bedtime.format(ClockFormat::TwentyFourHour), "20:30");
    }

    #[test]
    fn test_report_serialization() {
        let wake = WakeTime::new(9, 0).unwrap();
        let report = BedtimeReport::new(&Bedtime::before(wake, 27_000), ClockFormat::default());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"bedtime":"01:30","day_offset":0}"#);
    }
}
