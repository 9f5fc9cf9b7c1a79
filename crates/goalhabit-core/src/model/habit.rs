//! Habits and their cadence.
//!
//! A cadence is the pair `(period_days, times_per_period)`: "times_per_period
//! occurrences within period_days". `(1, 1)` is daily, `(7, 3)` is three
//! times a week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Required frequency of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cadence {
    pub period_days: u32,
    pub times_per_period: u32,
}

/// The presets offered by the frequency picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadenceMode {
    Daily,
    EveryNDays(u32),
    PerWeek(u32),
    PerMonth(u32),
    Custom { times: u32, days: u32 },
}

impl Cadence {
    pub const DAILY: Cadence = Cadence {
        period_days: 1,
        times_per_period: 1,
    };

    pub fn new(period_days: u32, times_per_period: u32) -> Self {
        Self {
            period_days,
            times_per_period,
        }
    }

    /// Human-readable phrase for the cadence.
    pub fn label(&self) -> String {
        let (days, times) = (self.period_days, self.times_per_period);
        match (days, times) {
            (1, 1) => "Каждый день".to_string(),
            (d, 1) => format!("Каждые {d} дней"),
            (7, t) => format!("{t} раз в неделю"),
            (30, t) => format!("{t} раз в месяц"),
            (d, t) => format!("{t} раз в {d} дней"),
        }
    }

    /// Which picker preset reproduces this cadence.
    pub fn mode(&self) -> CadenceMode {
        match (self.period_days, self.times_per_period) {
            (1, 1) => CadenceMode::Daily,
            (d, 1) => CadenceMode::EveryNDays(d),
            (7, t) => CadenceMode::PerWeek(t),
            (30, t) => CadenceMode::PerMonth(t),
            (d, t) => CadenceMode::Custom { times: t, days: d },
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.period_days == 0 || self.times_per_period == 0 {
            return Err(ValidationError::InvalidCadence {
                period_days: self.period_days,
                times_per_period: self.times_per_period,
            });
        }
        Ok(())
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::DAILY
    }
}

impl From<CadenceMode> for Cadence {
    fn from(mode: CadenceMode) -> Self {
        match mode {
            CadenceMode::Daily => Cadence::DAILY,
            CadenceMode::EveryNDays(n) => Cadence::new(n, 1),
            CadenceMode::PerWeek(n) => Cadence::new(7, n),
            CadenceMode::PerMonth(n) => Cadence::new(30, n),
            CadenceMode::Custom { times, days } => Cadence::new(days, times),
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses `daily`, `every:N`, `week:K`, `month:K` or `K/N` (K times per N days).
impl FromStr for Cadence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let invalid = |message: &str| ValidationError::InvalidValue {
            field: "cadence".into(),
            message: format!("{message}: '{s}'"),
        };
        let number = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| invalid("expected a positive number"))
        };

        let mode = if s == "daily" {
            CadenceMode::Daily
        } else if let Some(n) = s.strip_prefix("every:") {
            CadenceMode::EveryNDays(number(n)?)
        } else if let Some(n) = s.strip_prefix("week:") {
            CadenceMode::PerWeek(number(n)?)
        } else if let Some(n) = s.strip_prefix("month:") {
            CadenceMode::PerMonth(number(n)?)
        } else if let Some((times, days)) = s.split_once('/') {
            CadenceMode::Custom {
                times: number(times)?,
                days: number(days)?,
            }
        } else {
            return Err(invalid("unknown cadence format"));
        };

        let cadence = Cadence::from(mode);
        cadence.validate()?;
        Ok(cadence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub title: String,
    #[serde(flatten)]
    pub cadence: Cadence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCreateRequest {
    pub title: String,
    #[serde(flatten)]
    pub cadence: Cadence,
}

impl HabitCreateRequest {
    pub fn new(title: impl Into<String>, cadence: Cadence) -> Self {
        Self {
            title: title.into().trim().to_string(),
            cadence,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        self.cadence.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub cadence: Option<Cadence>,
}

impl HabitUpdateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(ValidationError::EmptyField("title"));
        }
        if let Some(cadence) = &self.cadence {
            cadence.validate()?;
        }
        Ok(())
    }
}

/// One check-in for a calendar date, optionally with a magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

impl CheckInRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.value {
            Some(v) if v <= 0 => Err(ValidationError::NotPositive {
                field: "value",
                value: v as i64,
            }),
            _ => Ok(()),
        }
    }
}
