//! Goals, their steps and the request payloads that mutate them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Priority used when the user does not pick one.
pub const DEFAULT_PRIORITY: i32 = 3;

/// Tracking mode of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    /// Numeric target
    Quant,
    /// Checklist of steps
    Steps,
    /// Habit streak tracked as a goal
    HabitAsGoal,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Quant => "QUANT",
            GoalType::Steps => "STEPS",
            GoalType::HabitAsGoal => "HABIT_AS_GOAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalType::Quant => "Количественная",
            GoalType::Steps => "По шагам",
            GoalType::HabitAsGoal => "Привычка как цель",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "QUANT" => Ok(GoalType::Quant),
            "STEPS" => Ok(GoalType::Steps),
            "HABIT_AS_GOAL" | "HABIT" => Ok(GoalType::HabitAsGoal),
            _ => Err(ValidationError::InvalidValue {
                field: "goal_type".into(),
                message: format!("unknown goal type '{s}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    Active,
    Paused,
    Done,
    Canceled,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "ACTIVE",
            GoalStatus::Paused => "PAUSED",
            GoalStatus::Done => "DONE",
            GoalStatus::Canceled => "CANCELED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Active => "Активна",
            GoalStatus::Paused => "На паузе",
            GoalStatus::Done => "Завершена",
            GoalStatus::Canceled => "Отменена",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(GoalStatus::Active),
            "PAUSED" => Ok(GoalStatus::Paused),
            "DONE" => Ok(GoalStatus::Done),
            "CANCELED" | "CANCELLED" => Ok(GoalStatus::Canceled),
            _ => Err(ValidationError::InvalidValue {
                field: "status".into(),
                message: format!("unknown goal status '{s}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub goal_type: GoalType,
    #[serde(default)]
    pub target_value: Option<i32>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub progress_value: i32,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default = "default_priority")]
    pub priority: i32,
    pub status: GoalStatus,
    #[serde(default, alias = "showInProfileDto")]
    pub show_in_profile: bool,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl Goal {
    /// Increment offered by default when adding progress.
    pub fn default_progress_delta(&self) -> i32 {
        match self.goal_type {
            GoalType::Steps => 1000,
            GoalType::Quant => match self.target_value.unwrap_or(0) {
                1..=10 => 1,
                _ => 5,
            },
            GoalType::HabitAsGoal => 1,
        }
    }

    /// Example increments shown next to the progress input.
    pub fn progress_hint(&self) -> &'static str {
        match self.goal_type {
            GoalType::Steps => "Например: 500, 1000, 3000",
            GoalType::Quant => "Например: 1, 5, 10",
            GoalType::HabitAsGoal => "Например: 1",
        }
    }

    /// Positive target, if the goal has one.
    pub fn target(&self) -> Option<i32> {
        self.target_value.filter(|t| *t > 0)
    }

    /// Rounded share of the target reached. Not capped: progress past the
    /// target reports more than 100.
    pub fn progress_percent(&self) -> Option<u32> {
        let target = self.target()?;
        let ratio = self.progress_value.max(0) as f64 / target as f64;
        Some((ratio * 100.0).round() as u32)
    }

    /// "Прогресс: 12/20 км"
    pub fn progress_line(&self) -> String {
        let mut line = format!("Прогресс: {}", self.progress_value);
        if let Some(t) = self.target_value {
            line.push_str(&format!("/{t}"));
        }
        if let Some(unit) = self.unit.as_deref().filter(|u| !u.trim().is_empty()) {
            line.push(' ');
            line.push_str(unit);
        }
        line
    }

    /// Canceled goals take no more progress.
    pub fn accepts_progress(&self) -> bool {
        self.status != GoalStatus::Canceled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub goal_type: GoalType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
    pub show_in_profile: bool,
}

impl GoalCreateRequest {
    pub fn new(title: impl Into<String>, goal_type: GoalType) -> Self {
        Self {
            title: title.into(),
            description: None,
            goal_type,
            target_value: None,
            unit: None,
            deadline: None,
            priority: DEFAULT_PRIORITY,
            status: None,
            show_in_profile: false,
        }
    }

    /// Trim text, drop a blank description and strip target/unit from
    /// non-quantitative goals.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = non_blank(self.description);
        self.unit = non_blank(self.unit);
        if self.goal_type != GoalType::Quant {
            self.target_value = None;
            self.unit = None;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.goal_type == GoalType::Quant && !matches!(self.target_value, Some(t) if t > 0) {
            return Err(ValidationError::MissingTarget);
        }
        validate_priority(self.priority)
    }
}

impl GoalCreateRequest {
    /// Draft prefilled from an existing goal, for editing.
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            title: goal.title.clone(),
            description: goal.description.clone(),
            goal_type: goal.goal_type,
            target_value: goal.target_value,
            unit: goal.unit.clone(),
            deadline: goal.deadline,
            priority: goal.priority,
            status: Some(goal.status),
            show_in_profile: goal.show_in_profile,
        }
    }

    /// Full update carrying every field of the draft. Target and unit are
    /// always sent, as `null` when absent, so switching away from QUANT
    /// clears them on the server.
    pub fn to_update(&self) -> GoalUpdateRequest {
        GoalUpdateRequest {
            title: Some(self.title.clone()),
            description: self.description.clone(),
            goal_type: Some(self.goal_type),
            target_value: Some(self.target_value),
            unit: Some(self.unit.clone()),
            deadline: self.deadline,
            priority: Some(self.priority),
            status: self.status,
            show_in_profile: Some(self.show_in_profile),
        }
    }
}

/// Partial update; fields left `None` are not sent. `Some(None)` on target
/// or unit sends an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_profile: Option<bool>,
}

impl GoalUpdateRequest {
    pub fn visibility(show_in_profile: bool) -> Self {
        Self {
            show_in_profile: Some(show_in_profile),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.goal_type == Some(GoalType::Quant)
            && !matches!(self.target_value, Some(Some(t)) if t > 0)
        {
            return Err(ValidationError::MissingTarget);
        }
        if let Some(p) = self.priority {
            validate_priority(p)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalStatusRequest {
    pub status: GoalStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgressRequest {
    pub delta: i32,
}

impl GoalProgressRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.delta <= 0 {
            return Err(ValidationError::NotPositive {
                field: "delta",
                value: self.delta as i64,
            });
        }
        Ok(())
    }
}

/// Checklist item of a STEPS goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStep {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub is_done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCreateRequest {
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
}

/// Whether a STEPS goal's checklist is finished. Derived only; the goal's
/// status is changed solely by an explicit status update.
pub fn steps_complete(steps: &[GoalStep]) -> bool {
    !steps.is_empty() && steps.iter().all(|s| s.is_done)
}

fn validate_priority(priority: i32) -> Result<(), ValidationError> {
    if !(1..=5).contains(&priority) {
        return Err(ValidationError::PriorityOutOfRange(priority));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
