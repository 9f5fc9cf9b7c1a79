//! Profile aggregate and achievements.

use serde::{Deserialize, Serialize};

use super::goal::Goal;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub code: String,
    pub title: String,
    /// Absent until earned.
    #[serde(default, rename = "earned_at", alias = "earnedAt")]
    pub earned_at: Option<String>,
}

impl Achievement {
    pub fn is_earned(&self) -> bool {
        self.earned_at.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub current_habit_streak: i32,
    #[serde(default)]
    pub goals_completed: i32,
    #[serde(default)]
    pub points: i32,
    /// Goals the owner flagged as visible in the profile.
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Profile {
    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.is_earned()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_profile() {
        let p: Profile = serde_json::from_str(
            r#"{"currentHabitStreak":4,"goalsCompleted":2,
                "achievements":[
                    {"code":"FIRST","title":"Первая цель","earned_at":"2024-05-01T10:00:00Z"},
                    {"code":"STREAK7","title":"Неделя","earned_at":null}]}"#,
        )
        .unwrap();
        assert_eq!(p.current_habit_streak, 4);
        assert_eq!(p.points, 0);
        assert!(p.goals.is_empty());
        assert_eq!(p.earned_count(), 1);
    }
}
