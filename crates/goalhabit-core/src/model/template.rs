//! Read-only goal template catalog.

use serde::{Deserialize, Serialize};

use super::goal::{GoalCreateRequest, GoalType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTemplate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub suggested_target: Option<i32>,
    #[serde(default)]
    pub suggested_unit: Option<String>,
}

impl GoalTemplate {
    /// Prefill a new goal. A suggested target makes it quantitative,
    /// otherwise it becomes a checklist goal.
    pub fn to_goal_request(&self) -> GoalCreateRequest {
        let goal_type = if self.suggested_target.is_some() {
            GoalType::Quant
        } else {
            GoalType::Steps
        };
        GoalCreateRequest {
            description: Some(self.description.clone()),
            target_value: self.suggested_target,
            unit: self.suggested_unit.clone(),
            ..GoalCreateRequest::new(self.title.clone(), goal_type)
        }
        .normalized()
    }

    /// "10 км", or "-" without a suggestion.
    pub fn suggestion_label(&self) -> String {
        let target = self
            .suggested_target
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".into());
        let unit = self.suggested_unit.as_deref().unwrap_or("");
        format!("{target} {unit}").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::goal::DEFAULT_PRIORITY;

    fn template(target: Option<i32>, unit: Option<&str>) -> GoalTemplate {
        GoalTemplate {
            id: 7,
            title: "Прочитать книги".into(),
            description: "".into(),
            category: "Саморазвитие".into(),
            suggested_target: target,
            suggested_unit: unit.map(String::from),
        }
    }

    #[test]
    fn suggested_target_makes_quant_goal() {
        let req = template(Some(12), Some("книг")).to_goal_request();
        assert_eq!(req.goal_type, GoalType::Quant);
        assert_eq!(req.target_value, Some(12));
        assert_eq!(req.unit.as_deref(), Some("книг"));
        assert_eq!(req.description, None);
        assert_eq!(req.priority, DEFAULT_PRIORITY);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn no_target_makes_steps_goal() {
        let req = template(None, Some("км")).to_goal_request();
        assert_eq!(req.goal_type, GoalType::Steps);
        assert_eq!(req.target_value, None);
        assert_eq!(req.unit, None);
    }

    #[test]
    fn suggestion_label_handles_missing_parts() {
        assert_eq!(template(Some(12), Some("книг")).suggestion_label(), "12 книг");
        assert_eq!(template(None, None).suggestion_label(), "-");
    }
}
