use crate::error::CoreError;
use crate::model::{Goal, GoalTemplate};
use crate::repository::{GoalsRepository, TemplatesRepository};

use super::{Submitting, ViewState};

/// Template catalog; each entry can prefill and create a goal.
pub struct TemplatesScreen {
    templates: TemplatesRepository,
    goals: GoalsRepository,
    pub state: ViewState<Vec<GoalTemplate>>,
    submitting: Submitting,
    creating: Option<i64>,
}

impl TemplatesScreen {
    pub fn new(templates: TemplatesRepository, goals: GoalsRepository) -> Self {
        Self {
            templates,
            goals,
            state: ViewState::default(),
            submitting: Submitting::default(),
            creating: None,
        }
    }

    pub fn templates(&self) -> &[GoalTemplate] {
        &self.state.data
    }

    /// Template currently being turned into a goal.
    pub fn creating(&self) -> Option<i64> {
        self.creating.filter(|_| self.submitting.is_active())
    }

    pub async fn load(&mut self) -> bool {
        self.state.start();
        let result = self.templates.list().await;
        if let Err(e) = &result {
            self.state.fail(format!("Ошибка загрузки: {e}"));
            return false;
        }
        self.state.complete(result)
    }

    pub async fn create_goal(&mut self, template_id: i64) -> Option<Goal> {
        if self.submitting.is_active() {
            return None;
        }
        let Some(template) = self.state.data.iter().find(|t| t.id == template_id) else {
            let err = CoreError::NotFound(format!("Шаблон не найден: {template_id}"));
            self.state.fail(err);
            return None;
        };
        let req = template.to_goal_request();
        if let Err(e) = req.validate() {
            self.state.fail(format!("Ошибка создания: {e}"));
            return None;
        }
        let _guard = self.submitting.begin()?;
        self.creating = Some(template_id);
        self.state.error = None;
        let result = self.goals.create(&req).await;
        match result {
            Ok(goal) => {
                tracing::info!(template_id, goal_id = goal.id, "goal created from template");
                self.state.notify(format!("Цель создана: {}", goal.title));
                Some(goal)
            }
            Err(e) => {
                self.state.fail(format!("Ошибка создания: {e}"));
                None
            }
        }
    }
}
