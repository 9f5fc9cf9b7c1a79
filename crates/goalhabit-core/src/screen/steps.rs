use crate::error::ValidationError;
use crate::model::{steps_complete, GoalStep};
use crate::repository::GoalsRepository;

use super::ViewState;

/// Checklist of a STEPS goal.
pub struct GoalStepsScreen {
    repo: GoalsRepository,
    goal_id: i64,
    pub state: ViewState<Vec<GoalStep>>,
}

impl GoalStepsScreen {
    pub fn new(repo: GoalsRepository, goal_id: i64) -> Self {
        Self {
            repo,
            goal_id,
            state: ViewState::default(),
        }
    }

    pub fn goal_id(&self) -> i64 {
        self.goal_id
    }

    pub fn steps(&self) -> &[GoalStep] {
        &self.state.data
    }

    /// Every step done. The goal's status is not touched.
    pub fn is_complete(&self) -> bool {
        steps_complete(&self.state.data)
    }

    pub async fn load(&mut self) -> bool {
        self.state.start();
        let result = self.repo.steps(self.goal_id).await;
        self.state.complete(result)
    }

    pub async fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            self.state.fail(ValidationError::EmptyField("title"));
            return false;
        }
        match self.repo.add_step(self.goal_id, title).await {
            Ok(_) => self.load().await,
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }

    pub async fn rename(&mut self, step_id: i64, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            self.state.fail(ValidationError::EmptyField("title"));
            return false;
        }
        match self.repo.rename_step(step_id, title).await {
            Ok(_) => self.load().await,
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }

    pub async fn toggle(&mut self, step_id: i64, is_done: bool) -> bool {
        match self.repo.toggle_step(step_id, is_done).await {
            Ok(_) => self.load().await,
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }

    pub async fn delete(&mut self, step_id: i64) -> bool {
        match self.repo.delete_step(step_id).await {
            Ok(()) => self.load().await,
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }
}
