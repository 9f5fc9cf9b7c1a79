use crate::error::{CoreError, ValidationError};
use crate::model::{
    Goal, GoalCreateRequest, GoalProgressRequest, GoalStatus, GoalType, GoalUpdateRequest,
};
use crate::repository::GoalsRepository;

use super::{Submitting, ViewState};

/// Goal list with progress, visibility, status and delete actions.
pub struct GoalsScreen {
    repo: GoalsRepository,
    pub state: ViewState<Vec<Goal>>,
}

impl GoalsScreen {
    pub fn new(repo: GoalsRepository) -> Self {
        Self {
            repo,
            state: ViewState::default(),
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.state.data
    }

    pub fn goal(&self, id: i64) -> Option<&Goal> {
        self.state.data.iter().find(|g| g.id == id)
    }

    pub async fn load(&mut self) -> bool {
        self.state.start();
        let result = self.repo.list().await;
        self.state.complete(result)
    }

    /// Add progress to a loaded goal. Without an explicit delta the goal's
    /// default increment is used.
    pub async fn add_progress(&mut self, goal_id: i64, delta: Option<i32>) -> bool {
        let (accepts, status, default_delta) = match self.goal(goal_id) {
            Some(goal) => (
                goal.accepts_progress(),
                goal.status,
                goal.default_progress_delta(),
            ),
            None => {
                self.state
                    .fail(CoreError::NotFound(format!("Цель не найдена: {goal_id}")));
                return false;
            }
        };
        if !accepts {
            self.state.fail(ValidationError::ActionUnavailable {
                action: "progress".into(),
                reason: format!("goal {goal_id} is {status}"),
            });
            return false;
        }
        let req = GoalProgressRequest {
            delta: delta.unwrap_or(default_delta),
        };
        if let Err(e) = req.validate() {
            self.state.fail(e);
            return false;
        }
        match self.repo.add_progress(goal_id, req.delta).await {
            Ok(updated) => {
                tracing::info!(
                    goal_id,
                    delta = req.delta,
                    progress = updated.progress_value,
                    "progress added"
                );
                self.state.notify("Прогресс добавлен ✅");
                self.load().await
            }
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }

    pub async fn set_visibility(&mut self, goal_id: i64, show_in_profile: bool) -> bool {
        let req = GoalUpdateRequest::visibility(show_in_profile);
        match self.repo.update(goal_id, &req).await {
            Ok(_) => {
                self.state.notify(if show_in_profile {
                    "Цель добавлена в профиль ✅"
                } else {
                    "Цель скрыта из профиля"
                });
                self.load().await
            }
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }

    /// Explicit status change; finishing every step never does this implicitly.
    pub async fn set_status(&mut self, goal_id: i64, status: GoalStatus) -> bool {
        match self.repo.set_status(goal_id, status).await {
            Ok(()) => {
                self.state.notify(format!("Статус: {}", status.label()));
                self.load().await
            }
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }

    pub async fn delete(&mut self, goal_id: i64) -> bool {
        match self.repo.delete(goal_id).await {
            Ok(()) => {
                self.state.notify("Цель удалена");
                self.load().await
            }
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }
}

/// Create or edit form for a goal.
pub struct GoalFormScreen {
    repo: GoalsRepository,
    editing: Option<i64>,
    pub draft: GoalCreateRequest,
    /// Saved goal once the form was submitted successfully.
    pub state: ViewState<Option<Goal>>,
    submitting: Submitting,
}

impl GoalFormScreen {
    pub fn create(repo: GoalsRepository) -> Self {
        Self::with_draft(repo, GoalCreateRequest::new("", GoalType::Quant))
    }

    pub fn with_draft(repo: GoalsRepository, draft: GoalCreateRequest) -> Self {
        Self {
            repo,
            editing: None,
            draft,
            state: ViewState::default(),
            submitting: Submitting::default(),
        }
    }

    /// Open the form for an existing goal, looked up in the current list.
    pub async fn edit(repo: GoalsRepository, goal_id: i64) -> Self {
        let mut form = Self::create(repo);
        form.editing = Some(goal_id);
        form.state.start();
        match form.repo.list().await {
            Ok(list) => match list.iter().find(|g| g.id == goal_id) {
                Some(goal) => {
                    form.draft = GoalCreateRequest::from_goal(goal);
                    form.state.loading = false;
                }
                None => form
                    .state
                    .fail(CoreError::NotFound(format!("Цель не найдена: {goal_id}"))),
            },
            Err(e) => form.state.fail(e),
        }
        form
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_active()
    }

    /// Validate, then create or update. Invalid drafts never reach the server.
    pub async fn submit(&mut self) -> bool {
        let draft = self.draft.clone().normalized();
        if let Err(e) = draft.validate() {
            self.state.fail(e);
            return false;
        }
        let update = draft.to_update();
        if self.editing.is_some() {
            if let Err(e) = update.validate() {
                self.state.fail(e);
                return false;
            }
        }
        let Some(_guard) = self.submitting.begin() else {
            return false;
        };
        self.state.error = None;
        let result = match self.editing {
            Some(id) => self.repo.update(id, &update).await,
            None => self.repo.create(&draft).await,
        };
        if let Ok(goal) = &result {
            tracing::info!(goal_id = goal.id, "goal saved");
        }
        self.state.complete(result.map(Some))
    }
}
