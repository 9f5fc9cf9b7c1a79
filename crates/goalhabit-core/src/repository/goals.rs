use reqwest::Method;

use crate::api::ApiClient;
use crate::error::Result;
use crate::model::{
    Goal, GoalCreateRequest, GoalProgressRequest, GoalStatus, GoalStatusRequest, GoalStep,
    GoalUpdateRequest, StepCreateRequest, StepUpdateRequest,
};

/// Goals and their nested steps.
#[derive(Clone)]
pub struct GoalsRepository {
    api: ApiClient,
}

impl GoalsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Goal>> {
        self.api.get("goals").await
    }

    pub async fn create(&self, req: &GoalCreateRequest) -> Result<Goal> {
        self.api.post("goals", req).await
    }

    pub async fn update(&self, id: i64, req: &GoalUpdateRequest) -> Result<Goal> {
        self.api.patch(&format!("goals/{id}"), req).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("goals/{id}")).await
    }

    pub async fn set_status(&self, id: i64, status: GoalStatus) -> Result<()> {
        let body = GoalStatusRequest { status };
        self.api
            .execute(Method::PATCH, &format!("goals/{id}/status"), Some(&body))
            .await
    }

    pub async fn add_progress(&self, id: i64, delta: i32) -> Result<Goal> {
        let body = GoalProgressRequest { delta };
        self.api.post(&format!("goals/{id}/progress"), &body).await
    }

    pub async fn steps(&self, goal_id: i64) -> Result<Vec<GoalStep>> {
        self.api.get(&format!("goals/{goal_id}/steps")).await
    }

    pub async fn add_step(&self, goal_id: i64, title: &str) -> Result<GoalStep> {
        let body = StepCreateRequest {
            title: title.to_string(),
        };
        self.api.post(&format!("goals/{goal_id}/steps"), &body).await
    }

    pub async fn update_step(&self, step_id: i64, req: &StepUpdateRequest) -> Result<GoalStep> {
        self.api.patch(&format!("steps/{step_id}"), req).await
    }

    pub async fn rename_step(&self, step_id: i64, title: &str) -> Result<GoalStep> {
        let req = StepUpdateRequest {
            title: Some(title.to_string()),
            is_done: None,
        };
        self.update_step(step_id, &req).await
    }

    pub async fn toggle_step(&self, step_id: i64, is_done: bool) -> Result<GoalStep> {
        let req = StepUpdateRequest {
            title: None,
            is_done: Some(is_done),
        };
        self.update_step(step_id, &req).await
    }

    pub async fn delete_step(&self, step_id: i64) -> Result<()> {
        self.api.delete(&format!("steps/{step_id}")).await
    }
}
