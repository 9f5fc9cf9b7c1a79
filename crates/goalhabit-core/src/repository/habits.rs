use chrono::NaiveDate;
use reqwest::Method;

use crate::api::ApiClient;
use crate::error::Result;
use crate::model::{CheckInRequest, Habit, HabitCreateRequest, HabitUpdateRequest};

#[derive(Clone)]
pub struct HabitsRepository {
    api: ApiClient,
}

impl HabitsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Habit>> {
        self.api.get("habits").await
    }

    pub async fn create(&self, req: &HabitCreateRequest) -> Result<Habit> {
        self.api.post("habits", req).await
    }

    pub async fn update(&self, id: i64, req: &HabitUpdateRequest) -> Result<Habit> {
        self.api.patch(&format!("habits/{id}"), req).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("habits/{id}")).await
    }

    /// Record a check-in. Repeating it for the same date is left to the server.
    pub async fn check_in(&self, id: i64, date: NaiveDate, value: Option<i32>) -> Result<()> {
        let body = CheckInRequest { date, value };
        self.api
            .execute(Method::POST, &format!("habits/{id}/checkins"), Some(&body))
            .await
    }
}
