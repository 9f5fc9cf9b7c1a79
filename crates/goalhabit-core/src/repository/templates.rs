use crate::api::ApiClient;
use crate::error::Result;
use crate::model::GoalTemplate;

#[derive(Clone)]
pub struct TemplatesRepository {
    api: ApiClient,
}

impl TemplatesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<GoalTemplate>> {
        self.api.get("templates/goals").await
    }
}
