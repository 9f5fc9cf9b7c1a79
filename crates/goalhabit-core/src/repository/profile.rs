use crate::api::ApiClient;
use crate::error::Result;
use crate::model::Profile;

#[derive(Clone)]
pub struct ProfileRepository {
    api: ApiClient,
}

impl ProfileRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<Profile> {
        self.api.get("profile").await
    }
}
