use reqwest::Method;

use crate::api::ApiClient;
use crate::error::Result;
use crate::model::{FriendProfile, PublicUser};

#[derive(Clone)]
pub struct FriendsRepository {
    api: ApiClient,
}

impl FriendsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Search users by name or email; `None` lists everyone the server offers.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<PublicUser>> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => self.api.get_query("users", &[("q", q)]).await,
            None => self.api.get("users").await,
        }
    }

    /// Mutual friends only.
    pub async fn friends(&self) -> Result<Vec<PublicUser>> {
        self.api.get("friends").await
    }

    /// Send a request, or accept an incoming one.
    pub async fn add(&self, user_id: i64) -> Result<()> {
        self.api
            .execute::<()>(Method::POST, &format!("friends/{user_id}"), None)
            .await
    }

    /// Cancel an outgoing request, decline an incoming one or unfriend.
    pub async fn remove(&self, user_id: i64) -> Result<()> {
        self.api.delete(&format!("friends/{user_id}")).await
    }

    /// Available only between mutual friends.
    pub async fn profile(&self, user_id: i64) -> Result<FriendProfile> {
        self.api.get(&format!("friends/{user_id}/profile")).await
    }
}
