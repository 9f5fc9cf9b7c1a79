//! Shared fixtures for the API-backed integration tests.

#![allow(dead_code)]

use goalhabit_core::{ApiClient, MemoryTokenStore, Repositories, TokenStore};
use mockito::ServerGuard;
use std::sync::Arc;

pub const TOKEN: &str = "test-token";

/// Repositories pointed at the mock server, logged in with [`TOKEN`].
pub fn repos(server: &ServerGuard) -> Repositories {
    repos_with(server, Arc::new(MemoryTokenStore::with_token(TOKEN)))
}

pub fn repos_with(server: &ServerGuard, tokens: Arc<dyn TokenStore>) -> Repositories {
    let api = ApiClient::new(&server.url(), tokens).unwrap();
    Repositories::new(api)
}

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

pub fn goal_json(
    id: i64,
    goal_type: &str,
    target: Option<i32>,
    progress: i32,
    status: &str,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Goal {id}"),
        "goalType": goal_type,
        "targetValue": target,
        "unit": null,
        "progressValue": progress,
        "priority": 3,
        "status": status,
        "showInProfile": false
    })
}
