//! Repository tests against a mock HTTP server: paths, verbs, payloads and
//! bearer authentication.

mod common;

use chrono::NaiveDate;
use common::{bearer, goal_json, repos, repos_with};
use goalhabit_core::{
    Cadence, CoreError, GoalStatus, LoginRequest, MemoryTokenStore, TokenStore,
};
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn login_stores_token_for_later_requests() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"email": "a@b.c", "password": "pw"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"fresh"}"#)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/auth/me")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_body(r#"{"id":42}"#)
        .create_async()
        .await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let repos = repos_with(&server, tokens.clone());
    repos
        .auth
        .login(&LoginRequest::new(" a@b.c ", "pw"))
        .await
        .unwrap();
    assert_eq!(tokens.token().unwrap().as_deref(), Some("fresh"));
    assert!(repos.auth.is_authorized().await);

    login.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn blank_token_is_not_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/templates/goals")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let repos = repos_with(&server, Arc::new(MemoryTokenStore::with_token("  ")));
    assert!(repos.templates.list().await.unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn logout_clears_token_and_probe_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/auth/me")
        .with_status(401)
        .create_async()
        .await;

    let tokens = Arc::new(MemoryTokenStore::with_token("old"));
    let repos = repos_with(&server, tokens.clone());
    repos.auth.logout().await.unwrap();
    assert_eq!(tokens.token().unwrap(), None);
    assert!(!repos.auth.is_authorized().await);
}

#[tokio::test]
async fn habits_list_reads_flat_cadence() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/habits")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(
            json!([
                {"id": 1, "title": "Бег", "periodDays": 7, "timesPerPeriod": 3},
                {"id": 2, "title": "Вода", "periodDays": 1, "timesPerPeriod": 1}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let habits = repos(&server).habits.list().await.unwrap();
    assert_eq!(habits.len(), 2);
    assert_eq!(habits[0].cadence, Cadence::new(7, 3));
    assert_eq!(habits[0].cadence.label(), "3 раз в неделю");
    assert_eq!(habits[1].cadence.label(), "Каждый день");
    mock.assert_async().await;
}

#[tokio::test]
async fn check_in_posts_iso_date() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/habits/9/checkins")
        .match_body(Matcher::Json(json!({"date": "2024-03-09", "value": 2})))
        .with_status(201)
        .create_async()
        .await;

    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    repos(&server)
        .habits
        .check_in(9, date, Some(2))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn server_rejection_carries_status() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/goals/3")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let err = repos(&server).goals.delete(3).await.unwrap_err();
    match err {
        CoreError::Server { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_has_no_status() {
    // nothing listens on port 1
    let api = goalhabit_core::ApiClient::new(
        "http://127.0.0.1:1",
        Arc::new(MemoryTokenStore::new()),
    )
    .unwrap();
    let repos = goalhabit_core::Repositories::new(api);

    let err = repos.profile.load().await.unwrap_err();
    assert!(matches!(err, CoreError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn goal_status_and_progress_endpoints() {
    let mut server = Server::new_async().await;
    let status = server
        .mock("PATCH", "/goals/5/status")
        .match_body(Matcher::Json(json!({"status": "PAUSED"})))
        .with_status(204)
        .create_async()
        .await;
    let progress = server
        .mock("POST", "/goals/5/progress")
        .match_body(Matcher::Json(json!({"delta": 3})))
        .with_status(200)
        .with_body(goal_json(5, "QUANT", Some(10), 8, "ACTIVE").to_string())
        .create_async()
        .await;

    let repos = repos(&server);
    repos.goals.set_status(5, GoalStatus::Paused).await.unwrap();
    let goal = repos.goals.add_progress(5, 3).await.unwrap();
    assert_eq!(goal.progress_value, 8);
    assert_eq!(goal.progress_percent(), Some(80));

    status.assert_async().await;
    progress.assert_async().await;
}

#[tokio::test]
async fn step_updates_send_only_changed_fields() {
    let mut server = Server::new_async().await;
    let toggle = server
        .mock("PATCH", "/steps/11")
        .match_body(Matcher::Json(json!({"isDone": true})))
        .with_status(200)
        .with_body(r#"{"id":11,"title":"Купить кроссовки","isDone":true}"#)
        .create_async()
        .await;

    let step = repos(&server).goals.toggle_step(11, true).await.unwrap();
    assert!(step.is_done);
    toggle.assert_async().await;
}

#[tokio::test]
async fn friend_search_passes_query() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/users")
        .match_query(Matcher::UrlEncoded("q".into(), "анна".into()))
        .with_status(200)
        .with_body(r#"[{"id":4,"name":"Анна","status":"OUTGOING"}]"#)
        .create_async()
        .await;

    let users = repos(&server).friends.search(Some(" анна ")).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].status, goalhabit_core::FriendStatus::Outgoing);
    search.assert_async().await;
}

#[tokio::test]
async fn friend_profile_reads_achievements() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/friends/4/profile")
        .with_status(200)
        .with_body(
            json!({
                "user": {"id": 4, "name": "Анна"},
                "currentHabitStreak": 6,
                "goalsCompleted": 2,
                "achievements": [
                    {"code": "FIRST_GOAL", "title": "Первая цель", "earned_at": "2024-01-02"},
                    {"code": "STREAK_30", "title": "30 дней"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let profile = repos(&server).friends.profile(4).await.unwrap();
    assert_eq!(profile.user.name, "Анна");
    assert_eq!(profile.current_habit_streak, 6);
    assert!(profile.achievements[0].is_earned());
    assert!(!profile.achievements[1].is_earned());
}
