//! Users, friendship status and friend profiles.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::profile::Achievement;

/// Relationship of a user to the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendStatus {
    #[default]
    None,
    /// Viewer sent a request
    Outgoing,
    /// Viewer received a request
    Incoming,
    Friend,
}

/// What the viewer can do about a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FriendAction {
    Add,
    Accept,
    Decline,
    Cancel,
    Remove,
    OpenProfile,
}

impl FriendStatus {
    /// Actions offered for this status.
    pub fn actions(&self) -> &'static [FriendAction] {
        match self {
            FriendStatus::None => &[FriendAction::Add],
            FriendStatus::Outgoing => &[FriendAction::Cancel],
            FriendStatus::Incoming => &[FriendAction::Accept, FriendAction::Decline],
            FriendStatus::Friend => &[FriendAction::OpenProfile, FriendAction::Remove],
        }
    }

    pub fn allows(&self, action: FriendAction) -> bool {
        self.actions().contains(&action)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FriendStatus::None => "Не в друзьях",
            FriendStatus::Outgoing => "Запрос отправлен",
            FriendStatus::Incoming => "Входящий запрос",
            FriendStatus::Friend => "Друг",
        }
    }
}

impl FriendAction {
    /// Add and accept both create the relationship on the server; the
    /// remaining mutations delete it.
    pub fn is_add(&self) -> bool {
        matches!(self, FriendAction::Add | FriendAction::Accept)
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, FriendAction::OpenProfile)
    }
}

impl fmt::Display for FriendAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FriendAction::Add => "add",
            FriendAction::Accept => "accept",
            FriendAction::Decline => "decline",
            FriendAction::Cancel => "cancel",
            FriendAction::Remove => "remove",
            FriendAction::OpenProfile => "profile",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: FriendStatus,
    #[serde(default)]
    pub current_habit_streak: Option<i32>,
    #[serde(default)]
    pub achievements_earned: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendUser {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendProfile {
    pub user: FriendUser,
    #[serde(default)]
    pub current_habit_streak: i32,
    #[serde(default)]
    pub goals_completed: i32,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}
