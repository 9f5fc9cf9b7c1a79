use crate::error::{CoreError, ValidationError};
use crate::model::{FriendAction, FriendProfile, PublicUser};
use crate::repository::FriendsRepository;

use super::ViewState;

/// Which list the friends screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FriendsView {
    /// User search; `None` lists everyone.
    #[default]
    Search,
    /// Mutual friends.
    Friends,
}

/// User search and friendship actions. Actions are offered per the user's
/// status and take effect in the view only after the following reload.
pub struct FriendsScreen {
    repo: FriendsRepository,
    view: FriendsView,
    query: Option<String>,
    pub state: ViewState<Vec<PublicUser>>,
}

impl FriendsScreen {
    pub fn new(repo: FriendsRepository) -> Self {
        Self {
            repo,
            view: FriendsView::Search,
            query: None,
            state: ViewState::default(),
        }
    }

    pub fn users(&self) -> &[PublicUser] {
        &self.state.data
    }

    pub fn user(&self, id: i64) -> Option<&PublicUser> {
        self.state.data.iter().find(|u| u.id == id)
    }

    pub fn set_query(&mut self, query: Option<&str>) {
        self.query = query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
    }

    pub fn show(&mut self, view: FriendsView) {
        self.view = view;
    }

    pub async fn load(&mut self) -> bool {
        self.state.start();
        let result = match self.view {
            FriendsView::Search => self.repo.search(self.query.as_deref()).await,
            FriendsView::Friends => self.repo.friends().await,
        };
        match result {
            Ok(users) => self.state.complete(Ok(users)),
            Err(e) => {
                self.state.fail(describe(&e));
                false
            }
        }
    }

    /// Apply a friendship action to a listed user, then reload.
    pub async fn perform(&mut self, user_id: i64, action: FriendAction) -> bool {
        let Some(user) = self.user(user_id) else {
            self.state
                .fail(describe(&CoreError::NotFound(format!("user {user_id}"))));
            return false;
        };
        if !action.is_mutation() || !user.status.allows(action) {
            let err = ValidationError::ActionUnavailable {
                action: action.to_string(),
                reason: format!("{} ({})", user.name, user.status.label()),
            };
            self.state.fail(describe(&err.into()));
            return false;
        }

        self.state.error = None;
        let result = if action.is_add() {
            self.repo.add(user_id).await
        } else {
            self.repo.remove(user_id).await
        };
        match result {
            Ok(()) => {
                tracing::info!(user_id, %action, "friendship updated");
                self.load().await
            }
            Err(e) => {
                self.state.fail(describe(&e));
                false
            }
        }
    }
}

/// Server failures show only their status code.
fn describe(err: &CoreError) -> String {
    match err {
        CoreError::Server { status, .. } => format!("Ошибка сервера: {status}"),
        other => format!("Ошибка: {other}"),
    }
}

/// Public profile of a mutual friend.
pub struct FriendProfileScreen {
    repo: FriendsRepository,
    pub state: ViewState<Option<FriendProfile>>,
}

impl FriendProfileScreen {
    pub fn new(repo: FriendsRepository) -> Self {
        Self {
            repo,
            state: ViewState::default(),
        }
    }

    pub async fn load(&mut self, user_id: i64) -> bool {
        self.state.start();
        let result = self.repo.profile(user_id).await;
        self.state.complete(result.map(Some))
    }
}
