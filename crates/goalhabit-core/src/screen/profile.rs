use crate::model::Profile;
use crate::repository::{AuthRepository, ProfileRepository};

use super::ViewState;

pub struct ProfileScreen {
    repo: ProfileRepository,
    auth: AuthRepository,
    pub state: ViewState<Profile>,
}

impl ProfileScreen {
    pub fn new(repo: ProfileRepository, auth: AuthRepository) -> Self {
        Self {
            repo,
            auth,
            state: ViewState::default(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.state.data
    }

    pub async fn load(&mut self) -> bool {
        self.state.start();
        let result = self.repo.load().await;
        self.state.complete(result)
    }

    /// Forget the session token.
    pub async fn logout(&mut self) -> bool {
        match self.auth.logout().await {
            Ok(()) => {
                self.state.notify("Вы вышли из аккаунта");
                true
            }
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }
}
