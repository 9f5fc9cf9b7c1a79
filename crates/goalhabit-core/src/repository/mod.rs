//! Data-access layer: one repository per entity family.
//!
//! Each method forwards to exactly one endpoint. Failures are returned
//! unchanged; nothing here retries, caches or validates.

pub mod auth;
pub mod friends;
pub mod goals;
pub mod habits;
pub mod profile;
pub mod templates;

pub use auth::AuthRepository;
pub use friends::FriendsRepository;
pub use goals::GoalsRepository;
pub use habits::HabitsRepository;
pub use profile::ProfileRepository;
pub use templates::TemplatesRepository;

use crate::api::ApiClient;

/// All repositories sharing one [`ApiClient`].
#[derive(Clone)]
pub struct Repositories {
    pub auth: AuthRepository,
    pub templates: TemplatesRepository,
    pub habits: HabitsRepository,
    pub goals: GoalsRepository,
    pub profile: ProfileRepository,
    pub friends: FriendsRepository,
}

impl Repositories {
    pub fn new(api: ApiClient) -> Self {
        Self {
            auth: AuthRepository::new(api.clone()),
            templates: TemplatesRepository::new(api.clone()),
            habits: HabitsRepository::new(api.clone()),
            goals: GoalsRepository::new(api.clone()),
            profile: ProfileRepository::new(api.clone()),
            friends: FriendsRepository::new(api),
        }
    }
}
