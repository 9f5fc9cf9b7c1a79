//! Wire types exchanged with the API, plus the pure derivations built on them.

pub mod auth;
pub mod goal;
pub mod habit;
pub mod profile;
pub mod template;
pub mod user;

pub use auth::{LoginRequest, MeResponse, RegisterRequest, TokenResponse};
pub use goal::{
    steps_complete, Goal, GoalCreateRequest, GoalProgressRequest, GoalStatus, GoalStatusRequest,
    GoalStep, GoalType, GoalUpdateRequest, StepCreateRequest, StepUpdateRequest,
    DEFAULT_PRIORITY,
};
pub use habit::{
    Cadence, CadenceMode, CheckInRequest, Habit, HabitCreateRequest, HabitUpdateRequest,
};
pub use profile::{Achievement, Profile};
pub use template::GoalTemplate;
pub use user::{FriendAction, FriendProfile, FriendStatus, FriendUser, PublicUser};
