use clap::Subcommand;
use goalhabit_core::screen::{FriendProfileScreen, FriendsScreen, FriendsView};
use goalhabit_core::{FriendAction, PublicUser};

use super::{finish, print_json, repositories, CliResult};

#[derive(Subcommand)]
pub enum FriendsAction {
    /// Search users by name or email
    Search { query: Option<String> },
    /// List mutual friends
    List,
    /// Send a friend request
    Add { user_id: i64 },
    /// Accept an incoming request
    Accept { user_id: i64 },
    /// Decline an incoming request
    Decline { user_id: i64 },
    /// Cancel an outgoing request
    Cancel { user_id: i64 },
    /// Remove a friend
    Remove { user_id: i64 },
    /// Show a friend's profile
    Profile { user_id: i64 },
}

pub async fn run(action: FriendsAction, json: bool) -> CliResult {
    let repos = repositories()?;

    let (user_id, friend_action) = match action {
        FriendsAction::Search { query } => {
            let mut screen = FriendsScreen::new(repos.friends);
            screen.set_query(query.as_deref());
            let ok = screen.load().await;
            finish(ok, &screen.state)?;
            return print_users(screen.users(), json);
        }
        FriendsAction::List => {
            let mut screen = FriendsScreen::new(repos.friends);
            screen.show(FriendsView::Friends);
            let ok = screen.load().await;
            finish(ok, &screen.state)?;
            return print_users(screen.users(), json);
        }
        FriendsAction::Profile { user_id } => {
            let mut screen = FriendProfileScreen::new(repos.friends);
            let ok = screen.load(user_id).await;
            finish(ok, &screen.state)?;
            if let Some(profile) = &screen.state.data {
                if json {
                    return print_json(profile);
                }
                println!("{} (id {})", profile.user.name, profile.user.id);
                println!("Habit streak:    {}", profile.current_habit_streak);
                println!("Goals completed: {}", profile.goals_completed);
                for a in profile.achievements.iter().filter(|a| a.is_earned()) {
                    println!("  * {}", a.title);
                }
            }
            return Ok(());
        }
        FriendsAction::Add { user_id } => (user_id, FriendAction::Add),
        FriendsAction::Accept { user_id } => (user_id, FriendAction::Accept),
        FriendsAction::Decline { user_id } => (user_id, FriendAction::Decline),
        FriendsAction::Cancel { user_id } => (user_id, FriendAction::Cancel),
        FriendsAction::Remove { user_id } => (user_id, FriendAction::Remove),
    };

    let mut screen = FriendsScreen::new(repos.friends);
    let ok = screen.load().await;
    finish(ok, &screen.state)?;
    let ok = screen.perform(user_id, friend_action).await;
    finish(ok, &screen.state)?;
    if let Some(user) = screen.user(user_id) {
        println!("{}: {}", user.name, user.status.label());
    }
    Ok(())
}

fn print_users(users: &[PublicUser], json: bool) -> CliResult {
    if json {
        return print_json(users);
    }
    if users.is_empty() {
        println!("No users.");
    }
    for u in users {
        let actions: Vec<String> = u.status.actions().iter().map(|a| a.to_string()).collect();
        println!(
            "{:>4}  {}  [{}]  {}",
            u.id,
            u.name,
            u.status.label(),
            actions.join(", ")
        );
    }
    Ok(())
}
