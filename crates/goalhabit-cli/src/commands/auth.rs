use clap::Subcommand;
use goalhabit_core::screen::{LoginScreen, ProfileScreen, RegisterScreen, Route, SplashScreen};

use super::{finish, print_json, repositories, CliResult};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create an account and log in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Display name shown to friends
        #[arg(long)]
        name: String,
    },
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the session token
    Logout,
    /// Check whether the stored session is still valid
    Status,
}

pub async fn run(action: AuthAction, json: bool) -> CliResult {
    let repos = repositories()?;

    match action {
        AuthAction::Register {
            email,
            password,
            name,
        } => {
            let mut screen = RegisterScreen::new(repos.auth);
            let ok = screen.submit(&email, &password, &name).await;
            finish(ok, &screen.state)?;
            println!("Registered as {}", email.trim());
        }
        AuthAction::Login { email, password } => {
            let mut screen = LoginScreen::new(repos.auth);
            let ok = screen.submit(&email, &password).await;
            finish(ok, &screen.state)?;
            println!("Logged in as {}", email.trim());
        }
        AuthAction::Logout => {
            let mut screen = ProfileScreen::new(repos.profile, repos.auth);
            let ok = screen.logout().await;
            finish(ok, &screen.state)?;
        }
        AuthAction::Status => {
            let route = SplashScreen::new(repos.auth).route().await;
            let authorized = route == Route::Home;
            if json {
                print_json(&serde_json::json!({ "authorized": authorized }))?;
            } else if authorized {
                println!("Logged in");
            } else {
                println!("Not logged in");
            }
        }
    }
    Ok(())
}
