use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "goalhabit", version, about = "GoalHabit CLI")]
struct Cli {
    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account and session
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Goal template catalog
    Templates {
        #[command(subcommand)]
        action: commands::templates::TemplatesAction,
    },
    /// Habit management and check-ins
    Habits {
        #[command(subcommand)]
        action: commands::habits::HabitsAction,
    },
    /// Goal management and progress
    Goals {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Checklist of a step-based goal
    Steps {
        #[command(subcommand)]
        action: commands::steps::StepsAction,
    },
    /// Show your profile
    Profile,
    /// Users and friendships
    Friends {
        #[command(subcommand)]
        action: commands::friends::FriendsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Daily progress reminder
    Remind {
        #[command(subcommand)]
        action: commands::remind::RemindAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = goalhabit_core::Config::load_or_default().log.level;
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let json = cli.json;
    let result = match cli.command {
        Commands::Auth { action } => commands::auth::run(action, json).await,
        Commands::Templates { action } => commands::templates::run(action, json).await,
        Commands::Habits { action } => commands::habits::run(action, json).await,
        Commands::Goals { action } => commands::goals::run(action, json).await,
        Commands::Steps { action } => commands::steps::run(action, json).await,
        Commands::Profile => commands::profile::run(json).await,
        Commands::Friends { action } => commands::friends::run(action, json).await,
        Commands::Config { action } => commands::config::run(action),
        Commands::Remind { action } => commands::remind::run(action, json).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "goalhabit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
