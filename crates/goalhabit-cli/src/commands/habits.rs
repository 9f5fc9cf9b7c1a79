use chrono::{Local, NaiveDate};
use clap::Subcommand;
use goalhabit_core::screen::{HabitFormScreen, HabitsScreen};
use goalhabit_core::{Cadence, Habit};

use super::{finish, print_json, repositories, CliResult};

#[derive(Subcommand)]
pub enum HabitsAction {
    /// List habits
    List,
    /// Create a habit
    Create {
        title: String,
        /// daily, every:N, week:K, month:K or K/N (K times per N days)
        #[arg(long, default_value = "daily")]
        cadence: Cadence,
    },
    /// Edit a habit
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        cadence: Option<Cadence>,
    },
    /// Delete a habit
    Delete { id: i64 },
    /// Check in for a day
    CheckIn {
        id: i64,
        /// Day to check in for (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Optional magnitude, e.g. pages read
        #[arg(long)]
        value: Option<i32>,
    },
}

pub async fn run(action: HabitsAction, json: bool) -> CliResult {
    let repos = repositories()?;

    match action {
        HabitsAction::List => {
            let mut screen = HabitsScreen::new(repos.habits);
            let ok = screen.load().await;
            finish(ok, &screen.state)?;
            print_habits(screen.habits(), json)?;
        }
        HabitsAction::Create { title, cadence } => {
            let mut form = HabitFormScreen::create(repos.habits);
            form.title = title;
            form.cadence = cadence;
            let ok = form.submit().await;
            finish(ok, &form.state)?;
            print_saved(form.state.data.as_ref(), json)?;
        }
        HabitsAction::Edit { id, title, cadence } => {
            let mut form = HabitFormScreen::edit(repos.habits, id).await;
            if form.state.has_error() {
                return finish(false, &form.state);
            }
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(cadence) = cadence {
                form.cadence = cadence;
            }
            let ok = form.submit().await;
            finish(ok, &form.state)?;
            print_saved(form.state.data.as_ref(), json)?;
        }
        HabitsAction::Delete { id } => {
            let mut screen = HabitsScreen::new(repos.habits);
            let ok = screen.delete(id).await;
            finish(ok, &screen.state)?;
        }
        HabitsAction::CheckIn { id, date, value } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let mut screen = HabitsScreen::new(repos.habits);
            let ok = screen.check_in(id, date, value).await;
            finish(ok, &screen.state)?;
        }
    }
    Ok(())
}

fn print_habits(habits: &[Habit], json: bool) -> CliResult {
    if json {
        return print_json(habits);
    }
    if habits.is_empty() {
        println!("No habits.");
    }
    for h in habits {
        println!("{:>4}  {}  ({})", h.id, h.title, h.cadence);
    }
    Ok(())
}

fn print_saved(habit: Option<&Habit>, json: bool) -> CliResult {
    match habit {
        Some(h) if json => print_json(h),
        Some(h) => {
            println!("Habit saved: {} (id {}, {})", h.title, h.id, h.cadence);
            Ok(())
        }
        None => Ok(()),
    }
}
