use chrono::NaiveDate;
use clap::{ArgAction, Subcommand};
use goalhabit_core::screen::{GoalFormScreen, GoalsScreen};
use goalhabit_core::{Goal, GoalCreateRequest, GoalStatus, GoalType, DEFAULT_PRIORITY};

use super::{finish, print_json, repositories, CliResult};

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List goals with progress
    List,
    /// Create a goal
    Create {
        title: String,
        /// quant, steps or habit-as-goal
        #[arg(long = "type", default_value = "quant")]
        goal_type: GoalType,
        /// Target value, required for quant goals
        #[arg(long)]
        target: Option<i32>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<NaiveDate>,
        /// 1 (lowest) to 5 (highest)
        #[arg(long, default_value_t = DEFAULT_PRIORITY)]
        priority: i32,
        /// Show the goal in your public profile
        #[arg(long)]
        show_in_profile: bool,
    },
    /// Edit a goal
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "type")]
        goal_type: Option<GoalType>,
        #[arg(long)]
        target: Option<i32>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        deadline: Option<NaiveDate>,
        #[arg(long)]
        priority: Option<i32>,
    },
    /// Delete a goal
    Delete { id: i64 },
    /// Change the status of a goal
    Status {
        id: i64,
        /// active, paused, done or canceled
        status: GoalStatus,
    },
    /// Add progress to a goal
    Progress {
        id: i64,
        /// Increment; defaults to a step suited to the goal
        #[arg(long)]
        delta: Option<i32>,
    },
    /// Show or hide a goal in your profile
    Visibility {
        id: i64,
        #[arg(action = ArgAction::Set)]
        show: bool,
    },
}

pub async fn run(action: GoalsAction, json: bool) -> CliResult {
    let repos = repositories()?;

    match action {
        GoalsAction::List => {
            let mut screen = GoalsScreen::new(repos.goals);
            let ok = screen.load().await;
            finish(ok, &screen.state)?;
            print_goals(screen.goals(), json)?;
        }
        GoalsAction::Create {
            title,
            goal_type,
            target,
            unit,
            description,
            deadline,
            priority,
            show_in_profile,
        } => {
            let draft = GoalCreateRequest {
                description,
                target_value: target,
                unit,
                deadline,
                priority,
                show_in_profile,
                ..GoalCreateRequest::new(title, goal_type)
            };
            let mut form = GoalFormScreen::with_draft(repos.goals, draft);
            let ok = form.submit().await;
            finish(ok, &form.state)?;
            print_saved(form.state.data.as_ref(), json)?;
        }
        GoalsAction::Edit {
            id,
            title,
            goal_type,
            target,
            unit,
            description,
            deadline,
            priority,
        } => {
            let mut form = GoalFormScreen::edit(repos.goals, id).await;
            if form.state.has_error() {
                return finish(false, &form.state);
            }
            let draft = &mut form.draft;
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(goal_type) = goal_type {
                draft.goal_type = goal_type;
            }
            if target.is_some() {
                draft.target_value = target;
            }
            if unit.is_some() {
                draft.unit = unit;
            }
            if description.is_some() {
                draft.description = description;
            }
            if deadline.is_some() {
                draft.deadline = deadline;
            }
            if let Some(priority) = priority {
                draft.priority = priority;
            }
            let ok = form.submit().await;
            finish(ok, &form.state)?;
            print_saved(form.state.data.as_ref(), json)?;
        }
        GoalsAction::Delete { id } => {
            let mut screen = GoalsScreen::new(repos.goals);
            let ok = screen.delete(id).await;
            finish(ok, &screen.state)?;
        }
        GoalsAction::Status { id, status } => {
            let mut screen = GoalsScreen::new(repos.goals);
            let ok = screen.set_status(id, status).await;
            finish(ok, &screen.state)?;
        }
        GoalsAction::Progress { id, delta } => {
            let mut screen = GoalsScreen::new(repos.goals);
            let ok = screen.load().await;
            finish(ok, &screen.state)?;
            if let (None, Some(goal), false) = (delta, screen.goal(id), json) {
                eprintln!(
                    "Adding {} ({}; pass --delta to choose)",
                    goal.default_progress_delta(),
                    goal.progress_hint()
                );
            }
            let ok = screen.add_progress(id, delta).await;
            finish(ok, &screen.state)?;
            if let Some(goal) = screen.goal(id) {
                if json {
                    print_json(goal)?;
                } else {
                    println!("{}: {}", goal.title, goal.progress_line());
                }
            }
        }
        GoalsAction::Visibility { id, show } => {
            let mut screen = GoalsScreen::new(repos.goals);
            let ok = screen.set_visibility(id, show).await;
            finish(ok, &screen.state)?;
        }
    }
    Ok(())
}

fn print_goals(goals: &[Goal], json: bool) -> CliResult {
    if json {
        return print_json(goals);
    }
    if goals.is_empty() {
        println!("No goals.");
    }
    for g in goals {
        let percent = g
            .progress_percent()
            .map(|p| format!(" ({p}%)"))
            .unwrap_or_default();
        let shown = if g.show_in_profile { " *" } else { "" };
        println!(
            "{:>4}  [{}] {}{}  {}{}  {}",
            g.id,
            g.status.label(),
            g.title,
            shown,
            g.progress_line(),
            percent,
            g.goal_type.label(),
        );
    }
    Ok(())
}

fn print_saved(goal: Option<&Goal>, json: bool) -> CliResult {
    match goal {
        Some(g) if json => print_json(g),
        Some(g) => {
            println!("Goal saved: {} (id {})", g.title, g.id);
            Ok(())
        }
        None => Ok(()),
    }
}
