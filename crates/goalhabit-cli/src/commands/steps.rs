use clap::Subcommand;
use goalhabit_core::screen::GoalStepsScreen;

use super::{finish, print_json, repositories, CliResult};

#[derive(Subcommand)]
pub enum StepsAction {
    /// List the steps of a goal
    List { goal_id: i64 },
    /// Add a step
    Add { goal_id: i64, title: String },
    /// Rename a step
    Rename {
        goal_id: i64,
        step_id: i64,
        title: String,
    },
    /// Flip a step between done and not done
    Toggle { goal_id: i64, step_id: i64 },
    /// Delete a step
    Delete { goal_id: i64, step_id: i64 },
}

pub async fn run(action: StepsAction, json: bool) -> CliResult {
    let repos = repositories()?;

    let screen = match action {
        StepsAction::List { goal_id } => {
            let mut screen = GoalStepsScreen::new(repos.goals, goal_id);
            let ok = screen.load().await;
            finish(ok, &screen.state)?;
            screen
        }
        StepsAction::Add { goal_id, title } => {
            let mut screen = GoalStepsScreen::new(repos.goals, goal_id);
            let ok = screen.add(&title).await;
            finish(ok, &screen.state)?;
            screen
        }
        StepsAction::Rename {
            goal_id,
            step_id,
            title,
        } => {
            let mut screen = GoalStepsScreen::new(repos.goals, goal_id);
            let ok = screen.rename(step_id, &title).await;
            finish(ok, &screen.state)?;
            screen
        }
        StepsAction::Toggle { goal_id, step_id } => {
            let mut screen = GoalStepsScreen::new(repos.goals, goal_id);
            let ok = screen.load().await;
            finish(ok, &screen.state)?;
            let done = screen
                .steps()
                .iter()
                .find(|s| s.id == step_id)
                .map(|s| s.is_done)
                .ok_or_else(|| format!("step {step_id} not found in goal {goal_id}"))?;
            let ok = screen.toggle(step_id, !done).await;
            finish(ok, &screen.state)?;
            screen
        }
        StepsAction::Delete { goal_id, step_id } => {
            let mut screen = GoalStepsScreen::new(repos.goals, goal_id);
            let ok = screen.delete(step_id).await;
            finish(ok, &screen.state)?;
            screen
        }
    };

    if json {
        return print_json(screen.steps());
    }
    for step in screen.steps() {
        let mark = if step.is_done { "x" } else { " " };
        println!("{:>4}  [{mark}] {}", step.id, step.title);
    }
    if screen.is_complete() {
        println!(
            "All steps done. Set the goal status with `goalhabit goals status {} done`.",
            screen.goal_id()
        );
    }
    Ok(())
}
