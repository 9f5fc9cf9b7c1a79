use clap::Subcommand;
use goalhabit_core::screen::TemplatesScreen;

use super::{finish, print_json, repositories, CliResult};

#[derive(Subcommand)]
pub enum TemplatesAction {
    /// List goal templates
    List,
    /// Create a goal from a template
    Use {
        /// Template ID
        id: i64,
    },
}

pub async fn run(action: TemplatesAction, json: bool) -> CliResult {
    let repos = repositories()?;
    let mut screen = TemplatesScreen::new(repos.templates, repos.goals);
    let ok = screen.load().await;
    finish(ok, &screen.state)?;

    match action {
        TemplatesAction::List => {
            if json {
                return print_json(screen.templates());
            }
            if screen.templates().is_empty() {
                println!("No templates.");
            }
            for t in screen.templates() {
                println!("{:>4}  {}  [{}]  {}", t.id, t.title, t.category, t.suggestion_label());
                if !t.description.is_empty() {
                    println!("      {}", t.description);
                }
            }
        }
        TemplatesAction::Use { id } => match screen.create_goal(id).await {
            Some(goal) if json => print_json(&goal)?,
            Some(goal) => println!("Goal created: {} (id {})", goal.title, goal.id),
            None => finish(false, &screen.state)?,
        },
    }
    Ok(())
}
