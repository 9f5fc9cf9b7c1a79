use clap::Subcommand;
use goalhabit_core::{Config, LogNotifier, ReminderScheduler};
use std::sync::Arc;

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum RemindAction {
    /// Show when the reminder fires next
    Next,
    /// Run the reminder loop in the foreground
    Run {
        /// Stop after this many reminders
        #[arg(long)]
        count: Option<usize>,
    },
}

pub async fn run(action: RemindAction, json: bool) -> CliResult {
    let config = Config::load()?;
    let scheduler = ReminderScheduler::from_config(&config.reminder, Arc::new(LogNotifier));

    match action {
        RemindAction::Next => {
            let next = scheduler.next()?;
            if json {
                print_json(&serde_json::json!({
                    "enabled": config.reminder.enabled,
                    "next": next.format("%Y-%m-%dT%H:%M:%S").to_string(),
                }))?;
            } else if config.reminder.enabled {
                println!("Next reminder: {}", next.format("%Y-%m-%d %H:%M"));
            } else {
                println!("Reminder is disabled (reminder.enabled = false)");
            }
        }
        RemindAction::Run { count } => {
            if !config.reminder.enabled {
                return Err(
                    "reminder is disabled; enable it with \
                     `goalhabit config set reminder.enabled true`"
                        .into(),
                );
            }
            tracing::info!(
                hour = config.reminder.hour,
                minute = config.reminder.minute,
                "reminder loop started"
            );
            scheduler.run(count).await?;
        }
    }
    Ok(())
}
