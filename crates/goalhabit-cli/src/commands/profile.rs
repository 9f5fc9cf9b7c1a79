use goalhabit_core::screen::ProfileScreen;

use super::{finish, print_json, repositories, CliResult};

pub async fn run(json: bool) -> CliResult {
    let repos = repositories()?;
    let mut screen = ProfileScreen::new(repos.profile, repos.auth);
    let ok = screen.load().await;
    finish(ok, &screen.state)?;

    let profile = screen.profile();
    if json {
        return print_json(profile);
    }
    println!("Habit streak:    {}", profile.current_habit_streak);
    println!("Goals completed: {}", profile.goals_completed);
    println!("Points:          {}", profile.points);
    println!(
        "Achievements:    {}/{}",
        profile.earned_count(),
        profile.achievements.len()
    );
    for a in &profile.achievements {
        let mark = if a.is_earned() { "*" } else { " " };
        println!("  [{mark}] {}", a.title);
    }
    if !profile.goals.is_empty() {
        println!("Goals in profile:");
        for g in &profile.goals {
            println!("  {}  {}", g.title, g.progress_line());
        }
    }
    Ok(())
}
