//! Daily progress reminder.
//!
//! The reminder fires once a day at a configured local time. Firing is
//! delegated to a [`Notifier`], so the same schedule drives a desktop
//! notification, a log line or a test counter.

use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use std::sync::Arc;

use crate::error::{ConfigError, Result};
use crate::storage::ReminderConfig;

pub const REMINDER_TITLE: &str = "GoalHabitApp";
pub const REMINDER_TEXT: &str = "Не забудьте отметить прогресс по целям 👇";

/// Next moment at `hour:minute` strictly after `now`.
pub fn next_fire(now: NaiveDateTime, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| ConfigError::InvalidValue {
        key: "reminder".into(),
        message: format!("{hour}:{minute:02} is not a time of day"),
    })?;
    let today = now.date().and_time(time);
    if today > now {
        Ok(today)
    } else {
        Ok(today + Duration::days(1))
    }
}

/// Delivers a reminder to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, text: &str) -> Result<()>;
}

/// Prints the reminder to stdout and the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, text: &str) -> Result<()> {
        tracing::info!(title, "reminder fired");
        println!("[{title}] {text}");
        Ok(())
    }
}

pub struct ReminderScheduler {
    hour: u32,
    minute: u32,
    notifier: Arc<dyn Notifier>,
}

impl ReminderScheduler {
    pub fn new(hour: u32, minute: u32, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            hour,
            minute,
            notifier,
        }
    }

    pub fn from_config(config: &ReminderConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(config.hour, config.minute, notifier)
    }

    /// Next local fire time.
    pub fn next(&self) -> Result<NaiveDateTime> {
        next_fire(Local::now().naive_local(), self.hour, self.minute)
    }

    /// Sleep until each fire time and notify. Runs forever unless `limit`
    /// caps the number of reminders. A failed notification is logged and
    /// the schedule continues.
    pub async fn run(&self, limit: Option<usize>) -> Result<()> {
        let mut fired = 0usize;
        let mut last: Option<NaiveDateTime> = None;
        while limit.map_or(true, |max| fired < max) {
            let now = Local::now().naive_local();
            // a wake-up slightly before the fire time must not fire twice
            let from = last.map_or(now, |l| l.max(now));
            let at = next_fire(from, self.hour, self.minute)?;
            let wait = (at - now).to_std().unwrap_or_default();
            tracing::debug!("next reminder at {} (in {}s)", at, wait.as_secs());
            tokio::time::sleep(wait).await;

            if let Err(e) = self.notifier.notify(REMINDER_TITLE, REMINDER_TEXT) {
                tracing::warn!("reminder delivery failed: {}", e);
            }
            fired += 1;
            last = Some(at);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn fires_later_today_when_time_is_ahead() {
        assert_eq!(next_fire(at(9, 0), 20, 0).unwrap(), at(20, 0));
    }

    #[test]
    fn fires_tomorrow_when_time_has_passed() {
        let next = next_fire(at(20, 0), 20, 0).unwrap();
        assert_eq!(next, at(20, 0) + Duration::days(1));
        let next = next_fire(at(21, 15), 8, 30).unwrap();
        assert_eq!(next.date(), NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
    }

    #[test]
    fn rejects_impossible_time() {
        assert!(next_fire(at(9, 0), 24, 0).is_err());
        assert!(next_fire(at(9, 0), 7, 60).is_err());
    }

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl Notifier for Counter {
        fn notify(&self, title: &str, text: &str) -> Result<()> {
            assert_eq!(title, REMINDER_TITLE);
            assert!(text.starts_with("Не забудьте"));
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn scheduler_fires_requested_number_of_times() {
        let counter = Arc::new(Counter::default());
        let scheduler = ReminderScheduler::new(20, 0, counter.clone());
        scheduler.run(Some(2)).await.unwrap();
        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }
}
