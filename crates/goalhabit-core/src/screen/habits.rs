use chrono::NaiveDate;

use crate::error::CoreError;
use crate::model::{Cadence, CheckInRequest, Habit, HabitCreateRequest, HabitUpdateRequest};
use crate::repository::HabitsRepository;

use super::{Submitting, ViewState};

/// Habit list with check-in and delete.
pub struct HabitsScreen {
    repo: HabitsRepository,
    pub state: ViewState<Vec<Habit>>,
}

impl HabitsScreen {
    pub fn new(repo: HabitsRepository) -> Self {
        Self {
            repo,
            state: ViewState::default(),
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.state.data
    }

    pub async fn load(&mut self) -> bool {
        self.state.start();
        let result = self.repo.list().await;
        self.state.complete(result)
    }

    /// Check in for `date`. Repeated check-ins for the same day are sent as-is.
    pub async fn check_in(&mut self, habit_id: i64, date: NaiveDate, value: Option<i32>) -> bool {
        let req = CheckInRequest { date, value };
        if let Err(e) = req.validate() {
            self.state.fail(format!("Check-in: {e}"));
            return false;
        }
        match self.repo.check_in(habit_id, req.date, req.value).await {
            Ok(()) => {
                tracing::info!(habit_id, %date, "checked in");
                self.state.notify(format!("Отмечено за {date} ✅"));
                self.load().await
            }
            Err(e) => {
                self.state.fail(format!("Check-in: {e}"));
                false
            }
        }
    }

    pub async fn delete(&mut self, habit_id: i64) -> bool {
        match self.repo.delete(habit_id).await {
            Ok(()) => {
                self.state.notify("Привычка удалена");
                self.load().await
            }
            Err(e) => {
                self.state.fail(e);
                false
            }
        }
    }
}

/// Create or edit form for a habit.
pub struct HabitFormScreen {
    repo: HabitsRepository,
    editing: Option<i64>,
    pub title: String,
    pub cadence: Cadence,
    /// Saved habit once the form was submitted successfully.
    pub state: ViewState<Option<Habit>>,
    submitting: Submitting,
}

impl HabitFormScreen {
    pub fn create(repo: HabitsRepository) -> Self {
        Self {
            repo,
            editing: None,
            title: String::new(),
            cadence: Cadence::DAILY,
            state: ViewState::default(),
            submitting: Submitting::default(),
        }
    }

    /// Open the form for an existing habit, looked up in the current list.
    pub async fn edit(repo: HabitsRepository, habit_id: i64) -> Self {
        let mut form = Self::create(repo);
        form.editing = Some(habit_id);
        form.state.start();
        match form.repo.list().await {
            Ok(list) => match list.into_iter().find(|h| h.id == habit_id) {
                Some(habit) => {
                    form.title = habit.title;
                    form.cadence = habit.cadence;
                    form.state.loading = false;
                }
                None => form
                    .state
                    .fail(CoreError::NotFound(format!("Привычка не найдена: {habit_id}"))),
            },
            Err(e) => form.state.fail(e),
        }
        form
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_active()
    }

    pub async fn submit(&mut self) -> bool {
        let create = HabitCreateRequest::new(self.title.as_str(), self.cadence);
        if let Err(e) = create.validate() {
            self.state.fail(e);
            return false;
        }
        let update = HabitUpdateRequest {
            title: Some(create.title.clone()),
            cadence: Some(create.cadence),
        };
        if let Err(e) = update.validate() {
            self.state.fail(e);
            return false;
        }
        let Some(_guard) = self.submitting.begin() else {
            return false;
        };
        self.state.error = None;
        let result = match self.editing {
            Some(id) => self.repo.update(id, &update).await,
            None => self.repo.create(&create).await,
        };
        self.state.complete(result.map(Some))
    }
}
