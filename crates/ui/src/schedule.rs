//! Weekly schedule editor for one employee.
//!
//! Loads the 7-entry availability template, lets each weekday be toggled and
//! its window edited locally, and saves the whole template at once. The
//! validation run before saving mirrors what the backend enforces, so a save
//! that leaves this editor is expected to succeed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use citaflow_client::ApiClient;
use citaflow_core::errors::BookingResult;
use citaflow_core::models::employee::{
    AvailabilitySlot, UpdateAvailabilityRequest, WeekdayAvailability,
    validate_weekly_availability,
};
use mockall::automock;

use crate::cache::{QueryCache, QueryKey};
use crate::mutation::MutationState;

const SCHEDULE_STALE: Duration = Duration::from_secs(60);

/// Default window applied when a disabled day is switched on.
const DEFAULT_START: &str = "09:00";
const DEFAULT_END: &str = "17:00";

#[automock]
#[async_trait]
pub trait AvailabilityApi: Send + Sync {
    async fn availability(&self, employee_id: &str) -> BookingResult<Vec<AvailabilitySlot>>;
    async fn update_availability(
        &self,
        employee_id: &str,
        request: &UpdateAvailabilityRequest,
    ) -> BookingResult<Vec<AvailabilitySlot>>;
}

#[async_trait]
impl AvailabilityApi for ApiClient {
    async fn availability(&self, employee_id: &str) -> BookingResult<Vec<AvailabilitySlot>> {
        self.employee_availability(employee_id).await
    }

    async fn update_availability(
        &self,
        employee_id: &str,
        request: &UpdateAvailabilityRequest,
    ) -> BookingResult<Vec<AvailabilitySlot>> {
        self.update_employee_availability(employee_id, request).await
    }
}

pub struct WeeklyScheduleEditor {
    employee_id: String,
    days: Vec<WeekdayAvailability>,
    save: MutationState<()>,
    api: Arc<dyn AvailabilityApi>,
    cache: Arc<QueryCache>,
}

impl WeeklyScheduleEditor {
    pub fn new(
        employee_id: impl Into<String>,
        api: Arc<dyn AvailabilityApi>,
        cache: Arc<QueryCache>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            days: default_week(),
            save: MutationState::Idle,
            api,
            cache,
        }
    }

    /// One entry per weekday, index 0 (Sunday) through 6 (Saturday).
    pub fn days(&self) -> &[WeekdayAvailability] {
        &self.days
    }

    pub fn save_state(&self) -> &MutationState<()> {
        &self.save
    }

    /// Loads the stored template and fills in any weekday the backend has no
    /// row for yet as disabled, so the form always shows all seven days.
    pub async fn load(&mut self) -> BookingResult<()> {
        let employee_id = self.employee_id.clone();
        let key = QueryKey::new("availability").with(&employee_id);
        let stored = self
            .cache
            .fetch_with(key, SCHEDULE_STALE, || self.api.availability(&employee_id))
            .await?;

        let mut days = default_week();
        for slot in stored.iter() {
            if let Some(day) = days.get_mut(usize::from(slot.day_of_week)) {
                day.is_available = slot.is_available;
                day.start_time = slot.start_time.clone();
                day.end_time = slot.end_time.clone();
            }
        }
        self.days = days;
        Ok(())
    }

    /// Toggling a day on seeds it with the default window; toggling it off
    /// clears the window.
    pub fn toggle_day(&mut self, day_of_week: u8) {
        let Some(day) = self.days.get_mut(usize::from(day_of_week)) else {
            return;
        };
        if day.is_available {
            day.is_available = false;
            day.start_time = None;
            day.end_time = None;
        } else {
            day.is_available = true;
            day.start_time = Some(DEFAULT_START.to_string());
            day.end_time = Some(DEFAULT_END.to_string());
        }
    }

    pub fn set_window(
        &mut self,
        day_of_week: u8,
        start: impl Into<String>,
        end: impl Into<String>,
    ) {
        if let Some(day) = self.days.get_mut(usize::from(day_of_week)) {
            day.start_time = Some(start.into());
            day.end_time = Some(end.into());
        }
    }

    /// Validates and sends the whole template, then invalidates this
    /// employee's cached schedule (and any availability keyed off it).
    pub async fn save(&mut self) -> BookingResult<()> {
        let request = UpdateAvailabilityRequest {
            availability: self.days.clone(),
        };
        if let Err(err) = validate_weekly_availability(&request.availability) {
            self.save = MutationState::Error(err.user_message());
            return Err(err);
        }

        self.save = MutationState::Pending;
        match self
            .api
            .update_availability(&self.employee_id, &request)
            .await
        {
            Ok(stored) => {
                self.save = MutationState::Success(());
                self.cache.invalidate_family("availability");
                let mut days = default_week();
                for slot in &stored {
                    if let Some(day) = days.get_mut(usize::from(slot.day_of_week)) {
                        day.is_available = slot.is_available;
                        day.start_time = slot.start_time.clone();
                        day.end_time = slot.end_time.clone();
                    }
                }
                self.days = days;
                Ok(())
            }
            Err(err) => {
                self.save = MutationState::Error(err.user_message());
                Err(err)
            }
        }
    }
}

fn default_week() -> Vec<WeekdayAvailability> {
    (0..7)
        .map(|day_of_week| WeekdayAvailability {
            day_of_week,
            is_available: false,
            start_time: None,
            end_time: None,
        })
        .collect()
}
