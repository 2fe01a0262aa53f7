//! The calendar view's date-range controller.
//!
//! The view never fetches incrementally: a `(focus date, view)` pair maps to
//! one `[start, end]` window, any navigation or view switch recomputes it,
//! and each change is a full reload of the appointments inside the window
//! (capped at one generous page). Weeks start on Monday, and the month view
//! is padded to whole weeks so the partial rows at month boundaries render
//! fully.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc, Weekday};
use citaflow_client::ApiClient;
use citaflow_client::endpoints::appointments::AppointmentQuery;
use citaflow_core::errors::BookingResult;
use citaflow_core::models::appointment::{
    Appointment, AppointmentFilter, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use citaflow_core::models::pagination::Paginated;
use mockall::automock;

use crate::cache::{QueryCache, QueryKey};

/// Enough appointments for any single view window.
const CALENDAR_PAGE_LIMIT: u32 = 500;

/// Window data can be reused for five minutes; every mutation invalidates
/// the family anyway.
const CALENDAR_STALE: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Month,
    Week,
    Day,
    Agenda,
}

/// Computes the server filter window for a focus date in the given view.
///
/// - `Month`: start of the week containing the 1st, through the end of the
///   week containing the last day.
/// - `Week`: Monday through Sunday of the focus date's week.
/// - `Day`/`Agenda`: that single day.
///
/// Bounds are inclusive: midnight at the start, 23:59:59.999 at the end.
pub fn view_range(date: NaiveDate, view: CalendarView) -> (DateTime<Utc>, DateTime<Utc>) {
    let (first, last) = match view {
        CalendarView::Month => {
            let month_start = date
                .with_day(1)
                .expect("day 1 exists in every month");
            let month_end = month_start
                .checked_add_months(Months::new(1))
                .and_then(|d| d.checked_sub_days(Days::new(1)))
                .expect("month end within chrono range");
            (
                month_start.week(Weekday::Mon).first_day(),
                month_end.week(Weekday::Mon).last_day(),
            )
        }
        CalendarView::Week => {
            let week = date.week(Weekday::Mon);
            (week.first_day(), week.last_day())
        }
        CalendarView::Day | CalendarView::Agenda => (date, date),
    };

    let start = first
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists")
        .and_utc();
    let end = last
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("end of day exists")
        .and_utc();
    (start, end)
}

/// A calendar entry ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: String,
    /// `"{client} - {service}"`.
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// The assigned employee's display color.
    pub color: Option<String>,
}

/// Maps fetched appointments to display events.
pub fn to_events(appointments: &[Appointment]) -> Vec<CalendarEvent> {
    appointments
        .iter()
        .map(|appointment| CalendarEvent {
            id: appointment.id.clone(),
            title: format!("{} - {}", appointment.client.name, appointment.service.name),
            start: appointment.start_time,
            end: appointment.end_time,
            color: appointment.employee.color.clone(),
        })
        .collect()
}

/// The appointment operations the calendar needs.
#[automock]
#[async_trait]
pub trait AppointmentApi: Send + Sync {
    async fn list(&self, query: &AppointmentQuery) -> BookingResult<Paginated<Appointment>>;
    async fn create(&self, request: &CreateAppointmentRequest) -> BookingResult<Appointment>;
    async fn update(
        &self,
        id: &str,
        request: &UpdateAppointmentRequest,
    ) -> BookingResult<Appointment>;
    async fn delete(&self, id: &str) -> BookingResult<()>;
}

#[async_trait]
impl AppointmentApi for ApiClient {
    async fn list(&self, query: &AppointmentQuery) -> BookingResult<Paginated<Appointment>> {
        self.list_appointments(query).await
    }

    async fn create(&self, request: &CreateAppointmentRequest) -> BookingResult<Appointment> {
        self.create_appointment(request).await
    }

    async fn update(
        &self,
        id: &str,
        request: &UpdateAppointmentRequest,
    ) -> BookingResult<Appointment> {
        self.update_appointment(id, request).await
    }

    async fn delete(&self, id: &str) -> BookingResult<()> {
        self.delete_appointment(id).await
    }
}

/// The shared create/edit modal over the calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    /// Create form; pre-filled with slot bounds when opened from an empty
    /// slot, blank when opened from the "new" button.
    Create {
        prefill: Option<(DateTime<Utc>, DateTime<Utc>)>,
    },
    /// Edit form pre-filled from an existing appointment.
    Edit(Appointment),
}

pub enum Navigate {
    Prev,
    Next,
}

pub struct CalendarController {
    date: NaiveDate,
    view: CalendarView,
    range: (DateTime<Utc>, DateTime<Utc>),
    modal: ModalState,
    pending_delete: Option<Appointment>,
    data: Option<Arc<Paginated<Appointment>>>,
    is_loading: bool,
    error: Option<String>,
    cache: Arc<QueryCache>,
    api: Arc<dyn AppointmentApi>,
}

impl CalendarController {
    pub fn new(date: NaiveDate, cache: Arc<QueryCache>, api: Arc<dyn AppointmentApi>) -> Self {
        let view = CalendarView::Week;
        Self {
            date,
            view,
            range: view_range(date, view),
            modal: ModalState::Closed,
            pending_delete: None,
            data: None,
            is_loading: false,
            error: None,
            cache,
            api,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        self.range
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn pending_delete(&self) -> Option<&Appointment> {
        self.pending_delete.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Display events for the current window.
    pub fn events(&self) -> Vec<CalendarEvent> {
        self.data
            .as_ref()
            .map(|data| to_events(&data.data))
            .unwrap_or_default()
    }

    pub async fn set_view(&mut self, view: CalendarView) -> BookingResult<()> {
        self.view = view;
        self.apply_range().await
    }

    pub async fn set_date(&mut self, date: NaiveDate) -> BookingResult<()> {
        self.date = date;
        self.apply_range().await
    }

    /// Prev/next steps by the view granularity: a month, a week, or a day.
    pub async fn navigate(&mut self, direction: Navigate) -> BookingResult<()> {
        let date = self.date;
        self.date = match (self.view, direction) {
            (CalendarView::Month, Navigate::Prev) => date
                .checked_sub_months(Months::new(1))
                .unwrap_or(date),
            (CalendarView::Month, Navigate::Next) => date
                .checked_add_months(Months::new(1))
                .unwrap_or(date),
            (CalendarView::Week, Navigate::Prev) => {
                date.checked_sub_days(Days::new(7)).unwrap_or(date)
            }
            (CalendarView::Week, Navigate::Next) => {
                date.checked_add_days(Days::new(7)).unwrap_or(date)
            }
            (_, Navigate::Prev) => date.checked_sub_days(Days::new(1)).unwrap_or(date),
            (_, Navigate::Next) => date.checked_add_days(Days::new(1)).unwrap_or(date),
        };
        self.apply_range().await
    }

    pub async fn go_today(&mut self, today: NaiveDate) -> BookingResult<()> {
        self.date = today;
        self.apply_range().await
    }

    /// Full reload of the current window through the cache.
    pub async fn refresh(&mut self) -> BookingResult<()> {
        let (start, end) = self.range;
        let query = AppointmentQuery {
            page: 1,
            limit: CALENDAR_PAGE_LIMIT,
            filter: AppointmentFilter {
                start_date: Some(start),
                end_date: Some(end),
                employee_id: None,
            },
        };

        let key = QueryKey::new("citas")
            .with(query.page)
            .with(query.limit)
            .with(start.to_rfc3339())
            .with(end.to_rfc3339());

        self.is_loading = true;
        let result = self
            .cache
            .fetch_with(key, CALENDAR_STALE, || self.api.list(&query))
            .await;
        self.is_loading = false;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Clicking an empty slot opens the create form pre-filled with the
    /// slot's bounds.
    pub fn select_slot(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.modal = ModalState::Create {
            prefill: Some((start, end)),
        };
    }

    /// Clicking an existing event opens the same modal in edit mode.
    pub fn select_event(&mut self, appointment: Appointment) {
        self.modal = ModalState::Edit(appointment);
    }

    /// The "+ new appointment" button: blank create form.
    pub fn open_create(&mut self) {
        self.modal = ModalState::Create { prefill: None };
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Submits the modal form, branching between create and update based on
    /// how the modal was opened. Success invalidates the appointment family,
    /// closes the modal and refetches the window.
    pub async fn submit(&mut self, form: CreateAppointmentRequest) -> BookingResult<()> {
        let result = match &self.modal {
            ModalState::Edit(existing) => {
                let update = UpdateAppointmentRequest {
                    client_id: Some(form.client_id),
                    service_id: Some(form.service_id),
                    employee_id: Some(form.employee_id),
                    start_time: Some(form.start_time),
                    notes: form.notes,
                };
                self.api.update(&existing.id, &update).await
            }
            _ => self.api.create(&form).await,
        };

        match result {
            Ok(_) => {
                self.modal = ModalState::Closed;
                self.cache.invalidate_family("citas");
                self.refresh().await
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Delete from the edit modal routes through a confirmation first.
    pub fn request_delete(&mut self, appointment: Appointment) {
        self.pending_delete = Some(appointment);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirms the pending delete; success closes both the confirmation
    /// and the edit modal.
    pub async fn confirm_delete(&mut self) -> BookingResult<()> {
        let Some(appointment) = self.pending_delete.clone() else {
            return Ok(());
        };

        match self.api.delete(&appointment.id).await {
            Ok(()) => {
                self.pending_delete = None;
                self.modal = ModalState::Closed;
                self.cache.invalidate_family("citas");
                self.refresh().await
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    async fn apply_range(&mut self) -> BookingResult<()> {
        let range = view_range(self.date, self.view);
        if range != self.range {
            self.range = range;
        }
        self.refresh().await
    }
}
