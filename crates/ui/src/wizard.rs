//! The public booking wizard.
//!
//! A linear five-step machine over controller-local state. Selections
//! advance the step immediately (there is no explicit "next"), change
//! affordances rewind, and the availability query is gated on having a
//! service, an employee and a date. Submitting fires a single
//! `POST /public/book`; success stores the echoed appointment and advances
//! to the confirmation step, failure stays put and surfaces the backend
//! message inline.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use citaflow_client::ApiClient;
use citaflow_core::errors::{BookingError, BookingResult};
use citaflow_core::models::appointment::Appointment;
use citaflow_core::models::booking::{AvailabilityQuery, PublicBookingRequest};
use citaflow_core::models::employee::Employee;
use citaflow_core::models::service::Service;
use mockall::automock;

use crate::cache::{QueryCache, QueryKey};
use crate::mutation::MutationState;

/// Availability responses are considered fresh for a minute; a successful
/// booking invalidates them anyway.
const AVAILABILITY_STALE: Duration = Duration::from_secs(60);

/// The public endpoints the wizard needs.
#[automock]
#[async_trait]
pub trait PublicBookingApi: Send + Sync {
    async fn services(&self, user_id: &str) -> BookingResult<Vec<Service>>;
    async fn employees(&self, user_id: &str) -> BookingResult<Vec<Employee>>;
    async fn availability(&self, query: &AvailabilityQuery) -> BookingResult<Vec<String>>;
    async fn book(&self, request: &PublicBookingRequest) -> BookingResult<Appointment>;
}

#[async_trait]
impl PublicBookingApi for ApiClient {
    async fn services(&self, user_id: &str) -> BookingResult<Vec<Service>> {
        self.public_services(user_id).await
    }

    async fn employees(&self, user_id: &str) -> BookingResult<Vec<Employee>> {
        self.public_employees(user_id).await
    }

    async fn availability(&self, query: &AvailabilityQuery) -> BookingResult<Vec<String>> {
        self.public_availability(query).await
    }

    async fn book(&self, request: &PublicBookingRequest) -> BookingResult<Appointment> {
        self.book_appointment(request).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectService,
    SelectEmployee,
    SelectDateTime,
    ContactInfo,
    Confirmed,
}

/// Contact details entered on step four.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

pub struct BookingWizard {
    /// Id of the business being booked, from the public link.
    user_id: String,
    step: WizardStep,
    service_id: Option<String>,
    employee_id: Option<String>,
    date: NaiveDate,
    slot: Option<String>,
    contact: ContactInfo,
    booking: MutationState<Appointment>,
    initial_date: NaiveDate,
    api: Arc<dyn PublicBookingApi>,
    cache: Arc<QueryCache>,
}

impl BookingWizard {
    /// `today` seeds the date selection and is restored on every reset.
    pub fn new(
        user_id: impl Into<String>,
        today: NaiveDate,
        api: Arc<dyn PublicBookingApi>,
        cache: Arc<QueryCache>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            step: WizardStep::SelectService,
            service_id: None,
            employee_id: None,
            date: today,
            slot: None,
            contact: ContactInfo::default(),
            booking: MutationState::Idle,
            initial_date: today,
            api,
            cache,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn booking(&self) -> &MutationState<Appointment> {
        &self.booking
    }

    /// The appointment echoed back by a successful booking.
    pub fn confirmed(&self) -> Option<&Appointment> {
        self.booking.data()
    }

    pub async fn load_services(&self) -> BookingResult<Vec<Service>> {
        self.api.services(&self.user_id).await
    }

    pub async fn load_employees(&self) -> BookingResult<Vec<Employee>> {
        self.api.employees(&self.user_id).await
    }

    /// Picking a service advances straight to employee selection and resets
    /// every later choice: employee, date and slot.
    pub fn select_service(&mut self, service_id: impl Into<String>) {
        self.service_id = Some(service_id.into());
        self.employee_id = None;
        self.slot = None;
        self.date = self.initial_date;
        self.step = WizardStep::SelectEmployee;
    }

    /// Picking an employee advances to date/time; any slot chosen for the
    /// previous employee no longer applies.
    pub fn select_employee(&mut self, employee_id: impl Into<String>) {
        self.employee_id = Some(employee_id.into());
        self.slot = None;
        self.step = WizardStep::SelectDateTime;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.slot = None;
    }

    /// Picking a slot advances straight to the contact form.
    pub fn select_slot(&mut self, slot: impl Into<String>) {
        self.slot = Some(slot.into());
        self.step = WizardStep::ContactInfo;
    }

    /// "Change service" affordance; rewinding past date/time drops the slot.
    pub fn change_service(&mut self) {
        self.slot = None;
        self.step = WizardStep::SelectService;
    }

    /// "Change employee" affordance; rewinding past date/time drops the slot.
    pub fn change_employee(&mut self) {
        self.slot = None;
        self.step = WizardStep::SelectEmployee;
    }

    /// "Change time" affordance; the current slot stays highlighted until a
    /// new one is picked.
    pub fn change_date_time(&mut self) {
        self.step = WizardStep::SelectDateTime;
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    /// The availability request for the current selection, or `None` while
    /// any of service, employee or date is missing.
    pub fn availability_query(&self) -> Option<AvailabilityQuery> {
        Some(AvailabilityQuery {
            date: self.date,
            employee_id: self.employee_id.clone()?,
            service_id: self.service_id.clone()?,
        })
    }

    /// Open slots for the current selection. No request fires while the
    /// guard is incomplete; the shell just renders an empty grid.
    pub async fn load_availability(&self) -> BookingResult<Vec<String>> {
        let Some(query) = self.availability_query() else {
            return Ok(Vec::new());
        };

        let key = QueryKey::new("availability")
            .with(query.date)
            .with(&query.employee_id)
            .with(&query.service_id);
        let slots = self
            .cache
            .fetch_with(key, AVAILABILITY_STALE, || self.api.availability(&query))
            .await?;
        Ok(slots.as_ref().clone())
    }

    /// Sends the booking. On success the wizard advances to [`WizardStep::Confirmed`]
    /// and the cached availability and appointment lists are invalidated so
    /// later views see the consumed slot; on failure the wizard stays on the
    /// contact step with the message inline.
    pub async fn submit(&mut self) -> BookingResult<()> {
        let request = self.build_request()?;

        self.booking = MutationState::Pending;
        match self.api.book(&request).await {
            Ok(appointment) => {
                tracing::info!(appointment_id = %appointment.id, "Booking confirmed");
                self.booking = MutationState::Success(appointment);
                self.step = WizardStep::Confirmed;
                self.cache.invalidate_family("availability");
                self.cache.invalidate_family("citas");
                Ok(())
            }
            Err(err) => {
                self.booking = MutationState::Error(err.user_message());
                Err(err)
            }
        }
    }

    /// "Reserve another": back to step one with everything cleared.
    pub fn reset(&mut self) {
        self.step = WizardStep::SelectService;
        self.service_id = None;
        self.employee_id = None;
        self.date = self.initial_date;
        self.slot = None;
        self.contact = ContactInfo::default();
        self.booking.reset();
    }

    fn build_request(&self) -> BookingResult<PublicBookingRequest> {
        let (Some(service_id), Some(employee_id), Some(slot)) =
            (&self.service_id, &self.employee_id, &self.slot)
        else {
            return Err(BookingError::Validation(
                "Booking selection is incomplete".to_string(),
            ));
        };

        if self.contact.name.trim().is_empty()
            || self.contact.email.trim().is_empty()
            || self.contact.phone.trim().is_empty()
        {
            return Err(BookingError::Validation(
                "Name, email and phone are required".to_string(),
            ));
        }

        let notes = self.contact.notes.trim();
        Ok(PublicBookingRequest {
            user_id: self.user_id.clone(),
            service_id: service_id.clone(),
            employee_id: employee_id.clone(),
            date: self.date,
            start_time: slot.clone(),
            client_name: self.contact.name.clone(),
            client_email: self.contact.email.clone(),
            client_phone: self.contact.phone.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}
