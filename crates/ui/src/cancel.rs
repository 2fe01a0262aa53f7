//! Self-service cancellation behind an emailed token link.
//!
//! The page fires the cancel request once on load; the flow guards against
//! the shell mounting twice. There is no confirmation step, the link itself
//! is the confirmation.

use std::sync::Arc;

use async_trait::async_trait;
use citaflow_client::ApiClient;
use citaflow_core::errors::BookingResult;
use citaflow_core::models::appointment::Appointment;
use mockall::automock;

#[automock]
#[async_trait]
pub trait CancelApi: Send + Sync {
    async fn cancel(&self, token: &str) -> BookingResult<Appointment>;
}

#[async_trait]
impl CancelApi for ApiClient {
    async fn cancel(&self, token: &str) -> BookingResult<Appointment> {
        self.cancel_appointment(token).await
    }
}

#[derive(Debug, Clone)]
pub enum CancelState {
    Idle,
    Pending,
    /// The cancelled appointment, for the "your booking was cancelled"
    /// summary.
    Cancelled(Appointment),
    /// Invalid or already-used token, or a backend failure.
    Failed(String),
}

pub struct CancelFlow {
    token: String,
    state: CancelState,
    started: bool,
    api: Arc<dyn CancelApi>,
}

impl CancelFlow {
    pub fn new(token: impl Into<String>, api: Arc<dyn CancelApi>) -> Self {
        Self {
            token: token.into(),
            state: CancelState::Idle,
            started: false,
            api,
        }
    }

    pub fn state(&self) -> &CancelState {
        &self.state
    }

    /// Sends the cancellation. Repeat calls after the first are no-ops, so a
    /// remount cannot fire the request twice.
    pub async fn run(&mut self) -> BookingResult<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;

        self.state = CancelState::Pending;
        match self.api.cancel(&self.token).await {
            Ok(appointment) => {
                tracing::info!(appointment_id = %appointment.id, "Appointment cancelled");
                self.state = CancelState::Cancelled(appointment);
                Ok(())
            }
            Err(err) => {
                self.state = CancelState::Failed(err.user_message());
                Err(err)
            }
        }
    }

    /// `(service name, local start time)` of the cancelled appointment, once
    /// cancellation succeeded.
    pub fn summary(&self) -> Option<(String, String)> {
        match &self.state {
            CancelState::Cancelled(appointment) => Some((
                appointment.service.name.clone(),
                appointment
                    .start_time
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            )),
            _ => None,
        }
    }
}
