use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] eyre::Report),
}

impl BookingError {
    /// The message shown inline next to the form or view that triggered the
    /// failed request, without the taxonomy prefix.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::NotFound(msg)
            | BookingError::Validation(msg)
            | BookingError::Authentication(msg) => msg.clone(),
            BookingError::Api { message, .. } => message.clone(),
            BookingError::Network(report) => report.to_string(),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
