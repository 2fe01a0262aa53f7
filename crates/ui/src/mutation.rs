//! Lifecycle of a single write operation.

/// State every mutation moves through. There is no retry state on purpose:
/// a failed mutation reports its message and leaves everything else as it
/// was.
#[derive(Debug, Clone, Default)]
pub enum MutationState<T> {
    #[default]
    Idle,
    Pending,
    Success(T),
    Error(String),
}

impl<T> MutationState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, MutationState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MutationState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MutationState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            MutationState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            MutationState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = MutationState::Idle;
    }
}
