use citaflow_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Appointment not found".to_string());
    let validation = BookingError::Validation("Invalid input".to_string());
    let authentication = BookingError::Authentication("Session expired".to_string());
    let api = BookingError::Api {
        status: 409,
        message: "Slot already taken".to_string(),
    };
    let network = BookingError::Network(eyre::eyre!("connection refused"));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Appointment not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Session expired"
    );
    assert_eq!(api.to_string(), "API error (409): Slot already taken");
    assert!(network.to_string().contains("connection refused"));
}

#[test]
fn test_user_message_strips_taxonomy_prefix() {
    let api = BookingError::Api {
        status: 409,
        message: "Slot already taken".to_string(),
    };
    assert_eq!(api.user_message(), "Slot already taken");

    let validation = BookingError::Validation("Name is required".to_string());
    assert_eq!(validation.user_message(), "Name is required");
}

#[test]
fn test_from_eyre_report() {
    let error: BookingError = eyre::eyre!("timed out").into();
    assert!(matches!(error, BookingError::Network(_)));
}

#[test]
fn test_booking_result() {
    let ok: BookingResult<u32> = Ok(7);
    assert_eq!(ok.unwrap(), 7);

    let err: BookingResult<u32> = Err(BookingError::NotFound("gone".to_string()));
    assert!(err.is_err());
}
