use std::sync::Arc;

use citaflow_core::errors::BookingError;
use citaflow_core::models::employee::AvailabilitySlot;
use citaflow_ui::cache::QueryCache;
use citaflow_ui::schedule::{MockAvailabilityApi, WeeklyScheduleEditor};
use pretty_assertions::assert_eq;

fn stored_slot(day_of_week: u8, start: &str, end: &str) -> AvailabilitySlot {
    AvailabilitySlot {
        id: format!("slot_{day_of_week}"),
        day_of_week,
        is_available: true,
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
    }
}

fn editor(api: MockAvailabilityApi) -> WeeklyScheduleEditor {
    WeeklyScheduleEditor::new("emp_1", Arc::new(api), Arc::new(QueryCache::new()))
}

#[tokio::test]
async fn test_load_fills_missing_days_as_disabled() {
    let mut api = MockAvailabilityApi::new();
    api.expect_availability()
        .times(1)
        .returning(|_| Ok(vec![stored_slot(1, "09:00", "17:00"), stored_slot(3, "10:00", "14:00")]));

    let mut editor = editor(api);
    editor.load().await.expect("load");

    let days = editor.days();
    assert_eq!(days.len(), 7);
    assert!(days[1].is_available);
    assert_eq!(days[1].start_time.as_deref(), Some("09:00"));
    assert!(days[3].is_available);
    assert!(!days[0].is_available);
    assert_eq!(days[0].start_time, None);
    assert!(!days[6].is_available);
}

#[test]
fn test_toggle_day_seeds_and_clears_window() {
    let mut editor = editor(MockAvailabilityApi::new());

    editor.toggle_day(2);
    assert!(editor.days()[2].is_available);
    assert_eq!(editor.days()[2].start_time.as_deref(), Some("09:00"));
    assert_eq!(editor.days()[2].end_time.as_deref(), Some("17:00"));

    editor.toggle_day(2);
    assert!(!editor.days()[2].is_available);
    assert_eq!(editor.days()[2].start_time, None);
}

#[tokio::test]
async fn test_save_rejects_invalid_window_before_any_request() {
    // The mock has no expectations: a request would panic.
    let mut editor = editor(MockAvailabilityApi::new());
    editor.toggle_day(2);
    editor.set_window(2, "18:00", "09:00");

    let result = editor.save().await;
    assert!(matches!(result, Err(BookingError::Validation(_))));
    assert!(editor.save_state().is_error());
}

#[tokio::test]
async fn test_save_sends_template_and_adopts_response() {
    let mut api = MockAvailabilityApi::new();
    api.expect_update_availability()
        .withf(|employee_id, request| {
            employee_id == "emp_1"
                && request.availability.len() == 7
                && request.availability[2].is_available
        })
        .times(1)
        .returning(|_, _| Ok(vec![stored_slot(2, "08:30", "16:30")]));

    let mut editor = editor(api);
    editor.toggle_day(2);
    editor.set_window(2, "09:00", "17:00");

    editor.save().await.expect("save");
    assert!(editor.save_state().is_success());
    // The editor shows what the backend stored, not what was sent.
    assert_eq!(editor.days()[2].start_time.as_deref(), Some("08:30"));
}
