use chrono::{TimeZone, Utc};
use citaflow_client::endpoints::ListQuery;
use citaflow_client::endpoints::appointments::AppointmentQuery;
use citaflow_core::models::appointment::AppointmentFilter;
use pretty_assertions::assert_eq;

#[test]
fn test_list_query_pairs() {
    let query = ListQuery::new(2, 9, "ana");
    assert_eq!(
        query.to_pairs(),
        vec![
            ("page", "2".to_string()),
            ("limit", "9".to_string()),
            ("search", "ana".to_string()),
        ]
    );
}

#[test]
fn test_list_query_omits_empty_search() {
    let query = ListQuery::new(1, 10, "");
    assert_eq!(
        query.to_pairs(),
        vec![("page", "1".to_string()), ("limit", "10".to_string())]
    );
}

#[test]
fn test_appointment_query_pairs() {
    let start = Utc.with_ymd_and_hms(2025, 11, 17, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 11, 23, 23, 59, 59).unwrap();
    let query = AppointmentQuery {
        page: 1,
        limit: 500,
        filter: AppointmentFilter {
            start_date: Some(start),
            end_date: Some(end),
            employee_id: Some("emp_1".to_string()),
        },
    };

    let pairs = query.to_pairs();
    assert_eq!(pairs[0], ("page", "1".to_string()));
    assert_eq!(pairs[1], ("limit", "500".to_string()));
    assert_eq!(pairs[2], ("startDate", start.to_rfc3339()));
    assert_eq!(pairs[3], ("endDate", end.to_rfc3339()));
    assert_eq!(pairs[4], ("employeeId", "emp_1".to_string()));
}

#[test]
fn test_appointment_query_without_filter() {
    let query = AppointmentQuery {
        page: 3,
        limit: 10,
        filter: AppointmentFilter::default(),
    };

    assert_eq!(
        query.to_pairs(),
        vec![("page", "3".to_string()), ("limit", "10".to_string())]
    );
}
