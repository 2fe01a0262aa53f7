use chrono::{NaiveDate, Utc};
use citaflow_core::models::appointment::{Appointment, UpdateAppointmentRequest};
use citaflow_core::models::booking::PublicBookingRequest;
use citaflow_core::models::client::Client;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use uuid::Uuid;
use citaflow_core::models::business::{AdminStats, BusinessUser, Plan, Role};
use citaflow_core::models::employee::{WeekdayAvailability, validate_weekly_availability};
use citaflow_core::models::pagination::Paginated;
use citaflow_core::models::reports::DashboardStats;
use citaflow_core::models::service::Service;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, from_value, json, to_value};

#[test]
fn test_appointment_deserialization() {
    let payload = json!({
        "id": "cita_1",
        "startTime": "2025-11-20T09:00:00Z",
        "endTime": "2025-11-20T09:30:00Z",
        "notes": "First visit",
        "createdAt": "2025-11-19T12:00:00Z",
        "updatedAt": "2025-11-19T12:00:00Z",
        "clienteId": "cli_1",
        "serviceId": "svc_1",
        "employeeId": "emp_1",
        "cliente": { "name": "Ana", "phone": "600111222" },
        "service": { "name": "Corte", "duration": 30, "price": 15.0 },
        "employee": { "name": "Luis", "color": "#ff0000" }
    });

    let appointment: Appointment = from_value(payload).expect("Failed to deserialize appointment");

    assert_eq!(appointment.id, "cita_1");
    assert_eq!(appointment.client_id, "cli_1");
    assert_eq!(appointment.client.name, "Ana");
    assert_eq!(appointment.service.duration, 30);
    assert_eq!(appointment.employee.color.as_deref(), Some("#ff0000"));
    assert_eq!(
        appointment.end_time.signed_duration_since(appointment.start_time),
        chrono::Duration::minutes(30)
    );
}

#[test]
fn test_public_booking_request_serialization() {
    let request = PublicBookingRequest {
        user_id: "biz_1".to_string(),
        service_id: "S1".to_string(),
        employee_id: "E1".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid date"),
        start_time: "09:00".to_string(),
        client_name: "Ana Torres".to_string(),
        client_email: "ana@example.com".to_string(),
        client_phone: "600111222".to_string(),
        notes: None,
    };

    let value = to_value(&request).expect("Failed to serialize booking request");

    assert_eq!(
        value,
        json!({
            "userId": "biz_1",
            "serviceId": "S1",
            "employeeId": "E1",
            "date": "2025-11-20",
            "startTime": "09:00",
            "clientName": "Ana Torres",
            "clientEmail": "ana@example.com",
            "clientPhone": "600111222"
        })
    );
}

#[test]
fn test_booking_request_includes_notes_when_present() {
    let request = PublicBookingRequest {
        user_id: "biz_1".to_string(),
        service_id: "S1".to_string(),
        employee_id: "E1".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid date"),
        start_time: "09:00".to_string(),
        client_name: "Ana".to_string(),
        client_email: "ana@example.com".to_string(),
        client_phone: "600111222".to_string(),
        notes: Some("Allergic to latex".to_string()),
    };

    let value = to_value(&request).expect("Failed to serialize booking request");
    assert_eq!(value["notes"], json!("Allergic to latex"));
}

#[test]
fn test_client_serialization() {
    let now = Utc::now();
    let client = Client {
        id: Uuid::new_v4().to_string(),
        name: Name().fake(),
        email: Some(SafeEmail().fake()),
        phone: Some("600111222".to_string()),
        user_id: Uuid::new_v4().to_string(),
        created_at: now,
        updated_at: now,
    };

    let json = serde_json::to_string(&client).expect("Failed to serialize client");
    assert!(json.contains("\"userId\""));
    assert!(json.contains("\"createdAt\""));

    let deserialized: Client = from_str(&json).expect("Failed to deserialize client");
    assert_eq!(deserialized.id, client.id);
    assert_eq!(deserialized.name, client.name);
    assert_eq!(deserialized.email, client.email);
}

#[test]
fn test_plan_and_role_wire_format() {
    assert_eq!(to_value(Plan::Free).unwrap(), json!("FREE"));
    assert_eq!(to_value(Plan::Profesional).unwrap(), json!("PROFESIONAL"));
    assert_eq!(to_value(Plan::Empresa).unwrap(), json!("EMPRESA"));
    assert_eq!(to_value(Role::SuperAdmin).unwrap(), json!("SUPER_ADMIN"));

    let role: Role = from_value(json!("OWNER")).expect("Failed to deserialize role");
    assert_eq!(role, Role::Owner);
}

#[test]
fn test_paginated_envelope_deserialization() {
    let payload = json!({
        "data": [
            {
                "id": "svc_1",
                "name": "Corte",
                "duration": 30,
                "price": 15.0,
                "userId": "biz_1",
                "createdAt": "2025-01-01T00:00:00Z",
                "updatedAt": "2025-01-01T00:00:00Z"
            }
        ],
        "meta": {
            "totalItems": 11,
            "currentPage": 2,
            "totalPages": 2,
            "itemsPerPage": 10
        }
    });

    let page: Paginated<Service> = from_value(payload).expect("Failed to deserialize envelope");

    assert_eq!(page.data.len(), 1);
    assert!(!page.is_empty());
    assert_eq!(page.meta.total_items, 11);
    assert_eq!(page.meta.current_page, 2);
    assert_eq!(page.meta.total_pages, 2);
}

#[test]
fn test_business_user_count_field() {
    let payload = json!({
        "id": "biz_1",
        "email": "owner@example.com",
        "businessName": "Salon Ana",
        "role": "OWNER",
        "plan": "PROFESIONAL",
        "maxEmployees": 5,
        "maxServices": 15,
        "planExpiresAt": null,
        "createdAt": "2025-01-01T00:00:00Z",
        "_count": { "employees": 3, "services": 8, "clientes": 120, "citas": 456 }
    });

    let business: BusinessUser = from_value(payload).expect("Failed to deserialize business");

    assert_eq!(business.plan, Plan::Profesional);
    assert_eq!(business.counts.clients, 120);
    assert_eq!(business.counts.appointments, 456);
}

#[test]
fn test_stats_wire_names() {
    let admin: AdminStats =
        from_str(r#"{"totalBusinesses": 40, "totalCitas": 9000, "mrr": 350.0}"#)
            .expect("Failed to deserialize admin stats");
    assert_eq!(admin.total_appointments, 9000);

    let dashboard: DashboardStats = from_value(json!({
        "income": { "current": 1200.0, "last": 1000.0, "growth": 20.0 },
        "totalAppts": 87,
        "chartData": [{ "name": "Ene", "total": 300.0 }]
    }))
    .expect("Failed to deserialize dashboard stats");
    assert_eq!(dashboard.total_appointments, 87);
    assert_eq!(dashboard.chart_data.len(), 1);
}

#[test]
fn test_update_request_omits_unset_fields() {
    let update = UpdateAppointmentRequest {
        notes: Some("Moved earlier".to_string()),
        ..Default::default()
    };

    let value = to_value(&update).expect("Failed to serialize update");
    assert_eq!(value, json!({ "notes": "Moved earlier" }));
}

fn week(enabled: &[(u8, &str, &str)]) -> Vec<WeekdayAvailability> {
    (0..7u8)
        .map(|day_of_week| {
            match enabled.iter().find(|(day, _, _)| *day == day_of_week) {
                Some((_, start, end)) => WeekdayAvailability {
                    day_of_week,
                    is_available: true,
                    start_time: Some((*start).to_string()),
                    end_time: Some((*end).to_string()),
                },
                None => WeekdayAvailability {
                    day_of_week,
                    is_available: false,
                    start_time: None,
                    end_time: None,
                },
            }
        })
        .collect()
}

#[test]
fn test_weekly_availability_accepts_valid_week() {
    let days = week(&[(1, "09:00", "17:00"), (2, "10:00", "14:30")]);
    assert!(validate_weekly_availability(&days).is_ok());
}

#[test]
fn test_weekly_availability_rejects_wrong_length() {
    let mut days = week(&[]);
    days.pop();
    assert!(validate_weekly_availability(&days).is_err());
}

#[test]
fn test_weekly_availability_rejects_duplicate_day() {
    let mut days = week(&[]);
    days[6].day_of_week = 0;
    assert!(validate_weekly_availability(&days).is_err());
}

#[rstest]
#[case("17:00", "09:00")]
#[case("09:00", "09:00")]
#[case("9am", "17:00")]
#[case("25:00", "26:00")]
fn test_weekly_availability_rejects_bad_window(#[case] start: &str, #[case] end: &str) {
    let days = week(&[(3, start, end)]);
    assert!(validate_weekly_availability(&days).is_err());
}

#[test]
fn test_weekly_availability_requires_window_for_enabled_day() {
    let mut days = week(&[]);
    days[5].is_available = true;
    assert!(validate_weekly_availability(&days).is_err());
}
