mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

const TODAY: &str = "2025-06-11";
const TOMORROW: &str = "2025-06-12";
const SATURDAY: &str = "2025-06-14";

struct Shop {
    customer: String,
    barber: String,
    cut: String,
    long_cut: String,
}

async fn setup(app: &TestApp) -> Shop {
    Shop {
        customer: app.create_profile("Casey", "customer").await,
        barber: app.create_profile("Alex", "barber").await,
        cut: app.create_service("Cut", Some(30)).await,
        long_cut: app.create_service("Cut, Wash & Beard", Some(90)).await,
    }
}

async fn set_status(app: &TestApp, id: &str, status: &str) -> StatusCode {
    let (code, _) = app.request(
        "PUT",
        &format!("/api/v1/appointments/{}/status", id),
        Some(json!({ "status": status })),
    ).await;
    code
}

#[tokio::test]
async fn test_book_appointment() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (status, body) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "10:30 am").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["date"], TOMORROW);
    // stored in canonical form
    assert_eq!(body["time"], "10:30 AM");

    let id = body["id"].as_str().unwrap();
    let (status, fetched) = app.request("GET", &format!("/api/v1/appointments/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["barber_id"], shop.barber.as_str());
}

#[tokio::test]
async fn test_double_booking_is_rejected() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (first, _) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "4:00 PM").await;
    let (second, body) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "4:00 PM").await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("not available"));
}

#[tokio::test]
async fn test_long_service_blocks_following_slots() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.long_cut, TOMORROW, "2:00 PM").await;
    assert_eq!(status, StatusCode::CREATED);

    // 2:00 PM + 90 minutes holds 2:00, 2:30 and 3:00
    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "3:00 PM").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "3:30 PM").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_new_booking_must_fit_before_next_appointment() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "2:00 PM").await;

    // 90 minutes from 1:00 PM would run into the 2:00 PM appointment
    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.long_cut, TOMORROW, "1:00 PM").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.long_cut, TOMORROW, "11:30 AM").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_cannot_book_in_the_past() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    // the clock reads 2:15 PM
    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, TODAY, "2:00 PM").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, TODAY, "2:30 PM").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_booking_outside_window_is_rejected() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    for date in ["2025-06-10", "2025-06-25"] {
        let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, date, "11:00 AM").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "date {date}");
    }
}

#[tokio::test]
async fn test_time_must_be_on_the_grid() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    for time in ["2:15 PM", "9:30 AM", "11:30 PM", "14:00", "noon"] {
        let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, time).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "time {time}");
    }
}

#[tokio::test]
async fn test_weekend_booking_must_end_by_closing() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.long_cut, SATURDAY, "9:00 PM").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, SATURDAY, "9:30 PM").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, SATURDAY, "9:00 PM").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_last_weekday_slot_accepts_long_service() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.long_cut, TOMORROW, "11:00 PM").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_unknown_references_are_not_found() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (status, _) = app.book(&shop.customer, "ghost", &shop.cut, TOMORROW, "11:00 AM").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.book(&shop.customer, &shop.barber, "ghost", TOMORROW, "11:00 AM").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.book("ghost", &shop.barber, &shop.cut, TOMORROW, "11:00 AM").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // customers cannot be booked as barbers
    let (status, _) = app.book(&shop.customer, &shop.customer, &shop.cut, TOMORROW, "11:00 AM").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // nor staff as customers
    let owner = app.create_profile("Morgan", "owner").await;
    for staff in [&shop.barber, &owner] {
        let (status, _) = app.book(staff, &shop.barber, &shop.cut, TOMORROW, "11:00 AM").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (status, _) = app.request("DELETE", &format!("/api/v1/services/{}", shop.cut), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "11:00 AM").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payment_reference_is_stored() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (status, body) = app.request("POST", "/api/v1/appointments", Some(json!({
        "customer_id": shop.customer,
        "barber_id": shop.barber,
        "service_id": shop.cut,
        "date": TOMORROW,
        "time": "6:00 PM",
        "notes": "Skin fade",
        "payment_reference": "pi_3Nq"
    }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["payment_reference"], "pi_3Nq");
    assert_eq!(body["notes"], "Skin fade");
}

#[tokio::test]
async fn test_status_transitions() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (_, a) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "10:00 AM").await;
    let a = a["id"].as_str().unwrap().to_string();

    assert_eq!(set_status(&app, &a, "confirmed").await, StatusCode::OK);
    assert_eq!(set_status(&app, &a, "completed").await, StatusCode::OK);
    assert_eq!(set_status(&app, &a, "cancelled").await, StatusCode::CONFLICT);

    let (_, b) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "10:30 AM").await;
    let b = b["id"].as_str().unwrap().to_string();

    assert_eq!(set_status(&app, &b, "cancelled").await, StatusCode::OK);
    assert_eq!(set_status(&app, &b, "confirmed").await, StatusCode::CONFLICT);
    assert_eq!(set_status(&app, &b, "no-show").await, StatusCode::BAD_REQUEST);
    assert_eq!(set_status(&app, "ghost", "confirmed").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rebook_after_cancellation() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;

    let (_, first) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "12:00 PM").await;
    let first = first["id"].as_str().unwrap().to_string();
    assert_eq!(set_status(&app, &first, "cancelled").await, StatusCode::OK);

    let (status, _) = app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "12:00 PM").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_appointments_sorted_by_clock_time() {
    let app = TestApp::new().await;
    let shop = setup(&app).await;
    let other_barber = app.create_profile("Blake", "barber").await;

    app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "2:00 PM").await;
    app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "10:00 AM").await;
    app.book(&shop.customer, &shop.barber, &shop.cut, TOMORROW, "11:30 AM").await;
    app.book(&shop.customer, &other_barber, &shop.cut, TOMORROW, "10:00 AM").await;
    app.book(&shop.customer, &shop.barber, &shop.cut, SATURDAY, "10:00 AM").await;

    let (status, body) = app.request(
        "GET",
        &format!("/api/v1/appointments?date={}&barber_id={}", TOMORROW, shop.barber),
        None,
    ).await;
    assert_eq!(status, StatusCode::OK);

    let times: Vec<&str> = body.as_array().unwrap().iter().map(|a| a["time"].as_str().unwrap()).collect();
    assert_eq!(times, vec!["10:00 AM", "11:30 AM", "2:00 PM"]);

    let (_, body) = app.request("GET", &format!("/api/v1/appointments?customer_id={}", shop.customer), None).await;
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, _) = app.request("GET", "/api/v1/appointments?date=tomorrow", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
