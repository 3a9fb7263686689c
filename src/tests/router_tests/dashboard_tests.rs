// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_table};

#[test]
fn dashboard_page_renders_controls_and_default_summary() {
    let table = test_table();

    let resp = handle(get("/"), &table).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Airbnb London - Distance and Pricing Insights Dashboard"));

    // Room Type dropdown lists every category once, in first-appearance order
    let entire = body.find(r#"<option value="Entire home/apt">"#).unwrap();
    let private = body.find(r#"<option value="Private room">"#).unwrap();
    let shared = body.find(r#"<option value="Shared room">"#).unwrap();
    assert!(entire < private && private < shared);

    assert!(body.contains(r#"name="price_max""#));
    assert!(body.contains(r#"name="satisfaction_min""#));
    assert!(body.contains(r#"<option value="Weekend">"#));

    // Default filters cover all five fixture rows
    assert!(body.contains(">5</h2>"));
    assert!(body.contains("382.00 EUR"));
    assert!(body.contains("88.00"));
    assert!(body.contains("5.60 km"));

    for id in [
        "room_type_pie_chart",
        "revenue_bar_chart",
        "price_heat_map",
        "price_vs_city_distance",
        "distance_vs_satisfaction",
    ] {
        assert!(body.contains(&format!(r#"id="{id}""#)), "missing chart {id}");
    }
    assert!(body.contains("data-figure="));

    // Banner, then overview cards, then filters, then charts
    let banner = body.find("<h1").unwrap();
    let overview = body.find(r#"id="overview""#).unwrap();
    let filters = body.find(r#"id="filters""#).unwrap();
    let charts = body.find(r#"id="dashboard-panels""#).unwrap();
    assert!(banner < overview && overview < filters && filters < charts);
    assert!(!body.contains("hx-swap-oob"));
}

#[test]
fn dashboard_page_preselects_query_filters() {
    let table = test_table();

    let resp = handle(get("/?room_type=Private+room&day_type=Weekday"), &table).unwrap();
    let body = body_string(resp);

    assert!(body.contains(r#"<option value="Private room" selected>"#));
    assert!(body.contains(r#"<option value="Weekday" selected>"#));
    assert!(body.contains(">2</h2>"));
}

#[test]
fn panels_partial_reflects_filters() {
    let table = test_table();

    let resp = handle(
        get("/dashboard/panels?room_type=Entire+home%2Fapt&price_min=0&price_max=2500"),
        &table,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.starts_with(r#"<div id="dashboard-panels">"#));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"<div id="overview" class="row mb-4 overview" hx-swap-oob="true">"#));
    assert!(body.contains(">2</h2>"));
    assert!(body.contains("685.00 EUR"));
}

#[test]
fn crossed_range_is_a_bad_request() {
    let table = test_table();

    let err = handle(get("/dashboard/panels?price_min=900&price_max=100"), &table).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(html_error_response(err).status(), 400);
}

#[test]
fn empty_selection_shows_nan() {
    let table = test_table();

    let resp = handle(get("/dashboard/panels?price_min=0&price_max=0"), &table).unwrap();
    let body = body_string(resp);

    assert!(body.contains(">0</h2>"));
    assert!(body.contains("NaN EUR"));
    assert!(body.contains("NaN km"));
}

#[test]
fn malformed_filter_is_a_bad_request() {
    let table = test_table();

    let err = handle(get("/dashboard/panels?price_min=cheap"), &table).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("price_min must be a number"));
}

#[test]
fn unknown_route_is_not_found() {
    let table = test_table();

    let err = handle(get("/admin"), &table).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}
