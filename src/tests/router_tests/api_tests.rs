use crate::router::handle;
use crate::tests::utils::{body_string, get, test_table};
use serde_json::Value;

fn dashboard_json(uri: &str) -> Value {
    let table = test_table();
    let resp = handle(get(uri), &table).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn api_returns_all_nine_outputs() {
    let json = dashboard_json("/api/dashboard?day_type=Weekend");

    assert_eq!(json["total_listings"], 2);
    assert_eq!(json["average_price"], "445.00 EUR");
    assert_eq!(json["avg_satisfaction"], "85.00");
    assert_eq!(json["avg_distance"], "4.50 km");

    assert_eq!(json["room_type_pie_chart"]["data"][0]["type"], "pie");
    assert_eq!(
        json["room_type_pie_chart"]["data"][0]["labels"],
        serde_json::json!(["Entire home/apt", "Shared room"])
    );
    assert_eq!(json["revenue_bar_chart"]["data"][0]["type"], "bar");
    assert_eq!(json["price_heat_map"]["data"][0]["type"], "densitymapbox");
    assert_eq!(json["price_vs_city_distance"]["data"][0]["mode"], "lines");
    assert_eq!(
        json["distance_vs_satisfaction"]["data"].as_array().unwrap().len(),
        2
    );
    assert_eq!(json["summary"]["total"], 2);
}

#[test]
fn api_map_center_is_the_full_table_mean() {
    let (lat, lng) = test_table().center().unwrap();

    for uri in [
        "/api/dashboard",
        "/api/dashboard?room_type=Shared+room",
        "/api/dashboard?price_min=0&price_max=0",
    ] {
        let json = dashboard_json(uri);
        let center = &json["price_heat_map"]["layout"]["mapbox"]["center"];
        assert!((center["lat"].as_f64().unwrap() - lat).abs() < 1e-9, "{uri}");
        assert!((center["lon"].as_f64().unwrap() - lng).abs() < 1e-9, "{uri}");
    }
}

#[test]
fn api_empty_selection_reports_nan_summary() {
    let json = dashboard_json("/api/dashboard?satisfaction_min=0&satisfaction_max=10");

    assert_eq!(json["total_listings"], 0);
    assert_eq!(json["average_price"], "NaN EUR");
    assert!(json["summary"]["mean_price"].is_null());
    assert_eq!(
        json["room_type_pie_chart"]["data"][0]["labels"],
        serde_json::json!([])
    );
}
