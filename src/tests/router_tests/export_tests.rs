use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::tests::utils::{body_bytes, get, test_table};

#[test]
fn export_returns_filtered_workbook() {
    let table = test_table();

    let resp = handle(get("/export?room_type=Private+room"), &table).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        XLSX_CONTENT_TYPE
    );

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"listings_"));
    assert!(disposition.ends_with(".xlsx\""));

    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn export_rejects_unknown_day_type() {
    let table = test_table();
    assert!(handle(get("/export?day_type=Holiday"), &table).is_err());
}
