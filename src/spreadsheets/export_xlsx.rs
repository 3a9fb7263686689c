use crate::data::model::display_label;
use crate::data::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Headers in column order: display labels for renamed columns, source names otherwise.
pub fn export_headers() -> [&'static str; 9] {
    [
        display_label("realSum"),
        display_label("guest_satisfaction_overall"),
        display_label("cleanliness_rating"),
        display_label("room_type"),
        display_label("host_is_superhost"),
        display_label("dist"),
        "Day Type",
        "lat",
        "lng",
    ]
}

/// Write the filtered rows into an in-memory workbook.
pub fn build_listings_workbook(listings: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in export_headers().into_iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, header, &bold)
            .map_err(xlsx_err(header))?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, listing.price)
            .map_err(xlsx_err("price"))?;
        worksheet
            .write_number(r, 1, listing.satisfaction)
            .map_err(xlsx_err("satisfaction"))?;
        worksheet
            .write_number(r, 2, listing.cleanliness)
            .map_err(xlsx_err("cleanliness"))?;
        worksheet
            .write_string(r, 3, &listing.room_type)
            .map_err(xlsx_err("room type"))?;
        worksheet
            .write_boolean(r, 4, listing.superhost)
            .map_err(xlsx_err("superhost status"))?;
        worksheet
            .write_number(r, 5, listing.city_distance)
            .map_err(xlsx_err("city distance"))?;
        worksheet
            .write_string(r, 6, listing.day_type.as_str())
            .map_err(xlsx_err("day type"))?;
        worksheet
            .write_number(r, 7, listing.lat)
            .map_err(xlsx_err("latitude"))?;
        worksheet
            .write_number(r, 8, listing.lng)
            .map_err(xlsx_err("longitude"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_listings_xlsx(listings: &[&Listing], now: DateTime<Utc>) -> ResultResp {
    let buffer = build_listings_workbook(listings)?;
    xlsx_response(
        buffer,
        &format!("listings_{}.xlsx", now.format("%Y%m%d_%H%M%S")),
    )
}
