use crate::dashboard::update_dashboard;
use crate::data::{FilterParams, ListingTable};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates;
use crate::templates::pages::DashboardVm;
use astra::Request;

pub fn handle(req: Request, table: &ListingTable) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let filters = parse_filters(&req)?;
            let view = update_dashboard(table, &filters);
            let vm = DashboardVm {
                room_types: table.room_types(),
                filters: &filters,
                view: &view,
            };
            html_response(templates::pages::dashboard_page(&vm)?)
        }

        // htmx re-requests this whenever a control changes
        ("GET", "/dashboard/panels") => {
            let filters = parse_filters(&req)?;
            let view = update_dashboard(table, &filters);
            html_response(templates::pages::dashboard_panels(&view)?)
        }

        ("GET", "/api/dashboard") => {
            let filters = parse_filters(&req)?;
            json_response(&update_dashboard(table, &filters))
        }

        ("GET", "/export") => {
            let filters = parse_filters(&req)?;
            let rows = filters.apply(table);
            log::info!("Exporting {} filtered listings", rows.len());
            export_listings_xlsx(&rows, chrono::Utc::now())
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

fn parse_filters(req: &Request) -> Result<FilterParams, ServerError> {
    let pairs = parse_query(req);
    FilterParams::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}
