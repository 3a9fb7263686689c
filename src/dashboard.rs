// dashboard.rs
use crate::charts::{self, Figure, LatLon};
use crate::data::{FilterParams, Listing, ListingTable};
use crate::stats::{self, Summary};
use serde::Serialize;

/// Everything the page shows for one set of filter selections.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub total_listings: usize,
    pub average_price: String,
    pub avg_satisfaction: String,
    pub avg_distance: String,
    pub room_type_pie_chart: Figure,
    pub revenue_bar_chart: Figure,
    pub price_heat_map: Figure,
    pub price_vs_city_distance: Figure,
    pub distance_vs_satisfaction: Figure,
    pub summary: Summary,
}

/// Filter the base table and rebuild all nine outputs from scratch.
pub fn update_dashboard(table: &ListingTable, filters: &FilterParams) -> DashboardView {
    let rows = filters.apply(table);
    build_view(table, &rows)
}

fn build_view(table: &ListingTable, rows: &[&Listing]) -> DashboardView {
    let summary = Summary::from_rows(rows);

    // The map center comes from the full table so it doesn't jump around.
    let center = table
        .center()
        .map(|(lat, lon)| LatLon { lat, lon })
        .unwrap_or(LatLon { lat: 0.0, lon: 0.0 });

    let coords: Vec<(f64, f64, f64)> = rows.iter().map(|r| (r.lat, r.lng, r.price)).collect();
    let scatter: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (r.city_distance, r.satisfaction))
        .collect();

    DashboardView {
        total_listings: summary.total,
        average_price: summary.price_label(),
        avg_satisfaction: summary.satisfaction_label(),
        avg_distance: summary.distance_label(),
        room_type_pie_chart: charts::room_type_pie(&stats::room_type_shares(rows)),
        revenue_bar_chart: charts::revenue_bar(&stats::revenue_by_room_type(rows)),
        price_heat_map: charts::price_heat_map(&coords, center),
        price_vs_city_distance: charts::price_vs_distance(&stats::mean_price_by_distance(rows)),
        distance_vs_satisfaction: charts::distance_vs_satisfaction(&scatter, stats::ols(&scatter)),
        summary,
    }
}
