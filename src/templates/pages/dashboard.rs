use crate::charts::Figure;
use crate::dashboard::DashboardView;
use crate::data::filter::{FilterParams, DISTANCE_CONTROL, PRICE_CONTROL, SATISFACTION_CONTROL};
use crate::data::DayType;
use crate::errors::ServerError;
use crate::templates::components::{range_control, select_control};
use crate::templates::{chart_panel, desktop_layout, stat_card};
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "Airbnb London - Distance and Pricing Insights Dashboard";

const PRICE_MARKS: [(f64, &str); 6] = [
    (0.0, "0"),
    (500.0, "500"),
    (1000.0, "1000"),
    (1500.0, "1500"),
    (2000.0, "2000"),
    (2500.0, "High"),
];

const DISTANCE_MARKS: [(f64, &str); 5] = [
    (0.0, "Near"),
    (5.0, "5 km"),
    (10.0, "10 km"),
    (15.0, "15 km"),
    (20.0, "20"),
];

const SATISFACTION_MARKS: [(f64, &str); 3] = [(0.0, "Low"), (75.0, "Medium"), (100.0, "High")];

pub struct DashboardVm<'a> {
    pub room_types: Vec<&'a str>,
    pub filters: &'a FilterParams,
    pub view: &'a DashboardView,
}

pub fn dashboard_page(vm: &DashboardVm) -> Result<Markup, ServerError> {
    let charts = chart_panels(vm.view)?;

    Ok(desktop_layout(
        PAGE_TITLE,
        html! {
            main class="container-fluid py-3" {
                div class="mb-4" {
                    h1 class="text-center banner" { (PAGE_TITLE) }
                }

                (overview_cards(vm.view, false))

                (filter_form(vm))

                (charts)
            }
        },
    ))
}

fn filter_form(vm: &DashboardVm) -> Markup {
    let filters = vm.filters;
    let day_types: Vec<&str> = DayType::ALL.iter().map(|d| d.as_str()).collect();

    html! {
        form
            id="filters"
            class="row g-3 mb-4 filters"
            action="/export"
            method="get"
            hx-get="/dashboard/panels"
            hx-trigger="change"
            hx-target="#dashboard-panels"
            hx-swap="outerHTML"
        {
            (select_control(
                "Room Type",
                "room_type",
                "Select Room Type",
                &vm.room_types,
                filters.room_type.as_deref(),
            ))
            (range_control("Price Range", "price", PRICE_CONTROL, filters.price, &PRICE_MARKS))
            (range_control("Distance Range", "distance", DISTANCE_CONTROL, filters.distance, &DISTANCE_MARKS))
            (range_control(
                "Satisfaction Tiers",
                "satisfaction",
                SATISFACTION_CONTROL,
                filters.satisfaction,
                &SATISFACTION_MARKS,
            ))
            (select_control(
                "Day Type",
                "day_type",
                "Select Day Type",
                &day_types,
                filters.day_type.map(|d| d.as_str()),
            ))
            div class="col-auto align-self-end" {
                button type="submit" class="btn btn-light" { "Export XLSX" }
            }
        }
    }
}

fn figure_json(figure: &Figure) -> Result<String, ServerError> {
    figure
        .to_json()
        .map_err(|e| ServerError::JsonError(e.to_string()))
}

/// The four summary cards. In a partial response they ride along out of band,
/// since they sit above the filter form.
fn overview_cards(view: &DashboardView, swap_oob: bool) -> Markup {
    html! {
        div id="overview" class="row mb-4 overview" hx-swap-oob=[swap_oob.then_some("true")] {
            (stat_card("Total Listings", "total_listings", &view.total_listings.to_string()))
            (stat_card("Average Price", "average_price", &view.average_price))
            (stat_card("Average Satisfaction", "avg_satisfaction", &view.avg_satisfaction))
            (stat_card("Avg Distance to City Center", "avg_distance", &view.avg_distance))
        }
    }
}

/// The nine outputs; this is what htmx swaps when a control changes.
pub fn dashboard_panels(view: &DashboardView) -> Result<Markup, ServerError> {
    let charts = chart_panels(view)?;

    Ok(html! {
        (charts)
        (overview_cards(view, true))
    })
}

fn chart_panels(view: &DashboardView) -> Result<Markup, ServerError> {
    let pie = figure_json(&view.room_type_pie_chart)?;
    let bar = figure_json(&view.revenue_bar_chart)?;
    let heat = figure_json(&view.price_heat_map)?;
    let trend = figure_json(&view.price_vs_city_distance)?;
    let scatter = figure_json(&view.distance_vs_satisfaction)?;

    Ok(html! {
        div id="dashboard-panels" {
            div class="row" {
                div class="col-6" { (chart_panel("room_type_pie_chart", &pie)) }
                div class="col-6" { (chart_panel("revenue_bar_chart", &bar)) }
            }
            div class="row" {
                div class="col-8" { (chart_panel("price_heat_map", &heat)) }
                div class="col-4" { (chart_panel("price_vs_city_distance", &trend)) }
            }
            div class="row" {
                div class="col-12" { (chart_panel("distance_vs_satisfaction", &scatter)) }
            }
        }
    })
}
