use maud::{html, Markup};

pub mod controls;
pub mod error;

pub use controls::{range_control, select_control};
pub use error::error_page;

/// One of the four summary cards along the top of the page.
pub fn stat_card(title: &str, id: &str, value: &str) -> Markup {
    html! {
        div class="col-3" {
            div class="card shadow-sm" {
                div class="card-body" {
                    h5 class="text-center" style="font-weight: bold;" { (title) }
                    h2 id=(id) class="text-center" style="color: #AC3E31; font-weight: bold;" { (value) }
                }
            }
        }
    }
}

/// Empty container plotly.js draws `figure_json` into.
pub fn chart_panel(id: &str, figure_json: &str) -> Markup {
    html! {
        div id=(id) class="chart-panel" data-figure=(figure_json) {}
    }
}
