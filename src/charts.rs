//! Plotly figure definitions. The server only builds the JSON; plotly.js
//! draws it in the browser.

use crate::stats::TrendLine;
use serde::Serialize;

pub const MARKER_COLOR: &str = "#488A99";
pub const TREND_COLOR: &str = "#AC3E31";
pub const MAP_STYLE: &str = "carto-positron";
pub const HEAT_RADIUS: u32 = 10;
const MAP_ZOOM: f64 = 8.0;

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    Bar {
        x: Vec<String>,
        y: Vec<f64>,
    },
    Densitymapbox {
        lat: Vec<f64>,
        lon: Vec<f64>,
        z: Vec<f64>,
        radius: u32,
    },
    Scatter {
        x: Vec<f64>,
        y: Vec<f64>,
        mode: Mode,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Paint>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<Paint>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hovertemplate: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Lines,
    Markers,
}

#[derive(Debug, Clone, Serialize)]
pub struct Paint {
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Mapbox>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mapbox {
    pub style: String,
    pub center: LatLon,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

fn titled(text: &str) -> Layout {
    Layout {
        title: Title { text: text.into() },
        ..Layout::default()
    }
}

fn axis(text: &str) -> Option<Axis> {
    Some(Axis {
        title: Title { text: text.into() },
    })
}

/// Pie of per-category shares.
pub fn room_type_pie(shares: &[(String, f64)]) -> Figure {
    Figure {
        data: vec![Trace::Pie {
            labels: shares.iter().map(|(rt, _)| rt.clone()).collect(),
            values: shares.iter().map(|(_, s)| *s).collect(),
        }],
        layout: titled("Room Type Distribution"),
    }
}

pub fn revenue_bar(revenue: &[(String, f64)]) -> Figure {
    Figure {
        data: vec![Trace::Bar {
            x: revenue.iter().map(|(rt, _)| rt.clone()).collect(),
            y: revenue.iter().map(|(_, sum)| *sum).collect(),
        }],
        layout: Layout {
            xaxis: axis("Room Type"),
            yaxis: axis("Total Revenue (EUR)"),
            ..titled("Revenue by Room Type")
        },
    }
}

/// Price-weighted density over `(lat, lng, price)` points around a fixed center.
pub fn price_heat_map(points: &[(f64, f64, f64)], center: LatLon) -> Figure {
    Figure {
        data: vec![Trace::Densitymapbox {
            lat: points.iter().map(|p| p.0).collect(),
            lon: points.iter().map(|p| p.1).collect(),
            z: points.iter().map(|p| p.2).collect(),
            radius: HEAT_RADIUS,
        }],
        layout: Layout {
            mapbox: Some(Mapbox {
                style: MAP_STYLE.into(),
                center,
                zoom: MAP_ZOOM,
            }),
            ..titled("Geographic Price Distribution")
        },
    }
}

pub fn price_vs_distance(series: &[(f64, f64)]) -> Figure {
    Figure {
        data: vec![Trace::Scatter {
            x: series.iter().map(|(d, _)| *d).collect(),
            y: series.iter().map(|(_, p)| *p).collect(),
            mode: Mode::Lines,
            name: None,
            marker: None,
            line: None,
            hovertemplate: None,
        }],
        layout: Layout {
            xaxis: axis("City Distance"),
            yaxis: axis("Price"),
            ..titled("Average Price vs City Distance")
        },
    }
}

/// Scatter of `(distance, satisfaction)` plus the fitted trend line, which
/// spans the observed distance range.
pub fn distance_vs_satisfaction(points: &[(f64, f64)], trend: Option<TrendLine>) -> Figure {
    let mut data = vec![Trace::Scatter {
        x: points.iter().map(|(d, _)| *d).collect(),
        y: points.iter().map(|(_, s)| *s).collect(),
        mode: Mode::Markers,
        name: None,
        marker: Some(Paint {
            color: MARKER_COLOR.into(),
        }),
        line: None,
        hovertemplate: None,
    }];

    if let Some(fit) = trend {
        let lo = points.iter().map(|(d, _)| *d).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(|(d, _)| *d).fold(f64::NEG_INFINITY, f64::max);
        data.push(Trace::Scatter {
            x: vec![lo, hi],
            y: vec![fit.at(lo), fit.at(hi)],
            mode: Mode::Lines,
            name: Some("OLS trendline".into()),
            marker: None,
            line: Some(Paint {
                color: TREND_COLOR.into(),
            }),
            hovertemplate: Some(format!(
                "<b>OLS trendline</b><br>Satisfaction = {:.4} * Distance + {:.4}<br>R<sup>2</sup>={:.6}<extra></extra>",
                fit.slope, fit.intercept, fit.r_squared
            )),
        });
    }

    Figure {
        data,
        layout: Layout {
            xaxis: axis("Distance (km)"),
            yaxis: axis("Satisfaction"),
            ..titled("Distance vs Guest Satisfaction")
        },
    }
}
