// stats.rs
use crate::data::Listing;
use serde::Serialize;
use std::collections::BTreeMap;

/// Arithmetic mean; NaN for an empty input.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Raw numbers behind the four summary cards.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub total: usize,
    pub mean_price: f64,
    pub mean_satisfaction: f64,
    pub mean_distance: f64,
}

impl Summary {
    pub fn from_rows(rows: &[&Listing]) -> Self {
        Self {
            total: rows.len(),
            mean_price: mean(rows.iter().map(|r| r.price)),
            mean_satisfaction: mean(rows.iter().map(|r| r.satisfaction)),
            mean_distance: mean(rows.iter().map(|r| r.city_distance)),
        }
    }

    pub fn price_label(&self) -> String {
        format!("{:.2} EUR", self.mean_price)
    }

    pub fn satisfaction_label(&self) -> String {
        format!("{:.2}", self.mean_satisfaction)
    }

    pub fn distance_label(&self) -> String {
        format!("{:.2} km", self.mean_distance)
    }
}

/// Share of rows per room type, categories in first-appearance order.
pub fn room_type_shares(rows: &[&Listing]) -> Vec<(String, f64)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in rows {
        match counts.iter_mut().find(|(rt, _)| *rt == row.room_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((row.room_type.clone(), 1)),
        }
    }

    let total = rows.len() as f64;
    counts
        .into_iter()
        .map(|(rt, n)| (rt, n as f64 / total))
        .collect()
}

/// Summed price per room type, sorted by room type.
pub fn revenue_by_room_type(rows: &[&Listing]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for row in rows {
        *sums.entry(row.room_type.as_str()).or_insert(0.0) += row.price;
    }
    sums.into_iter().map(|(rt, sum)| (rt.to_string(), sum)).collect()
}

/// Mean price for each exact distance value, ascending by distance.
pub fn mean_price_by_distance(rows: &[&Listing]) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = rows.iter().map(|r| (r.city_distance, r.price)).collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut out: Vec<(f64, f64)> = Vec::new();
    let mut i = 0;
    while i < points.len() {
        let distance = points[i].0;
        let group_end = points[i..]
            .iter()
            .position(|(d, _)| d.total_cmp(&distance).is_ne())
            .map_or(points.len(), |offset| i + offset);
        out.push((distance, mean(points[i..group_end].iter().map(|(_, p)| *p))));
        i = group_end;
    }
    out
}

/// Ordinary least squares fit of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl TrendLine {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// None for fewer than two points or when every x is the same.
pub fn ols(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }

    let mean_x = mean(points.iter().map(|(x, _)| *x));
    let mean_y = mean(points.iter().map(|(_, y)| *y));

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    // R² is 0/0 for a flat y; report NaN rather than inventing a fit quality.
    let r_squared = if syy == 0.0 {
        f64::NAN
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    Some(TrendLine {
        slope,
        intercept,
        r_squared,
    })
}
