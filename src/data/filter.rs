use crate::data::model::{DayType, Listing};
use crate::data::table::ListingTable;
use crate::errors::ServerError;

/// Inclusive `[min, max]` bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Domain and step of one range control.
#[derive(Debug, Clone, Copy)]
pub struct RangeControl {
    pub domain: Range,
    pub step: f64,
}

pub const PRICE_CONTROL: RangeControl = RangeControl {
    domain: Range::new(0.0, 2500.0),
    step: 50.0,
};

pub const DISTANCE_CONTROL: RangeControl = RangeControl {
    domain: Range::new(0.0, 20.0),
    step: 1.0,
};

pub const SATISFACTION_CONTROL: RangeControl = RangeControl {
    domain: Range::new(0.0, 100.0),
    step: 1.0,
};

/// The five filter selections. `None` means "no filter" for the categorical
/// ones; the ranges default to their control domains.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub room_type: Option<String>,
    pub price: Range,
    pub distance: Range,
    pub satisfaction: Range,
    pub day_type: Option<DayType>,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            room_type: None,
            price: PRICE_CONTROL.domain,
            distance: DISTANCE_CONTROL.domain,
            satisfaction: SATISFACTION_CONTROL.domain,
            day_type: None,
        }
    }
}

impl FilterParams {
    /// Build from decoded query pairs. Unknown keys are ignored; a range whose
    /// min is above its max is rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = FilterParams::default();

        for (key, value) in pairs {
            let value = value.trim();
            match key {
                "room_type" => {
                    params.room_type = (!value.is_empty()).then(|| value.to_string());
                }
                "day_type" => {
                    params.day_type = if value.is_empty() {
                        None
                    } else {
                        Some(value.parse().map_err(ServerError::BadRequest)?)
                    };
                }
                "price_min" => params.price.min = parse_bound(key, value)?,
                "price_max" => params.price.max = parse_bound(key, value)?,
                "distance_min" => params.distance.min = parse_bound(key, value)?,
                "distance_max" => params.distance.max = parse_bound(key, value)?,
                "satisfaction_min" => params.satisfaction.min = parse_bound(key, value)?,
                "satisfaction_max" => params.satisfaction.max = parse_bound(key, value)?,
                _ => {}
            }
        }

        for (name, range) in [
            ("price", params.price),
            ("distance", params.distance),
            ("satisfaction", params.satisfaction),
        ] {
            if range.min > range.max {
                return Err(ServerError::BadRequest(format!(
                    "{name}_min ({}) is above {name}_max ({})",
                    range.min, range.max
                )));
            }
        }

        Ok(params)
    }

    /// Apply every active predicate, in control order, keeping base-table order.
    pub fn apply<'t>(&self, table: &'t ListingTable) -> Vec<&'t Listing> {
        let mut rows: Vec<&Listing> = table.rows().iter().collect();

        if let Some(room_type) = &self.room_type {
            rows.retain(|r| &r.room_type == room_type);
        }
        rows.retain(|r| self.price.contains(r.price));
        rows.retain(|r| self.distance.contains(r.city_distance));
        rows.retain(|r| self.satisfaction.contains(r.satisfaction));
        if let Some(day_type) = self.day_type {
            rows.retain(|r| r.day_type == day_type);
        }

        rows
    }

    /// True when `listing` passes every active predicate.
    #[cfg(test)]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.room_type
            .as_ref()
            .map_or(true, |rt| &listing.room_type == rt)
            && self.price.contains(listing.price)
            && self.distance.contains(listing.city_distance)
            && self.satisfaction.contains(listing.satisfaction)
            && self.day_type.map_or(true, |dt| listing.day_type == dt)
    }
}

fn parse_bound(key: &str, value: &str) -> Result<f64, ServerError> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("{key} must be a number, got '{value}'")))?;

    if !parsed.is_finite() {
        return Err(ServerError::BadRequest(format!("{key} must be finite")));
    }

    Ok(parsed)
}
