use std::fmt;
use std::str::FromStr;

/// Source column → display label. Only these six are renamed; the
/// coordinate columns keep their source names.
pub const COLUMN_LABELS: [(&str, &str); 6] = [
    ("realSum", "Price"),
    ("guest_satisfaction_overall", "Satisfaction"),
    ("cleanliness_rating", "Cleanliness"),
    ("room_type", "Room Type"),
    ("host_is_superhost", "Superhost status"),
    ("dist", "City Distance"),
];

/// Source columns the loader refuses to run without.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "realSum",
    "room_type",
    "host_is_superhost",
    "cleanliness_rating",
    "guest_satisfaction_overall",
    "dist",
    "lat",
    "lng",
];

/// Display label for a source column, or the column itself when it isn't renamed.
pub fn display_label(column: &str) -> &str {
    COLUMN_LABELS
        .iter()
        .find(|(source, _)| *source == column)
        .map(|(_, label)| *label)
        .unwrap_or(column)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub const ALL: [DayType; 2] = [DayType::Weekday, DayType::Weekend];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekday" => Ok(DayType::Weekday),
            "weekend" => Ok(DayType::Weekend),
            other => Err(format!("unknown day type '{other}'")),
        }
    }
}

/// One rental listing, with fields named after their display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub price: f64,
    pub satisfaction: f64,
    pub cleanliness: f64,
    pub room_type: String,
    pub superhost: bool,
    pub city_distance: f64,
    pub day_type: DayType,
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_type_parses_case_insensitively() {
        assert_eq!("Weekday".parse::<DayType>().unwrap(), DayType::Weekday);
        assert_eq!(" weekend ".parse::<DayType>().unwrap(), DayType::Weekend);
        assert!("holiday".parse::<DayType>().is_err());
    }

    #[test]
    fn display_label_maps_renamed_columns_only() {
        assert_eq!(display_label("realSum"), "Price");
        assert_eq!(display_label("dist"), "City Distance");
        assert_eq!(display_label("lat"), "lat");
    }
}
