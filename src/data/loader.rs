// data/loader.rs
use crate::data::model::{DayType, Listing, REQUIRED_COLUMNS};
use crate::data::table::ListingTable;
use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;

const FETCH_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {origin}: {message}")]
    Fetch { origin: String, message: String },

    #[error("{origin} answered with HTTP {status}")]
    Status { origin: String, status: u16 },

    #[error("failed to read {origin}: {error}")]
    Io {
        origin: String,
        #[source]
        error: std::io::Error,
    },

    #[error("malformed CSV in {origin}: {error}")]
    Csv {
        origin: String,
        #[source]
        error: csv::Error,
    },

    #[error("{origin} is missing expected column '{column}'")]
    MissingColumn { origin: String, column: String },
}

/// Where one of the two source tables lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// `http(s)://…` is fetched, anything else is read from disk.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DataSource::Url(raw.to_string())
        } else {
            DataSource::Path(PathBuf::from(raw))
        }
    }

    fn read_to_string(&self) -> Result<String, LoadError> {
        match self {
            DataSource::Url(url) => fetch_text(url),
            DataSource::Path(path) => {
                std::fs::read_to_string(path).map_err(|error| LoadError::Io {
                    origin: self.to_string(),
                    error,
                })
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn fetch_text(url: &str) -> Result<String, LoadError> {
    let fetch_err = |e: reqwest::Error| LoadError::Fetch {
        origin: url.to_string(),
        message: e.to_string(),
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(fetch_err)?;

    let resp = client.get(url).send().map_err(fetch_err)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            origin: url.to_string(),
            status: status.as_u16(),
        });
    }

    resp.text().map_err(fetch_err)
}

// Raw CSV row; every other column in the file is ignored.
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(rename = "realSum")]
    real_sum: f64,
    room_type: String,
    #[serde(deserialize_with = "deserialize_flag")]
    host_is_superhost: bool,
    cleanliness_rating: f64,
    guest_satisfaction_overall: f64,
    dist: f64,
    lat: f64,
    lng: f64,
}

impl RawListing {
    fn into_listing(self, day_type: DayType) -> Listing {
        Listing {
            price: self.real_sum,
            satisfaction: self.guest_satisfaction_overall,
            cleanliness: self.cleanliness_rating,
            room_type: self.room_type,
            superhost: self.host_is_superhost,
            city_distance: self.dist,
            day_type,
            lat: self.lat,
            lng: self.lng,
        }
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "True" | "true" | "TRUE" | "1" => Ok(true),
        "False" | "false" | "FALSE" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean flag, got '{other}'"
        ))),
    }
}

/// Parse one source table and tag every row with `day_type`.
pub fn parse_listings<R: Read>(
    reader: R,
    day_type: DayType,
    origin: &str,
) -> Result<Vec<Listing>, LoadError> {
    let csv_err = |error: csv::Error| LoadError::Csv {
        origin: origin.to_string(),
        error,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_err)?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                origin: origin.to_string(),
                column: column.to_string(),
            });
        }
    }

    reader
        .deserialize::<RawListing>()
        .map(|row| row.map(|raw| raw.into_listing(day_type)).map_err(csv_err))
        .collect()
}

fn load_source(source: &DataSource, day_type: DayType) -> Result<Vec<Listing>, LoadError> {
    let start = Instant::now();
    let text = source.read_to_string()?;
    let rows = parse_listings(text.as_bytes(), day_type, &source.to_string())?;

    log::info!(
        "Loaded {} {} listings from {source} in {:?}",
        rows.len(),
        day_type,
        start.elapsed()
    );

    Ok(rows)
}

/// Build the base table: weekday rows first, then weekend rows, nothing dropped.
pub fn load_dataset(
    weekdays: &DataSource,
    weekends: &DataSource,
) -> Result<ListingTable, LoadError> {
    let mut rows = load_source(weekdays, DayType::Weekday)?;
    rows.extend(load_source(weekends, DayType::Weekend)?);

    Ok(ListingTable::new(rows))
}
