use crate::data::model::Listing;

/// The combined, read-only base table every request filters from.
#[derive(Debug, Clone, Default)]
pub struct ListingTable {
    rows: Vec<Listing>,
}

impl ListingTable {
    pub fn new(rows: Vec<Listing>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct room types, in the order they first appear.
    pub fn room_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.room_type.as_str()) {
                seen.push(&row.room_type);
            }
        }
        seen
    }

    /// Mean (lat, lng) over every row. This is the map center and never
    /// depends on the active filters.
    pub fn center(&self) -> Option<(f64, f64)> {
        if self.rows.is_empty() {
            return None;
        }
        let n = self.rows.len() as f64;
        let lat = self.rows.iter().map(|r| r.lat).sum::<f64>() / n;
        let lng = self.rows.iter().map(|r| r.lng).sum::<f64>() / n;
        Some((lat, lng))
    }
}
