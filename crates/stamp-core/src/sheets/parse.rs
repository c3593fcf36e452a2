//! Sheets `values` response parsing and row scan.

use serde::Deserialize;

/// Response envelope for `GET .../values/{range}`. Only `values` matters;
/// a missing field is an empty table.
#[derive(Debug, Default, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Decodes `body` and extracts the points value for `name`.
/// A body that does not decode as a value range counts as an empty table.
pub(crate) fn points_from_body(body: &[u8], name: &str) -> f64 {
    let range: ValueRange = match serde_json::from_slice(body) {
        Ok(range) => range,
        Err(err) => {
            tracing::debug!("response body did not parse as a value range: {err}");
            ValueRange::default()
        }
    };
    points_from_rows(&range.values, name)
}

/// First row whose first cell, trimmed, equals `name` wins; the query name
/// is compared as given. Missing rows, missing second cells, and values that
/// do not parse as a finite number all yield 0.
pub(crate) fn points_from_rows(rows: &[Vec<String>], name: &str) -> f64 {
    let row = rows
        .iter()
        .find(|row| row.first().map(|cell| cell.trim() == name).unwrap_or(false));

    let raw = match row {
        Some(row) => row.get(1).map(String::as_str).unwrap_or("0"),
        None => {
            tracing::debug!("no row for {name:?}, defaulting to 0");
            "0"
        }
    };

    match raw.trim().parse::<f64>() {
        Ok(points) if points.is_finite() => points,
        _ => {
            if row.is_some() {
                tracing::debug!("value {raw:?} for {name:?} is not a finite number, defaulting to 0");
            }
            0.0
        }
    }
}
