//! Conversion of a `Submission` into the CSV file handed to storage.
//!
//! - `layout::build_csv`: header plus one data row, columns fixed per status.
//! - `file_name`: `Linsenbestellung_<orderId>_<timestamp>.csv`.

pub mod layout;

use chrono::{DateTime, Utc};

/// Builds the storage file name for an order.
///
/// The timestamp is the UTC instant with `:` and `.` replaced by `-`
/// (`2025-03-10T08-15-30-123Z`). Characters of the order id outside
/// `[A-Za-z0-9_-]` become `_` so the name stays a single path component.
pub fn file_name(order_id: &str, at: DateTime<Utc>) -> String {
    let safe_id: String = order_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "Linsenbestellung_{}_{}.csv",
        safe_id,
        at.format("%Y-%m-%dT%H-%M-%S-%3fZ")
    )
}
