//! Generic record representation for event-dump files.
//!
//! A record is a mapping from unique string field names to values of
//! heterogeneous type (string, number, boolean, null, nested mapping,
//! or sequence). The inspectors never interpret the values; they only
//! enumerate the field names. Typical dumps carry fields such as
//! `multiplicity`, `zvtx`, `etas`, and `phis`, but nothing here depends
//! on that shape.
use serde_json::{Map, Value};

/// A single decoded record: field names mapped to heterogeneous values.
pub type Record = Map<String, Value>;

/// Render a record's field names as one output line, e.g. `[etas, phis]`.
///
/// Names appear in the map's iteration order, which for `serde_json`'s
/// default map is lexicographic by field name.
pub fn field_line(record: &Record) -> String {
    let mut line = String::from("[");
    for (i, name) in record.keys().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        line.push_str(name);
    }
    line.push(']');
    line
}
