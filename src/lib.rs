//! Event-dump inspectors library.
//!
//! This crate provides the decode logic shared by the two inspector
//! binaries, `inspect-json` and `inspect-msgpack`:
//!
//! - `record`: the generic record representation (named fields with
//!   heterogeneous values) and field-name rendering
//! - `dataset`: readers for the two event-dump file formats, eager for
//!   the JSON array and lazy per-frame for the msgpack stream
//!
//! The binaries in `src/bin/` use these modules to open a dump file,
//! decode its records, and print one line of field names per inspected
//! record.
pub mod record;
pub mod dataset;
