//! Print the field names of every record in `events.bin`.
//!
//! Records are decoded lazily, one msgpack frame at a time, so the file
//! never has to fit in memory. One line per record, in source order,
//! until the file is exhausted. Takes no arguments; the input path is
//! fixed.
use anyhow::Result;
use event_inspect::dataset::open_msgpack_records;
use event_inspect::record::field_line;

const INPUT: &str = "events.bin";

fn main() -> Result<()> {
    for record in open_msgpack_records(INPUT)? {
        println!("{}", field_line(&record?));
    }
    Ok(())
}
