//! Print the field names of the first record in `events.json`.
//!
//! Reads the whole dataset into memory, inspects the first record only,
//! and ignores the rest. Takes no arguments; the input path is fixed.
use anyhow::{Context, Result};
use event_inspect::dataset::read_json_dataset;
use event_inspect::record::field_line;

const INPUT: &str = "events.json";

fn main() -> Result<()> {
    let dataset = read_json_dataset(INPUT)?;
    let first = dataset
        .first()
        .with_context(|| format!("{INPUT} contains no records"))?;
    println!("{}", field_line(first));
    Ok(())
}
