//! Verb table sources.
//!
//! A table has one verb per line: the infinitive followed by its surface
//! forms, comma separated, affirmative slots first and negated slots after.

use std::io::BufRead;

use crate::error::Result;

/// The bundled verb table.
pub const VERB_TABLE: &str = include_str!("../data/verb.txt");

/// Splits one raw table line into fields.
pub fn split_line(line: &str) -> Vec<String> {
    line.trim().split(',').map(str::to_string).collect()
}

pub fn rows_from_str(text: &str) -> Vec<Vec<String>> {
    text.lines().map(split_line).collect()
}

/// Reads every row from `reader` before returning.
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        rows.push(split_line(&line?));
    }
    Ok(rows)
}

/// Parses a JSON table: an array of rows, each an array of strings.
pub fn rows_from_json(json: &str) -> Result<Vec<Vec<String>>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_verb_table() -> Vec<Vec<String>> {
    rows_from_str(VERB_TABLE)
}
