//! CSV roster import. One player per record under a `name` header; other columns are ignored.

use crate::models::{TournamentError, TournamentResult};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RosterRecord {
    name: String,
}

/// Read player names from CSV. Names are trimmed; a blank name is an error.
pub fn read_roster<R: Read>(reader: R) -> TournamentResult<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut names = Vec::new();
    for record in csv_reader.deserialize::<RosterRecord>() {
        let record = record?;
        if record.name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        names.push(record.name);
    }
    Ok(names)
}
