//! Roster parsing: comma-separated Transformer records, one per line.
//!
//! Columns: name, faction code, strength, intelligence, speed, endurance,
//! rank, courage, firepower, skill. Commas are literal (no quoting), fields
//! are trimmed and columns past the tenth are ignored. Every line is a record,
//! so a blank line is a malformed one.

use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use crate::data::transformer::{faction_code_to_allegiance, Transformer};

pub const RECORD_FIELD_COUNT: usize = 10;

const STAT_FIELDS: [&str; 8] = [
    "strength",
    "intelligence",
    "speed",
    "endurance",
    "rank",
    "courage",
    "firepower",
    "skill",
];

/// A single line that could not be turned into a Transformer.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected {} fields, found {found}", RECORD_FIELD_COUNT)]
    MissingFields { found: usize },
    #[error("{field} is not an integer: '{value}'")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: RecordError,
    },
}

/// Parse one record line.
pub fn parse_record(line: &str) -> Result<Transformer, RecordError> {
    let mut record: StringRecord = line.split(',').collect();
    record.trim();
    transformer_from_record(&record)
}

/// Parse every line of `input`, stopping at the first bad record.
pub fn parse_roster(input: &str) -> Result<Vec<Transformer>, RosterError> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse_record(line).map_err(|source| RosterError::Record {
                line: index as u64 + 1,
                source,
            })
        })
        .collect()
}

/// Read and parse a roster file.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Transformer>, RosterError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = parse_roster(&input)?;
    tracing::debug!(path = %path.display(), transformers = roster.len(), "roster loaded");
    Ok(roster)
}

fn transformer_from_record(record: &StringRecord) -> Result<Transformer, RecordError> {
    if record.len() < RECORD_FIELD_COUNT {
        return Err(RecordError::MissingFields {
            found: record.len(),
        });
    }

    let mut stats = [0i32; STAT_FIELDS.len()];
    for (index, (slot, field)) in stats.iter_mut().zip(STAT_FIELDS).enumerate() {
        let value = &record[index + 2];
        *slot = value
            .parse::<i32>()
            .map_err(|source| RecordError::InvalidNumber {
                field,
                value: value.to_string(),
                source,
            })?;
    }
    let [strength, intelligence, speed, endurance, rank, courage, firepower, skill] = stats;

    Ok(Transformer {
        name: record[0].to_string(),
        allegiance: faction_code_to_allegiance(&record[1]),
        strength,
        intelligence,
        speed,
        endurance,
        rank,
        courage,
        firepower,
        skill,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::transformer::Allegiance;

    #[test]
    fn parses_and_trims_every_field() {
        let bot = parse_record("  Soundwave , D, 8 ,9,2,6,7,5,6,10").expect("valid record");
        assert_eq!(bot.name, "Soundwave");
        assert_eq!(bot.allegiance, Allegiance::Decepticon);
        assert_eq!(
            (bot.strength, bot.intelligence, bot.speed, bot.endurance),
            (8, 9, 2, 6)
        );
        assert_eq!((bot.rank, bot.courage, bot.firepower, bot.skill), (7, 5, 6, 10));
    }

    #[test]
    fn faction_code_is_trimmed_but_case_sensitive() {
        assert_eq!(
            parse_record("Bluestreak, A ,6,6,7,9,5,2,9,7").unwrap().allegiance,
            Allegiance::Autobot
        );
        assert_eq!(
            parse_record("Bluestreak,a,6,6,7,9,5,2,9,7").unwrap().allegiance,
            Allegiance::Decepticon
        );
    }

    #[test]
    fn negative_and_signed_values_are_accepted() {
        let bot = parse_record("Odd,A,-3,+4,0,0,-1,0,0,0").expect("signed ints parse");
        assert_eq!(bot.strength, -3);
        assert_eq!(bot.intelligence, 4);
        assert_eq!(bot.rank, -1);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let bot = parse_record("Hound,A,4,4,4,4,4,4,4,4,spare,,").expect("extra columns");
        assert_eq!(bot.skill, 4);
    }

    #[test]
    fn too_few_fields_is_rejected() {
        let err = parse_record("Hound,A,4,4,4").unwrap_err();
        assert!(matches!(err, RecordError::MissingFields { found: 5 }));
    }

    #[test]
    fn non_numeric_stat_names_the_field() {
        let err = parse_record("Hound,A,4,4,4,4,high,4,4,4").unwrap_err();
        match err {
            RecordError::InvalidNumber { field, value, .. } => {
                assert_eq!(field, "rank");
                assert_eq!(value, "high");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn roster_keeps_file_order() {
        let input = "Bumblebee,A,2,8,4,7,7,10,1,7\nRavage,D,5,4,8,6,4,10,1,6\r\nJazz,A,6,8,9,5,7,9,4,8\n";
        let roster = parse_roster(input).expect("valid roster");
        let names: Vec<_> = roster.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Bumblebee", "Ravage", "Jazz"]);
    }

    fn assert_blank_record_at(input: &str, expected_line: u64) {
        match parse_roster(input).unwrap_err() {
            RosterError::Record { line, source } => {
                assert_eq!(line, expected_line);
                assert!(matches!(source, RecordError::MissingFields { found: 1 }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn interior_blank_line_aborts_the_roster() {
        assert_blank_record_at("Jazz,A,5,5,5,5,5,5,5,9\n\nRavage,D,5,5,5,5,5,5,5,5\n", 2);
    }

    #[test]
    fn trailing_blank_line_aborts_the_roster() {
        assert_blank_record_at("Jazz,A,5,5,5,5,5,5,5,9\nRavage,D,5,5,5,5,5,5,5,5\n\n", 3);
    }

    #[test]
    fn whitespace_only_line_aborts_the_roster() {
        assert_blank_record_at("Jazz,A,5,5,5,5,5,5,5,9\n   \t\nRavage,D,5,5,5,5,5,5,5,5", 2);
    }

    #[test]
    fn single_trailing_newline_is_accepted() {
        let roster = parse_roster("Jazz,A,5,5,5,5,5,5,5,9\n").expect("valid roster");
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn quotes_are_not_special() {
        let roster = parse_roster("\"Ironhide\",A,7,5,5,8,6,9,8,7\n").expect("valid roster");
        assert_eq!(roster[0].name, "\"Ironhide\"");
    }

    #[test]
    fn roster_error_reports_line_of_bad_record() {
        let input = "Bumblebee,A,2,8,4,7,7,10,1,7\nRavage,D,5,4,8\n";
        match parse_roster(input).unwrap_err() {
            RosterError::Record { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(source, RecordError::MissingFields { found: 4 }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_is_an_empty_roster() {
        assert!(parse_roster("").expect("empty is fine").is_empty());
    }
}
