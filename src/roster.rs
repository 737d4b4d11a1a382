//! Roster loading: parse the delimited assessment export, validate every
//! theme against the taxonomy, and derive per-record weights.

use std::fs;
use std::path::Path;

use crate::aggregate::Weighting;
use crate::error::{Error, Result};
use crate::taxonomy;

/// One (person, theme) assignment from the input file.
#[derive(Debug, Clone)]
pub struct Record {
    pub first: String,
    pub last: String,
    /// Angular slot in the taxonomy table; resolves back to the theme name.
    pub theme_slot: usize,
    /// 1-indexed strength rank, 1 = strongest.
    pub rank: u32,
    /// Derived at load time from the configured weighting policy.
    pub weight: f64,
}

impl Record {
    pub fn theme(&self) -> &'static str {
        taxonomy::theme_name(self.theme_slot)
    }
}

/// The full dataset, loaded once and immutable afterwards.
#[derive(Debug)]
pub struct Roster {
    records: Vec<Record>,
}

const COLUMNS: [&str; 4] = ["First Name", "Last Name", "Theme", "Rank"];

impl Roster {
    /// Loads and validates the roster. Any unknown theme, bad rank or
    /// malformed row aborts the load with an error naming the line.
    pub fn load(path: &Path, weighting: Weighting) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path, weighting)
    }

    pub(crate) fn parse(contents: &str, path: &Path, weighting: Weighting) -> Result<Self> {
        let mut lines = contents
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty());

        let (_, header) = lines.next().ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: COLUMNS[0],
        })?;
        let header_fields = split_fields(header);
        let mut col = [0usize; 4];
        for (i, name) in COLUMNS.iter().enumerate() {
            col[i] = header_fields
                .iter()
                .position(|f| f == name)
                .ok_or_else(|| Error::MissingColumn {
                    path: path.to_path_buf(),
                    column: name,
                })?;
        }
        let width = col.iter().max().copied().unwrap_or(0) + 1;

        let mut records = Vec::new();
        for (idx, line) in lines {
            let line_no = idx + 1;
            let fields = split_fields(line);
            if fields.len() < width {
                return Err(Error::MalformedRow {
                    path: path.to_path_buf(),
                    line: line_no,
                    expected: width,
                    found: fields.len(),
                });
            }
            let first = fields[col[0]].clone();
            let last = fields[col[1]].clone();
            let theme = &fields[col[2]];
            let rank_field = &fields[col[3]];

            let rank: u32 = match rank_field.parse() {
                Ok(r) if r >= 1 => r,
                _ => {
                    return Err(Error::InvalidRank {
                        path: path.to_path_buf(),
                        line: line_no,
                        value: rank_field.clone(),
                    })
                }
            };
            let theme_slot = taxonomy::slot_of(theme).ok_or_else(|| Error::UnknownTheme {
                path: path.to_path_buf(),
                line: line_no,
                theme: theme.clone(),
                first: first.clone(),
                last: last.clone(),
            })?;

            records.push(Record {
                first,
                last,
                theme_slot,
                rank,
                weight: weighting.weight(rank),
            });
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records whose last name matches any of the given names. Matching is
    /// exact and case-sensitive, like the source data.
    pub fn subset(&self, last_names: &[String]) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| last_names.iter().any(|n| *n == r.last))
            .collect()
    }

    pub fn all(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }
}

/// Splits one delimited line, honoring double-quoted fields ("" escapes a
/// literal quote). Fields are trimmed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
