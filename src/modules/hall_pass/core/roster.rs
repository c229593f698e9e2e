// Identifier to display-name directory.
//
// Responsibilities
// - Resolve names for sessions, falling back to `UNKNOWN_NAME`.
// - Import and export the `id,name` CSV table. Imports replace the mapping wholesale
//   and never apply partially.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

pub const UNKNOWN_NAME: &str = "Unknown";

const ID_COLUMN: &str = "id";
const NAME_COLUMN: &str = "name";

#[derive(Debug, Error)]
pub enum RosterImportError {
    #[error("roster header is missing required column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<&'static str> },

    #[error("roster csv is malformed: {0}")]
    Malformed(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, RosterRecord>", into = "HashMap<String, RosterRecord>")]
pub struct Roster {
    entries: HashMap<String, String>,
}

impl From<HashMap<String, RosterRecord>> for Roster {
    fn from(records: HashMap<String, RosterRecord>) -> Self {
        Self {
            entries: records.into_iter().map(|(id, r)| (id, r.name)).collect(),
        }
    }
}

impl From<Roster> for HashMap<String, RosterRecord> {
    fn from(roster: Roster) -> Self {
        roster
            .entries
            .into_iter()
            .map(|(id, name)| (id, RosterRecord { name }))
            .collect()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn resolve_name(&self, id: &str) -> &str {
        self.get(id).unwrap_or(UNKNOWN_NAME)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces the mapping with the rows of `text` and returns the new entry count.
    pub fn import_csv(&mut self, text: &str) -> Result<usize, RosterImportError> {
        self.entries = parse_roster_csv(text)?;
        Ok(self.entries.len())
    }

    pub fn export_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record([ID_COLUMN, NAME_COLUMN])?;
        let sorted: BTreeMap<&String, &String> = self.entries.iter().collect();
        for (id, name) in sorted {
            writer.write_record([id, name])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn parse_roster_csv(text: &str) -> Result<HashMap<String, String>, RosterImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |wanted: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(wanted));
    let (id_idx, name_idx) = match (column(ID_COLUMN), column(NAME_COLUMN)) {
        (Some(id_idx), Some(name_idx)) => (id_idx, name_idx),
        (id_idx, name_idx) => {
            let mut missing = Vec::new();
            if id_idx.is_none() {
                missing.push(ID_COLUMN);
            }
            if name_idx.is_none() {
                missing.push(NAME_COLUMN);
            }
            return Err(RosterImportError::MissingColumns { missing });
        }
    };

    let mut entries = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let Some(id) = record.get(id_idx).map(str::trim).filter(|id| !id.is_empty()) else {
            continue;
        };
        let name = record.get(name_idx).unwrap_or_default();
        entries.insert(id.to_string(), name.to_string());
    }
    Ok(entries)
}
