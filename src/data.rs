// src/data.rs
//
// Table shapes that flow through the pipeline.
//
// - RawTable: the provider's result set, column-named, every cell optional.
//             Lives only inside the fetch stage.
// - RawResult: one row projected onto the four columns the pipeline needs.
// - NormalizedResult: the canonical record held for the rest of the run.

use serde::{Deserialize, Serialize};

pub const COL_DRIVER_NUMBER: &str = "DriverNumber";
pub const COL_ABBREVIATION: &str = "Abbreviation";
pub const COL_FULL_NAME: &str = "FullName";
pub const COL_TEAM_NAME: &str = "TeamName";
pub const COL_GRID_POSITION: &str = "GridPosition";
pub const COL_POSITION: &str = "Position";
pub const COL_CLASSIFIED_POSITION: &str = "ClassifiedPosition";
pub const COL_POINTS: &str = "Points";
pub const COL_LAPS: &str = "Laps";
pub const COL_STATUS: &str = "Status";
pub const COL_TIME: &str = "Time";

/// Columns the fetcher refuses to go without.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_FULL_NAME, COL_TEAM_NAME, COL_POSITION, COL_STATUS];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    /// Rows shorter than the header are padded with empty cells.
    pub fn push_row(&mut self, mut row: Vec<Option<String>>) {
        row.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Names from `required` that this table does not carry, in order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|c| self.column_index(c).is_none())
            .map(|c| s!(*c))
            .collect()
    }

    /// Project every row onto the required columns.
    /// `None` when any of them is absent.
    pub fn records(&self) -> Option<Vec<RawResult>> {
        let name = self.column_index(COL_FULL_NAME)?;
        let team = self.column_index(COL_TEAM_NAME)?;
        let pos = self.column_index(COL_POSITION)?;
        let status = self.column_index(COL_STATUS)?;

        let cell = |row: &[Option<String>], i: usize| row.get(i).cloned().flatten();
        Some(
            self.rows
                .iter()
                .map(|r| RawResult {
                    full_name: cell(r, name),
                    team_name: cell(r, team),
                    position: cell(r, pos),
                    status: cell(r, status),
                })
                .collect(),
        )
    }
}

impl FromIterator<RawResult> for RawTable {
    /// Four-column table in the required-column order.
    fn from_iter<I: IntoIterator<Item = RawResult>>(iter: I) -> Self {
        let mut table = RawTable::new(REQUIRED_COLUMNS.iter().map(|c| s!(*c)).collect());
        for r in iter {
            table.push_row(vec![r.full_name, r.team_name, r.position, r.status]);
        }
        table
    }
}

/// One participant as the provider reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawResult {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    /// Finishing position as text; may be non-numeric ("DNF", "R").
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Which race an export describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventMeta {
    pub name: String,
    pub year: i32,
}

impl EventMeta {
    pub fn new(name: &str, year: i32) -> Self {
        Self { name: s!(name), year }
    }
}

/// Canonical result record. Field order is the export key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    /// Positive finishing position, absent when the provider gave none.
    pub position: Option<u32>,
    pub driver: String,
    pub team: String,
    pub status: String,
}

impl NormalizedResult {
    pub fn new(position: Option<u32>, driver: &str, team: &str, status: &str) -> Self {
        Self { position, driver: s!(driver), team: s!(team), status: s!(status) }
    }

    pub fn is_winner(&self) -> bool {
        self.position == Some(1)
    }

    pub fn is_podium(&self) -> bool {
        matches!(self.position, Some(1..=3))
    }
}
