// src/specs/wire.rs
//! Serde shapes of the provider's `MRData` envelope.
//! Every field is optional or defaulted; the provider omits keys freely.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

#[derive(Debug, Deserialize)]
pub struct MrData {
    #[serde(rename = "RaceTable", default)]
    pub race_table: RaceTable,
}

#[derive(Debug, Default, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub round: String,
    #[serde(default)]
    pub race_name: String,
    #[serde(rename = "Circuit", default)]
    pub circuit: Circuit,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "Results", default)]
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    #[serde(default)]
    pub circuit_name: String,
    #[serde(rename = "Location", default)]
    pub location: Location,
}

#[derive(Debug, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub position_text: Option<String>,
    #[serde(default)]
    pub points: Option<String>,
    #[serde(rename = "Driver", default)]
    pub driver: Option<Driver>,
    #[serde(rename = "Constructor", default)]
    pub constructor: Option<Constructor>,
    #[serde(default)]
    pub grid: Option<String>,
    #[serde(default)]
    pub laps: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "Time", default)]
    pub time: Option<RaceTime>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
}

impl Driver {
    /// "Given Family", or whichever half exists.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.given_name.as_deref(), self.family_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() { None } else { Some(parts.join(" ")) }
    }
}

#[derive(Debug, Deserialize)]
pub struct Constructor {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RaceTime {
    #[serde(default)]
    pub time: Option<String>,
}
