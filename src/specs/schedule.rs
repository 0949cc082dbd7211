// src/specs/schedule.rs
//! Spec for the season schedule: `{base}/{year}.json`.
//!
//! Produces one `EventInfo` per round and resolves a user-supplied event
//! name (or round number) against it.

use reqwest::blocking::Client;

use crate::config::consts::RESULTS_PAGE_LIMIT;
use crate::core::net;
use crate::core::sanitize::normalize_ws;
use crate::error::FetchResult;

use super::wire::Envelope;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventInfo {
    pub round: u32,
    pub race_name: String,
    pub circuit_name: String,
    pub locality: String,
    pub country: String,
    pub date: Option<String>,
}

pub fn url(base: &str, year: i32) -> String {
    format!("{}/{}.json?limit={}", base.trim_end_matches('/'), year, RESULTS_PAGE_LIMIT)
}

pub fn fetch(client: &Client, base: &str, year: i32) -> FetchResult<Vec<EventInfo>> {
    let doc = net::http_get(client, &url(base, year))?;
    parse_doc(&doc)
}

/// Split out for unit tests. Rounds that are not numbers are skipped.
pub fn parse_doc(doc: &str) -> FetchResult<Vec<EventInfo>> {
    let env: Envelope = serde_json::from_str(doc)?;
    let events = env
        .mr_data
        .race_table
        .races
        .into_iter()
        .filter_map(|race| {
            let round = race.round.trim().parse().ok()?;
            Some(EventInfo {
                round,
                race_name: normalize_ws(&race.race_name),
                circuit_name: normalize_ws(&race.circuit.circuit_name),
                locality: normalize_ws(&race.circuit.location.locality),
                country: normalize_ws(&race.circuit.location.country),
                date: race.date,
            })
        })
        .collect();
    Ok(events)
}

/// Resolve `query` to an event, in order of preference:
/// 1. a round number,
/// 2. an exact race name (case-insensitive),
/// 3. the first event whose race name, circuit, locality or country
///    contains the query. "GP" in the query reads as "Grand Prix".
pub fn find_event<'a>(events: &'a [EventInfo], query: &str) -> Option<&'a EventInfo> {
    let query = normalize_ws(query);
    if query.is_empty() {
        return None;
    }
    if let Ok(round) = query.parse::<u32>() {
        return events.iter().find(|e| e.round == round);
    }

    let q = expand_gp(&query.to_lowercase());
    if let Some(e) = events.iter().find(|e| e.race_name.to_lowercase() == q) {
        return Some(e);
    }
    events.iter().find(|e| {
        [&e.race_name, &e.circuit_name, &e.locality, &e.country]
            .iter()
            .any(|field| !field.is_empty() && field.to_lowercase().contains(&q))
    })
}

fn expand_gp(lc: &str) -> String {
    lc.split(' ')
        .map(|w| if w == "gp" { "grand prix" } else { w })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"MRData":{"series":"f1","RaceTable":{"season":"2025","Races":[
        {"season":"2025","round":"14","raceName":"Hungarian Grand Prix",
         "Circuit":{"circuitId":"hungaroring","circuitName":"Hungaroring",
                    "Location":{"locality":"Budapest","country":"Hungary"}},"date":"2025-08-03"},
        {"season":"2025","round":"15","raceName":"Dutch Grand Prix",
         "Circuit":{"circuitId":"zandvoort","circuitName":"Circuit Park Zandvoort",
                    "Location":{"locality":"Zandvoort","country":"Netherlands"}},"date":"2025-08-31"},
        {"season":"2025","round":"x","raceName":"Broken Round"}
    ]}}}"#;

    #[test]
    fn parses_rounds_and_skips_bad_ones() {
        let events = parse_doc(DOC).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].round, 15);
        assert_eq!(events[1].locality, "Zandvoort");
        assert_eq!(events[1].date.as_deref(), Some("2025-08-31"));
    }

    #[test]
    fn resolves_by_name_round_and_place() {
        let events = parse_doc(DOC).unwrap();
        assert_eq!(find_event(&events, "Dutch Grand Prix").unwrap().round, 15);
        assert_eq!(find_event(&events, "dutch grand prix").unwrap().round, 15);
        assert_eq!(find_event(&events, "Dutch GP").unwrap().round, 15);
        assert_eq!(find_event(&events, "Zandvoort").unwrap().round, 15);
        assert_eq!(find_event(&events, "hungary").unwrap().round, 14);
        assert_eq!(find_event(&events, "14").unwrap().round, 14);
    }

    #[test]
    fn unknown_event_is_none() {
        let events = parse_doc(DOC).unwrap();
        assert!(find_event(&events, "Monaco Grand Prix").is_none());
        assert!(find_event(&events, "99").is_none());
        assert!(find_event(&events, "   ").is_none());
    }

    #[test]
    fn empty_season_parses_to_nothing() {
        let events = parse_doc(r#"{"MRData":{"RaceTable":{"season":"1900","Races":[]}}}"#).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(parse_doc("<html>nope</html>").is_err());
    }

    #[test]
    fn url_trims_trailing_slash() {
        assert_eq!(url("http://x/f1/", 2025), "http://x/f1/2025.json?limit=100");
    }
}
