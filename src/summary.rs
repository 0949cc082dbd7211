// src/summary.rs
// Console summary shown after a successful load.

use std::fmt;

use crate::config::consts::{BANNER_RULE_WIDTH, PODIUM_SIZE};
use crate::core::sanitize::short_event_name;
use crate::data::NormalizedResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    /// (driver, team) of the first row.
    pub winner: Option<(String, String)>,
    pub podium: Vec<String>,
}

impl Summary {
    /// `results` must already be sorted.
    pub fn from_results(results: &[NormalizedResult]) -> Self {
        Self {
            total: results.len(),
            winner: results.first().map(|r| (r.driver.clone(), r.team.clone())),
            podium: results.iter().take(PODIUM_SIZE).map(|r| r.driver.clone()).collect(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![s!("\n📊 Results Summary:"), format!("Total drivers: {}", self.total)];
        if let Some((driver, team)) = &self.winner {
            out.push(format!("Winner: {driver} ({team})"));
        }
        if !self.podium.is_empty() {
            out.push(format!("Podium: {}", self.podium.join(", ")));
        }
        out
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

pub fn banner(gp_name: &str) -> String {
    format!("🏎️ {} Results Loader\n{}", short_event_name(gp_name), "=".repeat(BANNER_RULE_WIDTH))
}

pub const FAILURE_BANNER: &str = "❌ Failed to load results. Please check the year and Grand Prix name.";
pub const SUCCESS_BANNER: &str = "\n✅ Results loading completed successfully!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_and_podium_from_sorted_rows() {
        let rows = vec![
            NormalizedResult::new(Some(1), "Oscar Piastri", "McLaren", "Finished"),
            NormalizedResult::new(Some(2), "Max Verstappen", "Red Bull Racing", "Finished"),
            NormalizedResult::new(Some(3), "Isack Hadjar", "Racing Bulls", "Finished"),
            NormalizedResult::new(Some(4), "George Russell", "Mercedes", "Finished"),
        ];
        let s = Summary::from_results(&rows);
        assert_eq!(
            s.lines(),
            vec![
                "\n📊 Results Summary:",
                "Total drivers: 4",
                "Winner: Oscar Piastri (McLaren)",
                "Podium: Oscar Piastri, Max Verstappen, Isack Hadjar",
            ]
        );
    }

    #[test]
    fn short_field_has_short_podium() {
        let rows = vec![NormalizedResult::new(Some(1), "Max Verstappen", "Red Bull", "Finished")];
        let s = Summary::from_results(&rows);
        assert_eq!(s.podium, vec!["Max Verstappen"]);
        assert!(s.to_string().ends_with("Podium: Max Verstappen"));
    }

    #[test]
    fn banner_uses_short_name() {
        let b = banner("Dutch Grand Prix");
        assert_eq!(b.lines().next(), Some("🏎️ Dutch GP Results Loader"));
        assert_eq!(b.lines().nth(1).map(str::len), Some(40));
    }
}
