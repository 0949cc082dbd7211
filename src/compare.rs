// src/compare.rs
//! Grade prediction files against the official classification.
//!
//! A prediction file is either a bare JSON array of entries or an
//! export-document shaped object whose `results` hold the entries:
//!
//! ```json
//! [ { "driver": "Oscar Piastri", "team": "McLaren", "position": 1, "prediction": 1.42 } ]
//! ```
//!
//! Entries without `position` take their 1-based index. Driver names go
//! through the alias table before matching.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::AliasTable;
use crate::data::NormalizedResult;
use crate::error::{ConfigError, ConfigResult};
use crate::names::normalize_with;

#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub driver: String,
    pub position: u32,
    /// Raw model output, when the file carried one.
    pub score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionSet {
    pub name: String,
    pub predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
struct PredictionEntry {
    driver: Option<String>,
    #[serde(default)]
    position: Option<u32>,
    #[serde(default, alias = "score")]
    prediction: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PredictionFile {
    List(Vec<PredictionEntry>),
    Document { results: Vec<PredictionEntry> },
}

impl PredictionSet {
    pub fn from_json(name: &str, text: &str, aliases: &AliasTable) -> serde_json::Result<Self> {
        let entries = match serde_json::from_str::<PredictionFile>(text)? {
            PredictionFile::List(v) => v,
            PredictionFile::Document { results } => results,
        };
        let predictions = entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, e)| {
                let driver = normalize_with(aliases, e.driver.as_deref())?;
                let position = e.position.unwrap_or(i as u32 + 1);
                Some(Prediction { driver, position, score: e.prediction })
            })
            .collect();
        Ok(Self { name: s!(name), predictions })
    }

    /// Set name is the file stem.
    pub fn load(path: &Path, aliases: &AliasTable) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        Self::from_json(&name, &text, aliases)
            .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
    }
}

/// Load every readable set; bad files are logged and skipped.
pub fn load_prediction_sets(paths: &[impl AsRef<Path>], aliases: &AliasTable) -> Vec<PredictionSet> {
    paths
        .iter()
        .filter_map(|p| match PredictionSet::load(p.as_ref(), aliases) {
            Ok(set) => {
                info!("Loaded {} predictions from {}", set.predictions.len(), p.as_ref().display());
                Some(set)
            }
            Err(e) => {
                warn!("Skipping prediction file: {e}");
                None
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccuracyBand {
    Perfect,
    Good,
    Fair,
    Poor,
}

impl AccuracyBand {
    pub fn from_error(error: u32) -> Self {
        match error {
            0 => Self::Perfect,
            1..=2 => Self::Good,
            3..=5 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

impl fmt::Display for AccuracyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Perfect => "Perfect",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub driver: String,
    pub team: String,
    pub status: String,
    pub actual: u32,
    pub predicted: Option<u32>,
    pub score: Option<f64>,
    pub error: Option<u32>,
    pub band: Option<AccuracyBand>,
}

impl ComparisonRow {
    /// One fixed-width table line; `-` where the model said nothing.
    pub fn line(&self) -> String {
        let dash = || s!("-");
        format!(
            "{:<4} {:<24} {:<18} {:<10} {:>4} {:>4}  {:<8} {}",
            self.actual,
            self.driver,
            self.team,
            self.status,
            self.predicted.map(|p| p.to_string()).unwrap_or_else(dash),
            self.error.map(|e| e.to_string()).unwrap_or_else(dash),
            self.band.map(|b| b.to_string()).unwrap_or_else(dash),
            self.score.map(|v| format!("{v:.2}")).unwrap_or_else(dash),
        )
        .trim_end()
        .to_string()
    }
}

pub const TABLE_HEADER: &str = "Pos  Driver                   Team               Status     Pred  Err  Accuracy Score";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelMetrics {
    pub perfect: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
    pub graded: usize,
    pub mean_abs_error: f64,
    pub accuracy_pct: f64,
    pub podium_hits: usize,
    pub top5_hits: usize,
    pub top10_hits: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    pub model: String,
    pub rows: Vec<ComparisonRow>,
    pub metrics: ModelMetrics,
}

/// Grade `set` against the classified rows of `results`.
pub fn compare(results: &[NormalizedResult], set: &PredictionSet) -> ComparisonReport {
    let predicted: HashMap<&str, &Prediction> =
        set.predictions.iter().map(|p| (p.driver.as_str(), p)).collect();

    let rows: Vec<ComparisonRow> = results
        .iter()
        .filter_map(|r| {
            let actual = r.position?;
            let pred = predicted.get(r.driver.as_str()).copied();
            let error = pred.map(|p| p.position.abs_diff(actual));
            Some(ComparisonRow {
                driver: r.driver.clone(),
                team: r.team.clone(),
                status: r.status.clone(),
                actual,
                predicted: pred.map(|p| p.position),
                score: pred.and_then(|p| p.score),
                error,
                band: error.map(AccuracyBand::from_error),
            })
        })
        .collect();

    let mut m = ModelMetrics::default();
    let mut total_error = 0u64;
    for (err, band) in rows.iter().filter_map(|r| r.error.zip(r.band)) {
        total_error += u64::from(err);
        m.graded += 1;
        match band {
            AccuracyBand::Perfect => m.perfect += 1,
            AccuracyBand::Good => m.good += 1,
            AccuracyBand::Fair => m.fair += 1,
            AccuracyBand::Poor => m.poor += 1,
        }
    }
    if m.graded > 0 {
        m.mean_abs_error = total_error as f64 / m.graded as f64;
        m.accuracy_pct = (m.perfect + m.good) as f64 / m.graded as f64 * 100.0;
    }
    m.podium_hits = top_n_hits(results, set, 3);
    m.top5_hits = top_n_hits(results, set, 5);
    m.top10_hits = top_n_hits(results, set, 10);

    ComparisonReport { model: set.name.clone(), rows, metrics: m }
}

/// Drivers predicted inside the top `n` who also finished inside it.
fn top_n_hits(results: &[NormalizedResult], set: &PredictionSet, n: u32) -> usize {
    let actual: HashSet<&str> = results
        .iter()
        .filter(|r| r.position.is_some_and(|p| p <= n))
        .map(|r| r.driver.as_str())
        .collect();
    set.predictions
        .iter()
        .filter(|p| p.position <= n && actual.contains(p.driver.as_str()))
        .count()
}

impl ComparisonReport {
    pub fn lines(&self) -> Vec<String> {
        let m = &self.metrics;
        let mut out = vec![format!("\n🔮 Prediction accuracy: {}", self.model), s!(TABLE_HEADER)];
        out.extend(self.rows.iter().map(ComparisonRow::line));
        out.extend([
            format!("Accuracy: {:.1}% ({} of {} within 2 places)", m.accuracy_pct, m.perfect + m.good, m.graded),
            format!("Perfect: {}, Good: {}, Fair: {}, Poor: {}", m.perfect, m.good, m.fair, m.poor),
            format!("Mean position error: {:.2}", m.mean_abs_error),
            format!("Podium hits: {}/3, Top 5 hits: {}/5, Top 10 hits: {}/10", m.podium_hits, m.top5_hits, m.top10_hits),
        ]);
        out
    }
}
