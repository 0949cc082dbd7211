// tests/predictions.rs
use std::fs;

use gp_results::compare::AccuracyBand;
use gp_results::config::{AliasTable, AppOptions, ExportFormat};
use gp_results::data::{RawResult, RawTable};
use gp_results::progress::RecordingProgress;
use gp_results::provider::StaticProvider;
use gp_results::runner;

fn official() -> RawTable {
    [
        ("Oscar Piastri", "McLaren", "1"),
        ("Max Verstappen", "Red Bull Racing", "2"),
        ("Isack Hadjar", "Racing Bulls", "3"),
        ("George Russell", "Mercedes", "4"),
        ("Andrea Kimi Antonelli", "Mercedes", "16"),
    ]
    .into_iter()
    .map(|(n, t, p)| RawResult {
        full_name: Some(n.into()),
        team_name: Some(t.into()),
        position: Some(p.into()),
        status: Some("Finished".into()),
    })
    .collect()
}

#[test]
fn runner_grades_each_prediction_file() {
    let dir = tempfile::tempdir().unwrap();
    let gbr = dir.path().join("gradient_boosting.json");
    let rf = dir.path().join("random_forest.json");
    let broken = dir.path().join("broken.json");
    fs::write(
        &gbr,
        r#"[{"driver":"Oscar Piastri","team":"McLaren","prediction":1.2},
            {"driver":"Max Verstappen","prediction":2.4},
            {"driver":"George Russell","prediction":3.3},
            {"driver":"Kimi Andrea Antonelli","prediction":4.1}]"#,
    )
    .unwrap();
    fs::write(
        &rf,
        r#"{"grand_prix":"Dutch Grand Prix","year":2025,"results":[
            {"position":1,"driver":"Max Verstappen"},
            {"position":2,"driver":"Oscar Piastri"},
            {"position":3,"driver":"Isack Hadjar"}]}"#,
    )
    .unwrap();
    fs::write(&broken, "{").unwrap();

    let mut opts = AppOptions::default();
    opts.fetch.year = 2025;
    opts.export.format = ExportFormat::Json;
    opts.export.json_path = dir.path().join("out.json");
    opts.predictions = vec![gbr, broken, rf];

    let mut rec = RecordingProgress::default();
    let summary = runner::run(&opts, &StaticProvider::new(official()), &AliasTable::builtin(), &mut rec).unwrap();
    assert_eq!(summary.comparisons.len(), 2);

    let gbr = &summary.comparisons[0];
    assert_eq!(gbr.model, "gradient_boosting");
    // Piastri 0, Verstappen 0, Russell 1, Antonelli 12
    assert_eq!((gbr.metrics.perfect, gbr.metrics.good, gbr.metrics.fair, gbr.metrics.poor), (2, 1, 0, 1));
    let antonelli = gbr.rows.iter().find(|r| r.driver == "Kimi Antonelli").unwrap();
    assert_eq!(antonelli.band, Some(AccuracyBand::Poor));
    assert!((gbr.metrics.accuracy_pct - 75.0).abs() < 1e-9);

    let rf = &summary.comparisons[1];
    assert_eq!(rf.metrics.podium_hits, 3);
    assert_eq!(rf.metrics.graded, 3);
    assert!(rec.lines.iter().any(|l| l.contains("random_forest")));

    // per-driver rows are printed with band and score
    let piastri = rec.lines.iter().find(|l| l.starts_with("1    Oscar Piastri")).unwrap();
    assert!(piastri.contains("Perfect"));
    assert!(piastri.ends_with("1.20"));
    assert!(rec.lines.iter().any(|l| l.starts_with("16   Kimi Antonelli") && l.contains("Poor")));
}

#[test]
fn canonical_names_from_overrides_still_match() {
    let aliases = AliasTable::with_overrides_toml(
        "[aliases]\n\"Carlos Sainz\" = \"Carlos Sainz Jr.\"\n",
        std::path::Path::new("aliases.toml"),
    )
    .unwrap();
    let official: RawTable = vec![RawResult {
        full_name: Some("Carlos Sainz".into()),
        team_name: Some("Williams".into()),
        position: Some("1".into()),
        status: Some("Finished".into()),
    }]
    .into_iter()
    .collect();

    let dir = tempfile::tempdir().unwrap();
    let preds = dir.path().join("model.json");
    fs::write(&preds, r#"[{"driver":"Carlos Sainz Jr.","position":1}]"#).unwrap();

    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Json;
    opts.export.json_path = dir.path().join("out.json");
    opts.predictions = vec![preds];

    let summary = runner::run(&opts, &StaticProvider::new(official), &aliases, &mut RecordingProgress::default()).unwrap();
    let m = &summary.comparisons[0].metrics;
    assert_eq!((m.graded, m.perfect), (1, 1));
    assert_eq!(summary.comparisons[0].rows[0].predicted, Some(1));
}
