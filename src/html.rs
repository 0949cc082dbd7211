// src/html.rs
// HTML export: one standalone page with a styled results table.
// Row classes: `winner` for P1, `podium` for P2/P3, none otherwise.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::config::consts::{DEFAULT_HTML_FILE, HTML_DATE_FORMAT, NOT_CLASSIFIED};
use crate::core::html::{class_attr, escape};
use crate::data::{EventMeta, NormalizedResult};
use crate::error::ExportResult;
use crate::file::{resolve_out_path, write_export};

const STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 20px; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .podium { background-color: #fff3cd; }
        .winner { background-color: #d4edda; }";

const HEADERS: [&str; 4] = ["Position", "Driver", "Team", "Status"];

pub fn row_class(r: &NormalizedResult) -> Option<&'static str> {
    if r.is_winner() {
        Some("winner")
    } else if r.is_podium() {
        Some("podium")
    } else {
        None
    }
}

/// Render the whole page. `generated` is printed as the export date.
pub fn render_html(results: &[NormalizedResult], event: &EventMeta, generated: NaiveDateTime) -> String {
    let gp = escape(&event.name);
    let year = event.year;
    let mut out = String::with_capacity(1024 + results.len() * 160);

    push_line!(out, "<!DOCTYPE html>");
    push_line!(out, "<html>");
    push_line!(out, "<head>");
    push_line!(out, "    <meta charset=\"utf-8\">");
    push_line!(out, "    <title>{gp} Results - {year}</title>");
    push_line!(out, "    <style>");
    push_line!(out, "{STYLE}");
    push_line!(out, "    </style>");
    push_line!(out, "</head>");
    push_line!(out, "<body>");
    push_line!(out, "    <h1>🏁 {gp} {year} - Official Results</h1>");
    push_line!(out, "    <p><strong>Export Date:</strong> {}</p>", generated.format(HTML_DATE_FORMAT));
    push_line!(out, "    <table>");
    push_line!(out, "        <thead>");
    push_line!(out, "            <tr>");
    for h in HEADERS {
        push_line!(out, "                <th>{h}</th>");
    }
    push_line!(out, "            </tr>");
    push_line!(out, "        </thead>");
    push_line!(out, "        <tbody>");
    for r in results {
        let pos = r.position.map(|p| p.to_string()).unwrap_or_else(|| s!(NOT_CLASSIFIED));
        push_line!(out, "            <tr{}>", class_attr(row_class(r)));
        push_line!(out, "                <td>{}</td>", pos);
        push_line!(out, "                <td>{}</td>", escape(&r.driver));
        push_line!(out, "                <td>{}</td>", escape(&r.team));
        push_line!(out, "                <td>{}</td>", escape(&r.status));
        push_line!(out, "            </tr>");
    }
    push_line!(out, "        </tbody>");
    push_line!(out, "    </table>");
    push_line!(out, "</body>");
    push_line!(out, "</html>");
    out
}

/// Empty input writes nothing and returns `None`.
pub fn export_results_to_html(
    results: &[NormalizedResult],
    event: &EventMeta,
    path: &Path,
) -> ExportResult<Option<PathBuf>> {
    if results.is_empty() {
        info!("No results to export.");
        return Ok(None);
    }

    let page = render_html(results, event, chrono::Local::now().naive_local());
    let path = resolve_out_path(path, DEFAULT_HTML_FILE);
    let written = write_export(&path, &page)?;
    info!("HTML results exported to {}", written.display());
    Ok(Some(written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tracing_test::traced_test;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 31).unwrap().and_hms_opt(16, 5, 0).unwrap()
    }

    fn grid() -> Vec<NormalizedResult> {
        vec![
            NormalizedResult::new(Some(1), "Oscar Piastri", "McLaren", "Finished"),
            NormalizedResult::new(Some(2), "Max Verstappen", "Red Bull Racing", "Finished"),
            NormalizedResult::new(Some(3), "Isack Hadjar", "Racing Bulls", "Finished"),
            NormalizedResult::new(Some(4), "George Russell", "Mercedes", "Finished"),
            NormalizedResult::new(None, "Lando Norris", "McLaren", "Retired"),
        ]
    }

    #[test]
    fn header_title_and_date() {
        let page = render_html(&grid(), &EventMeta::new("Dutch Grand Prix", 2025), at());
        assert!(page.contains("<title>Dutch Grand Prix Results - 2025</title>"));
        assert!(page.contains("<h1>🏁 Dutch Grand Prix 2025 - Official Results</h1>"));
        assert!(page.contains("<strong>Export Date:</strong> 2025-08-31 16:05:00"));
        for h in HEADERS {
            assert!(page.contains(&format!("<th>{h}</th>")));
        }
    }

    #[test]
    fn one_winner_two_podium_rows() {
        let page = render_html(&grid(), &EventMeta::new("Dutch Grand Prix", 2025), at());
        assert_eq!(page.matches(r#"<tr class="winner">"#).count(), 1);
        assert_eq!(page.matches(r#"<tr class="podium">"#).count(), 2);
        // header row plus the two unstyled result rows
        assert_eq!(page.matches("<tr>").count(), 3);
    }

    #[test]
    fn unplaced_rows_show_nc() {
        let page = render_html(&grid(), &EventMeta::new("Dutch Grand Prix", 2025), at());
        assert!(page.contains("<td>NC</td>"));
        assert_eq!(row_class(&grid()[4]), None);
    }

    #[test]
    fn text_is_escaped() {
        let rows = vec![NormalizedResult::new(Some(5), "<script>", "Haas & Co", "Finished")];
        let page = render_html(&rows, &EventMeta::new("Dutch Grand Prix", 2025), at());
        assert!(page.contains("<td>&lt;script&gt;</td>"));
        assert!(page.contains("<td>Haas &amp; Co</td>"));
        assert!(!page.contains("<script>"));
    }

    #[traced_test]
    #[test]
    fn writes_file_and_logs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let written = export_results_to_html(&grid(), &EventMeta::new("Dutch Grand Prix", 2025), &path)
            .unwrap()
            .unwrap();
        assert_eq!(written, path);
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("<!DOCTYPE html>"));
        assert!(logs_contain("HTML results exported to"));
    }

    #[test]
    fn empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        assert!(export_results_to_html(&[], &EventMeta::new("Dutch Grand Prix", 2025), &path)
            .unwrap()
            .is_none());
        assert!(!path.exists());
    }
}
