//! JSON persistence for draw histories and statistics reports.
//!
//! Draw files are parsed record-by-record so one malformed entry cannot
//! poison a whole history; the bad record is skipped and reported.

use crate::error::Result;
use crate::model::{Draw, StatsReport};
use std::fs;
use std::path::Path;

/// Parse a draw-history file body: a JSON array of draw records.
/// Returns the records that parsed plus a description of each one that
/// did not.
pub fn parse_draws(content: &str) -> Result<(Vec<Draw>, Vec<String>)> {
    let records: Vec<serde_json::Value> = serde_json::from_str(content)?;
    let mut draws = Vec::with_capacity(records.len());
    let mut issues = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Draw>(record) {
            Ok(draw) => draws.push(draw),
            Err(e) => issues.push(format!("record {}: {}", index, e)),
        }
    }

    Ok((draws, issues))
}

/// Read a draw-history file, logging a warning for every record skipped.
pub fn read_draws(path: &Path) -> Result<Vec<Draw>> {
    let content = fs::read_to_string(path)?;
    let (draws, issues) = parse_draws(&content)?;
    for issue in issues {
        log::warn!("{}: skipping malformed {}", path.display(), issue);
    }
    Ok(draws)
}

/// Read a draw-history file, treating a missing file as an empty history.
pub fn read_draws_or_empty(path: &Path) -> Result<Vec<Draw>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (draws, issues) = parse_draws(&content)?;
            for issue in issues {
                log::warn!("{}: skipping malformed {}", path.display(), issue);
            }
            Ok(draws)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("{} not found, starting with an empty history", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Write a statistics report as pretty-printed JSON.
pub fn write_report(report: &StatsReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a statistics report back from disk.
pub fn read_report(path: &Path) -> Result<StatsReport> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DrawHistory, GameType};
    use crate::stats::build_report;

    #[test]
    fn test_parse_draws_wire_format() {
        let json = r#"[
            {"date": "2025-03-26", "numbers": [7, 15, 30, 45, 67], "specialBall": 12, "type": "mega-millions"},
            {"date": "2025-03-24", "numbers": [1, 2, 3, 4, 5], "specialBall": 1, "type": "powerball"}
        ]"#;
        let (draws, issues) = parse_draws(json).unwrap();
        assert_eq!(draws.len(), 2);
        assert!(issues.is_empty());
        assert_eq!(draws[0].numbers, [7, 15, 30, 45, 67]);
        assert_eq!(draws[1].game_type, GameType::Powerball);
    }

    #[test]
    fn test_parse_draws_skips_malformed_records() {
        let json = r#"[
            {"date": "2025-03-26", "numbers": [7, 15, 30, 45, 67], "specialBall": 12, "type": "mega-millions"},
            {"date": "not-a-date", "numbers": [1, 2, 3, 4, 5], "specialBall": 1, "type": "powerball"},
            {"numbers": [1, 2, 3]},
            42
        ]"#;
        let (draws, issues) = parse_draws(json).unwrap();
        assert_eq!(draws.len(), 1);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_parse_draws_rejects_non_array() {
        assert!(parse_draws("{\"not\": \"an array\"}").is_err());
    }

    #[test]
    fn test_read_draws_or_empty_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let draws = read_draws_or_empty(&dir.path().join("missing.json")).unwrap();
        assert!(draws.is_empty());
    }

    #[test]
    fn test_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mm-stats.json");

        let history = DrawHistory::from_draws(
            GameType::MegaMillions,
            vec![Draw {
                date: "2025-03-26".parse().unwrap(),
                numbers: [7, 15, 30, 45, 67],
                special_ball: 12,
                game_type: GameType::MegaMillions,
            }],
        );
        let report = build_report(&history);
        write_report(&report, &path).unwrap();

        let back = read_report(&path).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_written_report_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pb-stats.json");
        let history = DrawHistory::from_draws(GameType::Powerball, vec![]);
        write_report(&build_report(&history), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"type\": \"powerball\""));
    }
}
