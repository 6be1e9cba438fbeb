use super::frequency::tabulate;
use super::optimize;
use super::significance::{annotate, ProbabilityModel};
use crate::model::{DrawHistory, StatsReport, PICK_COUNT};
use std::collections::BTreeMap;

/// Assemble the full statistics report for one game's history: tabulate,
/// annotate all three table families, and run the four selection strategies.
/// Pure with respect to the history; two calls yield identical reports.
pub fn build_report(history: &DrawHistory) -> StatsReport {
    let config = history.config();
    let total_draws = history.total_draws() as u64;
    let tables = tabulate(history);
    let drawn = history.drawn_sets();

    let regular_numbers = annotate(&tables.general, total_draws, &config, ProbabilityModel::General);
    let special_ball_numbers =
        annotate(&tables.special, total_draws, &config, ProbabilityModel::Special);

    let mut by_position = BTreeMap::new();
    for (slot, table) in tables.by_position.iter().enumerate() {
        by_position.insert(
            format!("position{}", slot),
            annotate(table, total_draws, &config, ProbabilityModel::Positional),
        );
    }

    StatsReport {
        game_type: history.game(),
        total_draws,
        optimized_by_general_frequency_repeat: optimize::general_frequency_repeat(&tables),
        optimized_by_general_frequency_no_repeat: optimize::general_frequency_no_repeat(
            &tables, &drawn,
        ),
        optimized_by_position_frequency_repeat: optimize::position_frequency_repeat(&tables),
        optimized_by_position_frequency_no_repeat: optimize::position_frequency_no_repeat(
            &tables, &drawn,
        ),
        regular_numbers,
        special_ball_numbers,
        by_position,
    }
}

/// Consistency checks over a finished report: the general table's counts sum
/// to totalDraws x 5, each positional table and the special table sum to
/// totalDraws. Returns the first inconsistency found.
pub fn verify_report(report: &StatsReport) -> std::result::Result<(), String> {
    let n = report.total_draws;

    let general_sum: u64 = report
        .regular_numbers
        .values()
        .map(|e| e.observed as u64)
        .sum();
    if general_sum != n * PICK_COUNT as u64 {
        return Err(format!(
            "general frequency sum {} does not match {} draws x {}",
            general_sum, n, PICK_COUNT
        ));
    }

    for (position, stats) in &report.by_position {
        let sum: u64 = stats.values().map(|e| e.observed as u64).sum();
        if sum != n {
            return Err(format!(
                "{} frequency sum {} does not match {} draws",
                position, sum, n
            ));
        }
    }

    let special_sum: u64 = report
        .special_ball_numbers
        .values()
        .map(|e| e.observed as u64)
        .sum();
    if special_sum != n {
        return Err(format!(
            "special ball frequency sum {} does not match {} draws",
            special_sum, n
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draw, GameType};

    fn draw(d: &str, numbers: [u8; 5], special: u8, game: GameType) -> Draw {
        Draw {
            date: d.parse().unwrap(),
            numbers,
            special_ball: special,
            game_type: game,
        }
    }

    fn mm_history() -> DrawHistory {
        DrawHistory::from_draws(
            GameType::MegaMillions,
            vec![
                draw("2025-01-01", [1, 2, 3, 4, 5], 9, GameType::MegaMillions),
                draw("2025-01-02", [1, 10, 20, 30, 70], 9, GameType::MegaMillions),
                draw("2025-01-03", [2, 10, 21, 31, 41], 1, GameType::MegaMillions),
            ],
        )
    }

    #[test]
    fn test_report_structure() {
        let report = build_report(&mm_history());

        assert_eq!(report.game_type, GameType::MegaMillions);
        assert_eq!(report.total_draws, 3);
        assert_eq!(report.regular_numbers.len(), 70);
        assert_eq!(report.special_ball_numbers.len(), 25);
        assert_eq!(report.by_position.len(), 5);
        for slot in 0..5 {
            assert!(report.by_position.contains_key(&format!("position{}", slot)));
        }
        // position0 covers 1..=66 for Mega Millions
        assert_eq!(report.by_position["position0"].len(), 66);
    }

    #[test]
    fn test_report_verifies() {
        assert!(verify_report(&build_report(&mm_history())).is_ok());
    }

    #[test]
    fn test_verify_catches_bad_sums() {
        let mut report = build_report(&mm_history());
        if let Some(entry) = report.regular_numbers.get_mut(&1) {
            entry.observed += 1;
        }
        assert!(verify_report(&report).is_err());
    }

    #[test]
    fn test_byte_identical_reports() {
        let history = mm_history();
        let a = serde_json::to_string(&build_report(&history)).unwrap();
        let b = serde_json::to_string(&build_report(&history)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_history_report() {
        let history = DrawHistory::from_draws(GameType::Powerball, vec![]);
        let report = build_report(&history);

        assert_eq!(report.total_draws, 0);
        assert_eq!(report.optimized_by_general_frequency_repeat, [1, 2, 3, 4, 5, 1]);
        assert_eq!(
            report.optimized_by_position_frequency_no_repeat,
            [1, 2, 3, 4, 5, 1]
        );
        for entry in report.regular_numbers.values() {
            assert_eq!(entry.residual, 0.0);
            assert!(!entry.significant);
        }
        assert!(verify_report(&report).is_ok());
    }

    #[test]
    fn test_games_are_independent() {
        let mm = build_report(&mm_history());
        let pb = build_report(&DrawHistory::from_draws(
            GameType::Powerball,
            vec![draw("2025-01-01", [3, 4, 5, 6, 7], 2, GameType::Powerball)],
        ));
        assert_eq!(mm.game_type, GameType::MegaMillions);
        assert_eq!(pb.game_type, GameType::Powerball);
        assert_eq!(pb.regular_numbers.len(), 69);
        assert_eq!(pb.special_ball_numbers.len(), 26);
    }
}
