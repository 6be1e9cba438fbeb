use super::game::GameType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Observed count of one number annotated with its deviation from the
/// uniform-draw null hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceEntry {
    pub observed: u32,
    pub expected: f64,
    /// Standardized residual: (observed - expected) / stddev.
    pub residual: f64,
    /// True when |residual| exceeds the 2.0 threshold.
    pub significant: bool,
    /// Share of observation slots holding this number, in percent.
    pub percent: f64,
}

/// Annotated entries for every number in one table, keyed by number.
/// BTreeMap keeps the serialized keys in ascending numeric order.
pub type NumberStats = BTreeMap<u8, SignificanceEntry>;

/// The full statistics report for one game. Built fresh on every run as a
/// pure function of the draw history; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub total_draws: u64,
    pub optimized_by_general_frequency_repeat: [u8; 6],
    pub optimized_by_general_frequency_no_repeat: [u8; 6],
    pub optimized_by_position_frequency_repeat: [u8; 6],
    pub optimized_by_position_frequency_no_repeat: [u8; 6],
    pub regular_numbers: NumberStats,
    pub special_ball_numbers: NumberStats,
    /// Keyed "position0" through "position4".
    pub by_position: BTreeMap<String, NumberStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_field_names() {
        let report = StatsReport {
            game_type: GameType::Powerball,
            total_draws: 0,
            optimized_by_general_frequency_repeat: [1, 2, 3, 4, 5, 1],
            optimized_by_general_frequency_no_repeat: [1, 2, 3, 4, 5, 1],
            optimized_by_position_frequency_repeat: [1, 2, 3, 4, 5, 1],
            optimized_by_position_frequency_no_repeat: [1, 2, 3, 4, 5, 1],
            regular_numbers: NumberStats::new(),
            special_ball_numbers: NumberStats::new(),
            by_position: BTreeMap::new(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"type\":\"powerball\""));
        assert!(json.contains("\"totalDraws\":0"));
        assert!(json.contains("\"optimizedByGeneralFrequencyRepeat\":[1,2,3,4,5,1]"));
        assert!(json.contains("\"optimizedByGeneralFrequencyNoRepeat\""));
        assert!(json.contains("\"optimizedByPositionFrequencyRepeat\""));
        assert!(json.contains("\"optimizedByPositionFrequencyNoRepeat\""));
        assert!(json.contains("\"regularNumbers\""));
        assert!(json.contains("\"specialBallNumbers\""));
        assert!(json.contains("\"byPosition\""));
    }

    #[test]
    fn test_number_stats_keys_serialize_as_strings() {
        let mut stats = NumberStats::new();
        stats.insert(
            7,
            SignificanceEntry {
                observed: 3,
                expected: 2.5,
                residual: 0.5,
                significant: false,
                percent: 1.25,
            },
        );
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.starts_with("{\"7\":"));

        let back: NumberStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
