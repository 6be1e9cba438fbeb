use super::frequency::FrequencyTable;
use crate::model::{GameConfig, NumberStats, SignificanceEntry, PICK_COUNT};

/// Two-sided significance threshold on the standardized residual,
/// roughly the 95% confidence level. Fixed for output parity.
pub const SIGNIFICANCE_THRESHOLD: f64 = 2.0;

/// Null-hypothesis model for one table kind: the per-draw probability that a
/// specific number lands in the slots the table counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityModel {
    /// Any of the five regular slots: p = 5 / max_regular.
    General,
    /// One ascending slot. Uniform approximation p = 1 / (max_regular - 4);
    /// the exact slot-dependent combinatorial probability is deliberately
    /// not used.
    Positional,
    /// The special ball: p = 1 / max_special.
    Special,
}

impl ProbabilityModel {
    /// Per-draw probability of observing one specific number.
    pub fn per_draw_probability(&self, config: &GameConfig) -> f64 {
        match self {
            ProbabilityModel::General => PICK_COUNT as f64 / config.max_regular as f64,
            ProbabilityModel::Positional => 1.0 / (config.max_regular as f64 - 4.0),
            ProbabilityModel::Special => 1.0 / config.max_special as f64,
        }
    }

    /// Number of observation slots the `percent` field is taken over:
    /// five per draw for the general table, one per draw otherwise.
    pub fn total_slots(&self, total_draws: u64) -> u64 {
        match self {
            ProbabilityModel::General => total_draws * PICK_COUNT as u64,
            ProbabilityModel::Positional | ProbabilityModel::Special => total_draws,
        }
    }
}

/// Annotate a frequency table with expected counts, standardized residuals,
/// and significance flags under an exact binomial null model.
///
/// With zero draws (or a degenerate stddev) every residual is 0 and nothing
/// is significant; division by zero never occurs.
pub fn annotate(
    table: &FrequencyTable,
    total_draws: u64,
    config: &GameConfig,
    model: ProbabilityModel,
) -> NumberStats {
    let n = total_draws as f64;
    let p = model.per_draw_probability(config);
    let expected = n * p;
    let stddev = (n * p * (1.0 - p)).sqrt();
    let total_slots = model.total_slots(total_draws);

    let mut entries = NumberStats::new();
    for (number, observed) in table.iter() {
        let residual = if total_draws == 0 || stddev == 0.0 {
            0.0
        } else {
            (observed as f64 - expected) / stddev
        };
        let percent = if total_slots == 0 {
            0.0
        } else {
            observed as f64 / total_slots as f64 * 100.0
        };
        entries.insert(
            number,
            SignificanceEntry {
                observed,
                expected,
                residual,
                significant: residual.abs() > SIGNIFICANCE_THRESHOLD,
                percent,
            },
        );
    }
    entries
}
