pub mod builder;
pub mod frequency;
pub mod optimize;
pub mod significance;

pub use builder::{build_report, verify_report};
pub use frequency::{tabulate, FrequencyTable, FrequencyTables};
pub use optimize::{
    general_frequency_no_repeat, general_frequency_repeat, position_frequency_no_repeat,
    position_frequency_repeat, Combination,
};
pub use significance::{annotate, ProbabilityModel, SIGNIFICANCE_THRESHOLD};
