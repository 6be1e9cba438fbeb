pub mod draw;
pub mod game;
pub mod report;

pub use draw::{Draw, DrawHistory};
pub use game::{GameConfig, GameType, PICK_COUNT};
pub use report::{NumberStats, SignificanceEntry, StatsReport};
