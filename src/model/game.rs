use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of regular numbers drawn in every game.
pub const PICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "mega-millions")]
    MegaMillions,
    #[serde(rename = "powerball")]
    Powerball,
}

impl GameType {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mega-millions" | "megamillions" | "mm" => Some(GameType::MegaMillions),
            "powerball" | "pb" => Some(GameType::Powerball),
            _ => None,
        }
    }

    /// Pool sizes for this game.
    pub fn config(&self) -> GameConfig {
        match self {
            GameType::MegaMillions => GameConfig {
                max_regular: 70,
                max_special: 25,
            },
            GameType::Powerball => GameConfig {
                max_regular: 69,
                max_special: 26,
            },
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::MegaMillions => write!(f, "mega-millions"),
            GameType::Powerball => write!(f, "powerball"),
        }
    }
}

/// Per-game pool sizes, passed explicitly into every analyzer call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Regular numbers run 1..=max_regular.
    pub max_regular: u8,
    /// The special ball runs 1..=max_special.
    pub max_special: u8,
}

impl GameConfig {
    /// Lowest value slot `slot` can hold. Draws are strictly ascending, so
    /// slot p can never hold a number below p+1.
    pub fn position_low(&self, slot: usize) -> u8 {
        slot as u8 + 1
    }

    /// Highest value slot `slot` can hold: the four slots above it each need
    /// a larger number.
    pub fn position_high(&self, slot: usize) -> u8 {
        self.max_regular - 4 + slot as u8
    }
}
