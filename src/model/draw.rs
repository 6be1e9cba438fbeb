use super::game::{GameConfig, GameType, PICK_COUNT};
use crate::error::{LotteryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One historical drawing: five ascending regular numbers plus a special ball.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draw {
    /// Used only for ordering and deduplication, never for statistics.
    pub date: NaiveDate,
    pub numbers: [u8; PICK_COUNT],
    pub special_ball: u8,
    #[serde(rename = "type")]
    pub game_type: GameType,
}

impl Draw {
    /// Check this draw against a game's pools: every regular number in range,
    /// strictly ascending (which also rules out duplicates), special ball in
    /// range.
    pub fn check(&self, config: &GameConfig) -> Result<()> {
        for &n in &self.numbers {
            if n < 1 || n > config.max_regular {
                return Err(LotteryError::InvalidDraw(format!(
                    "number {} outside 1..={}",
                    n, config.max_regular
                )));
            }
        }
        for pair in self.numbers.windows(2) {
            if pair[0] >= pair[1] {
                return Err(LotteryError::InvalidDraw(format!(
                    "numbers not strictly ascending: {} then {}",
                    pair[0], pair[1]
                )));
            }
        }
        if self.special_ball < 1 || self.special_ball > config.max_special {
            return Err(LotteryError::InvalidDraw(format!(
                "special ball {} outside 1..={}",
                self.special_ball, config.max_special
            )));
        }
        Ok(())
    }
}

/// A validated, deduplicated draw history for one game, newest first.
/// Read-only once built; the analysis engine never mutates it.
#[derive(Debug, Clone)]
pub struct DrawHistory {
    game: GameType,
    draws: Vec<Draw>,
}

impl DrawHistory {
    /// Build a history from raw records. Draws for other games and draws
    /// that fail [`Draw::check`] are dropped with a warning; duplicates by
    /// `(date, numbers, specialBall)` keep the first occurrence.
    pub fn from_draws(game: GameType, draws: Vec<Draw>) -> Self {
        let config = game.config();
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(draws.len());

        for draw in draws {
            if draw.game_type != game {
                log::warn!(
                    "Skipping {} draw on {} in {} history",
                    draw.game_type,
                    draw.date,
                    game
                );
                continue;
            }
            if let Err(e) = draw.check(&config) {
                log::warn!("Skipping draw on {}: {}", draw.date, e);
                continue;
            }
            if !seen.insert((draw.date, draw.numbers, draw.special_ball)) {
                log::debug!("Skipping duplicate draw on {}", draw.date);
                continue;
            }
            kept.push(draw);
        }

        kept.sort_by(|a, b| b.date.cmp(&a.date));
        DrawHistory { game, draws: kept }
    }

    pub fn game(&self) -> GameType {
        self.game
    }

    pub fn config(&self) -> GameConfig {
        self.game.config()
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn total_draws(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Most recent draw, if any.
    pub fn latest(&self) -> Option<&Draw> {
        self.draws.first()
    }

    /// Every regular-number combination that has already been drawn,
    /// for the no-repeat selection strategies.
    pub fn drawn_sets(&self) -> HashSet<[u8; PICK_COUNT]> {
        self.draws.iter().map(|d| d.numbers).collect()
    }
}
