use super::frequency::FrequencyTables;
use crate::model::PICK_COUNT;
use std::collections::HashSet;

/// A recommended play: five regular numbers plus the special ball.
pub type Combination = [u8; 6];

fn combine(picks: [u8; PICK_COUNT], special: u8) -> Combination {
    [picks[0], picks[1], picks[2], picks[3], picks[4], special]
}

fn top_special(tables: &FrequencyTables) -> u8 {
    tables.special.ranked().first().copied().unwrap_or(1)
}

fn top_picks(ranked: &[u8]) -> [u8; PICK_COUNT] {
    debug_assert!(ranked.len() >= PICK_COUNT);
    let mut picks = [0u8; PICK_COUNT];
    for (slot, &number) in ranked.iter().take(PICK_COUNT).enumerate() {
        picks[slot] = number;
    }
    picks
}

/// Top five numbers by general frequency (ties to the lower number), sorted
/// ascending, plus the most frequent special ball.
pub fn general_frequency_repeat(tables: &FrequencyTables) -> Combination {
    let mut picks = top_picks(&tables.general.ranked());
    picks.sort_unstable();
    combine(picks, top_special(tables))
}

/// Like [`general_frequency_repeat`], but the five regular numbers must not
/// reproduce an already-drawn combination. While the ascending 5-set matches
/// a historical draw, the lowest-ranked member is swapped for the next unused
/// ranked candidate; if every candidate is consumed the best-ranked
/// combination is returned despite the collision.
pub fn general_frequency_no_repeat(
    tables: &FrequencyTables,
    drawn: &HashSet<[u8; PICK_COUNT]>,
) -> Combination {
    let ranked = tables.general.ranked();
    let special = top_special(tables);

    let mut picks = top_picks(&ranked);
    let mut fallback = picks;
    fallback.sort_unstable();

    let mut next = PICK_COUNT;
    loop {
        let mut sorted = picks;
        sorted.sort_unstable();
        if !drawn.contains(&sorted) {
            return combine(sorted, special);
        }
        if next >= ranked.len() {
            // Candidate list exhausted; a repeat beats no answer at all.
            return combine(fallback, special);
        }
        // picks is kept in rank order, so the last slot holds the
        // lowest-ranked member.
        picks[PICK_COUNT - 1] = ranked[next];
        next += 1;
    }
}

/// Most frequent number at each ascending slot (ties to the lower number),
/// slot order preserved, plus the most frequent special ball. The picks are
/// never re-sorted: each slot's valid range shifts upward with the slot, so
/// the result is already in draw order.
pub fn position_frequency_repeat(tables: &FrequencyTables) -> Combination {
    let mut picks = [0u8; PICK_COUNT];
    for (slot, table) in tables.by_position.iter().enumerate() {
        picks[slot] = table.ranked().first().copied().unwrap_or(slot as u8 + 1);
    }
    combine(picks, top_special(tables))
}

/// Like [`position_frequency_repeat`], but avoiding already-drawn
/// combinations. On a collision the slot whose current pick has the weakest
/// count margin over its own runner-up is advanced to that runner-up (ties
/// go to the lowest slot); exhaustion falls back to the best-ranked picks.
pub fn position_frequency_no_repeat(
    tables: &FrequencyTables,
    drawn: &HashSet<[u8; PICK_COUNT]>,
) -> Combination {
    let special = top_special(tables);
    let ranked: [Vec<u8>; PICK_COUNT] =
        std::array::from_fn(|slot| tables.by_position[slot].ranked());

    let fallback: [u8; PICK_COUNT] = std::array::from_fn(|slot| ranked[slot][0]);
    let mut picks = fallback;
    let mut depth = [0usize; PICK_COUNT];

    // Each substitution consumes one candidate, so the total candidate count
    // bounds the search.
    let budget: usize = ranked.iter().map(|r| r.len()).sum();
    for _ in 0..budget {
        let mut sorted = picks;
        sorted.sort_unstable();
        if !drawn.contains(&sorted) {
            return combine(picks, special);
        }

        let mut weakest: Option<(usize, u32)> = None;
        for slot in 0..PICK_COUNT {
            let d = depth[slot];
            if d + 1 >= ranked[slot].len() {
                continue;
            }
            let table = &tables.by_position[slot];
            let margin = table.count(ranked[slot][d]) - table.count(ranked[slot][d + 1]);
            match weakest {
                Some((_, best)) if margin >= best => {}
                _ => weakest = Some((slot, margin)),
            }
        }

        match weakest {
            Some((slot, _)) => {
                depth[slot] += 1;
                picks[slot] = ranked[slot][depth[slot]];
            }
            None => break, // every slot exhausted
        }
    }

    combine(fallback, special)
}
