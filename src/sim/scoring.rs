//! Combo, points, stars and coin rules

use crate::consts::*;

/// Combo count after a match at `now_ms`
///
/// A match less than [`COMBO_WINDOW_MS`] after the previous one extends the
/// combo; anything else starts a new combo of 1.
pub fn combo_after_match(combo: u32, last_match_ms: Option<f64>, now_ms: f64) -> u32 {
    match last_match_ms {
        Some(last) if now_ms - last < COMBO_WINDOW_MS => combo + 1,
        _ => 1,
    }
}

/// Score multiplier: +0.5 every 3 consecutive matches, capped at 3x
pub fn multiplier(combo: u32) -> f32 {
    (1.0 + (combo / 3) as f32 * 0.5).min(MAX_MULTIPLIER)
}

/// Points awarded for a match landing at `combo`
pub fn match_points(combo: u32) -> u32 {
    (BASE_MATCH_POINTS * multiplier(combo)).round() as u32
}

/// Star rating from the fraction of time left at completion
pub fn stars_for(time_left: f32, total_time: f32) -> u8 {
    let ratio = if total_time > 0.0 {
        time_left / total_time
    } else {
        0.0
    };
    if ratio > THREE_STAR_RATIO {
        3
    } else if ratio > TWO_STAR_RATIO {
        2
    } else {
        1
    }
}

/// Coins the host pays out for a win: 20 per level number plus whole seconds left
pub fn coins_for_win(level_index: usize, time_left: f32) -> u32 {
    (level_index as u32 + 1) * COINS_PER_LEVEL + time_left.max(0.0).floor() as u32
}
