//! Scoring module - streak multipliers and per-answer points.
//!
//! Every correct answer (exact or fuzzy) extends the streak. The multiplier
//! stays at 1 until the streak reaches three, then grows as `streak - 1`,
//! so a run of correct answers scores 10, 10, 20, 30, 40, ...

use crate::types::{BASE_POINTS, STREAK_BONUS_MIN};

/// Multiplier for the current streak (1-based: the answer that produced the
/// streak is already counted).
pub fn streak_multiplier(streak: u32) -> u32 {
    if streak >= STREAK_BONUS_MIN {
        streak - 1
    } else {
        1
    }
}

/// Points awarded for a correct answer.
///
/// Fuzzy (half-credit) answers earn half the points, floored.
pub fn answer_points(multiplier: u32, half: bool) -> u32 {
    let full = BASE_POINTS * multiplier;
    if half {
        full / 2
    } else {
        full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_table() {
        assert_eq!(streak_multiplier(1), 1);
        assert_eq!(streak_multiplier(2), 1);
        assert_eq!(streak_multiplier(3), 2);
        assert_eq!(streak_multiplier(4), 3);
        assert_eq!(streak_multiplier(5), 4);
    }

    #[test]
    fn score_increments_for_a_run_of_correct_answers() {
        // Streak counts 1..=5 award 10, 10, 20, 30, 40.
        let increments: Vec<u32> = (1..=5)
            .map(|streak| answer_points(streak_multiplier(streak), false))
            .collect();
        assert_eq!(increments, vec![10, 10, 20, 30, 40]);
    }

    #[test]
    fn half_credit_floors() {
        assert_eq!(answer_points(1, true), 5);
        assert_eq!(answer_points(3, true), 15);
        assert_eq!(answer_points(2, true), 10);
    }
}
