//! Progress calculator - derived completion metrics and member levels
//!
//! All derivations use integer arithmetic; percentages are the only floating
//! point outputs and are computed from already-validated integers.

use crate::error::DomainError;

/// Cleared missions needed to advance one level
pub const CLEARS_PER_LEVEL: i64 = 5;

/// Experience thresholds per level. Index is the current level; the value is
/// the total experience needed to reach the next one. Levels past the table
/// use the last entry.
const NEXT_LEVEL_EXP: [i32; 11] = [5, 5, 10, 15, 20, 25, 30, 40, 50, 70, 100];

/// Experience needed to advance from `level` to `level + 1`.
pub fn needed_exp_for_level(level: i32) -> i32 {
    let idx = usize::try_from(level).unwrap_or(0).min(NEXT_LEVEL_EXP.len() - 1);
    NEXT_LEVEL_EXP[idx]
}

/// Level and remaining experience derived from a total clear count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: i32,
    pub remaining_exp: i32,
}

/// Derive level from cleared-mission count: five clears per level, starting
/// at level 1. Negative counts are treated as zero.
pub fn level_progress(total_clear: i64) -> LevelProgress {
    let clears = total_clear.max(0);
    LevelProgress {
        level: (clears / CLEARS_PER_LEVEL + 1) as i32,
        remaining_exp: (CLEARS_PER_LEVEL - clears % CLEARS_PER_LEVEL) as i32,
    }
}

/// Completion percentage of a community: certified proofs against the score
/// target. A zero target is an error, never a NaN/Infinity percentage.
pub fn success_percent(certified_count: i64, score_target: i32) -> Result<f64, DomainError> {
    if score_target <= 0 {
        return Err(DomainError::ZeroScoreTarget);
    }
    Ok(certified_count as f64 / f64::from(score_target) * 100.0)
}

/// Roster fill percentage of a community.
pub fn fill_percent(participant_count: i64, capacity: i32) -> Result<f64, DomainError> {
    if capacity <= 0 {
        return Err(DomainError::ZeroCapacity);
    }
    Ok(participant_count as f64 / f64::from(capacity) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_starts_at_one() {
        let p = level_progress(0);
        assert_eq!(p.level, 1);
        assert_eq!(p.remaining_exp, 5);
    }

    #[test]
    fn test_level_advances_every_five_clears() {
        assert_eq!(level_progress(4).level, 1);
        assert_eq!(level_progress(5).level, 2);
        assert_eq!(level_progress(23).level, 5);
    }

    #[test]
    fn test_remaining_exp() {
        assert_eq!(level_progress(7).remaining_exp, 3);
        assert_eq!(level_progress(9).remaining_exp, 1);
    }

    #[test]
    fn test_negative_clears_treated_as_zero() {
        assert_eq!(level_progress(-3), level_progress(0));
    }

    #[test]
    fn test_success_percent() {
        let pct = success_percent(3, 10).unwrap();
        assert!((pct - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_success_percent_zero_target_is_error() {
        assert!(matches!(
            success_percent(3, 0),
            Err(DomainError::ZeroScoreTarget)
        ));
    }

    #[test]
    fn test_fill_percent() {
        let pct = fill_percent(2, 8).unwrap();
        assert!((pct - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_percent_zero_capacity_is_error() {
        assert!(matches!(fill_percent(1, 0), Err(DomainError::ZeroCapacity)));
    }

    #[test]
    fn test_needed_exp_table() {
        assert_eq!(needed_exp_for_level(1), 5);
        assert_eq!(needed_exp_for_level(5), 25);
        // Levels past the table saturate at the last threshold
        assert_eq!(needed_exp_for_level(99), 100);
    }
}
