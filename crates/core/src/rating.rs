//! Star-rating rules: value bounds and the toggle computation.
//!
//! A stored rating is `0..=5` where `0` means "no vote" -- the row is kept so
//! the `(prompt_id, user_id)` upsert key stays stable. A click always carries
//! a star `1..=5`; clicking the star a user already selected clears their
//! vote. The SQL upsert in the vote repository implements the same rule
//! atomically; [`toggled_rating`] is the reference definition it must agree
//! with.

/// Lowest star a click can carry.
pub const MIN_STAR: i16 = 1;

/// Highest star a click can carry.
pub const MAX_STAR: i16 = 5;

/// Stored rating meaning "no vote".
pub const RATING_NONE: i16 = 0;

/// Validate that a clicked star is within `1..=5`.
pub fn validate_star(star: i16) -> Result<(), String> {
    if (MIN_STAR..=MAX_STAR).contains(&star) {
        Ok(())
    } else {
        Err(format!(
            "Invalid star {star}. Must be between {MIN_STAR} and {MAX_STAR}"
        ))
    }
}

/// Compute the rating that results from clicking `clicked` while the user's
/// current rating is `current`.
///
/// Clicking the currently-selected star toggles the vote off; any other star
/// replaces the rating.
pub fn toggled_rating(current: i16, clicked: i16) -> i16 {
    if clicked == current {
        RATING_NONE
    } else {
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_in_range_accepted() {
        for star in MIN_STAR..=MAX_STAR {
            assert!(validate_star(star).is_ok(), "star {star} should be valid");
        }
    }

    #[test]
    fn test_zero_star_click_rejected() {
        // 0 is a stored state, never a click.
        assert!(validate_star(0).is_err());
    }

    #[test]
    fn test_out_of_range_stars_rejected() {
        assert!(validate_star(6).is_err());
        assert!(validate_star(-1).is_err());
        let msg = validate_star(9).unwrap_err();
        assert!(msg.contains("between 1 and 5"));
    }

    #[test]
    fn test_first_click_sets_rating() {
        assert_eq!(toggled_rating(RATING_NONE, 3), 3);
        assert_eq!(toggled_rating(RATING_NONE, 5), 5);
    }

    #[test]
    fn test_same_star_toggles_off() {
        assert_eq!(toggled_rating(3, 3), RATING_NONE);
        assert_eq!(toggled_rating(5, 5), RATING_NONE);
    }

    #[test]
    fn test_different_star_replaces() {
        assert_eq!(toggled_rating(3, 5), 5);
        assert_eq!(toggled_rating(5, 1), 1);
    }

    #[test]
    fn test_revote_after_toggle_off() {
        let after_off = toggled_rating(4, 4);
        assert_eq!(after_off, RATING_NONE);
        assert_eq!(toggled_rating(after_off, 4), 4);
    }
}
