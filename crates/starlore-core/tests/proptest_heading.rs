//! Property-based tests for the heading classifier.
//!
//! Uses proptest to sweep heading angles and verify the four directional
//! ranges tile the circle with no gaps under the documented rule order.

use proptest::prelude::*;
use starlore_core::heading::{Facing, angle_difference};

proptest! {
    /// Every finite heading maps to one of the four real directions.
    #[test]
    fn classification_is_total(angle in -1.0e6f32..1.0e6f32) {
        let facing = Facing::classify(angle);
        prop_assert_ne!(facing, Facing::Unknown);
    }

    /// The wrapped difference always lands in [-180, 180).
    #[test]
    fn difference_stays_in_range(from in -720.0f32..720.0, to in -720.0f32..720.0) {
        let diff = angle_difference(from, to);
        prop_assert!((-180.0..180.0).contains(&diff), "diff = {diff}");
    }

    /// Classification only depends on the wrapped angle. Whole degrees so
    /// the 360 offset stays exact in f32.
    #[test]
    fn classification_is_periodic(degrees in -180i32..180) {
        let angle = degrees as f32;
        prop_assert_eq!(Facing::classify(angle), Facing::classify(angle + 360.0));
        prop_assert_eq!(Facing::classify(angle), Facing::classify(angle - 360.0));
    }

    /// Opposite headings land in opposite front/rear buckets away from the
    /// boundaries.
    #[test]
    fn front_and_rear_are_opposed(angle in -40.0f32..40.0) {
        prop_assert_eq!(Facing::classify(angle), Facing::Front);
        prop_assert_eq!(Facing::classify(angle + 180.0), Facing::Rear);
    }
}
