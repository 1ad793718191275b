//! Coarse heading classification for weapon and tube mounts.
//!
//! A mount's heading angle is bucketed into one of four directions for
//! display. The four ranges are checked in a fixed order and each later
//! match overwrites the earlier one, so a heading that lands exactly on a
//! shared boundary resolves to the last matching rule. Downstream display
//! text depends on that resolution; keep the order and the mixed
//! inclusive/strict comparisons as they are.

/// Coarse directional bucket for a mount's heading angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Front,
    Right,
    Left,
    Rear,
    /// No range matched. Unreachable for finite angles, since the four
    /// ranges tile the full circle; kept for the NaN case.
    Unknown,
}

impl Facing {
    /// Bucket a heading angle in degrees. 0 is dead ahead, positive is
    /// clockwise (starboard).
    ///
    /// Front and Rear use an inclusive 45 degree half-width, Right and
    /// Left a strict one.
    pub fn classify(angle_degrees: f32) -> Facing {
        let mut facing = Facing::Unknown;
        if angle_difference(0.0, angle_degrees).abs() <= 45.0 {
            facing = Facing::Front;
        }
        if angle_difference(90.0, angle_degrees).abs() < 45.0 {
            facing = Facing::Right;
        }
        if angle_difference(-90.0, angle_degrees).abs() < 45.0 {
            facing = Facing::Left;
        }
        if angle_difference(180.0, angle_degrees).abs() <= 45.0 {
            facing = Facing::Rear;
        }
        facing
    }

    /// Display label for key-value rows.
    pub fn label(self) -> &'static str {
        match self {
            Facing::Front => "Front",
            Facing::Right => "Right",
            Facing::Left => "Left",
            Facing::Rear => "Rear",
            Facing::Unknown => "?",
        }
    }
}

/// Signed angular difference `to - from` in degrees, wrapped to
/// `[-180, 180)`.
pub fn angle_difference(from: f32, to: f32) -> f32 {
    let mut diff = (to - from) % 360.0;
    if diff < -180.0 {
        diff += 360.0;
    }
    if diff >= 180.0 {
        diff -= 360.0;
    }
    diff
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_headings() {
        assert_eq!(Facing::classify(0.0), Facing::Front);
        assert_eq!(Facing::classify(90.0), Facing::Right);
        assert_eq!(Facing::classify(-90.0), Facing::Left);
        assert_eq!(Facing::classify(180.0), Facing::Rear);
        assert_eq!(Facing::classify(-180.0), Facing::Rear);
    }

    #[test]
    fn boundary_resolution_matches_rule_order() {
        // 45 is inside Front's inclusive range but outside Right's strict
        // one, so Front wins; same on the port side.
        assert_eq!(Facing::classify(45.0), Facing::Front);
        assert_eq!(Facing::classify(-45.0), Facing::Front);
        // 135 misses Right's strict range and lands in Rear's inclusive one.
        assert_eq!(Facing::classify(135.0), Facing::Rear);
        assert_eq!(Facing::classify(-135.0), Facing::Rear);
    }

    #[test]
    fn off_boundary_headings() {
        assert_eq!(Facing::classify(44.9), Facing::Front);
        assert_eq!(Facing::classify(45.1), Facing::Right);
        assert_eq!(Facing::classify(-60.0), Facing::Left);
        assert_eq!(Facing::classify(170.0), Facing::Rear);
        assert_eq!(Facing::classify(-170.0), Facing::Rear);
    }

    #[test]
    fn classification_wraps_out_of_range_angles() {
        assert_eq!(Facing::classify(360.0), Facing::Front);
        assert_eq!(Facing::classify(450.0), Facing::Right);
        assert_eq!(Facing::classify(-270.0), Facing::Right);
        assert_eq!(Facing::classify(720.0 + 180.0), Facing::Rear);
    }

    #[test]
    fn angle_difference_wraps_to_half_open_range() {
        assert_eq!(angle_difference(0.0, 180.0), -180.0);
        assert_eq!(angle_difference(0.0, -180.0), -180.0);
        assert_eq!(angle_difference(90.0, 45.0), -45.0);
        assert_eq!(angle_difference(-90.0, -135.0), -45.0);
        assert_eq!(angle_difference(180.0, -135.0), 45.0);
    }

    #[test]
    fn labels() {
        assert_eq!(Facing::Front.label(), "Front");
        assert_eq!(Facing::Rear.label(), "Rear");
        assert_eq!(Facing::Unknown.label(), "?");
    }

    #[test]
    fn nan_is_unknown() {
        assert_eq!(Facing::classify(f32::NAN), Facing::Unknown);
    }
}
