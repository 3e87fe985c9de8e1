/// Count that always renders in the milestone A color.
pub const MILESTONE_A: i64 = 21;
/// Count that always renders in the milestone B color.
pub const MILESTONE_B: i64 = 18;

/// Semantic color of the displayed count.
///
/// The terminal palette for each variant lives in `ui::theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColor {
    BoundaryLow,
    BoundaryHigh,
    MilestoneA,
    MilestoneB,
    Default,
}

/// Picks the display color for a count. First match wins, so the bounds
/// take precedence over the milestone literals.
pub fn color_for(count: i64, min: i64, max: i64) -> DisplayColor {
    if count == min {
        DisplayColor::BoundaryLow
    } else if count == max {
        DisplayColor::BoundaryHigh
    } else if count == MILESTONE_A {
        DisplayColor::MilestoneA
    } else if count == MILESTONE_B {
        DisplayColor::MilestoneB
    } else {
        DisplayColor::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_default() {
        assert_eq!(color_for(0, 0, 10), DisplayColor::BoundaryLow);
        assert_eq!(color_for(10, 0, 10), DisplayColor::BoundaryHigh);
        assert_eq!(color_for(5, 0, 10), DisplayColor::Default);
    }

    #[test]
    fn milestones_apply_inside_the_range() {
        assert_eq!(color_for(21, 0, 30), DisplayColor::MilestoneA);
        assert_eq!(color_for(18, 0, 30), DisplayColor::MilestoneB);
    }

    #[test]
    fn bounds_win_over_milestones() {
        assert_eq!(color_for(21, 0, 21), DisplayColor::BoundaryHigh);
        assert_eq!(color_for(18, 18, 30), DisplayColor::BoundaryLow);
    }

    #[test]
    fn min_wins_when_range_is_a_single_value() {
        assert_eq!(color_for(4, 4, 4), DisplayColor::BoundaryLow);
    }
}
