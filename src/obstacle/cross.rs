use crate::clock::DayPhase;
use crate::math::Point;
use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of cells listed for a cross. The arms overlap in one cell.
pub const CROSS_CELLS: usize = 14;

/// The vertical arm's offsets from the centre, in rows.
const VERTICAL_ARM: std::ops::RangeInclusive<i32> = -2..=4;

/// The horizontal arm's offsets from the centre, in columns.
const HORIZONTAL_ARM: std::ops::RangeInclusive<i32> = -3..=3;

/// How far down the horizontal arm slides at night.
const NIGHT_ARM_SHIFT: i32 = 2;

/// A cross-shaped obstacle whose horizontal arm slides down at night.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagicCross {
    center: Point,
}

impl MagicCross {
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Lists the cells covered by the cross during the given phase of the day.
    ///
    /// Cells that would fall off the edge of the plane are left out.
    pub fn cells(&self, phase: DayPhase) -> ArrayVec<Point, CROSS_CELLS> {
        let arm_y = arm_row(phase);
        let vertical = VERTICAL_ARM.map(|dy| (0, dy));
        let horizontal = HORIZONTAL_ARM.map(|dx| (dx, arm_y));
        vertical
            .chain(horizontal)
            .filter_map(|(dx, dy)| {
                let x = self.center.x.checked_add(dx)?;
                let y = self.center.y.checked_add(dy)?;
                Some(Point::new(x, y))
            })
            .collect()
    }

    pub fn contains(&self, point: Point, phase: DayPhase) -> bool {
        let dx = point.x as i64 - self.center.x as i64;
        let dy = point.y as i64 - self.center.y as i64;
        let in_arm = |arm: &std::ops::RangeInclusive<i32>, d: i64| {
            (*arm.start() as i64..=*arm.end() as i64).contains(&d)
        };
        (dx == 0 && in_arm(&VERTICAL_ARM, dy))
            || (dy == arm_row(phase) as i64 && in_arm(&HORIZONTAL_ARM, dx))
    }
}

/// The row offset of the horizontal arm.
fn arm_row(phase: DayPhase) -> i32 {
    match phase {
        DayPhase::Day => 0,
        DayPhase::Night => NIGHT_ARM_SHIFT,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn day_shape() {
        let cross = MagicCross::new(Point::new(10, 10));
        let cells = cross.cells(DayPhase::Day);
        assert_eq!(cells.len(), CROSS_CELLS);
        assert_eq!(cells.iter().unique().count(), 13);

        for y in 8..=14 {
            assert!(cross.contains(Point::new(10, y), DayPhase::Day));
        }
        for x in 7..=13 {
            assert!(cross.contains(Point::new(x, 10), DayPhase::Day));
        }
        assert!(!cross.contains(Point::new(10, 7), DayPhase::Day));
        assert!(!cross.contains(Point::new(10, 15), DayPhase::Day));
        assert!(!cross.contains(Point::new(14, 10), DayPhase::Day));
        assert!(!cross.contains(Point::new(11, 12), DayPhase::Day));
    }

    #[test]
    fn arm_drops_at_night() {
        let cross = MagicCross::new(Point::new(0, 0));
        assert!(cross.contains(Point::new(3, 0), DayPhase::Day));
        assert!(!cross.contains(Point::new(3, 0), DayPhase::Night));
        assert!(cross.contains(Point::new(3, 2), DayPhase::Night));
        assert!(cross.contains(Point::new(-3, 2), DayPhase::Night));
        // The vertical arm does not move
        for y in -2..=4 {
            assert!(cross.contains(Point::new(0, y), DayPhase::Night));
        }
        assert_eq!(cross.cells(DayPhase::Night).iter().unique().count(), 13);
    }

    #[test]
    fn clipped_at_plane_edge() {
        let cross = MagicCross::new(Point::new(i32::MAX, i32::MAX - 1));
        let cells = cross.cells(DayPhase::Day);
        // One row below and three columns right are off the plane
        assert_eq!(cells.iter().unique().count(), 13 - 3 - 3);
        assert!(cells.iter().all(|&p| cross.contains(p, DayPhase::Day)));

        assert!(cross.contains(Point::new(i32::MAX, i32::MAX), DayPhase::Day));
        assert!(cross.contains(Point::new(i32::MAX - 3, i32::MAX - 1), DayPhase::Day));
        assert!(!cross.contains(Point::new(i32::MIN, i32::MAX - 1), DayPhase::Day));
        assert!(!cross.contains(Point::new(i32::MAX, i32::MIN), DayPhase::Night));
        // The night arm would sit below the bottom edge
        assert!(!cross.contains(Point::new(i32::MAX - 1, i32::MAX), DayPhase::Night));
    }
}
