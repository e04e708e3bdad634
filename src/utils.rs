use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, Serialize, Deserialize,
)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// the 8 surrounding positions (Moore neighbourhood), unclipped
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| pos!(dx, dy)))
            .filter(|offset| *offset != pos!(0, 0))
            .map(move |offset| self + offset)
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

#[test]
fn test_neighbors() {
    let around: Vec<_> = pos!(5, 5).neighbors().collect();
    assert_eq!(around.len(), 8);
    assert!(!around.contains(&pos!(5, 5)));
    assert!(around.contains(&pos!(4, 4)));
    assert!(around.contains(&pos!(6, 6)));
    assert!(around.contains(&pos!(5, 6)));
}
