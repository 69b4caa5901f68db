use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Integer point in the container's coordinate system (mm).
/// Used as the minimum corner of a placed box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point(pub u32, pub u32, pub u32);

impl Point {
    pub fn x(&self) -> u32 {
        self.0
    }

    pub fn y(&self) -> u32 {
        self.1
    }

    pub fn z(&self) -> u32 {
        self.2
    }
}

impl From<(u32, u32, u32)> for Point {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Point(x, y, z)
    }
}

impl From<Point> for (u32, u32, u32) {
    fn from(p: Point) -> Self {
        (p.0, p.1, p.2)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}
