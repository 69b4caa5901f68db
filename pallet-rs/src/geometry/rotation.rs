use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Axis-aligned orientation of a box, expressed as its oriented extents along (x, y, z) in mm.
/// Always a permutation of the nominal (length, width, height) of the box it orients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rotation(pub u32, pub u32, pub u32);

impl Rotation {
    pub fn x(&self) -> u32 {
        self.0
    }

    pub fn y(&self) -> u32 {
        self.1
    }

    pub fn z(&self) -> u32 {
        self.2
    }

    pub fn extents(&self) -> [u32; 3] {
        [self.0, self.1, self.2]
    }

    pub fn volume(&self) -> u64 {
        self.0 as u64 * self.1 as u64 * self.2 as u64
    }

    /// Whether `self` is a reordering of the extents of `other`
    pub fn is_permutation_of(&self, other: &Rotation) -> bool {
        let mut a = self.extents();
        let mut b = other.extents();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl From<(u32, u32, u32)> for Rotation {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Rotation(x, y, z)
    }
}

impl From<Rotation> for (u32, u32, u32) {
    fn from(r: Rotation) -> Self {
        (r.0, r.1, r.2)
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Distinct axis-aligned orientations of a box with nominal dimensions `(l, w, h)`.
///
/// The permutations are enumerated in the fixed order
/// `(l,w,h), (w,l,h), (l,h,w), (h,l,w), (w,h,l), (h,w,l)`,
/// and duplicates are removed keeping their first occurrence.
/// A cube yields 1 rotation, a box with exactly two equal edges yields 3, any other box yields 6.
pub fn canonical_rotations(l: u32, w: u32, h: u32) -> Vec<Rotation> {
    [
        Rotation(l, w, h),
        Rotation(w, l, h),
        Rotation(l, h, w),
        Rotation(h, l, w),
        Rotation(w, h, l),
        Rotation(h, w, l),
    ]
    .into_iter()
    .unique()
    .collect_vec()
}
