use crate::geometry::Rotation;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Point;

/// Axis-aligned cuboid with integer bounds.
/// Represents the half-open region `[x_min, x_max) × [y_min, y_max) × [z_min, z_max)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub struct Cuboid {
    pub x_min: u32,
    pub y_min: u32,
    pub z_min: u32,
    pub x_max: u32,
    pub y_max: u32,
    pub z_max: u32,
}

impl Cuboid {
    /// Region occupied by a box with extents `rotation` whose minimum corner sits at `corner`.
    pub fn from_corner(corner: Point, rotation: Rotation) -> Self {
        let Point(x, y, z) = corner;
        let Rotation(ex, ey, ez) = rotation;
        Cuboid {
            x_min: x,
            y_min: y,
            z_min: z,
            x_max: x + ex,
            y_max: y + ey,
            z_max: z + ez,
        }
    }

    /// Whether `self` lies entirely within `other` (touching faces allowed).
    pub fn fits_in(&self, other: &Cuboid) -> bool {
        self.x_min >= other.x_min
            && self.y_min >= other.y_min
            && self.z_min >= other.z_min
            && self.x_max <= other.x_max
            && self.y_max <= other.y_max
            && self.z_max <= other.z_max
    }

    /// Extent along the x-axis
    pub fn length(&self) -> u32 {
        self.x_max - self.x_min
    }

    /// Extent along the y-axis
    pub fn width(&self) -> u32 {
        self.y_max - self.y_min
    }

    /// Extent along the z-axis
    pub fn height(&self) -> u32 {
        self.z_max - self.z_min
    }
}

impl CollidesWith<Cuboid> for Cuboid {
    /// Two half-open cuboids collide iff their interiors overlap on all three axes.
    /// Cuboids that merely share a face do not collide.
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid) -> bool {
        self.x_min < other.x_max
            && self.x_max > other.x_min
            && self.y_min < other.y_max
            && self.y_max > other.y_min
            && self.z_min < other.z_max
            && self.z_max > other.z_min
    }
}

impl Shape for Cuboid {
    fn volume(&self) -> u64 {
        self.length() as u64 * self.width() as u64 * self.height() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuboid(min: (u32, u32, u32), extents: (u32, u32, u32)) -> Cuboid {
        Cuboid::from_corner(min.into(), extents.into())
    }

    #[test]
    fn touching_faces_do_not_collide() {
        let a = cuboid((0, 0, 0), (100, 100, 100));
        let b = cuboid((100, 0, 0), (100, 100, 100));
        let c = cuboid((0, 0, 100), (100, 100, 100));
        assert!(!a.collides_with(&b));
        assert!(!b.collides_with(&a));
        assert!(!a.collides_with(&c));
    }

    #[test]
    fn overlap_requires_all_three_axes() {
        let a = cuboid((0, 0, 0), (100, 100, 100));
        // overlaps in x and y, but not in z
        let b = cuboid((50, 50, 150), (100, 100, 100));
        assert!(!a.collides_with(&b));
        let c = cuboid((50, 50, 50), (100, 100, 100));
        assert!(a.collides_with(&c));
        assert!(c.collides_with(&a));
        // fully enclosed
        let d = cuboid((10, 10, 10), (5, 5, 5));
        assert!(a.collides_with(&d));
    }

    #[test]
    fn fits_in_allows_touching_walls() {
        let container = cuboid((0, 0, 0), (1000, 1400, 1400));
        assert!(cuboid((900, 0, 1300), (100, 100, 100)).fits_in(&container));
        assert!(container.fits_in(&container));
        assert!(!cuboid((950, 0, 0), (100, 100, 100)).fits_in(&container));
    }

    #[test]
    fn from_corner_volume() {
        let c = cuboid((10, 20, 30), (100, 200, 300));
        assert_eq!((c.x_max, c.y_max, c.z_max), (110, 220, 330));
        assert_eq!(c.volume(), 6_000_000);
    }
}
