use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::entities::BoxType;
use crate::geometry::Rotation;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Cuboid, Point};

/// A box instance that has been assigned a position and an orientation inside a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub box_type: Arc<BoxType>,
    /// Minimum corner of the placed box
    pub position: Point,
    /// Oriented extents of the placed box, one of `box_type.rotations()`
    pub rotation: Rotation,
}

impl Placement {
    pub fn new(box_type: Arc<BoxType>, position: Point, rotation: Rotation) -> Self {
        debug_assert!(rotation.is_permutation_of(&box_type.dims));
        Placement {
            box_type,
            position,
            rotation,
        }
    }

    /// The half-open region occupied by the placed box
    pub fn cuboid(&self) -> Cuboid {
        Cuboid::from_corner(self.position, self.rotation)
    }

    pub fn box_name(&self) -> &str {
        &self.box_type.name
    }
}

impl Shape for Placement {
    /// Placed volume, computed from the oriented extents
    fn volume(&self) -> u64 {
        self.cuboid().volume()
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Box: {:<20} | Position (mm): {} | Rotation (mm): {}",
            self.box_type.name, self.position, self.rotation
        )
    }
}
