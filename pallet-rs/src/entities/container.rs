use anyhow::{Result, ensure};

use crate::geometry::Rotation;
use crate::geometry::primitives::Cuboid;

/// The pallet: a fixed rectangular region with its minimum corner at the origin.
/// Never modified during a packing run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Container {
    /// Extent along the x-axis (mm)
    pub length: u32,
    /// Extent along the y-axis (mm)
    pub width: u32,
    /// Extent along the z-axis (mm)
    pub height: u32,
}

impl Container {
    /// The reference pallet of 1000 x 1400 x 1400 mm
    pub const REFERENCE: Container = Container {
        length: 1000,
        width: 1400,
        height: 1400,
    };

    pub fn try_new(length: u32, width: u32, height: u32) -> Result<Self> {
        ensure!(
            length > 0 && width > 0 && height > 0,
            "container has a zero dimension: {length}x{width}x{height}"
        );
        Ok(Container {
            length,
            width,
            height,
        })
    }

    pub fn dims(&self) -> [u32; 3] {
        [self.length, self.width, self.height]
    }

    pub fn volume(&self) -> u64 {
        self.length as u64 * self.width as u64 * self.height as u64
    }

    /// The region covered by the container
    pub fn cuboid(&self) -> Cuboid {
        Cuboid {
            x_min: 0,
            y_min: 0,
            z_min: 0,
            x_max: self.length,
            y_max: self.width,
            z_max: self.height,
        }
    }

    /// Whether a box in the given orientation fits inside the empty container
    pub fn fits(&self, rotation: &Rotation) -> bool {
        rotation.x() <= self.length && rotation.y() <= self.width && rotation.z() <= self.height
    }
}

impl Default for Container {
    fn default() -> Self {
        Container::REFERENCE
    }
}
