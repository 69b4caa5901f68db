use anyhow::{Result, ensure};

use crate::geometry::{Rotation, canonical_rotations};

/// A type of box that can be ordered and placed on a pallet.
///
/// Entries are created once per catalog and shared read-only (behind an `Arc`) by every
/// box instance and [`Placement`](crate::entities::Placement) that refers to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxType {
    /// Index of the box type in its [`Catalog`](crate::entities::Catalog)
    pub id: usize,
    /// Label of the box type, not unique
    pub name: String,
    /// Nominal dimensions (length, width, height) in mm
    pub dims: Rotation,
    /// Distinct orientations of the box, in canonical order
    rotations: Vec<Rotation>,
}

impl BoxType {
    pub fn new(
        id: usize,
        name: impl Into<String>,
        length: u32,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let name = name.into();
        ensure!(
            length > 0 && width > 0 && height > 0,
            "box type {name} has a zero dimension: {length}x{width}x{height}"
        );
        Ok(BoxType {
            id,
            name,
            dims: Rotation(length, width, height),
            rotations: canonical_rotations(length, width, height),
        })
    }

    /// The distinct orientations of this box, see [`canonical_rotations`]
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Nominal volume in mm³
    pub fn volume(&self) -> u64 {
        self.dims.volume()
    }

    /// Tallest z-extent over all allowed rotations
    pub fn max_height(&self) -> u32 {
        self.rotations
            .iter()
            .map(|r| r.z())
            .fold(0, u32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_are_cached_at_construction() {
        let bt = BoxType::new(0, "DOOSGRS", 455, 300, 200).unwrap();
        assert_eq!(bt.rotations().len(), 6);
        assert_eq!(bt.rotations()[0], bt.dims);
        assert_eq!(bt.max_height(), 455);
        assert_eq!(bt.volume(), 455 * 300 * 200);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(BoxType::new(0, "flat", 100, 0, 100).is_err());
    }
}
