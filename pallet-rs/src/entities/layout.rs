use crate::entities::{Container, Placement};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Cuboid;
use crate::util::assertions;

/// Defines a configuration of [`Placement`]s in a [`Container`].
/// It is built up by a single packing run and is not shared between runs.
/// The occupied regions of all placed boxes are kept alongside, to check candidates for collisions.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The container used for this layout
    pub container: Container,
    /// How the boxes are placed in the container, in order of placement
    placements: Vec<Placement>,
    /// Occupied region of each placement, same order as `placements`
    hazards: Vec<Cuboid>,
    placed_volume: u64,
}

impl Layout {
    pub fn new(container: Container) -> Self {
        Layout {
            container,
            placements: vec![],
            hazards: vec![],
            placed_volume: 0,
        }
    }

    /// Whether `candidate` would overlap any box already placed in the layout
    pub fn collides(&self, candidate: &Cuboid) -> bool {
        self.hazards.iter().any(|h| h.collides_with(candidate))
    }

    /// Whether `candidate` lies entirely inside the container
    pub fn contains(&self, candidate: &Cuboid) -> bool {
        candidate.fits_in(&self.container.cuboid())
    }

    pub fn place(&mut self, placement: Placement) {
        let region = placement.cuboid();
        assert!(
            self.contains(&region),
            "placement {placement} exceeds the container bounds {:?}",
            self.container.dims()
        );
        debug_assert!(
            !self.collides(&region),
            "placement {placement} overlaps an earlier placement"
        );

        self.placed_volume += placement.volume();
        self.hazards.push(region);
        self.placements.push(placement);

        debug_assert!(assertions::layout_is_valid(self));
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    /// Sum of the volumes of all placed boxes
    pub fn placed_volume(&self) -> u64 {
        self.placed_volume
    }

    /// Ratio of placed volume to container volume
    pub fn usage(&self) -> f64 {
        self.placed_volume as f64 / self.container.volume() as f64
    }
}
