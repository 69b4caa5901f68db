use rand::Rng;

use crate::entities::{BoxType, Container};
use crate::geometry::Rotation;
use crate::geometry::primitives::{Cuboid, Point};

/// Samples candidate placements of a box uniformly over its feasible rotations
/// and over all integer positions that keep it inside the container.
pub struct UniformCuboidSampler {
    pub container: Container,
    /// Rotations of the box that fit inside the empty container
    pub rotations: Vec<Rotation>,
    pub n_samples: usize,
}

impl UniformCuboidSampler {
    /// Returns `None` if no rotation of the box fits inside the container.
    pub fn new(box_type: &BoxType, container: Container) -> Option<Self> {
        let rotations: Vec<Rotation> = box_type
            .rotations()
            .iter()
            .filter(|r| container.fits(r))
            .copied()
            .collect();

        match rotations.is_empty() {
            true => None,
            false => Some(Self {
                container,
                rotations,
                n_samples: 0,
            }),
        }
    }

    /// Samples a candidate position and rotation, together with the region it would occupy.
    pub fn sample(&mut self, rng: &mut impl Rng) -> (Point, Rotation, Cuboid) {
        self.n_samples += 1;

        let rotation = self.rotations[rng.random_range(0..self.rotations.len())];
        let x = rng.random_range(0..=self.container.length - rotation.x());
        let y = rng.random_range(0..=self.container.width - rotation.y());
        let z = rng.random_range(0..=self.container.height - rotation.z());

        let position = Point(x, y, z);
        (position, rotation, Cuboid::from_corner(position, rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn only_fitting_rotations_are_sampled() {
        let container = Container::try_new(100, 500, 500).unwrap();
        let bt = BoxType::new(0, "plank", 300, 50, 20).unwrap();
        let mut sampler = UniformCuboidSampler::new(&bt, container).unwrap();
        assert!(sampler.rotations.iter().all(|r| r.x() <= 100));
        assert_eq!(sampler.rotations.len(), 4);

        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            let (_, _, region) = sampler.sample(&mut rng);
            assert!(region.fits_in(&container.cuboid()));
        }
        assert_eq!(sampler.n_samples, 1000);
    }

    #[test]
    fn infeasible_box_has_no_sampler() {
        let bt = BoxType::new(0, "beam", 2000, 10, 10).unwrap();
        assert!(UniformCuboidSampler::new(&bt, Container::REFERENCE).is_none());
    }
}
