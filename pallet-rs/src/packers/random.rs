use std::sync::Arc;

use anyhow::{Result, ensure};
use log::{debug, info, warn};
use rand::Rng;
use thousands::Separable;

use crate::entities::{BoxType, Container, Layout, Placement};
use crate::packers::sampler::UniformCuboidSampler;
use crate::packers::{PackResult, PackWarning, Packer};
use crate::util::assertions;

/// Stochastic heuristic: every box is dropped at uniformly random feasible coordinates
/// until a position is found that does not overlap any previously placed box.
///
/// The random source is owned by the packer and injected at construction,
/// seed it (e.g. `SmallRng::seed_from_u64`) to obtain reproducible runs.
pub struct RandomPacker<R: Rng> {
    pub rng: R,
    /// Maximum number of samples drawn for a single box before it is dropped
    pub max_attempts_per_box: usize,
    /// Total number of samples drawn over the lifetime of the packer
    pub sample_counter: usize,
}

impl<R: Rng> RandomPacker<R> {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

    pub fn new(rng: R, max_attempts_per_box: usize) -> Result<Self> {
        ensure!(
            max_attempts_per_box > 0,
            "the attempt budget per box must be positive"
        );
        Ok(Self {
            rng,
            max_attempts_per_box,
            sample_counter: 0,
        })
    }

    pub fn with_default_budget(rng: R) -> Self {
        Self {
            rng,
            max_attempts_per_box: Self::DEFAULT_MAX_ATTEMPTS,
            sample_counter: 0,
        }
    }

    pub fn solve(&mut self, boxes: &[Arc<BoxType>], container: &Container) -> PackResult {
        let mut layout = Layout::new(*container);
        let mut warnings = vec![];
        let samples_before = self.sample_counter;

        for box_type in boxes {
            let Some(mut sampler) = UniformCuboidSampler::new(box_type, *container) else {
                debug!(
                    "[RAND] box {} ({}) does not fit the container in any rotation, skipping it",
                    box_type.name, box_type.dims
                );
                continue;
            };

            let placement = sample_placement(
                &layout,
                box_type,
                &mut sampler,
                &mut self.rng,
                self.max_attempts_per_box,
            );
            self.sample_counter += sampler.n_samples;

            match placement {
                Some(p) => {
                    debug!("[RAND] placing {p} after {} attempts", sampler.n_samples);
                    layout.place(p);
                }
                None => {
                    let warning = PackWarning::AttemptsExhausted {
                        box_name: box_type.name.clone(),
                        attempts: self.max_attempts_per_box,
                    };
                    warn!("[RAND] {warning}");
                    warnings.push(warning);
                }
            }
        }

        info!(
            "[RAND] placed {}/{} boxes, {} mm³ ({:.2}% usage, {} samples)",
            layout.n_placed(),
            boxes.len(),
            layout.placed_volume().separate_with_commas(),
            layout.usage() * 100.0,
            (self.sample_counter - samples_before).separate_with_commas()
        );

        let placements = layout.into_placements();
        debug_assert!(assertions::placements_are_valid(&placements, container));

        PackResult {
            placements,
            warnings,
            n_requested: boxes.len(),
        }
    }
}

impl<R: Rng> Packer for RandomPacker<R> {
    fn pack(&mut self, boxes: &[Arc<BoxType>], container: &Container) -> PackResult {
        self.solve(boxes, container)
    }
}

/// Draws up to `max_attempts` candidates.
/// Returns the first one that does not collide with the layout.
pub fn sample_placement(
    layout: &Layout,
    box_type: &Arc<BoxType>,
    sampler: &mut UniformCuboidSampler,
    rng: &mut impl Rng,
    max_attempts: usize,
) -> Option<Placement> {
    for _ in 0..max_attempts {
        let (position, rotation, region) = sampler.sample(rng);
        if !layout.collides(&region) {
            return Some(Placement::new(box_type.clone(), position, rotation));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Catalog, Order};
    use crate::geometry::Rotation;
    use crate::geometry::primitives::Point;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn box_type(name: &str, l: u32, w: u32, h: u32) -> Arc<BoxType> {
        Arc::new(BoxType::new(0, name, l, w, h).unwrap())
    }

    #[test]
    fn zero_slack_container_places_at_origin() {
        let container = Container::try_new(455, 300, 200).unwrap();
        let bt = box_type("DOOSGRS", 455, 300, 200);
        for seed in 0..20 {
            let mut packer = RandomPacker::new(SmallRng::seed_from_u64(seed), 1).unwrap();
            let result = packer.solve(&[bt.clone()], &container);
            assert_eq!(result.n_placed(), 1);
            assert_eq!(result.placements[0].position, Point(0, 0, 0));
            assert_eq!(result.placements[0].rotation, Rotation(455, 300, 200));
            assert_eq!(packer.sample_counter, 1);
        }
    }

    #[test]
    fn infeasible_box_is_skipped_without_attempts() {
        let mut packer = RandomPacker::with_default_budget(SmallRng::seed_from_u64(0));
        let result = packer.solve(&[box_type("beam", 2000, 10, 10)], &Container::REFERENCE);
        assert!(result.placements.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(packer.sample_counter, 0);
    }

    #[test]
    fn exhausted_budget_raises_a_warning() {
        // the second cube can never fit next to the first one
        let container = Container::try_new(100, 100, 100).unwrap();
        let cube = box_type("cube", 100, 100, 100);
        let mut packer = RandomPacker::new(SmallRng::seed_from_u64(0), 25).unwrap();
        let result = packer.solve(&[cube.clone(), cube], &container);

        assert_eq!(result.n_placed(), 1);
        assert_eq!(
            result.warnings,
            vec![PackWarning::AttemptsExhausted {
                box_name: "cube".to_string(),
                attempts: 25
            }]
        );
        assert_eq!(packer.sample_counter, 26);
    }

    #[test]
    fn zero_budget_is_rejected() {
        assert!(RandomPacker::new(SmallRng::seed_from_u64(0), 0).is_err());
    }

    #[test]
    fn seeded_runs_are_reproducible_and_valid() {
        let catalog = Catalog::reference();
        let boxes = Order::from_row(0, &[4, 2, 3, 1, 2, 5, 0, 3, 6, 2])
            .expand(&catalog)
            .unwrap();

        let run = |seed| {
            let mut packer = RandomPacker::new(SmallRng::seed_from_u64(seed), 200).unwrap();
            packer.solve(&boxes, &Container::REFERENCE)
        };
        let a = run(42);
        let b = run(42);
        assert_eq!(a.placements, b.placements);
        assert_eq!(a.warnings, b.warnings);
        assert_eq!(a.n_placed() + a.warnings.len(), boxes.len());
        assert!(assertions::placements_are_valid(&a.placements, &Container::REFERENCE));
    }
}
