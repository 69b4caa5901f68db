use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::{BoxType, Container, Placement};

mod random;
mod sampler;
mod shelf;

#[doc(inline)]
pub use random::RandomPacker;
#[doc(inline)]
pub use sampler::UniformCuboidSampler;
#[doc(inline)]
pub use shelf::ShelfPacker;

/// A heuristic that places a sequence of box instances inside a container.
///
/// Every call is an independent run: no state is carried over between calls other than
/// the packer's configuration (and, for randomized packers, the state of their random source).
pub trait Packer {
    fn pack(&mut self, boxes: &[Arc<BoxType>], container: &Container) -> PackResult;
}

/// Outcome of a single packing run.
#[derive(Clone, Debug)]
pub struct PackResult {
    /// The boxes that were placed, in order of placement
    pub placements: Vec<Placement>,
    /// Non-fatal diagnostics raised during the run
    pub warnings: Vec<PackWarning>,
    /// Number of box instances that were handed to the packer
    pub n_requested: usize,
}

impl PackResult {
    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    pub fn n_dropped(&self) -> usize {
        self.n_requested - self.placements.len()
    }
}

/// Non-fatal diagnostic surfaced to the caller of a packer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PackWarning {
    /// No non-overlapping position was found within the attempt budget
    AttemptsExhausted { box_name: String, attempts: usize },
}

impl Display for PackWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PackWarning::AttemptsExhausted { box_name, attempts } => {
                write!(f, "could not place box {box_name} after {attempts} attempts")
            }
        }
    }
}
