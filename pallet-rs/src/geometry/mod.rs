/// Traits for geometric entities
pub mod geo_traits;

/// Geometric primitives: points and axis-aligned cuboids
pub mod primitives;

mod rotation;

#[doc(inline)]
pub use rotation::Rotation;
#[doc(inline)]
pub use rotation::canonical_rotations;
