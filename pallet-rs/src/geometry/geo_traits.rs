/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of solids occupying a region of the container.
pub trait Shape {
    /// Volume of the interior of the shape, in mm³
    fn volume(&self) -> u64;
}
