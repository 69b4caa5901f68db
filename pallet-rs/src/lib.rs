//! Heuristics for packing cuboid boxes onto a single pallet.
//!
//! A [`Catalog`](entities::Catalog) of [`BoxType`](entities::BoxType)s is shared by all runs.
//! An [`Order`](entities::Order) is expanded into box instances, which are handed to one of the
//! [`packers`]. The resulting [`Placement`](entities::Placement)s are evaluated with [`metrics`].

/// Entities to model pallet packing problems
pub mod entities;

/// Geometric primitives and the traits that operate on them
pub mod geometry;

/// Importing and exporting of instances and solutions
pub mod io;

/// Volume based evaluation of orders and packings
pub mod metrics;

/// Placement heuristics
pub mod packers;

/// Helper functions
pub mod util;
