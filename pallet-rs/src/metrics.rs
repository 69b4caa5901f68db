use std::fmt::{Display, Formatter};
use std::sync::Arc;

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::entities::{BoxType, Container, Placement};
use crate::geometry::geo_traits::Shape;
use crate::packers::PackResult;

/// How much of the container volume a set of placements uses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceUsage {
    /// Sum of the volumes of all placed boxes (mm³)
    pub used_volume: u64,
    /// Container volume not covered by any placed box (mm³)
    pub wasted_volume: u64,
    /// `wasted_volume` as a percentage of the container volume, in [0, 100]
    pub wasted_pct: f64,
}

/// Volume of an order relative to the container, regardless of how it was packed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tightness {
    /// Sum of the nominal volumes of all box instances (mm³)
    pub total_box_volume: u64,
    /// `total_box_volume / container volume`, values above 1.0 mean the order cannot fit
    pub tightness: f64,
}

/// Summary of a single packing run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackStats {
    pub n_requested: usize,
    pub n_placed: usize,
    pub n_dropped: usize,
    #[serde(flatten)]
    pub usage: SpaceUsage,
}

impl Display for PackStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} placed, {} dropped, {:.2}% wasted",
            self.n_placed, self.n_requested, self.n_dropped, self.usage.wasted_pct
        )
    }
}

/// Computes used and wasted volume of the placements.
///
/// The placed volume is computed from the oriented extents of every placement.
/// Returns an error if the placed volume exceeds the container volume,
/// which can only happen if a packer produced overlapping or out-of-bounds placements.
pub fn wasted_space(placements: &[Placement], container: &Container) -> Result<SpaceUsage> {
    let container_volume = container.volume();
    let used_volume: u64 = placements.iter().map(|p| p.volume()).sum();

    ensure!(
        used_volume <= container_volume,
        "placed volume ({used_volume} mm³) exceeds the container volume ({container_volume} mm³), \
         the placements are invalid"
    );

    let wasted_volume = container_volume - used_volume;
    let wasted_pct = wasted_volume as f64 / container_volume as f64 * 100.0;

    Ok(SpaceUsage {
        used_volume,
        wasted_volume,
        wasted_pct,
    })
}

pub fn pack_stats(result: &PackResult, container: &Container) -> Result<PackStats> {
    Ok(PackStats {
        n_requested: result.n_requested,
        n_placed: result.n_placed(),
        n_dropped: result.n_dropped(),
        usage: wasted_space(&result.placements, container)?,
    })
}

/// Computes the tightness of a sequence of box instances:
/// their total nominal volume divided by the container volume.
/// Every instance counts, whether or not a packer managed to place it.
pub fn instance_tightness(boxes: &[Arc<BoxType>], container: &Container) -> Tightness {
    let total_box_volume: u64 = boxes.iter().map(|bt| bt.volume()).sum();
    Tightness {
        total_box_volume,
        tightness: total_box_volume as f64 / container.volume() as f64,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::entities::{Catalog, Order};
    use crate::geometry::Rotation;
    use crate::geometry::primitives::Point;

    #[test]
    fn single_cube_in_cubic_container() {
        let container = Container::try_new(1000, 1000, 1000).unwrap();
        let cube = Arc::new(BoxType::new(0, "cube", 100, 100, 100).unwrap());
        let placements = vec![Placement::new(cube, Point(0, 0, 0), Rotation(100, 100, 100))];

        let usage = wasted_space(&placements, &container).unwrap();
        assert_eq!(usage.used_volume, 1_000_000);
        assert_eq!(usage.wasted_volume, 999_000_000);
        assert!(approx_eq!(f64, usage.wasted_pct, 99.9, epsilon = 1e-9));
    }

    #[test]
    fn empty_placements_waste_everything() {
        let usage = wasted_space(&[], &Container::REFERENCE).unwrap();
        assert_eq!(usage.used_volume, 0);
        assert_eq!(usage.wasted_volume, Container::REFERENCE.volume());
        assert!(approx_eq!(f64, usage.wasted_pct, 100.0));
    }

    #[test]
    fn used_volume_follows_rotation_extents() {
        let container = Container::try_new(1000, 1000, 1000).unwrap();
        let bt = Arc::new(BoxType::new(0, "plank", 300, 50, 20).unwrap());
        let placements = vec![
            Placement::new(bt.clone(), Point(0, 0, 0), Rotation(300, 50, 20)),
            Placement::new(bt, Point(0, 100, 0), Rotation(20, 300, 50)),
        ];
        let usage = wasted_space(&placements, &container).unwrap();
        assert_eq!(usage.used_volume, 2 * 300 * 50 * 20);
    }

    #[test]
    fn overfull_placements_are_an_error() {
        let container = Container::try_new(100, 100, 100).unwrap();
        let cube = Arc::new(BoxType::new(0, "cube", 100, 100, 100).unwrap());
        let p = Placement::new(cube, Point(0, 0, 0), Rotation(100, 100, 100));
        assert!(wasted_space(&[p.clone(), p], &container).is_err());
    }

    #[test]
    fn stats_count_dropped_boxes() {
        let container = Container::try_new(100, 100, 100).unwrap();
        let cube = Arc::new(BoxType::new(0, "cube", 100, 100, 100).unwrap());
        let result = PackResult {
            placements: vec![Placement::new(cube, Point(0, 0, 0), Rotation(100, 100, 100))],
            warnings: vec![],
            n_requested: 3,
        };
        let stats = pack_stats(&result, &container).unwrap();
        assert_eq!((stats.n_requested, stats.n_placed, stats.n_dropped), (3, 1, 2));
        assert_eq!(stats.usage.wasted_volume, 0);
        assert_eq!(stats.to_string(), "1/3 placed, 2 dropped, 0.00% wasted");
    }

    #[test]
    fn tightness_scales_linearly() {
        let catalog = Catalog::reference();
        let order = Order::from_row(0, &[1, 3, 0, 2, 1, 0, 0, 4, 2, 1]);

        let container = Container::REFERENCE;
        let single = instance_tightness(&order.expand(&catalog).unwrap(), &container);
        let double = instance_tightness(&order.scaled(2).expand(&catalog).unwrap(), &container);

        assert_eq!(double.total_box_volume, 2 * single.total_box_volume);
        assert!(approx_eq!(f64, double.tightness, 2.0 * single.tightness, ulps = 4));
    }

    #[test]
    fn tightness_may_exceed_one() {
        let container = Container::try_new(100, 100, 100).unwrap();
        let cube = Arc::new(BoxType::new(0, "cube", 100, 100, 100).unwrap());
        let t = instance_tightness(&[cube.clone(), cube.clone(), cube], &container);
        assert_eq!(t.total_box_volume, 3_000_000);
        assert!(approx_eq!(f64, t.tightness, 3.0));
    }
}
