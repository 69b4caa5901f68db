use itertools::Itertools;
use log::error;

use crate::entities::{BoxType, Container, Layout, Placement};
use crate::geometry::geo_traits::{CollidesWith, Shape};
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

pub fn catalog_ids_correct(box_types: &[BoxType]) -> bool {
    box_types.iter().enumerate().all(|(i, bt)| bt.id == i)
}

pub fn placement_within_container(placement: &Placement, container: &Container) -> bool {
    let region = placement.cuboid();
    if !region.fits_in(&container.cuboid()) {
        error!(
            "placement exceeds container {:?}: {placement}",
            container.dims()
        );
        return false;
    }
    true
}

pub fn rotation_matches_box_type(placement: &Placement) -> bool {
    if !placement.box_type.rotations().contains(&placement.rotation) {
        error!("rotation is not one of the box type's orientations: {placement}");
        return false;
    }
    true
}

pub fn placements_pairwise_disjoint(placements: &[Placement]) -> bool {
    let regions = placements.iter().map(|p| p.cuboid()).collect_vec();
    for (i, j) in (0..regions.len()).tuple_combinations() {
        if regions[i].collides_with(&regions[j]) {
            error!(
                "placements {i} and {j} overlap: [{}] and [{}]",
                placements[i], placements[j]
            );
            return false;
        }
    }
    true
}

/// Checks every post-condition a set of placements produced by a packer must satisfy.
pub fn placements_are_valid(placements: &[Placement], container: &Container) -> bool {
    placements
        .iter()
        .all(|p| placement_within_container(p, container) && rotation_matches_box_type(p))
        && placements_pairwise_disjoint(placements)
        && placed_volume(placements) <= container.volume()
}

pub fn layout_is_valid(layout: &Layout) -> bool {
    placements_are_valid(layout.placements(), &layout.container)
        && layout.placed_volume() == placed_volume(layout.placements())
}

fn placed_volume(placements: &[Placement]) -> u64 {
    placements.iter().map(|p| p.volume()).sum()
}
