use anyhow::Result;

use crate::entities::{Container, Placement};
use crate::io::ext_repr::{ExtContainer, ExtPlacement, ExtSolution};
use crate::metrics;
use crate::packers::PackResult;

pub fn export_container(container: &Container) -> ExtContainer {
    ExtContainer {
        length: container.length,
        width: container.width,
        height: container.height,
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        box_type_id: placement.box_type.id,
        box_name: placement.box_type.name.clone(),
        position: placement.position.into(),
        rotation: placement.rotation.into(),
    }
}

/// Exports a packing run together with its space usage.
/// Fails if the placements violate the container volume, see [`metrics::wasted_space`].
pub fn export_solution(result: &PackResult, container: &Container) -> Result<ExtSolution> {
    Ok(ExtSolution {
        placements: result.placements.iter().map(export_placement).collect(),
        stats: metrics::pack_stats(result, container)?,
        warnings: result.warnings.clone(),
    })
}
