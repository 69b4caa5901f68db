use serde::{Deserialize, Serialize};

use crate::metrics::PackStats;
use crate::packers::PackWarning;

/// External representation of a [`BoxType`](crate::entities::BoxType).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBoxType {
    /// Label of the box type, does not need to be unique
    pub name: String,
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

/// External representation of a [`Container`](crate::entities::Container).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtContainer {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

/// External representation of an [`Order`](crate::entities::Order):
/// a row of an order table, `quantities[j]` is the requested count of box type `j`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtOrder {
    /// Identifier of the order, defaults to its position in the instance
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<usize>,
    pub quantities: Vec<usize>,
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// The pallet to pack onto, the reference pallet if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub container: Option<ExtContainer>,
    /// The catalog of box types, the reference catalog if empty
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub box_types: Vec<ExtBoxType>,
    pub orders: Vec<ExtOrder>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Index of the box type in the catalog
    pub box_type_id: usize,
    pub box_name: String,
    /// Minimum corner (x, y, z) in mm
    pub position: (u32, u32, u32),
    /// Oriented extents (x, y, z) in mm
    pub rotation: (u32, u32, u32),
}

/// External representation of the outcome of one packing run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub placements: Vec<ExtPlacement>,
    #[serde(flatten)]
    pub stats: PackStats,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<PackWarning>,
}
