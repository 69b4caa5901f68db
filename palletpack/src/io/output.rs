use pallet_rs::io::ext_repr::{ExtContainer, ExtInstance, ExtSolution};
use pallet_rs::metrics::Tightness;
use serde::{Deserialize, Serialize};

use crate::config::PalletConfig;

/// Both packings of a single order, with the order's tightness
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOrderReport {
    pub order_id: usize,
    pub n_boxes: usize,
    #[serde(flatten)]
    pub tightness: Tightness,
    pub shelf: ExtSolution,
    pub random: ExtSolution,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PalletOutput {
    pub instance: ExtInstance,
    /// The pallet all orders were packed onto
    pub container: ExtContainer,
    pub reports: Vec<ExtOrderReport>,
    pub config: PalletConfig,
}
