use pallet_rs::io::ext_repr::ExtContainer;
use pallet_rs::io::svg::SvgDrawOptions;
use pallet_rs::packers::RandomPacker;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Configuration of a batch run
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct PalletConfig {
    /// Seed for the PRNG.
    /// If undefined, the random packer will run in non-deterministic mode using entropy
    #[serde(default)]
    pub prng_seed: Option<u64>,
    /// Number of positions the random packer samples for a single box before dropping it
    #[serde(default = "default_max_attempts")]
    pub max_attempts_per_box: usize,
    /// Pallet to use instead of the one defined in the instance
    #[serde(default)]
    pub container: Option<ExtContainer>,
    /// Write an SVG with both packings for every order
    #[serde(default = "default_true")]
    pub svg_per_order: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_true() -> bool {
    true
}

fn default_max_attempts() -> usize {
    RandomPacker::<SmallRng>::DEFAULT_MAX_ATTEMPTS
}

impl Default for PalletConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            max_attempts_per_box: default_max_attempts(),
            container: None,
            svg_per_order: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
