use anyhow::{Context, Result};
use log::info;
use pallet_rs::entities::{Container, Instance, Order};
use pallet_rs::io::export;
use pallet_rs::io::import::import_container;
use pallet_rs::metrics::{self, PackStats, Tightness};
use pallet_rs::packers::{PackResult, RandomPacker, ShelfPacker};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use thousands::Separable;

use crate::config::PalletConfig;
use crate::io::output::ExtOrderReport;

/// Both packings of a single order, with their evaluation
#[derive(Clone, Debug)]
pub struct OrderOutcome {
    pub order_id: usize,
    pub n_boxes: usize,
    pub tightness: Tightness,
    pub shelf: PackResult,
    pub shelf_stats: PackStats,
    pub random: PackResult,
    pub random_stats: PackStats,
}

impl OrderOutcome {
    pub fn export(&self, container: &Container) -> Result<ExtOrderReport> {
        Ok(ExtOrderReport {
            order_id: self.order_id,
            n_boxes: self.n_boxes,
            tightness: self.tightness,
            shelf: export::export_solution(&self.shelf, container)?,
            random: export::export_solution(&self.random, container)?,
        })
    }
}

/// The container to pack onto: the one from the config if present, otherwise the instance's.
pub fn resolve_container(instance: &Instance, config: &PalletConfig) -> Result<Container> {
    match &config.container {
        Some(ec) => import_container(ec).context("invalid container in config"),
        None => Ok(instance.container),
    }
}

/// Random source for the order at `index` in the batch.
/// Seeded runs derive an independent stream per order, so results do not depend on scheduling.
pub fn order_rng(config: &PalletConfig, index: usize) -> SmallRng {
    match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => SmallRng::from_os_rng(),
    }
}

/// Packs a single order with both heuristics.
/// Fails if either packer produces placements that overfill the container.
pub fn run_order(
    instance: &Instance,
    order: &Order,
    container: &Container,
    config: &PalletConfig,
    rng: SmallRng,
) -> Result<OrderOutcome> {
    let boxes = order.expand(&instance.catalog)?;
    let tightness = metrics::instance_tightness(&boxes, container);

    let shelf = ShelfPacker::new().solve(&boxes, container);
    let shelf_stats = metrics::pack_stats(&shelf, container)
        .with_context(|| format!("shelf packing of order {} is invalid", order.id))?;

    let random = RandomPacker::new(rng, config.max_attempts_per_box)?.solve(&boxes, container);
    let random_stats = metrics::pack_stats(&random, container)
        .with_context(|| format!("random packing of order {} is invalid", order.id))?;

    info!(
        "[RUN] order {}: {} boxes, {} mm³, tightness {:.4} | shelf: {} | random: {}",
        order.id,
        boxes.len(),
        tightness.total_box_volume.separate_with_commas(),
        tightness.tightness,
        shelf_stats,
        random_stats,
    );

    Ok(OrderOutcome {
        order_id: order.id,
        n_boxes: boxes.len(),
        tightness,
        shelf,
        shelf_stats,
        random,
        random_stats,
    })
}

/// Packs all orders of the instance in parallel onto `container`.
/// Outcomes are returned in the order of the instance.
pub fn run_batch(
    instance: &Instance,
    container: &Container,
    config: &PalletConfig,
) -> Result<Vec<OrderOutcome>> {
    info!(
        "[RUN] packing {} orders ({} boxes) on a {}x{}x{} mm pallet",
        instance.orders.len(),
        instance.total_box_qty(),
        container.length,
        container.width,
        container.height
    );

    instance
        .orders
        .par_iter()
        .enumerate()
        .map(|(i, order)| run_order(instance, order, container, config, order_rng(config, i)))
        .collect()
}
