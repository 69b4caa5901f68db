use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{info, warn};
use pallet_rs::entities::Container;
use pallet_rs::io::export::export_container;
use pallet_rs::io::import::import_instance;
use pallet_rs::io::svg::{LayoutPanel, layouts_to_svg};
use palletpack::config::PalletConfig;
use palletpack::io;
use palletpack::io::cli::Cli;
use palletpack::io::output::PalletOutput;
use palletpack::io::scatter_svg::tightness_vs_waste_svg;
use palletpack::run::{self, OrderOutcome};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PalletConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };
    if let Some(seed) = args.seed {
        config.prng_seed = Some(seed);
    }

    info!("Successfully parsed PalletConfig: {config:?}");

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import_instance(&ext_instance)?;

    fs::create_dir_all(&args.solution_folder).with_context(|| {
        format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        )
    })?;

    let container = run::resolve_container(&instance, &config)?;
    let outcomes = run::run_batch(&instance, &container, &config)?;

    let reports = outcomes
        .iter()
        .map(|o| o.export(&container))
        .collect::<Result<Vec<_>>>()?;

    {
        let svg = tightness_vs_waste_svg(&reports);
        io::write_svg(&svg, &args.solution_folder.join("tightness_vs_waste.svg"))?;
    }

    if config.svg_per_order {
        for outcome in &outcomes {
            let svg = order_svg(outcome, &config, &container);
            let svg_path = args
                .solution_folder
                .join(format!("order_{}.svg", outcome.order_id));
            io::write_svg(&svg, &svg_path)?;
        }
    }

    {
        let n_warnings: usize = outcomes
            .iter()
            .map(|o| o.shelf.warnings.len() + o.random.warnings.len())
            .sum();
        let mean_waste = |f: fn(&OrderOutcome) -> f64| {
            outcomes.iter().map(f).sum::<f64>() / outcomes.len().max(1) as f64
        };
        info!(
            "[MAIN] {} orders packed, mean waste: shelf {:.2}%, random {:.2}%, {} warnings",
            outcomes.len(),
            mean_waste(|o| o.shelf_stats.usage.wasted_pct),
            mean_waste(|o| o.random_stats.usage.wasted_pct),
            n_warnings
        );
    }

    let output = PalletOutput {
        instance: ext_instance,
        container: export_container(&container),
        reports,
        config,
    };
    io::write_json(&output, &args.solution_folder.join("report.json"))?;

    Ok(())
}

fn order_svg(
    outcome: &OrderOutcome,
    config: &PalletConfig,
    container: &Container,
) -> svg::Document {
    let titles = [
        ("Shelf", outcome.shelf_stats.usage.wasted_pct),
        ("Random", outcome.random_stats.usage.wasted_pct),
    ]
    .iter()
    .map(|(name, wasted)| format!("{name} Packing - Wasted: {wasted:.2}%"))
    .collect_vec();

    let panels = [
        LayoutPanel {
            title: &titles[0],
            placements: &outcome.shelf.placements,
        },
        LayoutPanel {
            title: &titles[1],
            placements: &outcome.random.placements,
        },
    ];
    layouts_to_svg(&panels, container, config.svg_draw_options)
}
