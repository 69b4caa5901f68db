use ordered_float::OrderedFloat;
use svg::Document;
use svg::node::element::{Circle, Group, Line, Path, Rectangle, Text};
use svg::node::element::path::Data;

use crate::io::output::ExtOrderReport;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN: f64 = 70.0;
const N_TICKS: usize = 5;

const SHELF_COLOR: &str = "#3D405B";
const RANDOM_COLOR: &str = "#E07A5F";

/// Scatter plot of the wasted space of both packers against the tightness of every order.
///
/// Shelf packings are drawn as circles, random packings as crosses.
/// The x axis runs from 0 to the largest tightness (at least 1.0), the y axis from 0% to 100%.
pub fn tightness_vs_waste_svg(reports: &[ExtOrderReport]) -> Document {
    let max_tightness = reports
        .iter()
        .map(|r| OrderedFloat(r.tightness.tightness))
        .max()
        .map_or(1.0, |t| f64::max(t.into_inner(), 1.0));

    let plot_w = WIDTH - 2.0 * MARGIN;
    let plot_h = HEIGHT - 2.0 * MARGIN;
    let to_x = |t: f64| MARGIN + t / max_tightness * plot_w;
    let to_y = |pct: f64| HEIGHT - MARGIN - pct / 100.0 * plot_h;

    let frame = Rectangle::new()
        .set("x", MARGIN)
        .set("y", MARGIN)
        .set("width", plot_w)
        .set("height", plot_h)
        .set("fill", "white")
        .set("stroke", "black")
        .set("stroke-width", 1.5);

    let title = Text::new("Tightness vs. wasted space")
        .set("x", WIDTH / 2.0)
        .set("y", MARGIN / 2.0)
        .set("font-size", 20)
        .set("font-family", "monospace")
        .set("text-anchor", "middle");

    let shelf_points = reports.iter().fold(Group::new().set("id", "shelf"), |g, r| {
        g.add(
            Circle::new()
                .set("cx", to_x(r.tightness.tightness))
                .set("cy", to_y(r.shelf.stats.usage.wasted_pct))
                .set("r", 4)
                .set("fill", SHELF_COLOR)
                .set("fill-opacity", 0.8),
        )
    });

    let random_points = reports.iter().fold(Group::new().set("id", "random"), |g, r| {
        let (x, y) = (
            to_x(r.tightness.tightness),
            to_y(r.random.stats.usage.wasted_pct),
        );
        g.add(cross(x, y, 4.0, RANDOM_COLOR))
    });

    Document::new()
        .set("viewBox", format!("0 0 {WIDTH} {HEIGHT}"))
        .add(frame)
        .add(title)
        .add(axes(max_tightness, &to_x, &to_y))
        .add(shelf_points)
        .add(random_points)
        .add(legend())
}

fn axes(max_tightness: f64, to_x: &impl Fn(f64) -> f64, to_y: &impl Fn(f64) -> f64) -> Group {
    let x_ticks = (0..=N_TICKS)
        .map(|i| max_tightness * i as f64 / N_TICKS as f64)
        .map(|t| tick(to_x(t), HEIGHT - MARGIN, format!("{t:.2}"), true));
    let y_ticks = (0..=N_TICKS)
        .map(|i| 100.0 * i as f64 / N_TICKS as f64)
        .map(|pct| tick(MARGIN, to_y(pct), format!("{pct:.0}"), false));

    let x_label = Text::new("tightness (box volume / pallet volume)")
        .set("x", WIDTH / 2.0)
        .set("y", HEIGHT - MARGIN / 4.0)
        .set("font-size", 14)
        .set("font-family", "monospace")
        .set("text-anchor", "middle");
    let y_label = Text::new("wasted space (%)")
        .set("x", MARGIN / 4.0)
        .set("y", HEIGHT / 2.0)
        .set("font-size", 14)
        .set("font-family", "monospace")
        .set("text-anchor", "middle")
        .set("transform", format!("rotate(-90 {} {})", MARGIN / 4.0, HEIGHT / 2.0));

    x_ticks
        .chain(y_ticks)
        .fold(Group::new().set("id", "axes"), |g, t| g.add(t))
        .add(x_label)
        .add(y_label)
}

fn tick(x: f64, y: f64, label: String, horizontal_axis: bool) -> Group {
    let (line, text) = match horizontal_axis {
        true => (
            Line::new().set("x1", x).set("y1", y).set("x2", x).set("y2", y + 6.0),
            Text::new(label)
                .set("x", x)
                .set("y", y + 22.0)
                .set("text-anchor", "middle"),
        ),
        false => (
            Line::new().set("x1", x - 6.0).set("y1", y).set("x2", x).set("y2", y),
            Text::new(label)
                .set("x", x - 10.0)
                .set("y", y)
                .set("text-anchor", "end")
                .set("dominant-baseline", "middle"),
        ),
    };
    Group::new()
        .add(line.set("stroke", "black"))
        .add(text.set("font-size", 12).set("font-family", "monospace"))
}

fn cross(x: f64, y: f64, size: f64, color: &str) -> Path {
    let data = Data::new()
        .move_to((x - size, y - size))
        .line_to((x + size, y + size))
        .move_to((x - size, y + size))
        .line_to((x + size, y - size));
    Path::new()
        .set("d", data)
        .set("stroke", color)
        .set("stroke-width", 2)
        .set("fill", "none")
}

fn legend() -> Group {
    let (x, y) = (WIDTH - MARGIN - 150.0, MARGIN + 20.0);
    let entry = |dy: f64, label: &str| {
        Text::new(label)
            .set("x", x + 15.0)
            .set("y", y + dy)
            .set("font-size", 13)
            .set("font-family", "monospace")
            .set("dominant-baseline", "middle")
    };
    Group::new()
        .set("id", "legend")
        .add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", 4)
                .set("fill", SHELF_COLOR),
        )
        .add(entry(0.0, "shelf packing"))
        .add(cross(x, y + 20.0, 4.0, RANDOM_COLOR))
        .add(entry(20.0, "random packing"))
}

#[cfg(test)]
mod tests {
    use pallet_rs::io::ext_repr::ExtSolution;
    use pallet_rs::metrics::{PackStats, SpaceUsage, Tightness};

    use itertools::Itertools;

    use super::*;

    fn solution(wasted_pct: f64) -> ExtSolution {
        ExtSolution {
            placements: vec![],
            stats: PackStats {
                n_requested: 0,
                n_placed: 0,
                n_dropped: 0,
                usage: SpaceUsage {
                    used_volume: 0,
                    wasted_volume: 0,
                    wasted_pct,
                },
            },
            warnings: vec![],
        }
    }

    #[test]
    fn one_marker_per_packing() {
        let reports = (0..3)
            .map(|i| ExtOrderReport {
                order_id: i,
                n_boxes: 0,
                tightness: Tightness {
                    total_box_volume: 0,
                    tightness: 0.4 * i as f64,
                },
                shelf: solution(50.0),
                random: solution(80.0),
            })
            .collect_vec();
        let svg = tightness_vs_waste_svg(&reports).to_string();

        // 3 shelf points and 1 legend marker
        assert_eq!(svg.matches("<circle").count(), 3 + 1);
        // 3 random points and 1 legend marker
        assert_eq!(svg.matches("<path").count(), 3 + 1);
    }

    #[test]
    fn empty_batch_still_draws_axes() {
        let svg = tightness_vs_waste_svg(&[]).to_string();
        assert!(svg.contains("wasted space (%)"));
        assert_eq!(svg.matches("<circle").count(), 1);
    }
}
