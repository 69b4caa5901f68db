use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::{Container, Placement};
use crate::io::svg::svg_util::{self, SvgDrawOptions, SvgLayoutTheme};

/// A single set of placements to be drawn, with a caption.
pub struct LayoutPanel<'a> {
    pub title: &'a str,
    pub placements: &'a [Placement],
}

/// Draws layouts side by side, so packings of the same order can be compared.
///
/// Every panel shows the top view (x to the right, y downwards) and, if enabled,
/// the front view (x to the right, z upwards) below it.
/// Boxes with the same name get the same color in every panel.
pub fn layouts_to_svg(
    panels: &[LayoutPanel],
    container: &Container,
    options: SvgDrawOptions,
) -> Document {
    let (l, w, h) = (
        container.length as f32,
        container.width as f32,
        container.height as f32,
    );
    let margin = f32::max(l, w) * 0.05;
    let font_size = l * 0.04;
    let theme = options.theme.get_theme();
    let style = Style {
        stroke_width: f32::min(l, w) * 0.001 * theme.stroke_width_multiplier,
        theme: &theme,
        labels: options.labels,
    };

    let panel_height = match options.front_view {
        true => font_size * 2.0 + w + margin + h,
        false => font_size * 2.0 + w,
    };

    let mut document = Document::new();

    for (i, panel) in panels.iter().enumerate() {
        let x_offset = margin + i as f32 * (l + margin);
        let mut panel_group = Group::new()
            .set("id", format!("panel_{i}"))
            .add(
                Text::new(panel.title)
                    .set("x", x_offset)
                    .set("y", margin + font_size)
                    .set("font-size", font_size)
                    .set("font-family", "monospace"),
            );

        let top_y = margin + font_size * 2.0;
        panel_group = panel_group.add(top_view(
            panel.placements,
            container,
            (x_offset, top_y),
            &style,
        ));

        if options.front_view {
            let front_y = top_y + w + margin;
            panel_group = panel_group.add(front_view(
                panel.placements,
                container,
                (x_offset, front_y),
                &style,
            ));
        }
        document = document.add(panel_group);
    }

    let n_panels = panels.len().max(1) as f32;
    let vbox = (
        0.0,
        0.0,
        margin + n_panels * (l + margin),
        margin * 2.0 + panel_height,
    );

    document.set("viewBox", vbox)
}

/// Resolved drawing parameters shared by all views
struct Style<'a> {
    stroke_width: f32,
    theme: &'a SvgLayoutTheme,
    labels: bool,
}

fn top_view(
    placements: &[Placement],
    container: &Container,
    (ox, oy): (f32, f32),
    style: &Style,
) -> Group {
    let group = Group::new().set("id", "top_view").add(container_rect(
        (ox, oy),
        (container.length as f32, container.width as f32),
        style,
    ));

    // higher boxes are painted over lower ones
    placements
        .iter()
        .sorted_by_key(|p| (p.position.z() + p.rotation.z(), p.position.z()))
        .fold(group, |g, p| {
            let x = ox + p.position.x() as f32;
            let y = oy + p.position.y() as f32;
            let extents = (p.rotation.x() as f32, p.rotation.y() as f32);
            g.add(box_rect(p, (x, y), extents, style))
        })
}

fn front_view(
    placements: &[Placement],
    container: &Container,
    (ox, oy): (f32, f32),
    style: &Style,
) -> Group {
    let height = container.height as f32;
    let group = Group::new().set("id", "front_view").add(container_rect(
        (ox, oy),
        (container.length as f32, height),
        style,
    ));

    // boxes closest to the viewer (lowest y) are painted last
    placements
        .iter()
        .sorted_by_key(|p| std::cmp::Reverse(p.position.y()))
        .fold(group, |g, p| {
            let x = ox + p.position.x() as f32;
            let y = oy + height - (p.position.z() + p.rotation.z()) as f32;
            let extents = (p.rotation.x() as f32, p.rotation.z() as f32);
            g.add(box_rect(p, (x, y), extents, style))
        })
}

fn container_rect((x, y): (f32, f32), (width, height): (f32, f32), style: &Style) -> Rectangle {
    Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", format!("{}", style.theme.container_fill))
        .set("fill-opacity", 0.3)
        .set("stroke", "black")
        .set("stroke-width", 2.0 * style.stroke_width)
}

fn box_rect(
    placement: &Placement,
    (x, y): (f32, f32),
    (width, height): (f32, f32),
    style: &Style,
) -> Group {
    let theme = style.theme;
    let color = svg_util::box_color(placement.box_name(), theme);
    let title = Title::new(format!("{placement}"));

    let rect = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", format!("{color}"))
        .set("opacity", theme.box_opacity)
        .set("stroke", format!("{}", svg_util::change_brightness(color, 0.5)))
        .set("stroke-width", style.stroke_width);

    let group = Group::new().add(rect).add(title);
    match style.labels {
        false => group,
        true => group.add(
            Text::new(placement.box_name())
                .set("x", x + width / 2.0)
                .set("y", y + height / 2.0)
                .set("font-size", f32::min(width, height) * 0.2)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle"),
        ),
    }
}
