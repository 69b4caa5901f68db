use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    ///Write the box name in the center of every box
    #[serde(default)]
    pub labels: bool,
    ///Draw the front view (x-z plane) below the top view (x-y plane)
    #[serde(default = "default_true")]
    pub front_view: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            labels: false,
            front_view: true,
        }
    }
}

/// Themes that can be selected by name in the draw options
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => SvgLayoutTheme::EARTH_TONES,
            SvgLayoutThemes::Gray => SvgLayoutTheme::GRAY,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub container_fill: Color,
    pub box_opacity: f32,
    /// Colors assigned to box names
    pub box_palette: [Color; 10],
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        container_fill: Color(0xCC, 0x82, 0x4A),
        box_opacity: 0.9,
        box_palette: [
            Color(0xFF, 0xC8, 0x79),
            Color(0x8F, 0xB3, 0x6B),
            Color(0xE0, 0x7A, 0x5F),
            Color(0x81, 0xB2, 0x9A),
            Color(0xF2, 0xCC, 0x8F),
            Color(0x6D, 0x59, 0x7A),
            Color(0xB5, 0x65, 0x76),
            Color(0x3D, 0x40, 0x5B),
            Color(0xA3, 0xB1, 0x8A),
            Color(0xD9, 0xA4, 0x41),
        ],
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        container_fill: Color(0xD3, 0xD3, 0xD3),
        box_opacity: 1.0,
        box_palette: [
            Color(0x30, 0x30, 0x30),
            Color(0x45, 0x45, 0x45),
            Color(0x5A, 0x5A, 0x5A),
            Color(0x6F, 0x6F, 0x6F),
            Color(0x84, 0x84, 0x84),
            Color(0x99, 0x99, 0x99),
            Color(0xAE, 0xAE, 0xAE),
            Color(0xC3, 0xC3, 0xC3),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x63, 0x63, 0x63),
        ],
    };
}

/// Stable color for a box name: the same name always maps to the same palette entry,
/// across runs and across layouts.
pub fn box_color(name: &str, theme: &SvgLayoutTheme) -> Color {
    //FNV-1a
    let hash = name
        .bytes()
        .fold(0xcbf29ce484222325_u64, |h, b| {
            (h ^ b as u64).wrapping_mul(0x100000001b3)
        });
    theme.box_palette[(hash % theme.box_palette.len() as u64) as usize]
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_written_as_hex() {
        assert_eq!(Color(0xCC, 0x82, 0x4A).to_string(), "#CC824A");
        assert_eq!(change_brightness(Color(0xCC, 0x82, 0x4A), 0.5).to_string(), "#664125");
    }

    #[test]
    fn themes_are_selected_by_name() {
        let options: SvgDrawOptions = serde_json::from_str(r#"{"theme": "Gray"}"#).unwrap();
        assert_eq!(options.theme, SvgLayoutThemes::Gray);
        assert_eq!(options.theme.get_theme(), SvgLayoutTheme::GRAY);
        assert!(options.front_view);

        let default: SvgDrawOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(default.theme.get_theme(), SvgLayoutTheme::EARTH_TONES);
    }

    #[test]
    fn box_colors_are_stable_per_name() {
        let theme = SvgLayoutTheme::EARTH_TONES;
        assert_eq!(box_color("DOOSGR", &theme), box_color("DOOSGR", &theme));
        assert!(theme.box_palette.contains(&box_color("IM DOOS KLEIN", &theme)));
    }
}
