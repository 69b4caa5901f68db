mod layout_to_svg;
mod svg_util;

#[doc(inline)]
pub use layout_to_svg::*;

#[doc(inline)]
pub use svg_util::Color;
#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgLayoutTheme;
#[doc(inline)]
pub use svg_util::SvgLayoutThemes;
#[doc(inline)]
pub use svg_util::box_color;
