// The default arrow and its help variant.

use image::RgbaImage;

use crate::config::RenderConfig;
use crate::render::draw::{self, BLACK, GLYPH_COLS, GLYPH_ROWS, WHITE};
use crate::render::scale::Scale;
use crate::render::shadow::shadowed;

/// The theme's primary arrow: white fill, black outline, accent highlight
/// along the left edge, drop shadow.
pub fn default_arrow(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();

    let outline = [
        (scale.px(3.0), scale.px(3.0)),
        (scale.px(3.0), scale.px(19.0)),
        (scale.px(7.0), scale.px(15.0)),
        (scale.px(11.0), scale.px(20.0)),
        (scale.px(13.0), scale.px(18.0)),
        (scale.px(9.0), scale.px(13.0)),
        (scale.px(15.0), scale.px(13.0)),
    ];
    draw::polygon(&mut img, &outline, WHITE, Some(BLACK));

    draw::thick_line(
        &mut img,
        (scale.pxf(3.0), scale.pxf(3.0)),
        (scale.pxf(3.0), scale.pxf(10.0)),
        scale.px_min(1.0, 1),
        draw::solid(config.palette.accent),
    );

    shadowed(&img, scale, &config.shadow)
}

/// Arrow with an accent question-mark badge in the lower right.
pub fn help(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = default_arrow(scale, config);

    let center = (scale.px(16.0), scale.px(16.0));
    let radius = scale.px(5.0);
    draw::ellipse(
        &mut img,
        center,
        radius,
        radius,
        draw::solid(config.palette.accent),
        Some((draw::solid(config.palette.accent_dark), 1)),
    );

    let cell = scale.px_min(0.8, 1);
    draw::stamp_glyph(
        &mut img,
        center.0 - GLYPH_COLS * cell / 2,
        center.1 - GLYPH_ROWS * cell / 2,
        cell,
        WHITE,
    );

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::scale::Scale;

    fn render_default(size: i32) -> RgbaImage {
        let scale = Scale::new(size).unwrap();
        default_arrow(&scale, &RenderConfig::default())
    }

    #[test]
    fn test_default_arrow_dimensions() {
        assert_eq!(render_default(24).dimensions(), (24, 24));
        assert_eq!(render_default(64).dimensions(), (64, 64));
    }

    #[test]
    fn test_default_arrow_body_and_shadow() {
        let img = render_default(24);

        // Interior of the arrow stays opaque white over the shadow.
        assert_eq!(img.get_pixel(5, 10).0, [255, 255, 255, 255]);

        // Somewhere a dark semi-transparent shadow pixel exists.
        let has_shadow = img
            .pixels()
            .any(|p| p[3] > 0 && p[3] < 255 && p[0] < 50 && p[1] < 50 && p[2] < 50);
        assert!(has_shadow);

        // The top-right corner is outside both arrow and shadow.
        assert_eq!(img.get_pixel(23, 0).0[3], 0);
    }

    #[test]
    fn test_default_arrow_accent_edge() {
        let img = render_default(24);
        let accent = RenderConfig::default().palette.accent;
        let px = img.get_pixel(3, 6).0;
        assert_eq!([px[0], px[1], px[2]], accent);
    }

    #[test]
    fn test_help_badge() {
        let scale = Scale::new(24).unwrap();
        let config = RenderConfig::default();
        let img = help(&scale, &config);

        // Badge interior away from the glyph is accent-colored.
        let px = img.get_pixel(13, 16).0;
        assert_eq!([px[0], px[1], px[2]], config.palette.accent);
    }
}
