// Unshadowed marker cursors: the I-beam, the crosshair and the
// not-allowed ring.

use image::RgbaImage;

use crate::config::RenderConfig;
use crate::render::draw::{self, BLACK};
use crate::render::scale::Scale;

pub fn text(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();
    let c = scale.center();

    let beam_w = scale.px_min(2.0, 2);
    let serif_w = scale.px(6.0);
    let serif_h = scale.px_min(2.0, 2);

    // Vertical bar.
    draw::filled_rect(
        &mut img,
        c - beam_w / 2,
        scale.px(4.0),
        c + beam_w / 2,
        scale.px(20.0),
        BLACK,
    );

    // Serifs.
    draw::filled_rect(
        &mut img,
        c - serif_w / 2,
        scale.px(3.0),
        c + serif_w / 2,
        scale.px(3.0) + serif_h,
        BLACK,
    );
    draw::filled_rect(
        &mut img,
        c - serif_w / 2,
        scale.px(20.0),
        c + serif_w / 2,
        scale.px(20.0) + serif_h,
        BLACK,
    );

    // Accent midsection marking the insertion point.
    draw::filled_rect(
        &mut img,
        c - beam_w / 2,
        c - scale.px(2.0),
        c + beam_w / 2,
        c + scale.px(2.0),
        draw::solid(config.palette.accent),
    );

    img
}

pub fn crosshair(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();
    let c = scale.center();

    let len = scale.px(8.0);
    let w = scale.px_min(2.0, 2);
    let gap = scale.px(3.0);

    // Four ticks with a gap around the center.
    draw::filled_rect(&mut img, c - len, c - w / 2, c - gap, c + w / 2, BLACK);
    draw::filled_rect(&mut img, c + gap, c - w / 2, c + len, c + w / 2, BLACK);
    draw::filled_rect(&mut img, c - w / 2, c - len, c + w / 2, c - gap, BLACK);
    draw::filled_rect(&mut img, c - w / 2, c + gap, c + w / 2, c + len, BLACK);

    // Accent center dot.
    let dot = scale.px_min(1.5, 2);
    draw::ellipse(
        &mut img,
        (c, c),
        dot,
        dot,
        draw::solid(config.palette.accent),
        Some((draw::solid(config.palette.accent_dark), 1)),
    );

    img
}

pub fn not_allowed(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();
    let c = scale.center();

    let radius = scale.px(9.0);
    let w = scale.px_min(2.5, 2);

    draw::ring(&mut img, (c, c), radius, w, draw::solid(config.palette.denied));

    // Diagonal strike-through.
    let offset = (radius as f32 * 0.7).round() as i32;
    draw::thick_line(
        &mut img,
        ((c - offset) as f32, (c - offset) as f32),
        ((c + offset) as f32, (c + offset) as f32),
        w,
        draw::solid(config.palette.denied_dark),
    );

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    #[test]
    fn test_text_beam_layout() {
        let scale = Scale::new(24).unwrap();
        let img = text(&scale, &config());

        // Bar pixel above the accent midsection.
        assert_eq!(img.get_pixel(12, 6).0, [0, 0, 0, 255]);
        // Serif reaches sideways at the top.
        assert_eq!(img.get_pixel(10, 3).0, [0, 0, 0, 255]);
        // Accent insertion marker at the center.
        let px = img.get_pixel(12, 12).0;
        assert_eq!([px[0], px[1], px[2]], config().palette.accent);
        // Off-column stays clear.
        assert_eq!(img.get_pixel(4, 12).0[3], 0);
    }

    #[test]
    fn test_crosshair_gap_and_dot() {
        let scale = Scale::new(24).unwrap();
        let img = crosshair(&scale, &config());

        // Tick inside the left arm.
        assert_eq!(img.get_pixel(5, 12).0, [0, 0, 0, 255]);
        // Center dot is accent.
        let px = img.get_pixel(12, 12).0;
        assert_eq!([px[0], px[1], px[2]], config().palette.accent);
        // Diagonal quadrant stays clear.
        assert_eq!(img.get_pixel(6, 6).0[3], 0);
    }

    #[test]
    fn test_not_allowed_ring() {
        let scale = Scale::new(24).unwrap();
        let img = not_allowed(&scale, &config());

        let ring_px = img.get_pixel(12, 3).0;
        assert_eq!([ring_px[0], ring_px[1], ring_px[2]], config().palette.denied);

        let strike_px = img.get_pixel(12, 12).0;
        assert_eq!(
            [strike_px[0], strike_px[1], strike_px[2]],
            config().palette.denied_dark
        );

        // Off-diagonal interior stays transparent.
        assert_eq!(img.get_pixel(16, 8).0[3], 0);
    }

    #[test]
    fn test_marks_have_no_shadow() {
        let scale = Scale::new(24).unwrap();
        for img in [
            text(&scale, &config()),
            crosshair(&scale, &config()),
            not_allowed(&scale, &config()),
        ] {
            // Every painted pixel is fully opaque; no blurred shadow tail.
            assert!(img.pixels().all(|p| p[3] == 0 || p[3] == 255));
        }
    }
}
