// Magnifier cursors. Same glass and handle, accent plus or minus sign.

use image::RgbaImage;

use crate::config::RenderConfig;
use crate::render::draw::{self, BLACK, WHITE};
use crate::render::scale::Scale;
use crate::render::shadow::shadowed;

fn magnifier(scale: &Scale, config: &RenderConfig, with_vertical: bool) -> RgbaImage {
    let mut img = scale.surface();

    let center = (scale.px(9.0), scale.px(9.0));
    let radius = scale.px(6.0);

    // Glass.
    draw::ellipse(
        &mut img,
        center,
        radius,
        radius,
        WHITE,
        Some((BLACK, scale.px_min(1.5, 2))),
    );

    // Handle, running from the rim toward the lower right corner.
    let rim = radius as f32 * 0.7;
    draw::thick_line(
        &mut img,
        (center.0 as f32 + rim, center.1 as f32 + rim),
        (scale.pxf(20.0), scale.pxf(20.0)),
        scale.px_min(2.5, 3),
        BLACK,
    );

    // Accent sign inside the glass.
    let arm = scale.px(3.0);
    let w = scale.px_min(1.5, 2);
    let accent = draw::solid(config.palette.accent);
    draw::thick_line(
        &mut img,
        ((center.0 - arm) as f32, center.1 as f32),
        ((center.0 + arm) as f32, center.1 as f32),
        w,
        accent,
    );
    if with_vertical {
        draw::thick_line(
            &mut img,
            (center.0 as f32, (center.1 - arm) as f32),
            (center.0 as f32, (center.1 + arm) as f32),
            w,
            accent,
        );
    }

    shadowed(&img, scale, &config.shadow)
}

pub fn zoom_in(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    magnifier(scale, config, true)
}

pub fn zoom_out(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    magnifier(scale, config, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    #[test]
    fn test_zoom_in_has_both_sign_arms() {
        let scale = Scale::new(24).unwrap();
        let img = zoom_in(&scale, &config());
        let accent = config().palette.accent;

        let horizontal = img.get_pixel(7, 9).0;
        assert_eq!([horizontal[0], horizontal[1], horizontal[2]], accent);
        let vertical = img.get_pixel(9, 6).0;
        assert_eq!([vertical[0], vertical[1], vertical[2]], accent);
    }

    #[test]
    fn test_zoom_out_drops_the_vertical_arm() {
        let scale = Scale::new(24).unwrap();
        let img = zoom_out(&scale, &config());
        let accent = config().palette.accent;

        let horizontal = img.get_pixel(7, 9).0;
        assert_eq!([horizontal[0], horizontal[1], horizontal[2]], accent);
        // Above the center the glass interior stays white.
        assert_eq!(img.get_pixel(9, 6).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_glass_rim_is_black() {
        let scale = Scale::new(24).unwrap();
        let img = zoom_in(&scale, &config());
        assert_eq!(img.get_pixel(9, 3).0, [0, 0, 0, 255]);
    }
}
