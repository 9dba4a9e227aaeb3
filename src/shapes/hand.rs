// Hand cursors: the pointing hand for links plus the open and closed
// drag hands. All three carry the drop shadow.

use image::RgbaImage;

use crate::config::RenderConfig;
use crate::render::draw::{self, BLACK, WHITE};
use crate::render::scale::Scale;
use crate::render::shadow::shadowed;

pub fn pointer(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();

    // Palm.
    draw::rounded_rect(
        &mut img,
        (scale.px(4.0), scale.px(10.0), scale.px(18.0), scale.px(22.0)),
        scale.px(3.0),
        WHITE,
        Some(BLACK),
    );

    // Index finger pointing up.
    draw::rounded_rect(
        &mut img,
        (scale.px(7.0), scale.px(2.0), scale.px(12.0), scale.px(12.0)),
        scale.px(2.0),
        WHITE,
        Some(BLACK),
    );

    // Curled fingers.
    for x in [13.0, 15.0, 17.0] {
        draw::rounded_rect(
            &mut img,
            (
                scale.px(x - 1.0),
                scale.px(10.0),
                scale.px(x + 2.0),
                scale.px(16.0),
            ),
            scale.px(1.0),
            WHITE,
            Some(BLACK),
        );
    }

    // Thumb.
    draw::rounded_rect(
        &mut img,
        (scale.px(2.0), scale.px(12.0), scale.px(6.0), scale.px(17.0)),
        scale.px(1.0),
        WHITE,
        Some(BLACK),
    );

    // Accent fingertip.
    draw::ellipse(
        &mut img,
        (scale.px(9.5), scale.px(3.5)),
        scale.px(1.5),
        scale.px(1.5),
        draw::solid(config.palette.accent),
        Some((draw::solid(config.palette.accent_dark), 1)),
    );

    shadowed(&img, scale, &config.shadow)
}

pub fn grab(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();

    // Palm.
    draw::rounded_rect(
        &mut img,
        (scale.px(4.0), scale.px(10.0), scale.px(20.0), scale.px(22.0)),
        scale.px(3.0),
        WHITE,
        Some(BLACK),
    );

    // Spread fingers; the outer pair sits lower than the middle pair.
    for (x, top) in [(5.0, 4.0), (8.0, 2.0), (11.0, 2.0), (14.0, 4.0)] {
        draw::rounded_rect(
            &mut img,
            (
                scale.px(x),
                scale.px(top),
                scale.px(x + 3.0),
                scale.px(12.0),
            ),
            scale.px(1.0),
            WHITE,
            Some(BLACK),
        );
    }

    // Thumb.
    draw::rounded_rect(
        &mut img,
        (scale.px(17.0), scale.px(8.0), scale.px(21.0), scale.px(14.0)),
        scale.px(1.0),
        WHITE,
        Some(BLACK),
    );

    shadowed(&img, scale, &config.shadow)
}

pub fn grabbing(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();

    // Closed fist.
    draw::rounded_rect(
        &mut img,
        (scale.px(4.0), scale.px(8.0), scale.px(20.0), scale.px(20.0)),
        scale.px(4.0),
        WHITE,
        Some(BLACK),
    );

    // Knuckle bumps along the top.
    for x in [6.0, 10.0, 14.0] {
        draw::ellipse(
            &mut img,
            (scale.px(x + 1.5), scale.px(8.0)),
            scale.px(1.5),
            scale.px(2.0),
            WHITE,
            Some((BLACK, 1)),
        );
    }

    // Thumb wrapped around the side.
    draw::rounded_rect(
        &mut img,
        (scale.px(3.0), scale.px(12.0), scale.px(7.0), scale.px(18.0)),
        scale.px(1.0),
        WHITE,
        Some(BLACK),
    );

    shadowed(&img, scale, &config.shadow)
}
