// Resize-family cursors. The eight compass arrows come out of one
// parametric generator; the direction only contributes its unit vector.

use image::RgbaImage;

use crate::config::RenderConfig;
use crate::render::draw::{self, BLACK, WHITE};
use crate::render::scale::Scale;
use crate::shapes::Direction;

/// Double-headed arrow through the surface center along the direction's
/// axis. Diagonal runs are shorter than axis-aligned ones (8 vs 10 canonical
/// units) to keep the visual weight balanced.
pub fn compass(scale: &Scale, _config: &RenderConfig, direction: Direction) -> RgbaImage {
    let mut img = scale.surface();
    let c = scale.center();

    let arrow = scale.px(5.0);
    let width = scale.px_min(2.0, 2);
    let (dx, dy) = direction.vector();
    let length = if direction.is_diagonal() {
        scale.px(8.0)
    } else {
        scale.px(10.0)
    };

    let (x1, y1) = (c - dx * length / 2, c - dy * length / 2);
    let (x2, y2) = (c + dx * length / 2, c + dy * length / 2);

    draw::thick_line(
        &mut img,
        (x1 as f32, y1 as f32),
        (x2 as f32, y2 as f32),
        width,
        BLACK,
    );

    for (ex, ey, m) in [(x1, y1, -1), (x2, y2, 1)] {
        let head = if dx == 0 {
            [
                (ex, ey),
                (ex - arrow, ey - m * dy * arrow),
                (ex + arrow, ey - m * dy * arrow),
            ]
        } else if dy == 0 {
            [
                (ex, ey),
                (ex - m * dx * arrow, ey - arrow),
                (ex - m * dx * arrow, ey + arrow),
            ]
        } else {
            // Diagonal: wings along the perpendicular of the axis.
            let (px, py) = (-dy, dx);
            [
                (ex, ey),
                (
                    ex - m * dx * arrow + px * arrow / 2,
                    ey - m * dy * arrow + py * arrow / 2,
                ),
                (
                    ex - m * dx * arrow - px * arrow / 2,
                    ey - m * dy * arrow - py * arrow / 2,
                ),
            ]
        };
        draw::fill_polygon(&mut img, &head, BLACK);
    }

    img
}

fn double_arrow_with_hub(scale: &Scale, config: &RenderConfig, horizontal: bool) -> RgbaImage {
    let mut img = scale.surface();
    let c = scale.center();

    let arrow = scale.px(4.0);
    let len = scale.px(6.0);
    let w = scale.px_min(2.0, 2);

    if horizontal {
        draw::filled_rect(&mut img, c - len, c - w / 2, c + len, c + w / 2, BLACK);
        draw::fill_polygon(
            &mut img,
            &[(c - len - arrow, c), (c - len, c - arrow), (c - len, c + arrow)],
            BLACK,
        );
        draw::fill_polygon(
            &mut img,
            &[(c + len + arrow, c), (c + len, c - arrow), (c + len, c + arrow)],
            BLACK,
        );
    } else {
        draw::filled_rect(&mut img, c - w / 2, c - len, c + w / 2, c + len, BLACK);
        draw::fill_polygon(
            &mut img,
            &[(c, c - len - arrow), (c - arrow, c - len), (c + arrow, c - len)],
            BLACK,
        );
        draw::fill_polygon(
            &mut img,
            &[(c, c + len + arrow), (c - arrow, c + len), (c + arrow, c + len)],
            BLACK,
        );
    }

    let dot = scale.px_min(1.0, 1);
    draw::ellipse(&mut img, (c, c), dot, dot, draw::solid(config.palette.accent), None);

    img
}

pub fn col_resize(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    double_arrow_with_hub(scale, config, true)
}

pub fn row_resize(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    double_arrow_with_hub(scale, config, false)
}

/// Four-way move cursor: outward arrows on both axes around an accent hub.
pub fn move_arrows(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();
    let c = scale.center();

    let arrow = scale.px(4.0);
    let len = scale.px(6.0);
    let w = scale.px_min(2.0, 2);

    for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
        let (ex, ey) = (c + dx * len, c + dy * len);
        draw::thick_line(&mut img, (c as f32, c as f32), (ex as f32, ey as f32), w, BLACK);

        let (tx, ty) = (c + dx * (len + arrow), c + dy * (len + arrow));
        let head = if dx != 0 {
            [(tx, ty), (ex, ey - arrow / 2), (ex, ey + arrow / 2)]
        } else {
            [(tx, ty), (ex - arrow / 2, ey), (ex + arrow / 2, ey)]
        };
        draw::fill_polygon(&mut img, &head, BLACK);
    }

    let dot = scale.px_min(2.0, 2);
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

/// All-scroll: a hub circle with four detached ticks.
pub fn all_scroll(scale: &Scale, config: &RenderConfig) -> RgbaImage {
    let mut img = scale.surface();
    let c = scale.center();

    let hub = scale.px(4.0);
    draw::ellipse(
        &mut img,
        (c, c),
        hub,
        hub,
        WHITE,
        Some((BLACK, scale.px_min(1.0, 1))),
    );

    let dist = scale.px(7.0);
    let tri = scale.px(3.0);

    draw::fill_polygon(
        &mut img,
        &[(c, c - dist - tri), (c - tri, c - dist), (c + tri, c - dist)],
        BLACK,
    );
    draw::fill_polygon(
        &mut img,
        &[(c, c + dist + tri), (c - tri, c + dist), (c + tri, c + dist)],
        BLACK,
    );
    draw::fill_polygon(
        &mut img,
        &[(c - dist - tri, c), (c - dist, c - tri), (c - dist, c + tri)],
        BLACK,
    );
    draw::fill_polygon(
        &mut img,
        &[(c + dist + tri, c), (c + dist, c - tri), (c + dist, c + tri)],
        BLACK,
    );

    let dot = scale.px_min(1.5, 1);
    draw::ellipse(&mut img, (c, c), dot, dot, draw::solid(config.palette.accent), None);

    img
}
