// Primitive renderer: the drawing vocabulary every shape generator is built
// from. All operations mutate the target surface in place with overwrite
// semantics; alpha blending only happens in the shadow compositor.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::config::Rgb;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub fn solid(c: Rgb) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], 255])
}

pub fn with_alpha(c: Rgb, alpha: u8) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], alpha])
}

/// Fill a polygon given by its vertices. The vertex list is implicitly
/// closed; consecutive duplicates and a trailing repeat of the first vertex
/// are dropped before handing off to imageproc.
pub fn fill_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    let mut poly: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for &(x, y) in points {
        let p = Point::new(x, y);
        if poly.last() != Some(&p) {
            poly.push(p);
        }
    }
    if poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }

    match poly.len() {
        0 => {}
        1 => {
            let p = poly[0];
            if p.x >= 0 && p.y >= 0 && p.x < img.width() as i32 && p.y < img.height() as i32 {
                img.put_pixel(p.x as u32, p.y as u32, color);
            }
        }
        2 => draw_line_segment_mut(
            img,
            (poly[0].x as f32, poly[0].y as f32),
            (poly[1].x as f32, poly[1].y as f32),
            color,
        ),
        _ => draw_polygon_mut(img, &poly, color),
    }
}

/// Stroke the closed boundary of a polygon with 1-px segments.
pub fn outline_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let (ax, ay) = points[i];
        let (bx, by) = points[(i + 1) % points.len()];
        draw_line_segment_mut(img, (ax as f32, ay as f32), (bx as f32, by as f32), color);
    }
}

pub fn polygon(img: &mut RgbaImage, points: &[(i32, i32)], fill: Rgba<u8>, outline: Option<Rgba<u8>>) {
    fill_polygon(img, points, fill);
    if let Some(outline_color) = outline {
        outline_polygon(img, points, outline_color);
    }
}

/// Fill the rectangle spanning both corner pixels inclusively.
pub fn filled_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    draw_filled_rect_mut(img, rect, color);
}

fn rounded_silhouette(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: Rgba<u8>,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let radius = radius.min((x1 - x0) / 2).min((y1 - y0) / 2).max(0);
    if radius == 0 {
        filled_rect(img, x0, y0, x1, y1, color);
        return;
    }

    filled_rect(img, x0 + radius, y0, x1 - radius, y1, color);
    filled_rect(img, x0, y0 + radius, x1, y1 - radius, color);
    for (cx, cy) in [
        (x0 + radius, y0 + radius),
        (x1 - radius, y0 + radius),
        (x0 + radius, y1 - radius),
        (x1 - radius, y1 - radius),
    ] {
        draw_filled_ellipse_mut(img, (cx, cy), radius, radius, color);
    }
}

/// Rounded rectangle over the inclusive pixel bounds. An outline is drawn by
/// painting the full silhouette in the outline color and the 1-px-inset
/// silhouette in the fill color.
pub fn rounded_rect(
    img: &mut RgbaImage,
    bounds: (i32, i32, i32, i32),
    radius: i32,
    fill: Rgba<u8>,
    outline: Option<Rgba<u8>>,
) {
    let (x0, y0, x1, y1) = bounds;
    match outline {
        Some(outline_color) => {
            rounded_silhouette(img, x0, y0, x1, y1, radius, outline_color);
            rounded_silhouette(img, x0 + 1, y0 + 1, x1 - 1, y1 - 1, (radius - 1).max(0), fill);
        }
        None => rounded_silhouette(img, x0, y0, x1, y1, radius, fill),
    }
}

/// Filled ellipse with an optional outline of the given stroke width. The
/// stroke runs inward from the outer radius.
pub fn ellipse(
    img: &mut RgbaImage,
    center: (i32, i32),
    rx: i32,
    ry: i32,
    fill: Rgba<u8>,
    outline: Option<(Rgba<u8>, i32)>,
) {
    match outline {
        Some((outline_color, width)) => {
            draw_filled_ellipse_mut(img, center, rx, ry, outline_color);
            if rx > width && ry > width {
                draw_filled_ellipse_mut(img, center, rx - width, ry - width, fill);
            }
        }
        None => draw_filled_ellipse_mut(img, center, rx, ry, fill),
    }
}

/// Hollow circle with a stroke width, leaving the interior untouched.
pub fn ring(img: &mut RgbaImage, center: (i32, i32), radius: i32, width: i32, color: Rgba<u8>) {
    let (cx, cy) = center;
    let outer = radius as f32;
    let inner = (radius - width).max(0) as f32;
    for y in (cy - radius).max(0)..=(cy + radius).min(img.height() as i32 - 1) {
        for x in (cx - radius).max(0)..=(cx + radius).min(img.width() as i32 - 1) {
            let d = (((x - cx) * (x - cx) + (y - cy) * (y - cy)) as f32).sqrt();
            if d >= inner && d <= outer {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Straight line with a stroke width. The quad spans (width - 1)/2 to either
/// side of the segment so an axis-aligned stroke covers exactly `width` rows.
pub fn thick_line(img: &mut RgbaImage, start: (f32, f32), end: (f32, f32), width: i32, color: Rgba<u8>) {
    if width <= 1 {
        draw_line_segment_mut(img, start, end, color);
        return;
    }

    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        let c = (start.0.round() as i32, start.1.round() as i32);
        draw_filled_ellipse_mut(img, c, width / 2, width / 2, color);
        return;
    }

    if width == 2 {
        // A half-pixel quad collapses under rounding; stroke the segment
        // twice, one pixel apart along the perpendicular's dominant axis.
        let (sx, sy) = if dy.abs() >= dx.abs() {
            (1.0, 0.0)
        } else {
            (0.0, 1.0)
        };
        draw_line_segment_mut(img, start, end, color);
        draw_line_segment_mut(
            img,
            (start.0 + sx, start.1 + sy),
            (end.0 + sx, end.1 + sy),
            color,
        );
        return;
    }

    let half = (width - 1) as f32 / 2.0;
    let (nx, ny) = (-dy / len * half, dx / len * half);
    let quad = [
        ((start.0 + nx).round() as i32, (start.1 + ny).round() as i32),
        ((end.0 + nx).round() as i32, (end.1 + ny).round() as i32),
        ((end.0 - nx).round() as i32, (end.1 - ny).round() as i32),
        ((start.0 - nx).round() as i32, (start.1 - ny).round() as i32),
    ];
    fill_polygon(img, &quad, color);
}

/// The one glyph this renderer knows: a question mark on a 5x7 cell grid,
/// stamped at `cell` pixels per grid cell.
const QUESTION_GLYPH: [[u8; 5]; 7] = [
    [0, 1, 1, 1, 0],
    [1, 0, 0, 0, 1],
    [0, 0, 0, 0, 1],
    [0, 0, 0, 1, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0],
];

pub const GLYPH_COLS: i32 = 5;
pub const GLYPH_ROWS: i32 = 7;

pub fn stamp_glyph(img: &mut RgbaImage, left: i32, top: i32, cell: i32, color: Rgba<u8>) {
    let cell = cell.max(1);
    for (row, cells) in QUESTION_GLYPH.iter().enumerate() {
        for (col, &on) in cells.iter().enumerate() {
            if on == 1 {
                let x = left + col as i32 * cell;
                let y = top + row as i32 * cell;
                filled_rect(img, x, y, x + cell - 1, y + cell - 1, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(size: u32) -> RgbaImage {
        RgbaImage::new(size, size)
    }

    #[test]
    fn test_fill_polygon_covers_interior() {
        let mut img = blank(24);
        fill_polygon(&mut img, &[(4, 4), (20, 4), (12, 18)], WHITE);

        assert_eq!(img.get_pixel(12, 8).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 23).0[3], 0);
    }

    #[test]
    fn test_fill_polygon_tolerates_closed_vertex_list() {
        let mut img = blank(16);
        fill_polygon(&mut img, &[(2, 2), (12, 2), (12, 12), (2, 2)], WHITE);
        assert_eq!(img.get_pixel(10, 4).0[3], 255);
    }

    #[test]
    fn test_thick_line_width() {
        let mut img = blank(16);
        thick_line(&mut img, (2.0, 8.0), (13.0, 8.0), 3, BLACK);

        assert_eq!(img.get_pixel(7, 7).0[3], 255);
        assert_eq!(img.get_pixel(7, 8).0[3], 255);
        assert_eq!(img.get_pixel(7, 9).0[3], 255);
        assert_eq!(img.get_pixel(7, 4).0[3], 0);
        assert_eq!(img.get_pixel(7, 12).0[3], 0);
    }

    #[test]
    fn test_thick_line_diagonal_min_width() {
        let mut img = blank(16);
        thick_line(&mut img, (2.0, 2.0), (12.0, 12.0), 2, BLACK);

        // Two adjacent diagonal strokes, no collapse to a single pixel run.
        assert_eq!(img.get_pixel(7, 7).0[3], 255);
        assert_eq!(img.get_pixel(8, 7).0[3], 255);
    }

    #[test]
    fn test_rounded_rect_fill_and_corners() {
        let mut img = blank(24);
        rounded_rect(&mut img, (4, 4, 19, 19), 4, WHITE, Some(BLACK));

        // Interior is the fill color, the edge midpoint is outline.
        assert_eq!(img.get_pixel(12, 12).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(12, 4).0, [0, 0, 0, 255]);
        // Outside the corner radius stays transparent.
        assert_eq!(img.get_pixel(4, 4).0[3], 0);
    }

    #[test]
    fn test_ellipse_outline_stroke() {
        let mut img = blank(24);
        ellipse(&mut img, (12, 12), 8, 8, WHITE, Some((BLACK, 2)));

        assert_eq!(img.get_pixel(12, 12).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(12, 4).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_ring_leaves_center_transparent() {
        let mut img = blank(24);
        ring(&mut img, (12, 12), 9, 2, BLACK);

        assert_eq!(img.get_pixel(12, 12).0[3], 0);
        assert_eq!(img.get_pixel(12, 3).0[3], 255);
        assert_eq!(img.get_pixel(21, 12).0[3], 255);
    }

    #[test]
    fn test_ring_clips_at_surface_bounds() {
        let mut img = blank(8);
        ring(&mut img, (0, 0), 6, 2, BLACK);
        assert_eq!(img.get_pixel(6, 0).0[3], 255);
    }

    #[test]
    fn test_stamp_glyph_marks_cells() {
        let mut img = blank(16);
        stamp_glyph(&mut img, 4, 4, 1, WHITE);

        // Top bar of the question mark.
        assert_eq!(img.get_pixel(6, 4).0[3], 255);
        // The gap row above the dot.
        assert_eq!(img.get_pixel(6, 9).0[3], 0);
        // The dot.
        assert_eq!(img.get_pixel(6, 10).0[3], 255);
    }
}
