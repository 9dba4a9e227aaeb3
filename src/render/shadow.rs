// Drop-shadow compositor. The shadow is derived from the shape's own alpha
// channel: a uniform low-opacity layer masked by it, gaussian-blurred, laid
// down at an offset, with the untouched original composited back on top.

use image::{Rgba, RgbaImage};
use imageproc::filter::gaussian_blur_f32;

use crate::config::{Rgb, ShadowStyle};
use crate::render::scale::Scale;

/// Composite a blurred, offset silhouette beneath `image`. The output always
/// has the input's dimensions; shadow pixels pushed past the edge are
/// clipped, never wrapped.
pub fn apply_shadow(
    image: &RgbaImage,
    offset: (i32, i32),
    blur: f32,
    color: Rgb,
    opacity: u8,
) -> RgbaImage {
    let (width, height) = image.dimensions();

    let mut layer = RgbaImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        let masked = ((pixel[3] as u16 * opacity as u16) / 255) as u8;
        layer.put_pixel(x, y, Rgba([color[0], color[1], color[2], masked]));
    }

    let blurred = if blur > 0.0 {
        gaussian_blur_f32(&layer, blur)
    } else {
        layer
    };

    let mut result = RgbaImage::new(width, height);
    composite_over(&mut result, &blurred, offset.0, offset.1);
    composite_over(&mut result, image, 0, 0);
    result
}

/// Shadow with offsets and blur given in canonical units by the style.
pub fn shadowed(image: &RgbaImage, scale: &Scale, style: &ShadowStyle) -> RgbaImage {
    apply_shadow(
        image,
        (scale.px(style.offset.0), scale.px(style.offset.1)),
        scale.pxf(style.blur),
        style.color,
        style.opacity,
    )
}

/// Composite source over destination using alpha blending.
fn composite_over(dst: &mut RgbaImage, src: &RgbaImage, x_offset: i32, y_offset: i32) {
    for y in 0..src.height() {
        for x in 0..src.width() {
            let dst_x = x as i32 + x_offset;
            let dst_y = y as i32 + y_offset;

            if dst_x >= 0 && dst_y >= 0 && dst_x < dst.width() as i32 && dst_y < dst.height() as i32
            {
                let src_pixel = src.get_pixel(x, y);
                let dst_pixel = dst.get_pixel(dst_x as u32, dst_y as u32);

                let blended = blend_over(*src_pixel, *dst_pixel);
                dst.put_pixel(dst_x as u32, dst_y as u32, blended);
            }
        }
    }
}

/// Alpha blend: src over dst, straight (non-premultiplied) alpha.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;

    let out_a = src_a + dst_a * (1.0 - src_a);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let r = ((src[0] as f32 * src_a + dst[0] as f32 * dst_a * (1.0 - src_a)) / out_a) as u8;
    let g = ((src[1] as f32 * src_a + dst[1] as f32 * dst_a * (1.0 - src_a)) / out_a) as u8;
    let b = ((src[2] as f32 * src_a + dst[2] as f32 * dst_a * (1.0 - src_a)) / out_a) as u8;
    let a = (out_a * 255.0) as u8;

    Rgba([r, g, b, a])
}
