// Animated cursors. Every frame is a closed-form function of its index:
// dot opacity decays linearly with the circular distance behind the current
// frame position, which reads as a rotating comet when the loop plays.

use image::RgbaImage;

use crate::config::{RenderConfig, Rgb};
use crate::render::draw;
use crate::render::scale::Scale;
use crate::shapes::{Frame, arrow};

// Cosmetic tuning carried over unchanged from the original theme.
const WAIT_RING_RADIUS: f32 = 8.0;
const WAIT_DOT_RADIUS: f32 = 1.5;
const WAIT_GRAY: u8 = 100;
const WAIT_FLOOR: u8 = 50;

const PROGRESS_DOTS: u32 = 8;
const PROGRESS_RING_RADIUS: f32 = 4.0;
const PROGRESS_DOT_RADIUS: f32 = 0.8;
const PROGRESS_CENTER: (f32, f32) = (16.0, 16.0);
const PROGRESS_GRAY: u8 = 80;
const PROGRESS_FLOOR: u8 = 80;

/// Opacity of dot `index` for the given frame: fully opaque at the frame
/// position, decaying linearly going backward around the ring.
fn dot_opacity(index: u32, frame: Frame) -> u8 {
    let offset = (index as i32 - frame.index() as i32).rem_euclid(frame.total() as i32);
    (255.0 * (1.0 - offset as f32 / frame.total() as f32)) as u8
}

/// Blend between the accent color (fully opaque dots) and a neutral gray
/// (faded dots).
fn dot_color(accent: Rgb, gray: u8, opacity: u8) -> Rgb {
    let t = opacity as f32 / 255.0;
    let lerp = |channel: u8| (channel as f32 * t + gray as f32 * (1.0 - t)) as u8;
    [lerp(accent[0]), lerp(accent[1]), lerp(accent[2])]
}

struct RingSpec {
    center: (i32, i32),
    radius: f32,
    dots: u32,
    dot_radius: i32,
    gray: u8,
    floor: u8,
}

fn dot_ring(img: &mut RgbaImage, frame: Frame, accent: Rgb, spec: &RingSpec) {
    for i in 0..spec.dots {
        let angle =
            std::f32::consts::TAU * i as f32 / spec.dots as f32 - std::f32::consts::FRAC_PI_2;
        let x = spec.center.0 + (spec.radius * angle.cos()).round() as i32;
        let y = spec.center.1 + (spec.radius * angle.sin()).round() as i32;

        let opacity = dot_opacity(i, frame);
        let color = dot_color(accent, spec.gray, opacity);

        draw::ellipse(
            img,
            (x, y),
            spec.dot_radius,
            spec.dot_radius,
            draw::with_alpha(color, opacity.max(spec.floor)),
            None,
        );
    }
}

/// Wait spinner: one ring of dots, as many as the animation has frames.
pub fn wait_frame(scale: &Scale, config: &RenderConfig, frame: Frame) -> RgbaImage {
    let mut img = scale.surface();
    let c = scale.center();

    dot_ring(
        &mut img,
        frame,
        config.palette.accent,
        &RingSpec {
            center: (c, c),
            radius: scale.pxf(WAIT_RING_RADIUS),
            dots: frame.total(),
            dot_radius: scale.px_min(WAIT_DOT_RADIUS, 2),
            gray: WAIT_GRAY,
            floor: WAIT_FLOOR,
        },
    );

    img
}

/// Progress: the shadowed default arrow with a small spinner tucked into
/// the lower right.
pub fn progress_frame(scale: &Scale, config: &RenderConfig, frame: Frame) -> RgbaImage {
    let mut img = arrow::default_arrow(scale, config);

    dot_ring(
        &mut img,
        frame,
        config.palette.accent,
        &RingSpec {
            center: (scale.px(PROGRESS_CENTER.0), scale.px(PROGRESS_CENTER.1)),
            radius: scale.pxf(PROGRESS_RING_RADIUS),
            dots: PROGRESS_DOTS,
            dot_radius: scale.px_min(PROGRESS_DOT_RADIUS, 1),
            gray: PROGRESS_GRAY,
            floor: PROGRESS_FLOOR,
        },
    );

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    fn wait(size: i32, index: u32) -> RgbaImage {
        let scale = Scale::new(size).unwrap();
        wait_frame(&scale, &config(), Frame::new(index, 12))
    }

    #[test]
    fn test_frames_are_periodic() {
        let a = wait(32, 3);
        let b = wait(32, 3 + 12);
        assert_eq!(a, b);

        let scale = Scale::new(32).unwrap();
        let p0 = progress_frame(&scale, &config(), Frame::new(5, 12));
        let p1 = progress_frame(&scale, &config(), Frame::new(17, 12));
        assert_eq!(p0, p1);
    }

    #[test]
    fn test_frames_are_distinct() {
        for k in 1..12 {
            assert_ne!(wait(32, 0), wait(32, k));
        }
    }

    #[test]
    fn test_brightest_dot_tracks_the_frame() {
        let scale = Scale::new(32).unwrap();
        let c = scale.center();
        let ring = scale.pxf(8.0);

        for k in 0..12u32 {
            let img = wait(32, k);

            let mut brightest = 0;
            let mut brightest_alpha = 0;
            for i in 0..12u32 {
                let angle = std::f32::consts::TAU * i as f32 / 12.0 - std::f32::consts::FRAC_PI_2;
                let x = c + (ring * angle.cos()).round() as i32;
                let y = c + (ring * angle.sin()).round() as i32;
                let alpha = img.get_pixel(x as u32, y as u32)[3];
                if alpha > brightest_alpha {
                    brightest_alpha = alpha;
                    brightest = i;
                }
            }

            assert_eq!(brightest, k, "frame {k} should peak at dot {k}");
            assert_eq!(brightest_alpha, 255);
        }
    }

    #[test]
    fn test_no_dot_fully_disappears() {
        let img = wait(32, 0);
        let scale = Scale::new(32).unwrap();
        let c = scale.center();
        let ring = scale.pxf(8.0);

        for i in 0..12u32 {
            let angle = std::f32::consts::TAU * i as f32 / 12.0 - std::f32::consts::FRAC_PI_2;
            let x = c + (ring * angle.cos()).round() as i32;
            let y = c + (ring * angle.sin()).round() as i32;
            assert!(img.get_pixel(x as u32, y as u32)[3] >= 50);
        }
    }

    #[test]
    fn test_progress_overlays_the_arrow() {
        let scale = Scale::new(24).unwrap();
        let img = progress_frame(&scale, &config(), Frame::new(0, 12));

        // Arrow body still present.
        assert_eq!(img.get_pixel(5, 10).0, [255, 255, 255, 255]);

        // Spinner dot above the ring center carries at least the floor
        // opacity.
        assert!(img.get_pixel(16, 12).0[3] >= 80);
    }
}
