//! Procedural clock-face icon renderer.
//!
//! A render is a pure function of the configuration and the requested size:
//! no I/O, no randomness, no time dependence, so repeat renders are
//! pixel-identical. All drawing happens on a supersampled RGBA canvas which
//! is Lanczos-downscaled and flattened to opaque RGB at the end; the
//! primitives only need a one-pixel soft coverage edge to come out clean.

use image::{imageops, DynamicImage, ImageBuffer, RgbImage, Rgba, RgbaImage};
use thiserror::Error;

/// Errors raised by the rendering core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The requested output size cannot produce an image.
    #[error("invalid icon size {0}: must be a positive number of pixels")]
    InvalidSize(u32),
}

/// Named colors for every element of the icon face.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Background gradient top; also the solid fill when the gradient is off.
    pub bg_top: [u8; 3],
    /// Background gradient bottom.
    pub bg_bottom: [u8; 3],
    /// Ticks and hour hand.
    pub muted: [u8; 3],
    /// Minute hand.
    pub hand: [u8; 3],
    /// Solid route marker.
    pub route_a: [u8; 3],
    /// Ring route marker.
    pub route_b: [u8; 3],
    /// Center dot.
    pub center: [u8; 3],
    /// Barely-there face outline circle (RGBA).
    pub face_outline: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg_top: [18, 28, 48],
            bg_bottom: [8, 15, 32],
            muted: [160, 175, 195],
            hand: [245, 248, 252],
            route_a: [125, 211, 252],
            route_b: [251, 191, 36],
            center: [80, 200, 248],
            face_outline: [255, 255, 255, 18],
        }
    }
}

/// Parameters controlling one render pass.
///
/// Geometry fractions (tick span, hand lengths, marker orbit) are module
/// constants resolved against the shared center and face radius; the config
/// chooses the palette, the working scale and which optional layers to draw.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub palette: Palette,
    /// Supersampling factor for the working canvas.
    pub supersample: u32,
    /// Padding between canvas edge and clock face, as a fraction of canvas size.
    pub padding_frac: f32,
    /// Vertical background gradient instead of a solid fill.
    pub gradient: bool,
    /// Edge-darkening vignette layer.
    pub vignette: bool,
    /// Blurred glass-sheen highlight layer.
    pub sheen: bool,
    /// Translucent outline circle at the face radius.
    pub face_ring: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            supersample: 4,
            padding_frac: 0.12,
            gradient: true,
            vignette: false,
            sheen: false,
            face_ring: true,
        }
    }
}

// Clock geometry. Angles use the clock convention (0° = 12 o'clock,
// increasing clockwise); lengths are fractions of the face radius and stroke
// widths fractions of the working canvas size.
const TICK_ANGLES: [f32; 4] = [0.0, 90.0, 180.0, 270.0];
const TICK_INNER: f32 = 0.80;
const TICK_OUTER: f32 = 0.95;
const TICK_WIDTH: f32 = 0.028;

const HOUR_ANGLE: f32 = 300.0; // ~10 o'clock
const HOUR_LEN: f32 = 0.40;
const HOUR_WIDTH: f32 = 0.045;

const MINUTE_ANGLE: f32 = 72.0; // ~2 o'clock
const MINUTE_LEN: f32 = 0.62;
const MINUTE_WIDTH: f32 = 0.032;

/// Orbit of both route markers, as a fraction of the face radius.
pub const MARKER_ORBIT: f32 = 0.88;
/// Angle of the solid route marker.
pub const MARKER_A_ANGLE: f32 = 150.0;
/// Radius of the solid route marker, as a fraction of the face radius.
pub const MARKER_A_RADIUS: f32 = 0.07;
/// Angle of the ring route marker.
pub const MARKER_B_ANGLE: f32 = 222.0;
/// Ring marker radius relative to the solid marker radius.
pub const MARKER_B_SCALE: f32 = 0.9;
const MARKER_B_WIDTH: f32 = 0.014;

const CENTER_DOT_RADIUS: f32 = 0.025;
const FACE_RING_WIDTH: f32 = 0.006;

// Vignette steps (radius fraction of canvas size, step alpha). Each step
// darkens everything outside its radius, so the accumulated alpha rises
// monotonically from the untouched face out to the corners.
const VIGNETTE_STEPS: [(f32, f32); 6] = [
    (0.70, 0.04),
    (0.65, 0.06),
    (0.60, 0.08),
    (0.55, 0.10),
    (0.50, 0.12),
    (0.45, 0.14),
];

// Glass sheen: translucent white ellipses (center x, center y, rx, ry,
// alpha), all positions and radii as fractions of the canvas size. The
// layer is Gaussian-blurred before compositing.
const SHEEN_ELLIPSES: [(f32, f32, f32, f32, u8); 2] = [
    (0.44, 0.20, 0.52, 0.30, 30),
    (0.60, 0.08, 0.34, 0.16, 22),
];
const SHEEN_BLUR_SIGMA: f32 = 0.02;

/// Convert a clock-convention angle to a point `r` away from `(cx, cy)`.
/// 0° points straight up (12 o'clock) and angles increase clockwise.
pub fn polar(cx: f32, cy: f32, r: f32, deg: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (cx + r * rad.sin(), cy - r * rad.cos())
}

/// Per-channel linear interpolation between two colors at `t` in [0, 1],
/// rounded to the nearest channel value.
pub fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Usable face radius for a square canvas after padding is subtracted.
pub fn face_radius(canvas: f32, padding_frac: f32) -> f32 {
    (canvas - 2.0 * padding_frac * canvas) / 2.0
}

/// Deterministic clock-face icon renderer.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    config: RenderConfig,
}

impl IconRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the icon at `size` x `size` pixels.
    ///
    /// Draws every layer on a supersampled working canvas in fixed order
    /// (background, vignette, face ring, ticks, hands, route markers, center
    /// dot, sheen), then downscales with Lanczos and drops the alpha channel.
    pub fn render(&self, size: u32) -> Result<RgbImage, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidSize(size));
        }

        let cfg = &self.config;
        let pal = &cfg.palette;
        let s = size * cfg.supersample.max(1);
        let sf = s as f32;
        let (cx, cy) = (sf / 2.0, sf / 2.0);
        let face_r = face_radius(sf, cfg.padding_frac);

        let mut canvas = self.base_layer(s);

        if cfg.vignette {
            let shade = vignette_layer(s, (cx, cy));
            imageops::overlay(&mut canvas, &shade, 0, 0);
        }

        if cfg.face_ring {
            let width = (sf * FACE_RING_WIDTH).max(1.0);
            draw_ring(&mut canvas, (cx, cy), face_r, width, Rgba(pal.face_outline));
        }

        for &deg in &TICK_ANGLES {
            let inner = polar(cx, cy, face_r * TICK_INNER, deg);
            let outer = polar(cx, cy, face_r * TICK_OUTER, deg);
            draw_stroke(&mut canvas, inner, outer, sf * TICK_WIDTH, opaque(pal.muted));
        }

        let hour_tip = polar(cx, cy, face_r * HOUR_LEN, HOUR_ANGLE);
        draw_stroke(&mut canvas, (cx, cy), hour_tip, sf * HOUR_WIDTH, opaque(pal.muted));

        let minute_tip = polar(cx, cy, face_r * MINUTE_LEN, MINUTE_ANGLE);
        draw_stroke(&mut canvas, (cx, cy), minute_tip, sf * MINUTE_WIDTH, opaque(pal.hand));

        let dot_r = face_r * MARKER_A_RADIUS;
        let a_center = polar(cx, cy, face_r * MARKER_ORBIT, MARKER_A_ANGLE);
        fill_circle(&mut canvas, a_center, dot_r, opaque(pal.route_a));

        let b_center = polar(cx, cy, face_r * MARKER_ORBIT, MARKER_B_ANGLE);
        let ring_w = (sf * MARKER_B_WIDTH).max(1.0);
        draw_ring(&mut canvas, b_center, dot_r * MARKER_B_SCALE, ring_w, opaque(pal.route_b));

        // Above the hand strokes.
        fill_circle(&mut canvas, (cx, cy), sf * CENTER_DOT_RADIUS, opaque(pal.center));

        if cfg.sheen {
            let sheen = sheen_layer(s);
            imageops::overlay(&mut canvas, &sheen, 0, 0);
        }

        let resized = imageops::resize(&canvas, size, size, imageops::FilterType::Lanczos3);
        Ok(DynamicImage::ImageRgba8(resized).to_rgb8())
    }

    /// Opaque base canvas: vertical gradient scanlines, or a solid fill.
    fn base_layer(&self, s: u32) -> RgbaImage {
        let pal = &self.config.palette;
        if self.config.gradient {
            let sf = s as f32;
            ImageBuffer::from_fn(s, s, |_, y| {
                let [r, g, b] = lerp_rgb(pal.bg_top, pal.bg_bottom, y as f32 / sf);
                Rgba([r, g, b, 255])
            })
        } else {
            ImageBuffer::from_pixel(s, s, opaque(pal.bg_top))
        }
    }
}

fn opaque(c: [u8; 3]) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], 255])
}

/// Source-over blend of `color` onto one canvas pixel, scaled by `coverage`.
fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
    let a = f32::from(color.0[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    let dst = img.get_pixel_mut(x, y);
    for ch in 0..3 {
        let src = f32::from(color.0[ch]);
        let cur = f32::from(dst.0[ch]);
        dst.0[ch] = (src * a + cur * (1.0 - a)).round() as u8;
    }
    dst.0[3] = dst.0[3].max((a * 255.0).round() as u8);
}

/// Clamped pixel bounds for a primitive, half-open on the high side.
fn bounds(img: &RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32) -> (u32, u32, u32, u32) {
    let xa = x0.floor().max(0.0) as u32;
    let ya = y0.floor().max(0.0) as u32;
    let xb = ((x1.ceil() as i64) + 1).clamp(0, i64::from(img.width())) as u32;
    let yb = ((y1.ceil() as i64) + 1).clamp(0, i64::from(img.height())) as u32;
    (xa, ya, xb, yb)
}

/// Stroke a straight segment with round caps and a one-pixel soft edge.
fn draw_stroke(img: &mut RgbaImage, a: (f32, f32), b: (f32, f32), width: f32, color: Rgba<u8>) {
    let half = (width / 2.0).max(0.35);
    let (x0, y0, x1, y1) = bounds(
        img,
        a.0.min(b.0) - half - 1.0,
        a.1.min(b.1) - half - 1.0,
        a.0.max(b.0) + half + 1.0,
        a.1.max(b.1) + half + 1.0,
    );
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    for y in y0..y1 {
        for x in x0..x1 {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let t = if len_sq > 0.0 {
                (((px - a.0) * dx + (py - a.1) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (nx, ny) = (a.0 + t * dx - px, a.1 + t * dy - py);
            let dist = (nx * nx + ny * ny).sqrt();
            blend_pixel(img, x, y, color, half - dist + 0.5);
        }
    }
}

/// Fill a circle with a one-pixel soft edge.
fn fill_circle(img: &mut RgbaImage, center: (f32, f32), radius: f32, color: Rgba<u8>) {
    if radius <= 0.0 {
        return;
    }
    let (x0, y0, x1, y1) = bounds(
        img,
        center.0 - radius - 1.0,
        center.1 - radius - 1.0,
        center.0 + radius + 1.0,
        center.1 + radius + 1.0,
    );
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            let dist = (dx * dx + dy * dy).sqrt();
            blend_pixel(img, x, y, color, radius - dist + 0.5);
        }
    }
}

/// Outline a circle: an annulus of `width` centered on `radius`.
fn draw_ring(img: &mut RgbaImage, center: (f32, f32), radius: f32, width: f32, color: Rgba<u8>) {
    let half = (width / 2.0).max(0.35);
    let outer = radius + half;
    let (x0, y0, x1, y1) = bounds(
        img,
        center.0 - outer - 1.0,
        center.1 - outer - 1.0,
        center.0 + outer + 1.0,
        center.1 + outer + 1.0,
    );
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            let dist = (dx * dx + dy * dy).sqrt();
            blend_pixel(img, x, y, color, half - (dist - radius).abs() + 0.5);
        }
    }
}

/// Edge-darkening layer. Every step darkens the area outside its radius, so
/// the accumulated alpha is zero across the face and largest in the corners.
fn vignette_layer(s: u32, center: (f32, f32)) -> RgbaImage {
    let sf = s as f32;
    ImageBuffer::from_fn(s, s, |x, y| {
        let dx = x as f32 + 0.5 - center.0;
        let dy = y as f32 + 0.5 - center.1;
        let dist = (dx * dx + dy * dy).sqrt();
        let mut alpha = 0.0f32;
        for &(radius, step_alpha) in &VIGNETTE_STEPS {
            if dist > radius * sf {
                alpha = 1.0 - (1.0 - alpha) * (1.0 - step_alpha);
            }
        }
        Rgba([0, 0, 0, (alpha * 255.0).round() as u8])
    })
}

/// Translucent highlight ellipses, Gaussian-blurred into a soft sheen.
fn sheen_layer(s: u32) -> RgbaImage {
    let sf = s as f32;
    let mut layer = RgbaImage::from_pixel(s, s, Rgba([255, 255, 255, 0]));
    for &(ex, ey, rx, ry, alpha) in &SHEEN_ELLIPSES {
        fill_ellipse(&mut layer, (ex * sf, ey * sf), rx * sf, ry * sf, alpha);
    }
    imageops::blur(&layer, (SHEEN_BLUR_SIGMA * sf).max(0.5))
}

/// Write an axis-aligned translucent white ellipse into a layer. Overlapping
/// ellipses keep the higher alpha rather than stacking.
fn fill_ellipse(layer: &mut RgbaImage, center: (f32, f32), rx: f32, ry: f32, alpha: u8) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let (x0, y0, x1, y1) = bounds(
        layer,
        center.0 - rx - 1.0,
        center.1 - ry - 1.0,
        center.0 + rx + 1.0,
        center.1 + ry + 1.0,
    );
    for y in y0..y1 {
        for x in x0..x1 {
            let nx = (x as f32 + 0.5 - center.0) / rx;
            let ny = (y as f32 + 0.5 - center.1) / ry;
            if nx * nx + ny * ny <= 1.0 {
                let px = layer.get_pixel_mut(x, y);
                px.0[3] = px.0[3].max(alpha);
            }
        }
    }
}
