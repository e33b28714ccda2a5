use clockface_gen::renderer::{
    face_radius, polar, Palette, RenderConfig, MARKER_A_ANGLE, MARKER_A_RADIUS, MARKER_B_ANGLE,
    MARKER_B_SCALE, MARKER_ORBIT,
};
use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icons/icon-512.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgb_img = img.to_rgb8();
    let size = img.width() as f32;
    let (cx, cy) = (size / 2.0, size / 2.0);
    let face_r = face_radius(size, RenderConfig::default().padding_frac);
    let palette = Palette::default();

    println!("Checking route markers in: {}", path);
    println!("Image dimensions: {}x{}", img.width(), img.height());

    // Solid marker: sample its center
    let (ax, ay) = polar(cx, cy, face_r * MARKER_ORBIT, MARKER_A_ANGLE);
    let a_pixel = rgb_img.get_pixel(ax as u32, ay as u32);
    report("solid marker", a_pixel.0, palette.route_a);

    // Ring marker: the center is hollow, so sample on the stroke straight
    // above the ring center
    let (bx, by) = polar(cx, cy, face_r * MARKER_ORBIT, MARKER_B_ANGLE);
    let ring_r = face_r * MARKER_A_RADIUS * MARKER_B_SCALE;
    let b_pixel = rgb_img.get_pixel(bx as u32, (by - ring_r) as u32);
    report("ring marker", b_pixel.0, palette.route_b);
}

fn report(label: &str, found: [u8; 3], expected: [u8; 3]) {
    let dist = found
        .iter()
        .zip(expected.iter())
        .map(|(a, b)| (f32::from(*a) - f32::from(*b)).powi(2))
        .sum::<f32>()
        .sqrt();

    println!("\n{label}:");
    println!("  expected RGB: {:?}", expected);
    println!("  found RGB:    {:?} (distance {:.1})", found, dist);

    if dist < 24.0 {
        println!("  ✓ {label} color detected");
    } else {
        println!("  ⚠ {label} color looks off");
    }
}
