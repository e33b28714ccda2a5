use clockface_gen::renderer::{
    face_radius, polar, IconRenderer, Palette, RenderConfig, RenderError, MARKER_A_ANGLE,
    MARKER_A_RADIUS, MARKER_B_ANGLE, MARKER_B_SCALE, MARKER_ORBIT,
};

fn default_renderer() -> IconRenderer {
    IconRenderer::new(RenderConfig::default())
}

fn color_distance(found: [u8; 3], expected: [u8; 3]) -> f32 {
    found
        .iter()
        .zip(expected.iter())
        .map(|(a, b)| (f32::from(*a) - f32::from(*b)).powi(2))
        .sum::<f32>()
        .sqrt()
}

/// Rendering twice with the same size must produce byte-identical pixels.
#[test]
fn test_render_is_deterministic() {
    let renderer = default_renderer();

    let first = renderer.render(192).expect("first render failed");
    let second = renderer.render(192).expect("second render failed");

    assert_eq!(
        first.as_raw(),
        second.as_raw(),
        "repeat renders must be pixel-identical"
    );
}

#[test]
fn test_output_dimensions_match_request() {
    let renderer = default_renderer();

    for size in [1u32, 192, 512, 1024] {
        let icon = renderer
            .render(size)
            .unwrap_or_else(|e| panic!("render({size}) failed: {e}"));
        assert_eq!(icon.width(), size, "width should be {size}");
        assert_eq!(icon.height(), size, "height should be {size}");
    }
}

/// The output carries no transparency: converting back to RGBA must give
/// saturated alpha on every pixel.
#[test]
fn test_output_is_fully_opaque() {
    let icon = default_renderer().render(192).expect("render failed");

    let rgba = image::DynamicImage::ImageRgb8(icon).to_rgba8();
    assert!(
        rgba.pixels().all(|p| p.0[3] == 255),
        "every output pixel must be fully opaque"
    );
}

/// The polar helper uses the clock convention: 0° is straight up, angles
/// increase clockwise, and the four cardinal directions are 90° apart.
#[test]
fn test_polar_clock_convention() {
    let (cx, cy, r) = (100.0, 100.0, 50.0);

    let cases = [
        (0.0, (100.0, 50.0)),    // 12 o'clock: directly above center
        (90.0, (150.0, 100.0)),  // 3 o'clock
        (180.0, (100.0, 150.0)), // 6 o'clock
        (270.0, (50.0, 100.0)),  // 9 o'clock
    ];

    for (deg, (ex, ey)) in cases {
        let (x, y) = polar(cx, cy, r, deg);
        assert!(
            (x - ex).abs() < 1e-2 && (y - ey).abs() < 1e-2,
            "polar at {deg}°: expected ({ex}, {ey}), got ({x}, {y})"
        );
    }
}

/// At 512px the pixel nearest each route marker must carry the accent color.
#[test]
fn test_route_marker_colors_present_at_512() {
    let renderer = default_renderer();
    let palette = Palette::default();
    let icon = renderer.render(512).expect("render failed");

    let (cx, cy) = (256.0, 256.0);
    let face_r = face_radius(512.0, renderer.config().padding_frac);

    // Solid marker: sample its center
    let (ax, ay) = polar(cx, cy, face_r * MARKER_ORBIT, MARKER_A_ANGLE);
    let a_pixel = icon.get_pixel(ax.round() as u32, ay.round() as u32);
    assert!(
        color_distance(a_pixel.0, palette.route_a) < 10.0,
        "solid marker color off: expected {:?}, found {:?}",
        palette.route_a,
        a_pixel.0
    );

    // Ring marker is hollow: sample on the stroke, straight above its center
    let (bx, by) = polar(cx, cy, face_r * MARKER_ORBIT, MARKER_B_ANGLE);
    let ring_r = face_r * MARKER_A_RADIUS * MARKER_B_SCALE;
    let b_pixel = icon.get_pixel(bx.round() as u32, (by - ring_r).round() as u32);
    assert!(
        color_distance(b_pixel.0, palette.route_b) < 10.0,
        "ring marker color off: expected {:?}, found {:?}",
        palette.route_b,
        b_pixel.0
    );
}

/// The hollow ring marker must show the background, not the accent, at its
/// center — that is what keeps the two markers distinguishable beyond color.
#[test]
fn test_ring_marker_center_is_hollow() {
    let renderer = default_renderer();
    let palette = Palette::default();
    let icon = renderer.render(512).expect("render failed");

    let face_r = face_radius(512.0, renderer.config().padding_frac);
    let (bx, by) = polar(256.0, 256.0, face_r * MARKER_ORBIT, MARKER_B_ANGLE);
    let center_pixel = icon.get_pixel(bx.round() as u32, by.round() as u32);

    assert!(
        color_distance(center_pixel.0, palette.route_b) > 40.0,
        "ring marker center should be hollow, found {:?}",
        center_pixel.0
    );
}

#[test]
fn test_zero_size_is_rejected() {
    let renderer = default_renderer();

    match renderer.render(0) {
        Err(err) => assert_eq!(err, RenderError::InvalidSize(0)),
        Ok(icon) => panic!(
            "expected InvalidSize error, got a {}x{} image",
            icon.width(),
            icon.height()
        ),
    }
}

#[test]
fn test_one_pixel_render_succeeds() {
    let icon = default_renderer()
        .render(1)
        .expect("1x1 render should succeed");

    assert_eq!((icon.width(), icon.height()), (1, 1));
}

/// The face radius stays a fixed fraction of the canvas across sizes, so
/// layouts are visually proportional.
#[test]
fn test_face_radius_scales_linearly() {
    let padding_frac = RenderConfig::default().padding_frac;
    let base = face_radius(192.0, padding_frac) / 192.0;

    for size in [512.0f32, 1024.0] {
        let ratio = face_radius(size, padding_frac) / size;
        assert!(
            (ratio - base).abs() < 1e-6,
            "face radius ratio drifted at size {size}: {ratio} vs {base}"
        );
    }
}
