use cairo::ImageSurface;
use scribe_panel::draw::{BLACK, BLUE, Color, RED, WHITE};
use scribe_panel::host::PreviewSurface;
use scribe_panel::host::preview::CairoPreview;
use tempfile::TempDir;

/// Reads the (r, g, b, a) bytes of a pixel from an ARGB32 surface.
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    let argb = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    )
}

fn opaque(color: Color) -> (u8, u8, u8, u8) {
    (color.r, color.g, color.b, 0xff)
}

#[test]
fn dot_is_drawn_over_tint() {
    let mut preview = CairoPreview::new(120, 60);
    preview.set_background(Some(BLACK));
    preview.set_pen(20, RED);
    let mut image = preview.render().unwrap();

    assert_eq!(pixel(&mut image, 60, 30), opaque(RED));
    assert_eq!(pixel(&mut image, 2, 2), opaque(BLACK));
    // Just outside the 10px radius
    assert_eq!(pixel(&mut image, 60 + 12, 30), opaque(BLACK));
}

#[test]
fn transparent_background_leaves_corners_clear() {
    let mut preview = CairoPreview::new(80, 80);
    preview.set_background(None);
    preview.set_pen(10, BLUE);
    let mut image = preview.render().unwrap();

    assert_eq!(pixel(&mut image, 0, 0).3, 0);
    assert_eq!(pixel(&mut image, 40, 40), opaque(BLUE));
}

#[test]
fn oversized_stroke_is_capped_to_image() {
    let mut preview = CairoPreview::new(100, 40);
    preview.set_background(Some(WHITE));
    preview.set_pen(300, BLACK);
    let mut image = preview.render().unwrap();

    // Diameter capped at the 40px height
    assert_eq!(pixel(&mut image, 50, 2), opaque(BLACK));
    assert_eq!(pixel(&mut image, 2, 20), opaque(WHITE));
}

#[test]
fn update_image_keeps_last_render() {
    let mut preview = CairoPreview::new(30, 30);
    assert!(preview.image().is_none());
    preview.set_pen(4, RED);
    preview.update_image();
    assert!(preview.image().is_some());

    preview.set_visible(false);
    assert!(!preview.is_visible());
}

#[test]
fn write_png_produces_png_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("preview.png");
    let mut preview = CairoPreview::new(64, 32);
    preview.set_pen(12, RED);
    preview.write_png(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}
