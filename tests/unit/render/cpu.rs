use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn background_covers_every_pixel() {
    let mut r = RasterCanvas::new(canvas(33, 17), 1.0).unwrap();
    r.fill_background(Rgba8::from_u24(0x1a1a1a));
    let img = r.finish().unwrap();

    assert_eq!(img.dimensions(), (33, 17));
    assert!(img.pixels().all(|p| p.0 == [0x1a, 0x1a, 0x1a, 255]));
}

#[test]
fn circle_paints_its_center_only() {
    let mut r = RasterCanvas::new(canvas(64, 64), 1.0).unwrap();
    r.fill_background(Rgba8::rgb(0, 0, 0));
    r.fill_circle(Point::new(32.0, 32.0), 10.0, Rgba8::rgb(255, 255, 255));
    let img = r.finish().unwrap();

    assert_eq!(img.get_pixel(32, 32).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(32, 50).0, [0, 0, 0, 255]);
}

#[test]
fn supersampled_raster_is_resampled_to_canvas_size() {
    let mut r = RasterCanvas::new(canvas(50, 40), 2.0).unwrap();
    assert_eq!(r.raster_size(), (100, 80));
    r.fill_background(Rgba8::rgb(250, 250, 250));
    // Canvas coordinates: the dot lands at the same place as a 1x render.
    r.fill_circle(Point::new(25.0, 20.0), 8.0, Rgba8::rgb(0, 0, 0));
    let img = r.finish().unwrap();

    assert_eq!(img.dimensions(), (50, 40));
    let c = img.get_pixel(25, 20).0;
    assert!(c[0] < 10 && c[1] < 10 && c[2] < 10);
    let corner = img.get_pixel(1, 1).0;
    assert!(corner[0] > 240);
}

#[test]
fn raster_limits_are_enforced() {
    assert!(RasterCanvas::new(canvas(40_000, 10), 2.0).is_err());
    assert!(RasterCanvas::new(canvas(10, 10), 0.5).is_err());
    assert!(RasterCanvas::new(canvas(10, 10), f64::NAN).is_err());
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    assert_eq!(unpremultiply(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
    assert_eq!(unpremultiply(&[10, 20, 30, 255]), vec![10, 20, 30, 255]);
    assert_eq!(unpremultiply(&[64, 0, 128, 128]), vec![128, 0, 255, 128]);
}

#[test]
fn font_data_shares_face_bytes() {
    let face = FontFace {
        family: "Shared".to_string(),
        bytes: std::sync::Arc::new(vec![0u8; 64]),
        index: 0,
    };
    let data = font_data(&face);
    assert_eq!(std::sync::Arc::strong_count(&face.bytes), 2);
    assert_eq!(data.data.len(), 64);
    drop(data);
    assert_eq!(std::sync::Arc::strong_count(&face.bytes), 1);
}
