use iconsmith::canvas::{self, Rect};
use image::{Rgba, RgbaImage};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn blank(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, CLEAR)
}

#[test]
fn rect_helpers() {
    let rect = Rect::square(2.0, 3.0, 10.0);
    assert_eq!(rect, Rect::new(2.0, 3.0, 12.0, 13.0));
    assert_eq!(rect.width(), 10.0);
    assert_eq!(rect.inset(2.0), Rect::new(4.0, 5.0, 10.0, 11.0));
    assert_eq!(rect.inset(-1.0).height(), 12.0);
    assert_eq!(Rect::around(5.0, 5.0, 2.0, 1.0), Rect::new(3.0, 4.0, 7.0, 6.0));
}

#[test]
fn shapes_replace_pixels_including_alpha() {
    let mut img = RgbaImage::from_pixel(10, 10, RED);
    canvas::fill_rect(&mut img, Rect::new(0.0, 0.0, 9.0, 9.0), Rgba([255, 255, 255, 0]));
    assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 0])));

    let dot = Rgba([120, 200, 255, 180]);
    canvas::fill_ellipse(&mut img, Rect::new(0.0, 0.0, 10.0, 10.0), dot);
    assert_eq!(*img.get_pixel(5, 5), dot);
    assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
}

#[test]
fn fill_rect_includes_both_end_coordinates() {
    let mut img = blank(8);
    canvas::fill_rect(&mut img, Rect::new(2.0, 2.0, 4.0, 3.0), RED);

    let painted: Vec<_> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| **p == RED)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(
        painted,
        vec![(2, 2), (3, 2), (4, 2), (2, 3), (3, 3), (4, 3)]
    );
}

#[test]
fn fill_rect_truncates_fractional_corners() {
    let mut img = blank(8);
    canvas::fill_rect(&mut img, Rect::new(1.9, 1.2, 3.7, 1.8), RED);

    let painted: Vec<_> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| **p == RED)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(painted, vec![(1, 1), (2, 1), (3, 1)]);
}

#[test]
fn fill_rect_clips_to_canvas() {
    let mut img = blank(4);
    canvas::fill_rect(&mut img, Rect::new(-10.0, -10.0, 100.0, 100.0), RED);
    assert!(img.pixels().all(|p| *p == RED));

    let mut img = blank(4);
    canvas::fill_rect(&mut img, Rect::new(-10.0, -10.0, -2.0, -2.0), RED);
    assert!(img.pixels().all(|p| *p == CLEAR));

    let mut img = blank(4);
    canvas::fill_rect(&mut img, Rect::new(4.0, 0.0, 9.0, 3.0), RED);
    assert!(img.pixels().all(|p| *p == CLEAR));
}

#[test]
fn inverted_rect_draws_nothing() {
    let mut img = blank(8);
    canvas::fill_rect(&mut img, Rect::new(6.0, 6.0, 2.0, 2.0), RED);
    canvas::fill_rounded_rect(&mut img, Rect::new(6.0, 6.0, 2.0, 2.0), 3.0, RED);
    canvas::fill_ellipse(&mut img, Rect::new(6.0, 6.0, 2.0, 2.0), RED);
    assert!(img.pixels().all(|p| *p == CLEAR));
}

#[test]
fn rounded_rect_leaves_corners_clear() {
    let mut img = blank(20);
    canvas::fill_rounded_rect(&mut img, Rect::new(0.0, 0.0, 20.0, 20.0), 6.0, RED);

    for (x, y) in [(0, 0), (19, 0), (0, 19), (19, 19)] {
        assert_eq!(*img.get_pixel(x, y), CLEAR, "corner ({x}, {y})");
    }
    for (x, y) in [(10, 0), (0, 10), (10, 10), (19, 10), (10, 19)] {
        assert_eq!(*img.get_pixel(x, y), RED, "edge ({x}, {y})");
    }
}

#[test]
fn oversized_radius_gives_a_circle() {
    let mut img = blank(20);
    canvas::fill_rounded_rect(&mut img, Rect::new(0.0, 0.0, 20.0, 20.0), 100.0, RED);
    assert_eq!(*img.get_pixel(10, 10), RED);
    assert_eq!(*img.get_pixel(2, 2), CLEAR);
}

#[test]
fn stroke_leaves_interior_untouched() {
    let mut img = blank(20);
    canvas::stroke_rounded_rect(&mut img, Rect::new(0.0, 0.0, 20.0, 20.0), 4.0, 2.0, WHITE);

    assert_eq!(*img.get_pixel(10, 0), WHITE);
    assert_eq!(*img.get_pixel(10, 1), WHITE);
    assert_eq!(*img.get_pixel(10, 2), CLEAR);
    assert_eq!(*img.get_pixel(10, 10), CLEAR);
    assert_eq!(*img.get_pixel(19, 10), WHITE);
}

#[test]
fn ellipse_fills_centre_not_corners() {
    let mut img = blank(10);
    canvas::fill_ellipse(&mut img, Rect::new(0.0, 0.0, 10.0, 10.0), RED);

    assert_eq!(*img.get_pixel(5, 5), RED);
    assert_eq!(*img.get_pixel(0, 5), RED);
    assert_eq!(*img.get_pixel(0, 0), CLEAR);
    assert_eq!(*img.get_pixel(9, 9), CLEAR);
}

#[test]
fn ellipse_stroke_is_a_ring() {
    let mut img = blank(20);
    canvas::stroke_ellipse(&mut img, Rect::new(0.0, 0.0, 20.0, 20.0), 2.0, WHITE);

    assert_eq!(*img.get_pixel(10, 0), WHITE);
    assert_eq!(*img.get_pixel(10, 10), CLEAR);
    assert_eq!(*img.get_pixel(0, 0), CLEAR);
}
