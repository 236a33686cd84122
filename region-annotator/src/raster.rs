//! Stroke closed polygons onto an RGBA canvas.
//!
//! Each edge becomes a filled quadrilateral as wide as the stroke, with a
//! round cap at both ends so consecutive edges join without notches. Edges
//! are clipped to the canvas (plus a stroke-width margin) first, so vertices
//! far outside the image are drawn correctly where visible and never
//! overflow the rasterizer.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use region_loader::{Polygon, Vertex};
use tracing::debug;

/// Opaque red-orange
pub const STROKE_COLOR: Rgba<u8> = Rgba([255, 0x44, 0x44, 0xff]);
/// Stroke width in pixels
pub const STROKE_WIDTH: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba<u8>,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: STROKE_COLOR,
            width: STROKE_WIDTH,
        }
    }
}

type PointF = (f64, f64);

/// Stroke every polygon in order. Returns how many produced any geometry.
pub fn stroke_polygons(
    canvas: &mut RgbaImage,
    regions: &[Polygon],
    style: &StrokeStyle,
) -> usize {
    regions
        .iter()
        .filter(|polygon| stroke_polygon(canvas, polygon, style))
        .count()
}

/// Stroke one closed polygon. Returns false for an empty polygon.
pub fn stroke_polygon(canvas: &mut RgbaImage, polygon: &Polygon, style: &StrokeStyle) -> bool {
    match polygon.vertices() {
        [] => {
            debug!("Skipping polygon without vertices");
            false
        }
        [only] => {
            stroke_segment(canvas, *only, *only, style);
            true
        }
        _ => {
            for (from, to) in polygon.edges() {
                stroke_segment(canvas, from, to, style);
            }
            true
        }
    }
}

fn stroke_segment(canvas: &mut RgbaImage, from: Vertex, to: Vertex, style: &StrokeStyle) {
    let half = f64::from(style.width.max(1.0)) / 2.0;
    let margin = 2.0 * half + 1.0;
    let (width, height) = canvas.dimensions();
    let min = (-margin, -margin);
    let max = (f64::from(width) + margin, f64::from(height) + margin);

    let Some((p, q)) = clip_segment(to_point(from), to_point(to), min, max) else {
        return;
    };

    let (dx, dy) = (q.0 - p.0, q.1 - p.1);
    let length = dx.hypot(dy);

    if length > f64::EPSILON {
        let (nx, ny) = (-dy / length * half, dx / length * half);
        let quad = [
            round_point(p.0 + nx, p.1 + ny),
            round_point(q.0 + nx, q.1 + ny),
            round_point(q.0 - nx, q.1 - ny),
            round_point(p.0 - nx, p.1 - ny),
        ];

        // draw_polygon_mut rejects a closed point list
        if quad[0] != quad[3] {
            draw_polygon_mut(canvas, &quad, style.color);
        } else {
            draw_line_segment_mut(
                canvas,
                (p.0 as f32, p.1 as f32),
                (q.0 as f32, q.1 as f32),
                style.color,
            );
        }
    }

    let radius = half.floor() as i32;
    for end in [p, q] {
        draw_filled_circle_mut(
            canvas,
            (end.0.round() as i32, end.1.round() as i32),
            radius,
            style.color,
        );
    }
}

fn to_point(v: Vertex) -> PointF {
    (f64::from(v.x), f64::from(v.y))
}

fn round_point(x: f64, y: f64) -> Point<i32> {
    Point::new(x.round() as i32, y.round() as i32)
}

/// Liang-Barsky clip of segment `a`-`b` against the box `min`..`max`.
fn clip_segment(a: PointF, b: PointF, min: PointF, max: PointF) -> Option<(PointF, PointF)> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, a.0 - min.0),
        (dx, max.0 - a.0),
        (-dy, a.1 - min.1),
        (dy, max.1 - a.1),
    ] {
        if p == 0.0 {
            // Parallel to this edge and outside it
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, BACKGROUND)
    }

    fn polygon(points: &[(i32, i32)]) -> Polygon {
        points.iter().copied().map(Vertex::from).collect()
    }

    fn distance_to_segment(px: f64, py: f64, a: Vertex, b: Vertex) -> f64 {
        let (ax, ay) = to_point(a);
        let (bx, by) = to_point(b);
        let (dx, dy) = (bx - ax, by - ay);
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
        };
        (px - (ax + t * dx)).hypot(py - (ay + t * dy))
    }

    #[test]
    fn test_square_outline_is_stroked() {
        let mut canvas = blank(64, 64);
        let square = polygon(&[(10, 10), (50, 10), (50, 50), (10, 50)]);

        assert!(stroke_polygon(&mut canvas, &square, &StrokeStyle::default()));

        // Midpoints of all four edges, including the closing one
        for (x, y) in [(30, 10), (50, 30), (30, 50), (10, 30)] {
            assert_eq!(*canvas.get_pixel(x, y), STROKE_COLOR, "edge pixel ({x}, {y})");
        }
        // Stroke is about six pixels wide
        assert_eq!(*canvas.get_pixel(30, 12), STROKE_COLOR);
        assert_eq!(*canvas.get_pixel(30, 8), STROKE_COLOR);
        assert_eq!(*canvas.get_pixel(30, 16), BACKGROUND);
        // Interior untouched
        assert_eq!(*canvas.get_pixel(30, 30), BACKGROUND);
    }

    #[test]
    fn test_changes_stay_within_stroke_distance() {
        let mut canvas = blank(80, 60);
        let quad = polygon(&[(12, 8), (70, 15), (60, 50), (5, 40)]);
        let style = StrokeStyle::default();

        stroke_polygon(&mut canvas, &quad, &style);

        let limit = f64::from(style.width) / 2.0 + 1.5;
        let mut changed = 0;
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if *pixel == BACKGROUND {
                continue;
            }
            changed += 1;
            let nearest = quad
                .edges()
                .map(|(a, b)| distance_to_segment(f64::from(x), f64::from(y), a, b))
                .fold(f64::INFINITY, f64::min);
            assert!(nearest <= limit, "pixel ({x}, {y}) is {nearest:.2} from the outline");
        }
        assert!(changed > 0);
    }

    #[test]
    fn test_empty_polygon_draws_nothing() {
        let mut canvas = blank(20, 20);

        let drawn = stroke_polygon(&mut canvas, &Polygon::default(), &StrokeStyle::default());

        assert!(!drawn);
        assert!(canvas.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_degenerate_polygons_do_not_panic() {
        let mut canvas = blank(20, 20);
        let style = StrokeStyle::default();

        stroke_polygon(&mut canvas, &polygon(&[(10, 10)]), &style);
        assert_eq!(*canvas.get_pixel(10, 10), STROKE_COLOR);

        stroke_polygon(&mut canvas, &polygon(&[(2, 2), (2, 2), (2, 2)]), &style);
        stroke_polygon(&mut canvas, &polygon(&[(0, 15), (19, 15)]), &style);
        assert_eq!(*canvas.get_pixel(12, 15), STROKE_COLOR);
    }

    #[test]
    fn test_far_off_canvas_vertices_are_clipped() {
        let mut canvas = blank(40, 40);
        let style = StrokeStyle::default();

        // Crosses the canvas horizontally at y = 20
        let long_edge = polygon(&[(-1_000_000, 20), (1_000_000, 20)]);
        stroke_polygon(&mut canvas, &long_edge, &style);
        assert_eq!(*canvas.get_pixel(0, 20), STROKE_COLOR);
        assert_eq!(*canvas.get_pixel(39, 20), STROKE_COLOR);

        let extremes = polygon(&[
            (i32::MIN, i32::MIN),
            (i32::MAX, i32::MIN),
            (i32::MAX, i32::MAX),
        ]);
        stroke_polygon(&mut canvas, &extremes, &style);

        // Entirely outside: nothing drawn
        let mut untouched = blank(40, 40);
        let outside = polygon(&[(-500, -500), (-100, -500), (-100, -100)]);
        stroke_polygon(&mut untouched, &outside, &style);
        assert!(untouched.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_stroke_polygons_counts_drawn_regions() {
        let mut canvas = blank(30, 30);
        let regions = vec![
            polygon(&[(1, 1), (20, 1), (20, 20), (1, 20)]),
            Polygon::default(),
            polygon(&[(5, 5)]),
        ];

        assert_eq!(stroke_polygons(&mut canvas, &regions, &StrokeStyle::default()), 2);
    }

    #[test]
    fn test_clip_segment() {
        let min = (0.0, 0.0);
        let max = (10.0, 10.0);

        assert_eq!(
            clip_segment((-5.0, 5.0), (15.0, 5.0), min, max),
            Some(((0.0, 5.0), (10.0, 5.0)))
        );
        assert_eq!(
            clip_segment((2.0, 3.0), (4.0, 5.0), min, max),
            Some(((2.0, 3.0), (4.0, 5.0)))
        );
        assert_eq!(clip_segment((-5.0, -1.0), (15.0, -1.0), min, max), None);
        assert_eq!(clip_segment((20.0, 0.0), (30.0, 10.0), min, max), None);
    }
}
