//! Decorative layer painted behind every slide
//!
//! Dotted grid, a gradient bar along the top edge, a scanline sweeping down
//! every five seconds and two slowly drifting glows. All of it is driven by
//! absolute frame time so it keeps moving across slide changes.

use deck_views::animation::{lerp, Oscillator};
use deck_views::colors::{
    with_opacity, BLUE_600, CYBER_BLUE, GRID_DOT, PURPLE_500, PURPLE_600, SLIDE_BG,
};
use egui::epaint::Mesh;
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Spacing of the dotted grid, in points
pub const GRID_SPACING: f32 = 40.0;

const SCANLINE: Oscillator = Oscillator::new(5.0);
const BLOB_A: Oscillator = Oscillator::new(12.0);
const BLOB_B: Oscillator = Oscillator::new(15.0);
const TOP_BAR_HEIGHT: f32 = 4.0;

/// Vertical position of the scanline at time `now`
pub fn scanline_y(rect: Rect, now: f32) -> f32 {
    lerp(rect.top(), rect.bottom(), SCANLINE.phase(now))
}

/// Centres of the two glows at time `now`
pub fn glow_centers(rect: Rect, now: f32) -> [Pos2; 2] {
    let a = BLOB_A.ping_pong(now);
    let b = BLOB_B.ping_pong(now);
    [
        Pos2::new(
            rect.left() + rect.width() * lerp(0.15, 0.3, a),
            rect.top() + rect.height() * lerp(0.2, 0.35, a),
        ),
        Pos2::new(
            rect.left() + rect.width() * lerp(0.85, 0.7, b),
            rect.top() + rect.height() * lerp(0.8, 0.6, b),
        ),
    ]
}

/// Grid dot positions inside `rect`
pub fn grid_points(rect: Rect) -> impl Iterator<Item = Pos2> {
    let cols = (rect.width() / GRID_SPACING).floor() as usize + 1;
    let rows = (rect.height() / GRID_SPACING).floor() as usize + 1;
    (0..rows).flat_map(move |row| {
        (0..cols).map(move |col| {
            rect.min + Vec2::new(col as f32 * GRID_SPACING, row as f32 * GRID_SPACING)
        })
    })
}

fn glow(painter: &Painter, center: Pos2, radius: f32, color: Color32) {
    // Stacked translucent discs fake a blur
    for step in 0..8 {
        let t = step as f32 / 8.0;
        painter.circle_filled(
            center,
            radius * (1.0 - t * 0.8),
            with_opacity(color, 0.015 + t * 0.01),
        );
    }
}

fn gradient_bar(painter: &Painter, rect: Rect) {
    let stops = [BLUE_600, CYBER_BLUE, PURPLE_600];
    let mut mesh = Mesh::default();
    for (i, color) in stops.iter().enumerate() {
        let x = lerp(rect.left(), rect.right(), i as f32 / (stops.len() - 1) as f32);
        mesh.colored_vertex(Pos2::new(x, rect.top()), *color);
        mesh.colored_vertex(Pos2::new(x, rect.bottom()), *color);
    }
    for i in 0..(stops.len() as u32 - 1) {
        let base = i * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 2, base + 3);
    }
    painter.add(mesh);
}

/// Paint the backdrop into `rect`
pub fn paint(painter: &Painter, rect: Rect, now: f32) {
    painter.rect_filled(rect, 0.0, SLIDE_BG);

    for point in grid_points(rect) {
        painter.circle_filled(point, 1.0, GRID_DOT);
    }

    let [a, b] = glow_centers(rect, now);
    let radius = rect.width().min(rect.height()) * 0.4;
    glow(painter, a, radius, BLUE_600);
    glow(painter, b, radius, PURPLE_500);

    let y = scanline_y(rect, now);
    painter.line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(2.0, with_opacity(CYBER_BLUE, 0.12)),
    );

    gradient_bar(
        painter,
        Rect::from_min_size(rect.min, Vec2::new(rect.width(), TOP_BAR_HEIGHT)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 800.0))
    }

    #[test]
    fn test_scanline_loops_every_five_seconds() {
        assert_eq!(scanline_y(screen(), 0.0), 0.0);
        assert!((scanline_y(screen(), 2.5) - 400.0).abs() < 1e-3);
        assert!((scanline_y(screen(), 7.5) - 400.0).abs() < 1e-2);
    }

    #[test]
    fn test_glows_stay_on_their_side() {
        for t in [0.0, 3.0, 6.0, 9.0, 14.0] {
            let [a, b] = glow_centers(screen(), t);
            assert!(a.x < 640.0 && a.y < 400.0);
            assert!(b.x > 640.0 && b.y > 400.0);
        }
    }

    #[test]
    fn test_grid_spacing() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::new(80.0, 40.0));
        let points: Vec<_> = grid_points(rect).collect();
        assert_eq!(points.len(), 3 * 2);
        assert_eq!(points[0], Pos2::new(10.0, 10.0));
        assert_eq!(points[5], Pos2::new(90.0, 50.0));
    }
}
