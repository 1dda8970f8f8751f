//! Donut chart painted straight onto the ui

use super::{format_value, ChartView, PieStyle};
use crate::colors::{highlight, SLATE_400, SLATE_500};
use egui::{Align2, Color32, FontId, Pos2, Response, Sense, Shape, Stroke, Ui, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

const LEGEND_ROW: f32 = 22.0;

/// Start and end angle (radians, clockwise from 12 o'clock) of each slice.
///
/// Slices share `sweep` radians minus one padding gap per slice, in
/// proportion to their values.
pub(crate) fn slice_angles(values: &[f64], padding: f32, sweep: f32) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let gap = if values.len() > 1 { padding * sweep / TAU } else { 0.0 };
    let available = (sweep - gap * values.len() as f32).max(0.0);

    let mut angle = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let span = (value.max(0.0) / total) as f32 * available;
            let slice = (angle, angle + span);
            angle += span + gap;
            slice
        })
        .collect()
}

/// Index of the slice under a point, given its polar angle from the centre
fn slice_at(slices: &[(f32, f32)], angle: f32) -> Option<usize> {
    // Normalise into the same window the slices start from
    let mut a = angle;
    while a < -FRAC_PI_2 {
        a += TAU;
    }
    while a >= -FRAC_PI_2 + TAU {
        a -= TAU;
    }
    slices.iter().position(|(start, end)| a >= *start && a <= *end)
}

fn draw_slice(
    painter: &egui::Painter,
    center: Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    let segments = ((end - start).to_degrees() / 2.0).ceil().max(1.0) as usize;
    let point =
        |radius: f32, angle: f32| center + Vec2::new(radius * angle.cos(), radius * angle.sin());

    for i in 0..segments {
        let a0 = start + (end - start) * (i as f32 / segments as f32);
        let a1 = start + (end - start) * ((i + 1) as f32 / segments as f32);
        let quad = vec![point(inner, a0), point(outer, a0), point(outer, a1), point(inner, a1)];
        painter.add(Shape::convex_polygon(quad, color, Stroke::NONE));
    }
}

pub(super) fn show(ui: &mut Ui, view: &ChartView, style: PieStyle, progress: f32) -> Response {
    let dataset = view.dataset;
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, view.height), Sense::hover());

    let Some(series) = dataset.series.first() else {
        return response;
    };

    let legend_height = if view.show_legend { LEGEND_ROW } else { 0.0 };
    let chart_height = rect.height() - legend_height;
    let outer = (chart_height.min(rect.width()) / 2.0 - 6.0).max(1.0);
    let inner = outer * style.inner_ratio.clamp(0.0, 0.95);
    let center = Pos2::new(rect.center().x, rect.top() + chart_height / 2.0);

    let slices = slice_angles(series.values, style.padding_deg.to_radians(), TAU * progress);

    let hovered = response.hover_pos().and_then(|pos| {
        let offset = pos - center;
        let distance = offset.length();
        if distance < inner || distance > outer {
            return None;
        }
        slice_at(&slices, offset.y.atan2(offset.x))
    });

    let painter = ui.painter_at(rect);
    for (index, (start, end)) in slices.iter().enumerate() {
        let mut color = series.color_at(index);
        let mut outer_radius = outer;
        if hovered == Some(index) {
            color = highlight(color, 30);
            outer_radius += 4.0;
        }
        draw_slice(&painter, center, inner, outer_radius, *start, *end, color);
    }

    if let Some((headline, caption)) = style.center_caption {
        painter.text(
            center - Vec2::new(0.0, 8.0),
            Align2::CENTER_CENTER,
            headline,
            FontId::proportional(inner * 0.45),
            Color32::WHITE,
        );
        painter.text(
            center + Vec2::new(0.0, inner * 0.3),
            Align2::CENTER_CENTER,
            caption.to_uppercase(),
            FontId::proportional(11.0),
            SLATE_500,
        );
    }

    if view.show_legend {
        let y = rect.bottom() - legend_height / 2.0;
        let slot = rect.width() / dataset.len().max(1) as f32;
        let legend_width = slot.min(110.0) * dataset.len() as f32;
        let left = rect.center().x - legend_width / 2.0;
        for (index, category) in dataset.categories.iter().enumerate() {
            let x = left + slot.min(110.0) * index as f32;
            painter.circle_filled(Pos2::new(x + 6.0, y), 5.0, series.color_at(index));
            painter.text(
                Pos2::new(x + 16.0, y),
                Align2::LEFT_CENTER,
                *category,
                FontId::proportional(13.0),
                SLATE_400,
            );
        }
    }

    match hovered {
        Some(index) => {
            let category = dataset.categories.get(index).copied().unwrap_or_default();
            let value = series.values.get(index).copied().unwrap_or_default();
            response.on_hover_text_at_pointer(format!("{category}: {}", format_value(value)))
        }
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_fill_the_circle_minus_padding() {
        let padding = 5f32.to_radians();
        let slices = slice_angles(&[39.8, 60.2], padding, TAU);
        assert_eq!(slices.len(), 2);

        let covered: f32 = slices.iter().map(|(s, e)| e - s).sum();
        assert!((covered - (TAU - 2.0 * padding)).abs() < 1e-4);

        // Proportional spans, first slice starts at the top
        assert!((slices[0].0 + FRAC_PI_2).abs() < 1e-6);
        let ratio = (slices[0].1 - slices[0].0) / (slices[1].1 - slices[1].0);
        assert!((ratio - (39.8 / 60.2) as f32).abs() < 1e-4);
        assert!((slices[1].0 - slices[0].1 - padding).abs() < 1e-5);
    }

    #[test]
    fn test_partial_sweep_scales_everything() {
        let full = slice_angles(&[1.0, 1.0, 2.0], 0.1, TAU);
        let half = slice_angles(&[1.0, 1.0, 2.0], 0.1, TAU / 2.0);
        for (f, h) in full.iter().zip(&half) {
            assert!(((f.1 - f.0) / 2.0 - (h.1 - h.0)).abs() < 1e-5);
        }
        assert!(slice_angles(&[1.0], 0.1, 0.0).iter().all(|(s, e)| s == e));
    }

    #[test]
    fn test_degenerate_values() {
        assert!(slice_angles(&[], 0.1, TAU).is_empty());
        assert!(slice_angles(&[0.0, 0.0], 0.1, TAU).is_empty());

        // A lone slice gets no gap
        let single = slice_angles(&[5.0], 0.1, TAU);
        assert!((single[0].1 - single[0].0 - TAU).abs() < 1e-5);
    }

    #[test]
    fn test_hit_testing_wraps_angles() {
        let slices = slice_angles(&[1.0, 1.0], 0.0, TAU);
        // Right of centre is a quarter turn past the top: first slice
        assert_eq!(slice_at(&slices, 0.0), Some(0));
        // Left of centre lands in the second half
        assert_eq!(slice_at(&slices, std::f32::consts::PI), Some(1));
        assert_eq!(slice_at(&slices, -std::f32::consts::PI), Some(1));
    }
}
