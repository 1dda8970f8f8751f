//! Line and area charts over a category axis

use super::{base_plot, category_tick, ChartView};
use egui::{Response, Ui};
use egui_plot::{Line, PlotPoints, Points};

/// Points of a series revealed left to right up to `progress`.
///
/// The last point is interpolated so the line grows smoothly.
pub(crate) fn revealed_points(values: &[f64], progress: f32) -> Vec<[f64; 2]> {
    if values.len() < 2 {
        return values.iter().enumerate().map(|(i, v)| [i as f64, *v]).collect();
    }

    let reach = progress.clamp(0.0, 1.0) as f64 * (values.len() - 1) as f64;
    let whole = reach.floor() as usize;
    let mut points: Vec<[f64; 2]> = values
        .iter()
        .take(whole + 1)
        .enumerate()
        .map(|(i, v)| [i as f64, *v])
        .collect();

    let frac = reach - whole as f64;
    if frac > 0.0 {
        if let (Some(from), Some(to)) = (values.get(whole), values.get(whole + 1)) {
            points.push([reach, from + (to - from) * frac]);
        }
    }
    points
}

pub(super) fn show(ui: &mut Ui, view: &ChartView, filled: bool, progress: f32) -> Response {
    let dataset = view.dataset;
    let last = dataset.len().saturating_sub(1) as f64;
    let baseline = view.baseline();

    let mut plot = base_plot(view)
        .x_axis_formatter(move |value, _chars, _range| category_tick(dataset, value))
        .include_x(0.0)
        .include_x(last);
    if let Some((min, max)) = view.value_range {
        plot = plot.include_y(min).include_y(max);
    }
    if view.hide_value_axis {
        plot = plot.show_axes([true, false]);
    }

    plot.show(ui, |plot_ui| {
        for series in dataset.series {
            let points = revealed_points(series.values, progress);
            // Markers sit on records only, never on the growing tip
            let markers: Vec<[f64; 2]> =
                points.iter().filter(|p| p[0].fract() == 0.0).copied().collect();

            let mut line = Line::new(PlotPoints::new(points))
                .color(series.color)
                .width(series.width)
                .name(series.label);
            if filled {
                line = line.fill(baseline as f32);
            }
            plot_ui.line(line);

            if series.markers {
                plot_ui.points(
                    Points::new(PlotPoints::new(markers))
                        .radius((series.width * 1.5).max(3.0))
                        .color(series.color)
                        .filled(true),
                );
            }
        }
    })
    .response
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCURACY: [f64; 5] = [90.2, 32.1, 17.7, 13.3, 3.1];

    #[test]
    fn test_full_progress_shows_every_point() {
        let points = revealed_points(&ACCURACY, 1.0);
        assert_eq!(points.len(), 5);
        assert_eq!(points[4], [4.0, 3.1]);
    }

    #[test]
    fn test_zero_progress_shows_first_point() {
        assert_eq!(revealed_points(&ACCURACY, 0.0), vec![[0.0, 90.2]]);
    }

    #[test]
    fn test_partial_progress_interpolates_the_tip() {
        // Halfway over four segments reaches record 2 exactly
        let half = revealed_points(&ACCURACY, 0.5);
        assert_eq!(half.len(), 3);

        let points = revealed_points(&[0.0, 10.0], 0.25);
        assert_eq!(points.len(), 2);
        assert!((points[1][0] - 0.25).abs() < 1e-9);
        assert!((points[1][1] - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_short_series() {
        assert!(revealed_points(&[], 0.5).is_empty());
        assert_eq!(revealed_points(&[4.0], 0.0), vec![[0.0, 4.0]]);
    }
}
