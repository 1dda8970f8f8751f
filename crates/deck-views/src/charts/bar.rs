//! Grouped bar charts, vertical or horizontal

use super::{base_plot, category_tick, format_value, BarStyle, ChartView, Orientation};
use egui::{Response, Stroke, Ui};
use egui_plot::{Bar, BarChart};

/// Position of a category on the category axis.
///
/// Horizontal charts list the first record at the top.
pub(crate) fn category_position(index: usize, len: usize, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Vertical => index as f64,
        Orientation::Horizontal => (len - 1 - index.min(len.saturating_sub(1))) as f64,
    }
}

/// Offset of series `s` of `count` inside its category slot
pub(crate) fn series_offset(s: usize, count: usize, group_width: f64) -> f64 {
    let width = group_width / count.max(1) as f64;
    (s as f64 - (count as f64 - 1.0) / 2.0) * width
}

pub(super) fn show(ui: &mut Ui, view: &ChartView, style: BarStyle, progress: f32) -> Response {
    let dataset = view.dataset;
    let len = dataset.len();
    let count = dataset.series.len().max(1);
    let bar_width = style.group_width / count as f64 * 0.9;
    let baseline = view.baseline();
    let top = view
        .value_range
        .map(|(_, max)| max)
        .unwrap_or_else(|| dataset.max_value().max(baseline) * 1.1);
    let horizontal = style.orientation == Orientation::Horizontal;
    let span = (-0.5, len as f64 - 0.5);

    let mut plot = base_plot(view);
    if horizontal {
        plot = plot
            .y_axis_formatter(move |value, _chars, _range| {
                category_tick(dataset, (len as f64 - 1.0) - value)
            })
            .include_y(span.0)
            .include_y(span.1)
            .include_x(baseline)
            .include_x(top);
        if view.hide_value_axis {
            plot = plot.show_axes([false, true]);
        }
    } else {
        plot = plot
            .x_axis_formatter(move |value, _chars, _range| category_tick(dataset, value))
            .include_x(span.0)
            .include_x(span.1)
            .include_y(baseline)
            .include_y(top);
        if view.hide_value_axis {
            plot = plot.show_axes([true, false]);
        }
    }

    plot.show(ui, |plot_ui| {
        for (s, series) in dataset.series.iter().enumerate() {
            let offset = series_offset(s, count, style.group_width);
            let bars: Vec<Bar> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let mut position = category_position(i, len, style.orientation);
                    position += if horizontal { -offset } else { offset };
                    let category = dataset.categories.get(i).copied().unwrap_or_default();
                    Bar::new(position, (value - baseline).max(0.0) * progress as f64)
                        .base_offset(baseline)
                        .width(bar_width)
                        .fill(series.color_at(i))
                        .stroke(Stroke::NONE)
                        .name(format!("{category}\n{}: {}", series.label, format_value(*value)))
                })
                .collect();

            let mut chart = BarChart::new(bars)
                .color(series.color)
                .name(series.label)
                .width(bar_width);
            if horizontal {
                chart = chart.horizontal();
            }
            plot_ui.bar_chart(chart);
        }
    })
    .response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_puts_first_category_on_top() {
        assert_eq!(category_position(0, 7, Orientation::Horizontal), 6.0);
        assert_eq!(category_position(6, 7, Orientation::Horizontal), 0.0);
        assert_eq!(category_position(2, 7, Orientation::Vertical), 2.0);
    }

    #[test]
    fn test_grouped_offsets_are_centred() {
        assert_eq!(series_offset(0, 1, 0.7), 0.0);

        let left = series_offset(0, 2, 0.8);
        let right = series_offset(1, 2, 0.8);
        assert!((left + 0.2).abs() < 1e-9);
        assert!((right - 0.2).abs() < 1e-9);
    }
}
