//! Chart widgets over literal datasets
//!
//! Bar, line and area charts go through `egui_plot`; the donut is painted
//! directly. Every chart takes a `progress` in `[0, 1]` so slides can grow
//! it in on entry; `1.0` draws the final state.

mod bar;
mod dataset;
mod line;
mod pie;

pub use dataset::{ChartError, Dataset, Record, Series};

use crate::animation::format_grouped;
use egui::Ui;
use egui_plot::{Corner, Legend, Plot};
use tracing::trace;

/// Bar orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along the x axis, bars grow upwards
    Vertical,
    /// Categories down the y axis, bars grow to the right
    Horizontal,
}

/// Donut chart settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieStyle {
    /// Inner radius as a fraction of the outer radius
    pub inner_ratio: f32,
    /// Gap between slices, in degrees
    pub padding_deg: f32,
    /// Large text and small caption drawn in the hole
    pub center_caption: Option<(&'static str, &'static str)>,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            inner_ratio: 60.0 / 90.0,
            padding_deg: 5.0,
            center_caption: None,
        }
    }
}

/// Bar chart settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub orientation: Orientation,
    /// Width of one category slot taken by its bars, in category units
    pub group_width: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            group_width: 0.7,
        }
    }
}

/// Which chart to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Pie(PieStyle),
    Bar(BarStyle),
    Line,
    /// Line filled down to the baseline
    Area,
}

/// A chart bound to a literal dataset
#[derive(Debug, Clone)]
pub struct ChartView {
    pub id: String,
    pub kind: ChartKind,
    pub dataset: &'static Dataset,
    pub height: f32,
    /// Fixed value-axis domain; bars start from its lower bound
    pub value_range: Option<(f64, f64)>,
    pub show_grid: bool,
    pub show_legend: bool,
    /// Hide the value axis entirely
    pub hide_value_axis: bool,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl ChartView {
    pub fn new(id: impl Into<String>, kind: ChartKind, dataset: &'static Dataset) -> Self {
        Self {
            id: id.into(),
            kind,
            dataset,
            height: 300.0,
            value_range: None,
            show_grid: true,
            show_legend: false,
            hide_value_axis: false,
            x_label: None,
            y_label: None,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn value_range(mut self, min: f64, max: f64) -> Self {
        self.value_range = Some((min, max));
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    pub fn hide_value_axis(mut self) -> Self {
        self.hide_value_axis = true;
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Lower bound bars grow from
    fn baseline(&self) -> f64 {
        self.value_range.map(|(min, _)| min).unwrap_or(0.0)
    }

    /// Draw the chart at the given animation progress
    pub fn ui(&self, ui: &mut Ui, progress: f32) -> egui::Response {
        let progress = progress.clamp(0.0, 1.0);
        trace!(chart = %self.id, progress, "drawing chart");
        match self.kind {
            ChartKind::Pie(style) => pie::show(ui, self, style, progress),
            ChartKind::Bar(style) => bar::show(ui, self, style, progress),
            ChartKind::Line => line::show(ui, self, false, progress),
            ChartKind::Area => line::show(ui, self, true, progress),
        }
    }
}

/// Plot shared by the bar, line and area charts: fixed view, no panning
pub(crate) fn base_plot(view: &ChartView) -> Plot {
    let mut plot = Plot::new(view.id.as_str())
        .height(view.height)
        .show_grid(view.show_grid)
        .show_background(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    if view.show_legend {
        plot = plot.legend(Legend::default().position(Corner::LeftTop));
    }
    if let Some(label) = &view.x_label {
        plot = plot.x_axis_label(label.clone());
    }
    if let Some(label) = &view.y_label {
        plot = plot.y_axis_label(label.clone());
    }
    plot
}

/// Hover text for a value: grouped integers, otherwise as written
pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value >= 0.0 {
        format_grouped(value as u64)
    } else {
        format!("{value}")
    }
}

/// Axis label for a category axis: the category name on integer ticks only
pub(crate) fn category_tick(dataset: &'static Dataset, value: f64) -> String {
    dataset
        .category_at(value)
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    static DATA: Dataset = Dataset {
        name: "tiny",
        categories: &["x", "y"],
        series: &[Series::new("v", "V", Color32::RED, &[1.0, 2.0])],
    };

    #[test]
    fn test_builder_defaults() {
        let view = ChartView::new("tiny_bar", ChartKind::Bar(BarStyle::default()), &DATA);
        assert_eq!(view.baseline(), 0.0);
        assert!(view.show_grid);
        assert!(!view.show_legend);

        let view = view.value_range(0.6, 1.0).legend(true).height(220.0);
        assert_eq!(view.baseline(), 0.6);
        assert!(view.show_legend);
        assert_eq!(view.height, 220.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(33_500.0), "33,500");
        assert_eq!(format_value(0.873), "0.873");
        assert_eq!(format_value(68.8), "68.8");
    }

    #[test]
    fn test_category_ticks() {
        assert_eq!(category_tick(&DATA, 1.0), "y");
        assert_eq!(category_tick(&DATA, 0.5), "");
        assert_eq!(category_tick(&DATA, 7.0), "");
    }
}
