//! Anomaly detection and supervised classification results

use super::{chart, pulse, Slide};
use crate::data;
use deck_ui::{chart_id, icons, widgets};
use deck_views::animation::{SlideClock, Tween};
use deck_views::charts::{BarStyle, ChartKind, ChartView, Orientation};
use deck_views::colors::{
    with_opacity, CYAN_400, GREEN_400, ORANGE_500, PINK_400, PURPLE_300, PURPLE_400, RED_500,
    SLATE_400, SLATE_600, SLATE_800, YELLOW_400,
};
use egui::{Color32, Frame, Margin, RichText, Rounding, Sense, Ui, Vec2};

const METHODS: [(&str, &str, Color32); 3] = [
    ("Random Forest", "Ensemble voting (High Robustness)", CYAN_400),
    ("Gradient Boosting", "Sequential error correction", PURPLE_400),
    ("SVM (RBF)", "Non-linear kernels via RBF", PINK_400),
];

pub(super) fn anomaly(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let slide = Slide::Anomaly.position();
    widgets::title(ui, "Unsupervised Anomaly Detection", elapsed);
    widgets::subtitle(ui, "Detecting deviations from benign traffic patterns", elapsed);

    ui.columns(2, |columns| {
        widgets::card(&mut columns[0], elapsed, 0.2, CYAN_400, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icons::CHART).size(20.0).color(CYAN_400));
                ui.label(
                    RichText::new("Precision-Recall Curves")
                        .size(20.0)
                        .strong()
                        .color(Color32::WHITE),
                );
            });
            chart(
                ui,
                clock,
                ChartView::new(chart_id(slide, "pr_curves"), ChartKind::Line, &data::PR_CURVES)
                    .value_range(0.4, 1.0)
                    .legend(true)
                    .x_label("Recall")
                    .y_label("Precision")
                    .height(320.0),
                0.2,
                2.0,
            );
        });

        widgets::card(&mut columns[1], elapsed, 0.4, CYAN_400, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Performance Metrics")
                        .size(20.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let glow = pulse(clock.now());
                    widgets::badge(ui, "Winner: LOF", with_opacity(ORANGE_500, glow));
                });
            });
            ui.add_space(12.0);
            chart(
                ui,
                clock,
                ChartView::new(
                    chart_id(slide, "metrics"),
                    ChartKind::Bar(BarStyle::default()),
                    &data::ANOMALY_RESULTS,
                )
                .value_range(0.6, 1.0)
                .legend(true)
                .height(300.0),
                0.4,
                1.5,
            );
        });
    });
}

/// Method row: square marker, name, one-line description
fn method(ui: &mut Ui, name: &str, description: &str, color: Color32, opacity: f32) {
    Frame::none()
        .fill(with_opacity(SLATE_800, 0.4 * opacity))
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("▪").size(20.0).color(with_opacity(color, opacity)));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(name)
                            .size(18.0)
                            .strong()
                            .color(with_opacity(Color32::WHITE, opacity)),
                    );
                    ui.label(
                        RichText::new(description)
                            .size(14.0)
                            .color(with_opacity(SLATE_400, opacity)),
                    );
                });
            });
        });
}

/// Definition with a thin rule down its left edge
fn definition(ui: &mut Ui, text: &str, opacity: f32) {
    ui.horizontal(|ui| {
        ui.add_space(4.0);
        let (rule, _) = ui.allocate_exact_size(Vec2::new(1.0, 22.0), Sense::hover());
        ui.painter().rect_filled(rule, 0.0, with_opacity(SLATE_600, opacity));
        ui.add_space(12.0);
        ui.label(RichText::new(text).size(16.0).color(with_opacity(SLATE_400, opacity)));
    });
}

fn concepts(ui: &mut Ui, clock: &SlideClock) {
    let (opacity, _) = widgets::entrance(clock.elapsed(), 0.8);
    widgets::callout(ui, clock.elapsed(), 0.8, YELLOW_400, |ui| {
        ui.label(
            RichText::new(format!("{}  CONCEPT DEFINITION", icons::LOCK))
                .size(13.0)
                .strong()
                .color(with_opacity(YELLOW_400, opacity)),
        );
        ui.add_space(16.0);

        ui.label(
            RichText::new("Astute Accuracy")
                .size(21.0)
                .strong()
                .color(with_opacity(Color32::WHITE, opacity)),
        );
        definition(ui, "Performance on clean, standard test data.", opacity);
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Robust Accuracy")
                    .size(21.0)
                    .strong()
                    .color(with_opacity(Color32::WHITE, opacity)),
            );
            let flash = with_opacity(RED_500, opacity * pulse(clock.now()));
            Frame::none()
                .fill(flash)
                .rounding(Rounding::same(4.0))
                .inner_margin(Margin::symmetric(6.0, 2.0))
                .show(ui, |ui| {
                    ui.label(RichText::new("CRITICAL").size(11.0).color(Color32::WHITE))
                });
        });
        definition(ui, "Performance under active adversarial attack.", opacity);
    });
}

pub(super) fn classification(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let slide = Slide::Classification.position();
    widgets::title(ui, "Supervised Classification", elapsed);

    ui.columns(2, |columns| {
        let left = &mut columns[0];
        widgets::card(left, elapsed, 0.1, CYAN_400, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icons::CHECK).size(26.0).color(GREEN_400));
                ui.label(RichText::new("Methodology").size(24.0).strong().color(Color32::WHITE));
            });
            ui.add_space(12.0);
            for (i, (name, description, color)) in METHODS.iter().enumerate() {
                let opacity = Tween::new(0.4).delayed(0.5 + i as f32 * 0.2).progress(elapsed);
                method(ui, name, description, *color, opacity);
                ui.add_space(8.0);
            }
        });

        widgets::card(left, elapsed, 0.3, PURPLE_400, |ui| {
            ui.label(RichText::new("Results Comparison").size(20.0).strong().color(Color32::WHITE));
            let bars = BarStyle {
                orientation: Orientation::Horizontal,
                group_width: 0.6,
            };
            chart(
                ui,
                clock,
                ChartView::new(
                    chart_id(slide, "f1"),
                    ChartKind::Bar(bars),
                    &data::CLASSIFICATION_F1,
                )
                .value_range(0.8, 1.0)
                .hide_value_axis()
                .grid(false)
                .height(200.0),
                0.3,
                1.5,
            );
            Frame::none()
                .fill(with_opacity(PURPLE_400, 0.12))
                .rounding(Rounding::same(4.0))
                .inner_margin(Margin::same(8.0))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Random Forest leads with 92.7% F1")
                                .size(14.0)
                                .strong()
                                .color(PURPLE_300),
                        );
                    });
                });
        });

        let right = &mut columns[1];
        right.add_space((right.available_height() * 0.2).max(0.0));
        concepts(right, clock);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_cover_the_compared_models() {
        let names: Vec<_> = METHODS.iter().map(|(name, _, _)| *name).collect();
        assert!(names.contains(&"Random Forest"));
        assert!(names.contains(&"SVM (RBF)"));
        assert_eq!(data::CLASSIFIER_SCORES.len(), METHODS.len());
    }
}
