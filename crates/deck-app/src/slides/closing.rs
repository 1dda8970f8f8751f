//! Summary, recommendations and the closing Q&A

use super::pulse;
use crate::data;
use deck_ui::{icons, widgets};
use deck_views::animation::{lerp, Easing, Oscillator, SlideClock, Tween};
use deck_views::colors::{
    with_opacity, BLUE_300, BLUE_400, BLUE_500, BLUE_600, CYAN_400, CYAN_500, GREEN_400,
    GREEN_500, PURPLE_400, SLATE_200, SLATE_300, SLATE_400, SLATE_700, SLATE_800,
    SLATE_900, YELLOW_400, YELLOW_500,
};
use egui::{
    Align2, Color32, FontId, Frame, Margin, Pos2, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2,
};
use tracing::debug;

const LAYERS: [(&str, &str, Color32); 3] = [
    ("Layer 1: LOF", "Early warning system for zero-day anomalies.", CYAN_400),
    ("Layer 2: Random Forest", "Robust classification of known threats.", PURPLE_400),
    ("Layer 3: Validation", "Adversarial training & input sanitization.", GREEN_400),
];

const HARDENING: [&str; 3] = [
    "Implement adversarial training with augmented FGSM samples",
    "Regular model retraining cycle with new threat intelligence",
    "Real-time feature monitoring for distribution drift",
];

const FLOAT: Oscillator = Oscillator::new(4.0);

/// One summary card: task, winning model, its headline metric
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Finding {
    pub task: &'static str,
    pub model: &'static str,
    pub metric: String,
    pub icon: &'static str,
    pub color: Color32,
}

/// Headline findings, derived from the result tables
pub(crate) fn findings() -> [Finding; 3] {
    let detector = data::best_detector();
    let classifier = data::best_classifier();
    let retained = data::retained_accuracy(classifier.name).unwrap_or_default();
    [
        Finding {
            task: "Zero-day Detection",
            model: "Local Outlier Factor",
            metric: format!("AUPRC {:.3}", detector.auprc),
            icon: icons::CHART,
            color: BLUE_400,
        },
        Finding {
            task: "Attack Classification",
            model: classifier.name,
            metric: format!("F1 {:.3}", classifier.f1),
            icon: icons::LAYERS,
            color: PURPLE_400,
        },
        Finding {
            task: "Adversarial Defense",
            model: classifier.name,
            metric: format!("{retained:.1}% Robustness"),
            icon: icons::SHIELD,
            color: GREEN_400,
        },
    ]
}

fn finding_card(ui: &mut Ui, finding: &Finding, progress: f32) {
    let opacity = progress.clamp(0.0, 1.0);
    ui.add_space(((1.0 - progress) * 50.0).max(0.0));
    let inner = Frame::none()
        .fill(with_opacity(SLATE_900, 0.8 * opacity))
        .rounding(Rounding::same(16.0))
        .inner_margin(Margin::same(32.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                Frame::none()
                    .fill(with_opacity(SLATE_800, opacity))
                    .rounding(Rounding::same(32.0))
                    .inner_margin(Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(finding.icon)
                                .size(36.0)
                                .color(with_opacity(finding.color, opacity)),
                        );
                    });
                ui.add_space(20.0);
                ui.label(
                    RichText::new(finding.task.to_uppercase())
                        .size(12.0)
                        .strong()
                        .color(with_opacity(SLATE_400, opacity)),
                );
                ui.add_space(12.0);
                ui.label(
                    RichText::new(finding.model)
                        .size(24.0)
                        .strong()
                        .color(with_opacity(Color32::WHITE, opacity)),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&finding.metric)
                        .monospace()
                        .size(24.0)
                        .strong()
                        .color(with_opacity(finding.color, opacity)),
                );
            });
        });

    let rect = inner.response.rect;
    ui.painter().rect_filled(
        Rect::from_min_size(rect.min, Vec2::new(rect.width(), 4.0)),
        Rounding { nw: 16.0, ne: 16.0, sw: 0.0, se: 0.0 },
        with_opacity(finding.color, opacity),
    );
}

pub(super) fn summary(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    ui.add_space((ui.available_height() * 0.1).max(0.0));
    widgets::title(ui, "Tactical Summary", elapsed);

    let findings = findings();
    ui.columns(findings.len(), |columns| {
        for (i, (column, finding)) in columns.iter_mut().zip(findings.iter()).enumerate() {
            let progress = Tween::new(0.7)
                .delayed(i as f32 * 0.2)
                .eased(Easing::Spring)
                .progress(elapsed);
            finding_card(column, finding, progress);
        }
    });

    let quote = Tween::new(0.6).delayed(1.5).progress(elapsed).clamp(0.0, 1.0);
    ui.add_space(56.0);
    ui.vertical_centered(|ui| {
        let body = with_opacity(SLATE_300, quote);
        widgets::paragraph(
            ui,
            &[
                ("\"No single model excels at all tasks -- ", body),
                ("Defense-in-Depth", with_opacity(CYAN_400, quote)),
                (" is required.\"", body),
            ],
            24.0,
        );
    });
}

/// Timeline entry with a dot sitting on the rail to its left
fn layer(ui: &mut Ui, rail_x: f32, title: &str, text: &str, color: Color32, progress: f32) {
    let opacity = progress.clamp(0.0, 1.0);
    ui.add_space(((1.0 - progress) * 50.0).max(0.0));
    let inner = Frame::none()
        .fill(with_opacity(SLATE_800, opacity))
        .stroke(Stroke::new(1.0, with_opacity(SLATE_700, 0.5 * opacity)))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(18.0).strong().color(with_opacity(color, opacity)));
            ui.label(RichText::new(text).size(16.0).color(with_opacity(SLATE_300, opacity)));
        });
    let dot = Pos2::new(rail_x, inner.response.rect.center().y);
    ui.painter().circle(
        dot,
        12.0,
        with_opacity(color, opacity),
        Stroke::new(4.0, with_opacity(SLATE_900, opacity)),
    );
}

fn hardening_item(ui: &mut Ui, text: &str, progress: f32) {
    let opacity = progress.clamp(0.0, 1.0);
    let inner = Frame::none()
        .fill(with_opacity(SLATE_900, 0.6 * opacity))
        .stroke(Stroke::new(1.0, with_opacity(SLATE_700, opacity)))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(icons::CHECK)
                        .size(22.0)
                        .color(with_opacity(GREEN_500, opacity)),
                );
                ui.add_space(8.0);
                ui.label(RichText::new(text).size(18.0).color(with_opacity(SLATE_200, opacity)));
            });
        });
    if ui.rect_contains_pointer(inner.response.rect) {
        ui.painter().rect_stroke(
            inner.response.rect,
            Rounding::same(12.0),
            Stroke::new(1.0, with_opacity(YELLOW_500, 0.3)),
        );
    }
}

pub(super) fn recommendations(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    widgets::title(ui, "Strategic Recommendations", elapsed);

    ui.columns(2, |columns| {
        let left = &mut columns[0];
        left.horizontal(|ui| {
            ui.label(RichText::new(icons::LAYERS).size(28.0).color(CYAN_400));
            ui.label(
                RichText::new("Multi-Layer Defense")
                    .size(24.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
        left.add_space(24.0);

        let rail_x = left.max_rect().left() + 16.0;
        let rail_top = left.cursor().top();
        left.horizontal_top(|ui| {
            ui.add_space(48.0);
            ui.vertical(|ui| {
                for (i, (title, text, color)) in LAYERS.iter().enumerate() {
                    let progress = Tween::new(0.5).delayed(0.2 + i as f32 * 0.2).progress(elapsed);
                    layer(ui, rail_x, title, text, *color, progress);
                    ui.add_space(20.0);
                }
            });
        });
        let rail_bottom = left.cursor().top();
        left.painter().line_segment(
            [Pos2::new(rail_x, rail_top), Pos2::new(rail_x, rail_bottom)],
            Stroke::new(2.0, SLATE_700),
        );

        let right = &mut columns[1];
        right.horizontal(|ui| {
            ui.label(RichText::new(icons::DATABASE).size(28.0).color(YELLOW_400));
            ui.label(
                RichText::new("Production Hardening")
                    .size(24.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
        right.add_space(24.0);
        for (i, text) in HARDENING.iter().enumerate() {
            let progress = Tween::new(0.4).delayed(1.0 + i as f32 * 0.2).progress(elapsed);
            hardening_item(right, text, progress);
            right.add_space(16.0);
        }

        let (opacity, _) = widgets::entrance(elapsed, 2.0);
        right.add_space(16.0);
        Frame::none()
            .fill(with_opacity(BLUE_600, 0.1 * opacity))
            .stroke(Stroke::new(1.0, with_opacity(BLUE_500, 0.2 * opacity)))
            .rounding(Rounding::same(12.0))
            .inner_margin(Margin::same(24.0))
            .show(right, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Ready for deployment?")
                            .size(17.0)
                            .color(with_opacity(BLUE_300, opacity)),
                    );
                    ui.add_space(8.0);
                    let button = egui::Button::new(
                        RichText::new("Initiate Protocol")
                            .strong()
                            .color(with_opacity(Color32::WHITE, opacity)),
                    )
                    .fill(with_opacity(BLUE_600, opacity))
                    .rounding(Rounding::same(18.0));
                    if ui.add(button).clicked() {
                        debug!("deployment protocol requested");
                    }
                });
            });
    });
}

/// Small L-shaped marks in the four corners of a panel
fn corner_brackets(ui: &Ui, rect: Rect, color: Color32) {
    let inset = rect.shrink(32.0);
    let arm = 16.0;
    let stroke = Stroke::new(2.0, color);
    for (corner, dx, dy) in [
        (inset.left_top(), arm, arm),
        (inset.right_top(), -arm, arm),
        (inset.left_bottom(), arm, -arm),
        (inset.right_bottom(), -arm, -arm),
    ] {
        ui.painter().line_segment([corner, corner + Vec2::new(dx, 0.0)], stroke);
        ui.painter().line_segment([corner, corner + Vec2::new(0.0, dy)], stroke);
    }
}

pub(super) fn end(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let progress = Tween::new(1.0).eased(Easing::Spring).progress(elapsed);
    let opacity = progress.clamp(0.0, 1.0);
    let scale = lerp(0.5, 1.0, progress);
    let float = -10.0 * FLOAT.ping_pong(clock.now());

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.12).max(0.0));
        let width = (ui.available_width() * 0.6).min(672.0) * scale.max(0.1);
        let inner = Frame::none()
            .fill(with_opacity(SLATE_900, 0.9 * opacity))
            .stroke(Stroke::new(1.0, with_opacity(SLATE_700, opacity)))
            .rounding(Rounding::same(48.0))
            .inner_margin(Margin::same(64.0))
            .show(ui, |ui| {
                ui.set_width(width);
                ui.vertical_centered(|ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 96.0), Sense::hover());
                    ui.painter().text(
                        rect.center() + Vec2::new(0.0, float),
                        Align2::CENTER_CENTER,
                        "Q&A",
                        FontId::proportional(72.0 * scale.max(0.1)),
                        with_opacity(Color32::WHITE, opacity),
                    );
                    ui.add_space(24.0);

                    let status = opacity * pulse(clock.now());
                    widgets::paragraph(
                        ui,
                        &[
                            ("System Status: ", with_opacity(CYAN_400, status)),
                            ("Analysis Complete", with_opacity(GREEN_400, status)),
                        ],
                        24.0,
                    );
                    ui.add_space(24.0);
                    for line in ["CIC-IIoT-2025 Security Analysis", "EPITA SCIA 2026"] {
                        ui.label(
                            RichText::new(line)
                                .size(18.0)
                                .color(with_opacity(SLATE_400, opacity)),
                        );
                    }
                });
            });
        corner_brackets(ui, inner.response.rect, with_opacity(CYAN_500, opacity));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_findings_match_the_reported_figures() {
        let [detection, classification, defense] = findings();
        assert_eq!(detection.metric, "AUPRC 0.873");
        assert_eq!(classification.model, "Random Forest");
        assert_eq!(classification.metric, "F1 0.927");
        assert_eq!(defense.metric, "44.2% Robustness");
    }

    #[test]
    fn test_three_defense_layers() {
        assert_eq!(LAYERS.len(), 3);
        assert!(LAYERS[0].0.contains("LOF"));
        assert!(LAYERS[1].0.contains("Random Forest"));
    }
}
