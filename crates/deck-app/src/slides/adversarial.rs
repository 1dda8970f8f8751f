//! Evasion, poisoning and the robustness comparison

use super::{chart, pulse, Slide};
use crate::data;
use deck_ui::{chart_id, icons, widgets};
use deck_views::animation::{SlideClock, Tween};
use deck_views::charts::{BarStyle, ChartKind, ChartView};
use deck_views::colors::{
    with_opacity, CYAN_300, CYAN_400, CYAN_500, GREEN_500, RED_400, RED_500, SLATE_300,
    SLATE_400, SLATE_500, SLATE_700, SLATE_800, YELLOW_400, YELLOW_500,
};
use egui::{Align, Color32, Frame, Layout, Margin, RichText, Rounding, Stroke, Ui, Vec2};

const FORMULA: &str = "x_adv = x + ε · sign(∇x J(θ, x, y))";

const FGSM_NOTE: &str =
    "Small perturbations (ε) cause massive drops in confidence for linear models.";
const ENSEMBLE_NOTE: &str =
    "Ensemble methods provide inherent regularization against gradient-based attacks.";

/// Poisoning progress bars: (label, value text, accuracy, color, delay)
const POISON_BARS: [(&str, &str, f32, Color32, f32); 2] = [
    ("Poison Rate 0% (Baseline)", "68.8% Acc", 0.688, GREEN_500, 0.5),
    ("Poison Rate 25% (Compromised)", "60.5% Acc", 0.605, RED_500, 0.8),
];

/// Row of the epsilon table
fn epsilon_row(
    ui: &mut Ui,
    label: &str,
    value: &str,
    strength: f32,
    value_color: Color32,
    size: f32,
) {
    Frame::none()
        .fill(with_opacity(RED_500, 0.1 * strength))
        .stroke(Stroke::new(1.0, with_opacity(RED_500, 0.2 * strength)))
        .rounding(Rounding::same(4.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(SLATE_300));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(value).size(size).strong().color(value_color));
                });
            });
        });
}

pub(super) fn fgsm(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let slide = Slide::Fgsm.position();
    widgets::title(ui, "Exploratory Attack (FGSM)", elapsed);
    widgets::subtitle(ui, "Fast Gradient Sign Method: Perturbing test-time inputs", elapsed);

    let width = ui.available_width();
    let height = ui.available_height();
    ui.horizontal_top(|ui| {
        let column = Vec2::new(width / 3.0, height);
        ui.allocate_ui_with_layout(column, Layout::top_down(Align::Min), |ui| {
            let (opacity, shift) = widgets::entrance(elapsed, 0.5);
            ui.add_space(shift);
            Frame::none()
                .fill(with_opacity(SLATE_800, opacity))
                .stroke(Stroke::new(1.0, with_opacity(SLATE_700, opacity)))
                .rounding(Rounding::same(12.0))
                .inner_margin(Margin::same(24.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(FORMULA)
                            .monospace()
                            .size(19.0)
                            .strong()
                            .color(with_opacity(CYAN_300, opacity)),
                    );
                });
            ui.add_space(20.0);

            ui.label(
                RichText::new(FGSM_NOTE)
                    .size(17.0)
                    .color(SLATE_300),
            );
            ui.add_space(12.0);
            epsilon_row(ui, "Epsilon 0.01:", "32.1% Acc", 1.0, RED_400, 20.0);
            ui.add_space(8.0);
            let alarm = with_opacity(RED_500, pulse(clock.now()));
            epsilon_row(ui, "Epsilon 0.10:", "13.3% Acc", 2.0, alarm, 24.0);
        });

        ui.add_space(24.0);
        ui.vertical(|ui| {
            widgets::card(ui, elapsed, 0.3, RED_500, |ui| {
                chart(
                    ui,
                    clock,
                    ChartView::new(
                        chart_id(slide, "accuracy"),
                        ChartKind::Area,
                        &data::FGSM_ACCURACY,
                    )
                    .x_label("Epsilon (Perturbation)")
                    .height((height - 60.0).clamp(240.0, 400.0)),
                    0.3,
                    2.5,
                );
            });
        });
    });
}

pub(super) fn poisoning(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let slide = Slide::Poisoning.position();
    widgets::title(ui, "Causative Attack (Poisoning)", elapsed);
    widgets::subtitle(ui, "Label Flipping: Corrupting the training data", elapsed);

    ui.columns(2, |columns| {
        widgets::card(&mut columns[0], elapsed, 0.2, YELLOW_500, |ui| {
            ui.horizontal(|ui| {
                Frame::none()
                    .fill(with_opacity(YELLOW_500, 0.2))
                    .rounding(Rounding::same(8.0))
                    .inner_margin(Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(icons::ALERT).size(26.0).color(YELLOW_500))
                    });
                ui.label(RichText::new("Mechanism").size(24.0).strong().color(Color32::WHITE));
            });
            ui.add_space(16.0);
            widgets::paragraph(
                ui,
                &[
                    ("Attacker injects mislabeled samples into the training set. ", SLATE_300),
                    ("The model learns incorrect decision boundaries, affecting ", SLATE_300),
                    ("ALL", YELLOW_400),
                    (" future predictions.", SLATE_300),
                ],
                18.0,
            );
            ui.add_space(24.0);

            for (label, value, fraction, color, delay) in POISON_BARS {
                let grown = Tween::new(1.5).delayed(delay).progress(elapsed);
                widgets::progress_bar(ui, label, value, fraction, color, grown);
                ui.add_space(20.0);
            }
        });

        widgets::card(&mut columns[1], elapsed, 0.4, YELLOW_500, |ui| {
            ui.label(
                RichText::new("Boundary Shift Impact")
                    .size(20.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(12.0);
            chart(
                ui,
                clock,
                ChartView::new(
                    chart_id(slide, "accuracy"),
                    ChartKind::Line,
                    &data::POISONING_ACCURACY,
                )
                .value_range(50.0, 75.0)
                .x_label("Poison Rate")
                .height(300.0),
                0.4,
                2.5,
            );
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Linear SVM (2D PCA) Performance Decay")
                        .monospace()
                        .size(13.0)
                        .color(SLATE_500),
                );
            });
        });
    });
}

pub(super) fn robustness(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let slide = Slide::Robustness.position();
    widgets::title(ui, "Robustness Analysis", elapsed);
    widgets::subtitle(ui, "Model performance under FGSM Attack (ε=0.5)", elapsed);

    let bars = BarStyle {
        group_width: 0.8,
        ..BarStyle::default()
    };
    let height = (ui.available_height() - 180.0).clamp(240.0, 400.0);
    chart(
        ui,
        clock,
        ChartView::new(chart_id(slide, "astute_vs_robust"), ChartKind::Bar(bars), &data::ROBUSTNESS)
            .legend(true)
            .height(height),
        0.2,
        1.5,
    );
    ui.add_space(16.0);

    widgets::callout(ui, elapsed, 1.0, CYAN_500, |ui| {
        ui.horizontal_top(|ui| {
            let glow = with_opacity(CYAN_400, pulse(clock.now()));
            ui.label(RichText::new(icons::SHIELD).size(26.0).color(glow));
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("Key Insight").size(18.0).strong().color(CYAN_400));
                widgets::paragraph(
                    ui,
                    &[
                        ("Random Forest", Color32::WHITE),
                        (" retains 44% accuracy under heavy attack, ", SLATE_300),
                        ("while linear models collapse ", SLATE_300),
                        ("to near-random performance (3.5%).", SLATE_300),
                    ],
                    17.0,
                );
                ui.label(
                    RichText::new(ENSEMBLE_NOTE)
                        .size(14.0)
                        .color(SLATE_400),
                );
            });
        });
    });
}
