//! Title and agenda

use deck_ui::{icons, widgets};
use deck_views::animation::{lerp, Easing, Oscillator, SlideClock, Tween};
use deck_views::colors::{
    with_opacity, BLUE_400, BLUE_500, CYAN_400, CYAN_500, PURPLE_400, PURPLE_500, SLATE_300,
    SLATE_400, SLATE_700, SLATE_800, SLATE_900, YELLOW_400, YELLOW_500,
};
use egui::{
    Align2, Color32, FontId, Frame, Margin, Pos2, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2,
};
use std::f32::consts::TAU;

const EMBLEM_IN: Tween = Tween::new(0.8).eased(Easing::Spring);
const HEADLINE_IN: Tween = Tween::new(0.5).delayed(0.5);
const CREDITS_IN: Tween = Tween::new(0.6).delayed(1.0);
const RING: Oscillator = Oscillator::new(20.0);
const RING_DASHES: usize = 36;

const AUTHORS: &str = "Alexis Le Trung, Yahya Ahachim,\nRayan Drissi, Aniss Outaleb";
const CONTEXT: &str = "ML Security -- EPITA SCIA 2026\nJanuary 2026";

const AGENDA: [&str; 5] = [
    "Dataset Overview & Exploration",
    "Anomaly Detection (Unsupervised)",
    "Classification (Supervised)",
    "Adversarial Machine Learning",
    "Strategic Recommendations",
];

/// Shield in a glowing disc, circled by a slowly turning dashed ring
fn emblem(ui: &mut Ui, now: f32, scale: f32, opacity: f32) {
    let size = 150.0 * scale.max(0.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(size * 1.6, size * 1.6), Sense::hover());
    let painter = ui.painter();
    let center = rect.center();
    let radius = size / 2.0;

    painter.circle(
        center,
        radius,
        with_opacity(BLUE_500, 0.1 * opacity),
        Stroke::new(2.0, with_opacity(BLUE_400, 0.5 * opacity)),
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        icons::SHIELD,
        FontId::proportional(72.0 * scale.max(0.0)),
        with_opacity(CYAN_400, opacity),
    );

    let ring = radius * 1.5;
    let turn = RING.phase(now) * TAU;
    let dash = TAU / (RING_DASHES * 2) as f32;
    let stroke = Stroke::new(1.0, with_opacity(CYAN_500, 0.3 * opacity));
    for i in 0..RING_DASHES {
        let start = turn + i as f32 * dash * 2.0;
        let point = |angle: f32| center + Vec2::angled(angle) * ring;
        painter.line_segment([point(start), point(start + dash)], stroke);
    }
}

/// Labelled block with a colored rule down its left side
fn credit(ui: &mut Ui, label: &str, text: &str, color: Color32, opacity: f32) {
    ui.horizontal(|ui| {
        let (rule, _) = ui.allocate_exact_size(Vec2::new(2.0, 64.0), Sense::hover());
        ui.painter().rect_filled(rule, 0.0, with_opacity(color, 0.5 * opacity));
        ui.add_space(12.0);
        ui.vertical(|ui| {
            ui.label(
                RichText::new(label.to_uppercase())
                    .size(13.0)
                    .strong()
                    .color(with_opacity(color, opacity)),
            );
            ui.label(RichText::new(text).size(17.0).color(with_opacity(SLATE_300, opacity)));
        });
    });
}

pub(super) fn title(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let scale = lerp(0.5, 1.0, EMBLEM_IN.progress(elapsed));
    let opacity = EMBLEM_IN.raw(elapsed);
    let headline = HEADLINE_IN.progress(elapsed).clamp(0.0, 1.0);
    let credits = CREDITS_IN.progress(elapsed).clamp(0.0, 1.0);

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.04).max(0.0));
        emblem(ui, clock.now(), scale, opacity);

        ui.label(
            RichText::new("CIC-IIoT-2025")
                .size(84.0)
                .strong()
                .color(with_opacity(Color32::WHITE, opacity)),
        );
        ui.add_space(lerp(20.0, 0.0, headline));
        ui.label(widgets::gradient_job(
            "Security Analysis",
            FontId::proportional(40.0),
            CYAN_400,
            PURPLE_400,
            headline,
        ));
        ui.add_space(16.0);
        ui.label(
            RichText::new("Machine Learning for Intrusion Detection in Industrial IoT")
                .size(24.0)
                .color(with_opacity(SLATE_400, opacity)),
        );
        ui.add_space(40.0);

        let width = ui.available_width().min(760.0);
        ui.allocate_ui(Vec2::new(width, 120.0), |ui| {
            let top = ui.max_rect().top();
            ui.painter().line_segment(
                [Pos2::new(ui.max_rect().left(), top), Pos2::new(ui.max_rect().right(), top)],
                Stroke::new(1.0, with_opacity(SLATE_800, credits)),
            );
            ui.add_space(28.0);
            ui.columns(2, |columns| {
                credit(&mut columns[0], "Authors", AUTHORS, CYAN_500, credits);
                credit(&mut columns[1], "Context", CONTEXT, PURPLE_500, credits);
            });
        });
    });
}

/// Numbered agenda row; the number tile lights up under the pointer
fn agenda_item(ui: &mut Ui, index: usize, text: &str, progress: f32) {
    let opacity = progress.clamp(0.0, 1.0);
    ui.horizontal(|ui| {
        ui.add_space(((1.0 - progress) * 100.0).max(0.0));
        let (tile, _) = ui.allocate_exact_size(Vec2::splat(56.0), Sense::hover());
        let hovered = ui.rect_contains_pointer(tile);
        let (fill, number) = if hovered {
            (CYAN_500, Color32::WHITE)
        } else {
            (SLATE_800, CYAN_400)
        };
        ui.painter()
            .rect_filled(tile, Rounding::same(12.0), with_opacity(fill, opacity));
        ui.painter().text(
            tile.center(),
            Align2::CENTER_CENTER,
            format!("{:02}", index + 1),
            FontId::monospace(20.0),
            with_opacity(number, opacity),
        );
        ui.add_space(16.0);
        let color = if hovered { Color32::WHITE } else { SLATE_300 };
        ui.label(RichText::new(text).size(23.0).color(with_opacity(color, opacity)));
    });
}

fn objective(ui: &mut Ui, clock: &SlideClock) {
    let progress = Tween::new(0.6)
        .delayed(1.0)
        .eased(Easing::Spring)
        .progress(clock.elapsed());
    let opacity = progress.clamp(0.0, 1.0);
    ui.add_space(((1.0 - progress) * 30.0).max(0.0));

    let inner = Frame::none()
        .fill(with_opacity(SLATE_900, opacity))
        .stroke(Stroke::new(1.0, with_opacity(SLATE_700, 0.5 * opacity)))
        .rounding(Rounding::same(24.0))
        .inner_margin(Margin::same(40.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let zap = with_opacity(YELLOW_400, opacity * super::pulse(clock.now()));
                Frame::none()
                    .fill(with_opacity(YELLOW_500, 0.2 * opacity))
                    .rounding(Rounding::same(8.0))
                    .inner_margin(Margin::same(12.0))
                    .show(ui, |ui| ui.label(RichText::new(icons::BOLT).size(30.0).color(zap)));
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Objective")
                        .size(30.0)
                        .strong()
                        .color(with_opacity(Color32::WHITE, opacity)),
                );
            });
            ui.add_space(20.0);
            let body = with_opacity(SLATE_300, opacity);
            widgets::paragraph(
                ui,
                &[
                    ("Evaluate Machine Learning methods for IIoT intrusion detection ", body),
                    ("and critically assess their ", body),
                    ("robustness", with_opacity(YELLOW_400, opacity)),
                    (" against adversarial attacks.", body),
                ],
                21.0,
            );
        });

    let rect = inner.response.rect;
    let bar = Rect::from_min_size(rect.min, Vec2::new(rect.width(), 4.0));
    ui.painter().rect_filled(
        bar,
        Rounding { nw: 24.0, ne: 24.0, sw: 0.0, se: 0.0 },
        with_opacity(YELLOW_500, opacity),
    );
}

pub(super) fn agenda(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    widgets::title(ui, "Mission Agenda", elapsed);
    ui.add_space(24.0);

    ui.columns(2, |columns| {
        for (index, item) in AGENDA.iter().enumerate() {
            let progress = Tween::new(0.6)
                .delayed(index as f32 * 0.15 + 0.3)
                .eased(Easing::Spring)
                .progress(elapsed);
            agenda_item(&mut columns[0], index, item, progress);
            columns[0].add_space(20.0);
        }
        objective(&mut columns[1], clock);
    });
}
