//! Building blocks shared by the slides

use deck_views::animation::{lerp, lerp_color, Easing, Tween};
use deck_views::colors::{
    with_opacity, CYAN_400, CYAN_500, PURPLE_400, SLATE_200, SLATE_300, SLATE_400, SLATE_500,
    SLATE_800, SLATE_900,
};
use egui::text::{LayoutJob, TextFormat};
use egui::{
    Color32, FontId, Frame, InnerResponse, Margin, Pos2, Rect, RichText, Rounding, Stroke, Ui, Vec2,
};

/// Entry tween of cards: fade in while sliding up
const ENTRANCE: Tween = Tween::new(0.5);
const ENTRANCE_SHIFT: f32 = 20.0;

/// Opacity and downward offset of an element entering after `delay` seconds
pub fn entrance(elapsed: f32, delay: f32) -> (f32, f32) {
    let progress = ENTRANCE.delayed(delay).progress(elapsed).clamp(0.0, 1.0);
    (progress, lerp(ENTRANCE_SHIFT, 0.0, progress))
}

/// Rounded panel that fades in and gets an accent outline on hover
pub fn card<R>(
    ui: &mut Ui,
    elapsed: f32,
    delay: f32,
    accent: Color32,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let (opacity, shift) = entrance(elapsed, delay);
    ui.add_space(shift);

    let response = ui.scope(|ui| {
        ui.visuals_mut().override_text_color = Some(with_opacity(SLATE_200, opacity));
        Frame::none()
            .fill(with_opacity(SLATE_900, 0.6 * opacity))
            .stroke(Stroke::new(1.0, with_opacity(SLATE_800, opacity)))
            .rounding(Rounding::same(12.0))
            .inner_margin(Margin::same(20.0))
            .show(ui, add_contents)
            .inner
    });

    if ui.rect_contains_pointer(response.response.rect) {
        ui.painter().rect_stroke(
            response.response.rect,
            Rounding::same(12.0),
            Stroke::new(1.0, with_opacity(accent, 0.6 * opacity)),
        );
    }
    ui.add_space(ENTRANCE_SHIFT - shift);
    response
}

const TITLE_IN: Tween = Tween::new(0.6).eased(Easing::Spring);
const SUBTITLE_IN: Tween = Tween::new(0.5).delayed(0.3);
const TITLE_SHIFT: f32 = 50.0;

/// Text whose characters fade from one color to another
pub fn gradient_job(
    text: &str,
    font: FontId,
    from: Color32,
    to: Color32,
    opacity: f32,
) -> LayoutJob {
    let mut job = LayoutJob::default();
    let count = text.chars().count().max(2) - 1;
    let mut buf = [0u8; 4];
    for (i, ch) in text.chars().enumerate() {
        let color = lerp_color(from, to, i as f32 / count as f32);
        job.append(
            ch.encode_utf8(&mut buf),
            0.0,
            TextFormat {
                font_id: font.clone(),
                color: with_opacity(color, opacity),
                ..Default::default()
            },
        );
    }
    job
}

/// Slide heading: cyan to purple, springs in from the left
pub fn title(ui: &mut Ui, text: &str, elapsed: f32) {
    let progress = TITLE_IN.progress(elapsed);
    let opacity = progress.clamp(0.0, 1.0);
    ui.horizontal(|ui| {
        ui.add_space(((1.0 - progress) * TITLE_SHIFT).max(0.0));
        ui.label(gradient_job(text, FontId::monospace(40.0), CYAN_400, PURPLE_400, opacity));
    });
    ui.add_space(24.0);
}

/// Muted line under a title, led by a short cyan rule
pub fn subtitle(ui: &mut Ui, text: &str, elapsed: f32) {
    let progress = SUBTITLE_IN.progress(elapsed).clamp(0.0, 1.0);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(32.0, 20.0), egui::Sense::hover());
        let rule_end = Pos2::new(rect.left() + rect.width() * progress, rect.center().y);
        ui.painter().line_segment(
            [Pos2::new(rect.left(), rect.center().y), rule_end],
            Stroke::new(1.0, CYAN_500),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(text).size(22.0).color(with_opacity(SLATE_300, progress)));
    });
    ui.add_space(16.0);
}

/// Wrapped paragraph made of differently colored runs
pub fn paragraph(ui: &mut Ui, runs: &[(&str, Color32)], size: f32) {
    let mut job = LayoutJob::default();
    for (text, color) in runs {
        job.append(
            text,
            0.0,
            TextFormat {
                font_id: FontId::proportional(size),
                color: *color,
                ..Default::default()
            },
        );
    }
    job.wrap.max_width = ui.available_width();
    ui.label(job);
}

/// Panel with a colored bar down its left edge
pub fn callout<R>(
    ui: &mut Ui,
    elapsed: f32,
    delay: f32,
    accent: Color32,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let (opacity, shift) = entrance(elapsed, delay);
    ui.add_space(shift);
    let response = Frame::none()
        .fill(with_opacity(SLATE_800, 0.5 * opacity))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin {
            left: 28.0,
            right: 24.0,
            top: 20.0,
            bottom: 20.0,
        })
        .show(ui, |ui| {
            ui.visuals_mut().override_text_color = Some(with_opacity(SLATE_300, opacity));
            add_contents(ui)
        });

    let rect = response.response.rect;
    let bar = Rect::from_min_size(rect.min, Vec2::new(6.0, rect.height()));
    ui.painter().rect_filled(
        bar,
        Rounding { nw: 12.0, sw: 12.0, ne: 0.0, se: 0.0 },
        with_opacity(accent, opacity),
    );
    response
}

/// Big number with a caption underneath
pub fn stat_tile(ui: &mut Ui, label: &str, value: &str, color: Color32) {
    Frame::none()
        .fill(with_opacity(SLATE_900, 0.6))
        .stroke(Stroke::new(1.0, SLATE_800))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(16.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value).size(34.0).strong().color(color));
                ui.label(RichText::new(label.to_uppercase()).small().color(SLATE_500));
            });
        });
}

/// Labelled horizontal bar filled to `fraction`, grown by `progress`
pub fn progress_bar(
    ui: &mut Ui,
    label: &str,
    value_text: &str,
    fraction: f32,
    color: Color32,
    progress: f32,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(SLATE_400));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value_text).monospace().strong().color(color));
        });
    });

    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 10.0), egui::Sense::hover());
    let rounding = Rounding::same(5.0);
    ui.painter().rect_filled(rect, rounding, SLATE_800);

    let filled = fraction.clamp(0.0, 1.0) * progress.clamp(0.0, 1.0);
    if filled > 0.0 {
        let bar = Rect::from_min_size(rect.min, Vec2::new(rect.width() * filled, rect.height()));
        ui.painter().rect_filled(bar, rounding, color);
    }
}

/// Outlined pill label
pub fn badge(ui: &mut Ui, text: &str, color: Color32) -> egui::Response {
    Frame::none()
        .fill(with_opacity(color, 0.12))
        .stroke(Stroke::new(1.0, with_opacity(color, 0.6)))
        .rounding(Rounding::same(14.0))
        .inner_margin(Margin::symmetric(12.0, 4.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(color));
        })
        .response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_waits_for_delay() {
        assert_eq!(entrance(0.1, 0.2), (0.0, ENTRANCE_SHIFT));
        let (opacity, shift) = entrance(10.0, 0.2);
        assert_eq!(opacity, 1.0);
        assert_eq!(shift, 0.0);
    }

    #[test]
    fn test_entrance_is_monotonic() {
        let mut last = 0.0;
        for step in 0..20 {
            let (opacity, _) = entrance(step as f32 * 0.05, 0.0);
            assert!(opacity >= last);
            last = opacity;
        }
    }

    #[test]
    fn test_gradient_runs_end_to_end() {
        let job = gradient_job("CIC", FontId::monospace(20.0), CYAN_400, PURPLE_400, 1.0);
        assert_eq!(job.text, "CIC");
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[0].format.color, CYAN_400);
        assert_eq!(job.sections[2].format.color, PURPLE_400);
    }

    #[test]
    fn test_widgets_render_headless() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                title(ui, "Unsupervised Anomaly Detection", 0.2);
                subtitle(ui, "Detecting deviations from benign traffic patterns", 0.2);
                paragraph(ui, &[("Winner: ", SLATE_300), ("LOF", CYAN_400)], 16.0);
                callout(ui, 1.0, 0.0, CYAN_400, |ui| ui.label("Key Insight"));
                let inner = card(ui, 1.0, 0.0, CYAN_400, |ui| {
                    stat_tile(ui, "Samples", "227,191", CYAN_400);
                    7
                });
                assert_eq!(inner.inner, 7);
                progress_bar(ui, "Baseline", "68.8%", 0.688, CYAN_400, 1.0);
                badge(ui, "Winner: LOF", CYAN_400);
            });
        });
    }
}
