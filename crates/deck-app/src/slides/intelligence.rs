//! Dataset overview and feature engineering

use super::chart;
use crate::data;
use deck_ui::{chart_id, icons, widgets};
use deck_views::animation::{AnimatedCounter, SlideClock};
use deck_views::charts::{BarStyle, ChartKind, ChartView, Orientation, PieStyle};
use deck_views::colors::{
    with_opacity, BLUE_500, CYAN_400, PURPLE_400, SLATE_300, SLATE_800, YELLOW_400,
};
use egui::{Color32, Frame, Margin, RichText, Rounding, Stroke, Ui};

/// Card heading with an icon in front
fn card_heading(ui: &mut Ui, icon: &str, icon_color: Color32, text: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(22.0).color(icon_color));
        ui.label(RichText::new(text).size(24.0).strong().color(Color32::WHITE));
    });
    ui.add_space(8.0);
}

pub(super) fn dataset(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let slide = super::Slide::Dataset.position();
    widgets::title(ui, "CIC-IIoT-2025 Intelligence", elapsed);

    ui.columns(2, |columns| {
        widgets::card(&mut columns[0], elapsed, 0.2, CYAN_400, |ui| {
            card_heading(ui, icons::CHART, PURPLE_400, "Class Distribution");
            let pie = PieStyle {
                center_caption: Some(("227k", "Total")),
                ..PieStyle::default()
            };
            chart(
                ui,
                clock,
                ChartView::new(
                    chart_id(slide, "class_split"),
                    ChartKind::Pie(pie),
                    &data::CLASS_SPLIT,
                )
                .height(256.0)
                .legend(true),
                0.5,
                1.5,
            );
            ui.add_space(16.0);

            let tiles = [
                ("Samples", data::TOTAL_SAMPLES, CYAN_400),
                ("Features", data::FEATURE_COUNT, PURPLE_400),
                ("Types", data::ATTACK_TYPES, YELLOW_400),
            ];
            ui.columns(tiles.len(), |cells| {
                for (cell, (label, target, color)) in cells.iter_mut().zip(tiles) {
                    let value = AnimatedCounter::new(target).text_at(elapsed);
                    widgets::stat_tile(cell, label, &value, color);
                }
            });
        });

        widgets::card(&mut columns[1], elapsed, 0.4, CYAN_400, |ui| {
            card_heading(ui, icons::DATABASE, CYAN_400, "Attack Distribution");
            let bars = BarStyle {
                orientation: Orientation::Horizontal,
                group_width: 0.6,
            };
            chart(
                ui,
                clock,
                ChartView::new(
                    chart_id(slide, "attack_categories"),
                    ChartKind::Bar(bars),
                    &data::ATTACK_CATEGORIES,
                )
                .height(320.0),
                0.4,
                1.5,
            );
        });
    });
}

pub(super) fn features(ui: &mut Ui, clock: &SlideClock) {
    let elapsed = clock.elapsed();
    let slide = super::Slide::Features.position();
    widgets::title(ui, "Feature Engineering", elapsed);
    widgets::subtitle(ui, "Key Discriminative Features (Top Correlation)", elapsed);

    widgets::card(ui, elapsed, 0.0, CYAN_400, |ui| {
        let bars = BarStyle {
            orientation: Orientation::Horizontal,
            group_width: 0.7,
        };
        chart(
            ui,
            clock,
            ChartView::new(
                chart_id(slide, "correlation"),
                ChartKind::Bar(bars),
                &data::FEATURE_CORRELATION,
            )
            .value_range(0.0, 0.6)
            .height(300.0),
            0.2,
            2.0,
        );

        let (opacity, shift) = widgets::entrance(elapsed, 1.0);
        ui.add_space(8.0 + shift);
        Frame::none()
            .fill(with_opacity(SLATE_800, 0.5 * opacity))
            .stroke(Stroke::new(1.0, with_opacity(BLUE_500, 0.3 * opacity)))
            .rounding(Rounding::same(8.0))
            .inner_margin(Margin::same(16.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let body = with_opacity(SLATE_300, opacity);
                    widgets::paragraph(
                        ui,
                        &[
                            ("Insight: ", with_opacity(CYAN_400, opacity)),
                            ("TCP MSS (Maximum Segment Size) and Protocol diversity ", body),
                            ("are the strongest attack indicators (Corr > 0.5).", body),
                        ],
                        18.0,
                    );
                });
            });
    });
}
