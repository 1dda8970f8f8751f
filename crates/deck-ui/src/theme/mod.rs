use deck_views::colors::{
    BACKGROUND, CYAN_400, CYBER_BLUE, SLATE_200, SLATE_400, SLATE_700, SLATE_800, SLATE_900,
};
use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub accent: Color32,
    /// Scale applied to every text style
    pub text_scale: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Cyber Dark".to_string(),
            accent: CYBER_BLUE,
            text_scale: 1.0,
        }
    }
}

/// Text sizes of the deck, before scaling
fn text_styles(scale: f32) -> BTreeMap<TextStyle, FontId> {
    let mut sizes = BTreeMap::new();
    sizes.insert(TextStyle::Small, FontId::new(12.0 * scale, FontFamily::Proportional));
    sizes.insert(TextStyle::Body, FontId::new(16.0 * scale, FontFamily::Proportional));
    sizes.insert(TextStyle::Button, FontId::new(15.0 * scale, FontFamily::Proportional));
    sizes.insert(TextStyle::Heading, FontId::new(34.0 * scale, FontFamily::Proportional));
    sizes.insert(TextStyle::Monospace, FontId::new(14.0 * scale, FontFamily::Monospace));
    sizes
}

/// Apply the cyber-dark theme; called once at start-up
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    visuals.window_fill = SLATE_900;
    visuals.panel_fill = BACKGROUND;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.faint_bg_color = SLATE_900;
    visuals.override_text_color = Some(SLATE_200);

    visuals.widgets.noninteractive.bg_fill = SLATE_900;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, SLATE_800);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, SLATE_400);
    visuals.widgets.noninteractive.rounding = Rounding::same(8.0);

    visuals.widgets.inactive.bg_fill = SLATE_800;
    visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    visuals.widgets.inactive.bg_stroke = Stroke::NONE;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.5, SLATE_400);
    visuals.widgets.inactive.rounding = Rounding::same(8.0);

    visuals.widgets.hovered.bg_fill = SLATE_700;
    visuals.widgets.hovered.weak_bg_fill = SLATE_800;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.accent.linear_multiply(0.5));
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, Color32::WHITE);
    visuals.widgets.hovered.rounding = Rounding::same(8.0);

    visuals.widgets.active.bg_fill = SLATE_700;
    visuals.widgets.active.weak_bg_fill = SLATE_700;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, theme.accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(8.0);

    visuals.selection.bg_fill = theme.accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, theme.accent);
    visuals.hyperlink_color = CYAN_400;

    visuals.window_shadow.extrusion = 16.0;
    visuals.popup_shadow.extrusion = 8.0;

    style.spacing.item_spacing = egui::vec2(12.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.text_styles = text_styles(theme.text_scale);

    ctx.set_style(style);
    ctx.set_visuals(visuals);
    tracing::debug!(theme = %theme.name, "theme applied");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_scale() {
        let base = text_styles(1.0);
        let large = text_styles(1.5);
        assert_eq!(base[&TextStyle::Heading].size, 34.0);
        assert_eq!(large[&TextStyle::Body].size, 24.0);
        assert_eq!(base.len(), 5);
    }
}
