//! Color palette shared by charts and slide chrome

use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(2, 6, 23);
pub const SLIDE_BG: Color32 = Color32::from_rgb(5, 10, 20);
pub const GRID_DOT: Color32 = Color32::from_rgb(26, 44, 78);

pub const SLATE_200: Color32 = Color32::from_rgb(226, 232, 240);
pub const SLATE_300: Color32 = Color32::from_rgb(203, 213, 225);
pub const SLATE_400: Color32 = Color32::from_rgb(148, 163, 184);
pub const SLATE_500: Color32 = Color32::from_rgb(100, 116, 139);
pub const SLATE_600: Color32 = Color32::from_rgb(71, 85, 105);
pub const SLATE_700: Color32 = Color32::from_rgb(51, 65, 85);
pub const SLATE_800: Color32 = Color32::from_rgb(30, 41, 59);
pub const SLATE_900: Color32 = Color32::from_rgb(15, 23, 42);

pub const CYBER_BLUE: Color32 = Color32::from_rgb(0, 243, 255);
pub const CYAN_300: Color32 = Color32::from_rgb(103, 232, 249);
pub const CYAN_400: Color32 = Color32::from_rgb(34, 211, 238);
pub const CYAN_500: Color32 = Color32::from_rgb(6, 182, 212);
pub const CYAN_600: Color32 = Color32::from_rgb(8, 145, 178);
pub const BLUE_300: Color32 = Color32::from_rgb(147, 197, 253);
pub const BLUE_400: Color32 = Color32::from_rgb(96, 165, 250);
pub const BLUE_500: Color32 = Color32::from_rgb(59, 130, 246);
pub const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);
pub const PURPLE_300: Color32 = Color32::from_rgb(216, 180, 254);
pub const PURPLE_400: Color32 = Color32::from_rgb(192, 132, 252);
pub const PURPLE_500: Color32 = Color32::from_rgb(168, 85, 247);
pub const PURPLE_600: Color32 = Color32::from_rgb(147, 51, 234);
pub const VIOLET_500: Color32 = Color32::from_rgb(139, 92, 246);
pub const VIOLET_600: Color32 = Color32::from_rgb(124, 58, 237);
pub const PINK_400: Color32 = Color32::from_rgb(244, 114, 182);
pub const FUCHSIA_500: Color32 = Color32::from_rgb(217, 70, 239);
pub const RED_400: Color32 = Color32::from_rgb(248, 113, 113);
pub const RED_500: Color32 = Color32::from_rgb(239, 68, 68);
pub const ALERT_RED: Color32 = Color32::from_rgb(255, 77, 77);
pub const ORANGE_500: Color32 = Color32::from_rgb(249, 115, 22);
pub const YELLOW_400: Color32 = Color32::from_rgb(250, 204, 21);
pub const YELLOW_500: Color32 = Color32::from_rgb(234, 179, 8);
pub const LIME_500: Color32 = Color32::from_rgb(132, 204, 22);
pub const GREEN_400: Color32 = Color32::from_rgb(74, 222, 128);
pub const GREEN_500: Color32 = Color32::from_rgb(34, 197, 94);
pub const EMERALD_500: Color32 = Color32::from_rgb(16, 185, 129);

/// Same color with its alpha scaled by `opacity`
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Lighten a color towards white, used for hover highlights
pub fn highlight(color: Color32, amount: u8) -> Color32 {
    Color32::from_rgba_premultiplied(
        color.r().saturating_add(amount),
        color.g().saturating_add(amount),
        color.b().saturating_add(amount),
        color.a(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_saturates() {
        let lit = highlight(Color32::from_rgb(250, 10, 0), 30);
        assert_eq!((lit.r(), lit.g(), lit.b()), (255, 40, 30));
    }

    #[test]
    fn test_opacity_zero_is_transparent() {
        assert_eq!(with_opacity(CYAN_400, 0.0).a(), 0);
    }
}
