//! Footer strip: caption, audit year, progress markers and slide counter

use deck_core::NavigationContext;
use deck_views::colors::{CYAN_400, CYAN_600, SLATE_400, SLATE_500, SLATE_800};
use egui::{Align2, FontId, Pos2, Rect, Rounding, Ui, Vec2};

/// Height reserved for the footer at the bottom of the slide
pub const FOOTER_HEIGHT: f32 = 56.0;

const MARKER_WIDTH: f32 = 8.0;
const CURRENT_MARKER_WIDTH: f32 = 40.0;
const MARKER_HEIGHT: f32 = 6.0;
const MARKER_GAP: f32 = 4.0;
const SIDE_MARGIN: f32 = 32.0;

/// Footer text, fixed for the whole deck
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub caption: String,
    pub suffix: String,
    pub year: i32,
}

impl Footer {
    pub fn new(caption: impl Into<String>, suffix: impl Into<String>, year: i32) -> Self {
        Self {
            caption: caption.into(),
            suffix: suffix.into(),
            year,
        }
    }

    /// "2026 Security Audit"
    pub fn audit_label(&self) -> String {
        format!("{} {}", self.year, self.suffix)
    }

    /// Captions on the left; markers over the slide counter on the right
    pub fn show(&self, ui: &mut Ui, rect: Rect, nav: &NavigationContext) {
        let painter = ui.painter_at(rect);
        let font = FontId::monospace(12.0);
        let upper = rect.center().y - 9.0;
        let lower = rect.center().y + 9.0;

        painter.text(
            Pos2::new(rect.left() + SIDE_MARGIN, upper),
            Align2::LEFT_CENTER,
            self.caption.to_uppercase(),
            font.clone(),
            CYAN_600,
        );
        painter.text(
            Pos2::new(rect.left() + SIDE_MARGIN, lower),
            Align2::LEFT_CENTER,
            self.audit_label().to_uppercase(),
            font.clone(),
            SLATE_500,
        );

        let widths = marker_widths(nav);
        let total: f32 =
            widths.iter().sum::<f32>() + MARKER_GAP * widths.len().saturating_sub(1) as f32;
        let mut x = rect.right() - SIDE_MARGIN - total;
        for (index, width) in widths.iter().enumerate() {
            let marker = Rect::from_min_size(
                Pos2::new(x, upper - MARKER_HEIGHT / 2.0),
                Vec2::new(*width, MARKER_HEIGHT),
            );
            let color = if index == nav.position { CYAN_400 } else { SLATE_800 };
            painter.rect_filled(marker, Rounding::same(MARKER_HEIGHT / 2.0), color);
            x += width + MARKER_GAP;
        }

        painter.text(
            Pos2::new(rect.right() - SIDE_MARGIN, lower),
            Align2::RIGHT_CENTER,
            position_label(nav).to_uppercase(),
            font,
            SLATE_400,
        );
    }
}

/// Width of each progress marker; the current one is wide
pub fn marker_widths(nav: &NavigationContext) -> Vec<f32> {
    (0..nav.total)
        .map(|i| if i == nav.position { CURRENT_MARKER_WIDTH } else { MARKER_WIDTH })
        .collect()
}

/// "Slide 3 / 12"
pub fn position_label(nav: &NavigationContext) -> String {
    format!("Slide {} / {}", nav.display_position(), nav.total)
}
