//! On-screen previous/next buttons
//!
//! A small pill centred at the bottom of the window holding two chevrons.
//! With auto-hide on, it stays invisible until the pointer is over it.

use deck_core::{NavAction, NavigationContext};
use deck_views::colors::{with_opacity, CYBER_BLUE, SLATE_700, SLATE_900};
use egui::{Color32, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

const PILL_SIZE: Vec2 = Vec2::new(120.0, 56.0);
const MARGIN: f32 = 32.0;
/// Extra drop while hidden, the pill rises as it fades in
const RISE: f32 = 16.0;

/// Prev/next pill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub autohide: bool,
}

/// Where the fully revealed pill sits inside the screen
pub fn pill_rect(screen: Rect) -> Rect {
    Rect::from_center_size(
        Pos2::new(screen.center().x, screen.bottom() - MARGIN - PILL_SIZE.y / 2.0),
        PILL_SIZE,
    )
}

/// Previous and next button areas inside the pill
pub fn button_rects(pill: Rect) -> [Rect; 2] {
    let half = Vec2::new(pill.width() / 2.0, pill.height());
    [
        Rect::from_min_size(pill.min, half),
        Rect::from_min_size(pill.min + Vec2::new(half.x, 0.0), half),
    ]
}

fn chevron(ui: &Ui, rect: Rect, action: NavAction, color: Color32) {
    let c = rect.center();
    let dx = match action {
        NavAction::Previous => -4.0,
        NavAction::Next => 4.0,
    };
    let points = [
        Pos2::new(c.x - dx, c.y - 8.0),
        Pos2::new(c.x + dx, c.y),
        Pos2::new(c.x - dx, c.y + 8.0),
    ];
    let stroke = Stroke::new(2.5, color);
    ui.painter().line_segment([points[0], points[1]], stroke);
    ui.painter().line_segment([points[1], points[2]], stroke);
}

impl Controls {
    pub fn new(autohide: bool) -> Self {
        Self { autohide }
    }

    /// Draw the pill; returns the action of a clicked button
    pub fn show(&self, ui: &mut Ui, screen: Rect, nav: &NavigationContext) -> Option<NavAction> {
        let target = pill_rect(screen);
        let reveal = if self.autohide {
            let hovered = ui.rect_contains_pointer(target.expand2(Vec2::new(0.0, RISE)));
            ui.ctx()
                .animate_bool_with_time(ui.id().with("deck_controls"), hovered, 0.3)
        } else {
            1.0
        };

        let pill = target.translate(Vec2::new(0.0, RISE * (1.0 - reveal)));
        ui.painter().rect(
            pill,
            Rounding::same(pill.height() / 2.0),
            with_opacity(SLATE_900, 0.8 * reveal),
            Stroke::new(1.0, with_opacity(SLATE_700, reveal)),
        );

        let mut clicked = None;
        let [prev, next] = button_rects(pill);
        for (rect, action, at_edge) in [
            (prev, NavAction::Previous, nav.is_first()),
            (next, NavAction::Next, nav.is_last()),
        ] {
            let id = ui.id().with(action.label());
            // Space and Enter on a focused widget count as a click, and the
            // keyboard bindings already handle those keys.
            ui.memory_mut(|memory| memory.surrender_focus(id));
            let response = ui.interact(rect, id, Sense::click()).on_hover_text(action.label());
            let color = if at_edge {
                with_opacity(SLATE_700, reveal)
            } else if response.hovered() {
                with_opacity(CYBER_BLUE, reveal)
            } else {
                with_opacity(Color32::WHITE, reveal)
            };
            chevron(ui, rect.shrink(4.0), action, color);
            if response.clicked() {
                clicked = Some(action);
            }
        }
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Key, Modifiers, PointerButton};

    #[test]
    fn test_pill_sits_bottom_centre() {
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 800.0));
        let pill = pill_rect(screen);
        assert_eq!(pill.center().x, 640.0);
        assert_eq!(pill.bottom(), 800.0 - MARGIN);
        assert!(screen.contains_rect(pill));
    }

    const MIDDLE: NavigationContext = NavigationContext { position: 5, total: 12 };

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 800.0))
    }

    /// One headless frame with the pill on a bare panel covering the screen
    fn frame(ctx: &egui::Context, events: Vec<Event>) -> Option<NavAction> {
        let controls = Controls::new(false);
        let input = egui::RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        };
        let mut clicked = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| clicked = controls.show(ui, screen(), &MIDDLE));
        });
        clicked
    }

    fn key(key: Key) -> Event {
        Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Hover, press, release and one idle frame; every action reported on the way
    fn click_at(pos: Pos2) -> Vec<NavAction> {
        let ctx = egui::Context::default();
        [
            vec![Event::PointerMoved(pos)],
            vec![button(pos, true)],
            vec![button(pos, false)],
            Vec::new(),
        ]
        .into_iter()
        .filter_map(|events| frame(&ctx, events))
        .collect()
    }

    #[test]
    fn test_each_chevron_clicks_once() {
        let [prev, next] = button_rects(pill_rect(screen()));
        assert_eq!(click_at(prev.center()), vec![NavAction::Previous]);
        assert_eq!(click_at(next.center()), vec![NavAction::Next]);
    }

    #[test]
    fn test_keyboard_never_presses_a_chevron() {
        let ctx = egui::Context::default();
        let mut reported = Vec::new();
        for events in [
            vec![key(Key::Tab)],
            Vec::new(),
            vec![key(Key::Tab)],
            Vec::new(),
            vec![key(Key::Space)],
            vec![key(Key::Enter)],
            vec![key(Key::Space)],
        ] {
            reported.push(frame(&ctx, events));
        }
        assert!(reported.iter().all(Option::is_none), "{reported:?}");
    }

    #[test]
    fn test_space_on_focused_chevron_is_left_to_the_bindings() {
        let ctx = egui::Context::default();
        let _ = frame(&ctx, Vec::new());
        assert_eq!(frame(&ctx, vec![key(Key::Tab)]), None);
        assert!(ctx.memory(|memory| memory.focus()).is_some());
        assert_eq!(frame(&ctx, vec![key(Key::Space)]), None);
        assert_eq!(frame(&ctx, vec![key(Key::Enter)]), None);
    }

    #[test]
    fn test_buttons_split_the_pill() {
        let pill = pill_rect(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)));
        let [prev, next] = button_rects(pill);
        assert_eq!(prev.left(), pill.left());
        assert_eq!(next.right(), pill.right());
        assert_eq!(prev.right(), next.left());
        assert_eq!(prev.height(), pill.height());
    }
}
