//! Main application entry point

use anyhow::Result;
use chrono::Datelike;
use deck_core::DeckSettings;
use deck_ui::{backdrop, Controls, Footer, Theme, FOOTER_HEIGHT};
use deck_views::colors::{with_opacity, BACKGROUND, SLIDE_BG};
use eframe::egui::{self, Context, Rect, Vec2};
use std::time::Duration;
use tracing::{debug, error, info};

mod data;
mod presenter;
mod slides;

use presenter::Presenter;

/// Padding between the window edge and slide content
const CONTENT_MARGIN: f32 = 64.0;

/// Repaint interval once the slide has settled
const IDLE_FRAME: Duration = Duration::from_millis(33);

/// Area left for slide content inside `screen`, scaled about its centre
fn content_rect(screen: Rect, scale: f32) -> Rect {
    let full = Rect::from_min_max(
        screen.min,
        egui::pos2(screen.right(), screen.bottom() - FOOTER_HEIGHT),
    )
    .shrink(CONTENT_MARGIN);
    Rect::from_center_size(full.center(), full.size() * scale)
}

/// Main application state
struct DeckApp {
    presenter: Presenter,
    footer: Footer,
    controls: Controls,
}

impl DeckApp {
    fn new(cc: &eframe::CreationContext<'_>, presenter: Presenter) -> Self {
        deck_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let settings = presenter.settings();
        let footer = Footer::new(
            settings.footer_caption.clone(),
            settings.footer_suffix.clone(),
            chrono::Local::now().year(),
        );
        let controls = Controls::new(settings.autohide_controls);

        Self {
            presenter: presenter.with_repaint(&cc.egui_ctx),
            footer,
            controls,
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.presenter.tick(ctx.input(|i| i.time));
        let actions = ctx.input(|i| self.presenter.pending_actions(i));
        for action in actions {
            self.presenter.handle(action);
        }

        let frame = egui::Frame::none().fill(BACKGROUND);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let screen = ui.max_rect();
            let clock = *self.presenter.clock();
            backdrop::paint(ui.painter(), screen, clock.now());

            let slide = self.presenter.current_slide();
            let (opacity, scale) = self.presenter.entrance();
            let content = content_rect(screen, scale);
            ui.allocate_ui_at_rect(content, |ui| {
                ui.set_clip_rect(content.expand(CONTENT_MARGIN / 2.0));
                ui.push_id(slide.position(), |ui| slide.ui(ui, &clock));
            });
            if opacity < 1.0 {
                ui.painter_at(content.expand(CONTENT_MARGIN / 2.0)).rect_filled(
                    content.expand(CONTENT_MARGIN / 2.0),
                    0.0,
                    with_opacity(SLIDE_BG, 1.0 - opacity),
                );
            }

            let nav = self.presenter.context();
            let footer = Rect::from_min_size(
                egui::pos2(screen.left(), screen.bottom() - FOOTER_HEIGHT),
                Vec2::new(screen.width(), FOOTER_HEIGHT),
            );
            self.footer.show(ui, footer, &nav);

            if let Some(action) = self.controls.show(ui, screen, &nav) {
                self.presenter.handle(action);
            }
        });

        // Entrances run at full rate; the backdrop loops only need a trickle
        if self.presenter.is_settling() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_FRAME);
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting CIC-IIoT-2025 security analysis deck");

    let settings = DeckSettings::default();
    match settings.to_json() {
        Ok(json) => debug!(settings = %json, "settings loaded"),
        Err(e) => error!("failed to serialize settings: {}", e),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window.title.clone())
            .with_inner_size(settings.window.inner_size)
            .with_min_inner_size(settings.window.min_inner_size),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    let title = settings.window.title.clone();
    let presenter = Presenter::new(settings, 0.0)?;
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(DeckApp::new(cc, presenter))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

// Windows-specific: Hide console window in release builds
#[cfg(all(windows, not(debug_assertions)))]
fn hide_console_window() {
    use winapi::um::wincon::GetConsoleWindow;
    use winapi::um::winuser::{ShowWindow, SW_HIDE};

    unsafe {
        let window = GetConsoleWindow();
        if !window.is_null() {
            ShowWindow(window, SW_HIDE);
        }
    }
}

#[cfg(all(windows, not(debug_assertions)))]
#[no_mangle]
pub extern "system" fn mainCRTStartup() {
    hide_console_window();
    std::process::exit(main().map(|_| 0).unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(1280.0, 800.0))
    }

    #[test]
    fn test_content_sits_above_footer() {
        let content = content_rect(screen(), 1.0);
        assert_eq!(content.left(), CONTENT_MARGIN);
        assert_eq!(content.bottom(), 800.0 - FOOTER_HEIGHT - CONTENT_MARGIN);
    }

    #[test]
    fn test_entering_slide_is_scaled_about_centre() {
        let full = content_rect(screen(), 1.0);
        let entering = content_rect(screen(), 0.95);
        assert!((entering.center() - full.center()).length() < 1e-3);
        assert!((entering.width() - full.width() * 0.95).abs() < 1e-3);
    }
}
