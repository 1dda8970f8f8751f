//! The twelve slides of the deck
//!
//! Each slide is a pure function of the slide clock: the same elapsed time
//! always draws the same frame.

mod adversarial;
mod closing;
mod detection;
mod intelligence;
mod opening;

use deck_views::animation::{Oscillator, SlideClock, Tween};
use deck_views::ChartView;
use egui::Ui;

/// A slide of the deck, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Title,
    Agenda,
    Dataset,
    Features,
    Anomaly,
    Classification,
    Fgsm,
    Poisoning,
    Robustness,
    Summary,
    Recommendations,
    End,
}

impl Slide {
    pub const ALL: [Slide; 12] = [
        Slide::Title,
        Slide::Agenda,
        Slide::Dataset,
        Slide::Features,
        Slide::Anomaly,
        Slide::Classification,
        Slide::Fgsm,
        Slide::Poisoning,
        Slide::Robustness,
        Slide::Summary,
        Slide::Recommendations,
        Slide::End,
    ];

    /// Zero-based place in the deck
    pub fn position(self) -> usize {
        self as usize
    }

    /// Heading, also used in logs
    pub fn title(self) -> &'static str {
        match self {
            Slide::Title => "CIC-IIoT-2025 Security Analysis",
            Slide::Agenda => "Mission Agenda",
            Slide::Dataset => "CIC-IIoT-2025 Intelligence",
            Slide::Features => "Feature Engineering",
            Slide::Anomaly => "Unsupervised Anomaly Detection",
            Slide::Classification => "Supervised Classification",
            Slide::Fgsm => "Exploratory Attack (FGSM)",
            Slide::Poisoning => "Causative Attack (Poisoning)",
            Slide::Robustness => "Robustness Analysis",
            Slide::Summary => "Tactical Summary",
            Slide::Recommendations => "Strategic Recommendations",
            Slide::End => "Q&A",
        }
    }

    /// Draw the slide into the content area
    pub fn ui(self, ui: &mut Ui, clock: &SlideClock) {
        match self {
            Slide::Title => opening::title(ui, clock),
            Slide::Agenda => opening::agenda(ui, clock),
            Slide::Dataset => intelligence::dataset(ui, clock),
            Slide::Features => intelligence::features(ui, clock),
            Slide::Anomaly => detection::anomaly(ui, clock),
            Slide::Classification => detection::classification(ui, clock),
            Slide::Fgsm => adversarial::fgsm(ui, clock),
            Slide::Poisoning => adversarial::poisoning(ui, clock),
            Slide::Robustness => adversarial::robustness(ui, clock),
            Slide::Summary => closing::summary(ui, clock),
            Slide::Recommendations => closing::recommendations(ui, clock),
            Slide::End => closing::end(ui, clock),
        }
    }
}

/// Slow pulse shared by badges and warnings
const PULSE: Oscillator = Oscillator::new(2.0);

/// Opacity of pulsing elements at time `now`
fn pulse(now: f32) -> f32 {
    0.55 + 0.45 * (1.0 - PULSE.ping_pong(now))
}

/// Draw a chart that grows in after `delay` seconds
fn chart(ui: &mut Ui, clock: &SlideClock, view: ChartView, delay: f32, duration: f32) {
    let progress = Tween::new(duration).delayed(delay).progress(clock.elapsed());
    view.ui(ui, progress);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_positions() {
        assert_eq!(Slide::ALL.len(), 12);
        for (index, slide) in Slide::ALL.iter().enumerate() {
            assert_eq!(slide.position(), index);
        }
        assert_eq!(Slide::ALL[0], Slide::Title);
        assert_eq!(Slide::ALL[11], Slide::End);
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<_> = Slide::ALL.iter().map(|s| s.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Slide::ALL.len());
    }

    #[test]
    fn test_pulse_range() {
        for step in 0..40 {
            let value = pulse(step as f32 * 0.1);
            assert!(value > 0.54 && value < 1.01);
        }
    }

    #[test]
    fn test_every_slide_renders_at_every_stage() {
        let ctx = egui::Context::default();
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 800.0));
        for slide in Slide::ALL {
            for elapsed in [0.0, 0.4, 1.2, 5.0] {
                let clock = {
                    let mut clock = SlideClock::new(100.0);
                    clock.tick(100.0 + elapsed);
                    clock
                };
                let input = egui::RawInput {
                    screen_rect: Some(screen),
                    ..Default::default()
                };
                let _ = ctx.run(input, |ctx| {
                    egui::CentralPanel::default().show(ctx, |ui| slide.ui(ui, &clock));
                });
            }
        }
    }
}
