//! Time-based animation helpers
//!
//! Everything here is a pure function of elapsed time; nothing holds a timer
//! of its own. Callers pass the seconds elapsed since the slide was entered
//! (see [`SlideClock`]) and request repaints while anything is still moving.

use egui::Color32;
use std::f32::consts::TAU;

/// Easing curves used by the deck
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutSine,
    /// Back-out curve that overshoots slightly before settling
    Spring,
    /// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Curve used for slide-to-slide transitions
    pub const SLIDE: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

    /// Map linear progress `t` in `[0, 1]` onto the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutSine => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
            Easing::Spring => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_axis(a1: f32, a2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
}

fn bezier_axis_slope(a1: f32, a2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    // Newton first, bisection when the slope is too flat
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let value = bezier_axis(x1, x2, s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, s)
}

/// One-shot animation with a start delay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub const fn new(duration: f32) -> Self {
        Self {
            delay: 0.0,
            duration,
            easing: Easing::EaseOutCubic,
        }
    }

    pub const fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub const fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]`
    pub fn raw(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    /// Eased progress; `Spring` may briefly exceed 1
    pub fn progress(&self, elapsed: f32) -> f32 {
        self.easing.apply(self.raw(elapsed))
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Endless periodic motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub period: f32,
}

impl Oscillator {
    pub const fn new(period: f32) -> Self {
        Self { period }
    }

    /// Position within the current cycle, in `[0, 1)`
    pub fn phase(&self, t: f32) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        (t / self.period).rem_euclid(1.0)
    }

    /// Smooth 0 → 1 → 0 over one period
    pub fn ping_pong(&self, t: f32) -> f32 {
        (1.0 - (TAU * self.phase(t)).cos()) / 2.0
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| lerp(a as f32, b as f32, t).round() as u8;
    Color32::from_rgba_premultiplied(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
        channel(from.a(), to.a()),
    )
}

/// Seconds since the current slide was entered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideClock {
    entered_at: f64,
    now: f64,
}

impl SlideClock {
    pub fn new(now: f64) -> Self {
        Self { entered_at: now, now }
    }

    /// Advance the clock to the current frame time
    pub fn tick(&mut self, now: f64) {
        self.now = now.max(self.entered_at);
    }

    /// Restart from zero at the current frame time, e.g. after a slide change
    pub fn reenter(&mut self) {
        self.entered_at = self.now;
    }

    pub fn elapsed(&self) -> f32 {
        (self.now - self.entered_at) as f32
    }

    /// Absolute frame time, for loops that ignore slide changes
    pub fn now(&self) -> f32 {
        self.now as f32
    }
}

/// Number that counts up from zero to its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedCounter {
    pub target: u64,
    pub tween: Tween,
}

impl AnimatedCounter {
    pub const fn new(target: u64) -> Self {
        Self {
            target,
            tween: Tween::new(2.0),
        }
    }

    pub fn value_at(&self, elapsed: f32) -> u64 {
        let progress = self.tween.progress(elapsed).clamp(0.0, 1.0) as f64;
        (self.target as f64 * progress).floor() as u64
    }

    /// Grouped display text at the given time, e.g. `227,191`
    pub fn text_at(&self, elapsed: f32) -> String {
        format_grouped(self.value_at(elapsed))
    }
}

/// Format with comma thousands separators
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOutCubic,
            Easing::EaseInOutSine,
            Easing::Spring,
            Easing::SLIDE,
        ] {
            assert!(close(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(close(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn test_spring_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::Spring.apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_slide_curve_front_loaded() {
        // (0.22, 1, 0.36, 1) covers most of the distance early
        assert!(Easing::SLIDE.apply(0.3) > 0.7);
        let linear_bezier = Easing::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        assert!(close(linear_bezier.apply(0.42), 0.42));
    }

    #[test]
    fn test_tween_delay_and_finish() {
        let tween = Tween::new(1.0).delayed(0.5).eased(Easing::Linear);
        assert_eq!(tween.progress(0.25), 0.0);
        assert!(close(tween.progress(1.0), 0.5));
        assert!(!tween.is_finished(1.4));
        assert!(tween.is_finished(1.5));
        assert_eq!(tween.progress(9.0), 1.0);
    }

    #[test]
    fn test_zero_duration_tween_snaps() {
        let tween = Tween::new(0.0).delayed(0.2);
        assert_eq!(tween.raw(0.1), 0.0);
        assert_eq!(tween.raw(0.2), 1.0);
    }

    #[test]
    fn test_oscillator() {
        let osc = Oscillator::new(4.0);
        assert!(close(osc.phase(5.0), 0.25));
        assert!(close(osc.ping_pong(0.0), 0.0));
        assert!(close(osc.ping_pong(2.0), 1.0));
        assert!(close(osc.ping_pong(4.0), 0.0));
    }

    #[test]
    fn test_clock_restart() {
        let mut clock = SlideClock::new(10.0);
        clock.tick(12.5);
        assert!(close(clock.elapsed(), 2.5));
        clock.reenter();
        assert_eq!(clock.elapsed(), 0.0);
        clock.tick(12.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_counter() {
        let counter = AnimatedCounter::new(227_191);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.text_at(5.0), "227,191");
        assert!(counter.value_at(1.0) < 227_191);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(94), "94");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn test_lerp_color_midpoint() {
        let mid = lerp_color(Color32::from_rgb(0, 0, 0), Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color32::from_rgb(100, 50, 25));
    }
}
