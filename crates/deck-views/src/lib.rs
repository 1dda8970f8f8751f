//! Chart and animation building blocks for the deck
//!
//! Nothing in here knows about slides: charts draw a `'static` dataset at a
//! given entry progress, and the animation helpers turn a slide clock into
//! eased values.

pub mod animation;
pub mod charts;
pub mod colors;

pub use animation::{AnimatedCounter, Easing, Oscillator, SlideClock, Tween};
pub use charts::{
    BarStyle, ChartError, ChartKind, ChartView, Dataset, Orientation, PieStyle, Record, Series,
};
