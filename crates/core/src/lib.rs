#![forbid(unsafe_code)]

pub mod catalog;
pub mod divisor;
pub mod flow;
pub mod model;
pub mod primality;
pub mod quiz;
pub mod time;
pub mod visualizer;

pub use flow::{LessonFlow, PhaseTransition};
pub use time::Clock;
