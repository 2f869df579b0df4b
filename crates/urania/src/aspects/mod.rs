pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, detect_aspects, AspectCalculator};
pub use types::{Aspect, AspectKind, AspectType};
