mod indicator;
mod known;
mod measurements;

pub use indicator::HumidityIndicator;
pub use known::Known;
pub use measurements::{Inputs, Measurements};
