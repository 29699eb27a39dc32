pub mod absolute;
pub mod celsius;
pub mod measurement;
pub mod scale;

pub use absolute::AbsoluteTemperature;
pub use celsius::CelsiusTemperature;
pub use measurement::Measurement;
pub use scale::{degree_celsius, TemperatureScale};
