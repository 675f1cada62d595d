pub mod mapping;
pub mod sampler;

pub use mapping::{upper, AxisMapping};
