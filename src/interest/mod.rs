pub mod compound;

pub use compound::{CompoundingEngine, CompoundingFrequency};
