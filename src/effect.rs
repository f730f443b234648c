#[cfg(feature = "hydrate")]
pub mod canvas;
pub mod config;
pub mod field;

pub use config::{EffectConfig, Rgb};
