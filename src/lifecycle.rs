pub mod background;
pub mod loading;

pub use background::{BackgroundEffect, EffectController, EffectError, EffectPhase, MountOutcome};
pub use loading::{GatePhase, LoaderTiming, LoadingGate, MAX_LOADER_DELAY};
