pub mod config;
pub mod scheduler;
pub mod timer;

pub use config::{FontSize, ReaderConfig, SpotColor, Visibility};
pub use scheduler::{PlaybackPhase, PlaybackScheduler, PlaybackSnapshot, PlaybackState, TickOutcome};
pub use timer::TickTimer;
