// Timing - WPM to tick interval conversion

use std::time::Duration;

/// Time one chunk stays on screen: `60000 / wpm * chunk_size` ms.
///
/// Computed in microseconds so rates that don't divide a minute evenly
/// keep their precision over long runs.
pub fn chunk_interval(wpm: u32, chunk_size: usize) -> Duration {
    let micros = 60_000_000u64 * chunk_size.max(1) as u64 / wpm.max(1) as u64;
    Duration::from_micros(micros)
}
