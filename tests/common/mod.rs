//! Common helpers for integration tests.

use galorbit::config::SimulationParameters;
use galorbit::explorer::Explorer;

/// Pixels per kiloparsec used by the shipped host.
pub const SCALE: f64 = 25.0;

/// Explorer built from the shipped defaults, already running.
pub fn running_explorer() -> Explorer {
    let mut explorer =
        Explorer::new(SimulationParameters::default(), SCALE).expect("defaults are valid");
    explorer.start();
    explorer
}

/// Advance the explorer `steps` times.
pub fn run_steps(explorer: &mut Explorer, steps: usize) {
    for _ in 0..steps {
        explorer.advance().expect("clock is running");
    }
}
