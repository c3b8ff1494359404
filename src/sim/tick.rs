//! Fixed timestep session tick
//!
//! One tick runs strictly in order: controls, kinematics, collision, reset.

use serde::{Deserialize, Serialize};

use super::car::DriveInput;
use super::collision::check_collision;
use super::state::{CrashReport, SessionState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held driving controls
    pub drive: DriveInput,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SessionState, input: &TickInput) -> Option<CrashReport> {
    state.car.step(&input.drive);
    state.time_ticks += 1;
    state.run_ticks += 1;

    let cause = check_collision(&state.car, &state.track)?;
    let run_ticks = state.run_ticks;
    let new_best = state.restart();
    state.crashes += 1;

    log::info!(
        "Crash #{}: {} after {:.2}s",
        state.crashes,
        cause.describe(),
        run_ticks as f32 / state.tick_rate.max(1) as f32
    );
    if new_best {
        log::info!("New best time: {} ticks", run_ticks);
    }

    Some(CrashReport {
        cause,
        run_ticks,
        new_best,
    })
}
