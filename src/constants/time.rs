//! Frame timing constants.

/// Largest delta time a single step will simulate (seconds)
pub const MAX_STEP_DT: f32 = 0.1;
