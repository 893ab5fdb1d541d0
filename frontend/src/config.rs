use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of a block that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Distance (px) a hidden block sits below its resting position.
pub const REVEAL_OFFSET: f64 = 50.0;

/// Seconds a reveal takes once it starts.
pub const REVEAL_DURATION: f64 = 0.6;

/// Window width (px) from which the navigation renders as a horizontal row.
pub const WIDE_BREAKPOINT_PX: f64 = 1024.0;

/// Delay before mount animations flip to their resting state, so the
/// browser paints the initial state first.
pub const MOUNT_FRAME_MS: u32 = 16;
