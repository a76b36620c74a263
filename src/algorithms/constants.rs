// Limits shared by request validation, the emitters and playback

/// Largest array an execution request may carry
pub const MAX_INPUT_LEN: usize = 50;

/// Default delay between two playback ticks
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Fastest playback speed accepted by `set_speed`
pub const MIN_INTERVAL_MS: u64 = 10;

/// Slowest playback speed accepted by `set_speed`
pub const MAX_INTERVAL_MS: u64 = 5_000;

/// Increment applied by the `+`/`-` keys in the TUI
pub const SPEED_STEP_MS: u64 = 50;
