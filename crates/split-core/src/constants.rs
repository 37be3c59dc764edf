// Shared tuning constants for the effect engine and its hosts.

// Per-frame smoothing factors (fraction of the remaining gap closed each frame)
pub const OFFSET_SMOOTHING: f32 = 0.15; // final channel offsets, all eased effects
pub const GLITCH_SMOOTHING: f32 = 1.0; // glitch snaps straight to its random target
pub const POINTER_SMOOTHING: f32 = 0.1; // follow-mouse pointer lag, cascaded before offsets

// Breathe oscillator frequency ratios, distinct per channel and axis
pub const BREATHE_R_X: f64 = 1.0;
pub const BREATHE_R_Y: f64 = 0.8;
pub const BREATHE_G_X: f64 = 1.1;
pub const BREATHE_G_Y: f64 = 0.9;

// Animation timestamps arrive in milliseconds
pub const MS_TO_SECONDS: f64 = 0.001;

// Configuration defaults
pub const DEFAULT_EFFECT_DURATION_MS: f64 = 1000.0;
pub const DEFAULT_EFFECT_INTENSITY: f32 = 1.5;
pub const DEFAULT_BREATHE_SPEED: f32 = 1.0;
pub const DEFAULT_SPLIT_DISTANCE_PX: f32 = 40.0;

// Disable gating
pub const SMALL_VIEWPORT_MAX_PX: f64 = 768.0; // "mobile" cutoff, inclusive
pub const VISIBILITY_ROOT_MARGIN: &str = "50px"; // resume slightly before scrolling into view
