//! Default input values and scale constants.

/// Hue degrees in one full turn of the color wheel.
pub const HUE_CYCLE: f64 = 360.0;

/// Full scale of the saturation, value and RGB channels.
pub const CHANNEL_MAX: f64 = 255.0;

/// Initial hue field content.
pub const DEFAULT_HUE: i32 = 0;

/// Initial saturation field content.
pub const DEFAULT_SATURATION: i32 = 255;

/// Initial value field content.
pub const DEFAULT_VALUE: i32 = 255;

/// Initial decrement applied to value per row.
pub const DEFAULT_STEP: i32 = 5;

/// Initial number of rows.
pub const DEFAULT_COUNT: usize = 8;
