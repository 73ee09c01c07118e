//! Common constants used across the platform

/// Grams in one avoirdupois pound
pub const GRAMS_PER_POUND: f64 = 453.592;

/// Rolling window used when the caller does not pick one
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Standard deviation multiples of the reported prediction bands
pub const BAND_SIGMA_MULTIPLES: [f64; 2] = [1.0, 2.0];

/// Fruit choices offered by the entry form
pub const FRUIT_OPTIONS: &[&str] = &[
    "Lime",
    "Lemon",
    "Orange",
    "Grapefruit",
    "Apple",
    "Cucumber",
    "Ginger",
];
