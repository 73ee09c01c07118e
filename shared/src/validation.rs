//! Validation utilities for the Citrus Juice Tracker

// ============================================================================
// Fruit Names
// ============================================================================

/// Normalize a fruit name: trimmed, first letter upper-case, rest lower-case
///
/// "  lIME " becomes "Lime"; an all-whitespace name becomes "".
pub fn normalize_fruit_name(name: &str) -> String {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validate a fruit name is usable once normalized
pub fn validate_fruit_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Fruit name is required");
    }
    if trimmed.chars().count() > 50 {
        return Err("Fruit name must be at most 50 characters");
    }
    Ok(())
}

// ============================================================================
// Measurements
// ============================================================================

/// Validate a weight in grams (finite, non-negative)
pub fn validate_weight_grams(weight_g: f64) -> Result<(), &'static str> {
    if !weight_g.is_finite() {
        return Err("Weight must be a number");
    }
    if weight_g < 0.0 {
        return Err("Weight cannot be negative");
    }
    Ok(())
}

/// Validate a juice volume in fluid ounces (finite, non-negative)
pub fn validate_juice_volume(juice_oz: f64) -> Result<(), &'static str> {
    if !juice_oz.is_finite() {
        return Err("Juice volume must be a number");
    }
    if juice_oz < 0.0 {
        return Err("Juice volume cannot be negative");
    }
    Ok(())
}

/// Validate a rolling window size
pub fn validate_window_size(window: usize) -> Result<(), &'static str> {
    if window == 0 {
        return Err("Window size must be at least 1");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fruit_name() {
        assert_eq!(normalize_fruit_name("lime"), "Lime");
        assert_eq!(normalize_fruit_name("  LEMON  "), "Lemon");
        assert_eq!(normalize_fruit_name("blood orange"), "Blood orange");
        assert_eq!(normalize_fruit_name("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_fruit_name("gRAPEfruit");
        assert_eq!(normalize_fruit_name(&once), once);
    }

    #[test]
    fn test_validate_fruit_name() {
        assert!(validate_fruit_name("Lime").is_ok());
        assert!(validate_fruit_name("").is_err());
        assert!(validate_fruit_name("  ").is_err());
        assert!(validate_fruit_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_measurements() {
        assert!(validate_weight_grams(0.0).is_ok());
        assert!(validate_weight_grams(350.5).is_ok());
        assert!(validate_weight_grams(-1.0).is_err());
        assert!(validate_weight_grams(f64::NAN).is_err());

        assert!(validate_juice_volume(5.5).is_ok());
        assert!(validate_juice_volume(-0.1).is_err());
        assert!(validate_juice_volume(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_window_size() {
        assert!(validate_window_size(1).is_ok());
        assert!(validate_window_size(10).is_ok());
        assert!(validate_window_size(0).is_err());
    }
}
