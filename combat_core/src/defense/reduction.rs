//! Flat mitigation - Percentage damage-reduction and flat defense

/// Apply a percentage damage-reduction to incoming damage
///
/// `reduction` is the user-facing percent (25 = 25% less damage). Values
/// above 100 push the result negative; the pipeline's final floor handles
/// that, so this stage deliberately does not clamp.
///
/// # Arguments
/// * `damage` - The incoming damage
/// * `reduction` - The reduction percentage (0-100 by convention)
///
/// # Returns
/// The damage after percentage reduction
pub fn apply_damage_reduction(damage: f64, reduction: f64) -> f64 {
    damage * (1.0 - reduction / 100.0)
}

/// Apply flat defense, floored at zero
///
/// Negative defense flows through arithmetically and amplifies the hit.
pub fn apply_flat_defense(damage: f64, defense: f64) -> f64 {
    (damage - defense).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_reduction() {
        let result = apply_damage_reduction(100.0, 50.0);
        assert!((result - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_reduction() {
        let result = apply_damage_reduction(100.0, 0.0);
        assert!((result - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_over_hundred_reduction_goes_negative() {
        // Not clamped here; the caller's final floor catches it
        let result = apply_damage_reduction(100.0, 150.0);
        assert!((result + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_reduction_amplifies() {
        let result = apply_damage_reduction(100.0, -50.0);
        assert!((result - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_defense_subtracts() {
        let result = apply_flat_defense(100.0, 20.0);
        assert!((result - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defense_floors_at_zero() {
        let result = apply_flat_defense(10.0, 50.0);
        assert!((result - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_defense_amplifies() {
        let result = apply_flat_defense(100.0, -25.0);
        assert!((result - 125.0).abs() < f64::EPSILON);
    }
}
